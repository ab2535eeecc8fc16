use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use fake::faker::internet::raw::{SafeEmail, Username};
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, PT_BR};
use rand::RngCore;

use crate::faker_rs::locales::LocaleKey;
use crate::similarity::{NOMINAL_THRESHOLD, STRUCTURED_THRESHOLD};

/// Kind of look-alike value a synthetic processor produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntheticKind {
    StreetAddress,
    City,
    EmailAddress,
    FirstName,
    FullName,
    LastName,
    PhoneNumber,
    State,
    Username,
    Zip,
}

impl SyntheticKind {
    pub const ALL: &'static [SyntheticKind] = &[
        SyntheticKind::StreetAddress,
        SyntheticKind::City,
        SyntheticKind::EmailAddress,
        SyntheticKind::FirstName,
        SyntheticKind::FullName,
        SyntheticKind::LastName,
        SyntheticKind::PhoneNumber,
        SyntheticKind::State,
        SyntheticKind::Username,
        SyntheticKind::Zip,
    ];

    /// Catalog name of the processor backed by this kind.
    pub fn processor_id(self) -> &'static str {
        match self {
            Self::StreetAddress => "FakeStreetAddress",
            Self::City => "FakeCity",
            Self::EmailAddress => "FakeEmailAddress",
            Self::FirstName => "FakeFirstName",
            Self::FullName => "FakeFullName",
            Self::LastName => "FakeLastName",
            Self::PhoneNumber => "FakePhoneNumber",
            Self::State => "FakeState",
            Self::Username => "FakeUsername",
            Self::Zip => "FakeZip",
        }
    }

    /// Minimum Jaro-Winkler similarity a replacement must reach.
    pub fn threshold(self) -> f64 {
        match self {
            Self::FirstName | Self::LastName | Self::State | Self::Username => NOMINAL_THRESHOLD,
            Self::StreetAddress
            | Self::City
            | Self::EmailAddress
            | Self::FullName
            | Self::PhoneNumber
            | Self::Zip => STRUCTURED_THRESHOLD,
        }
    }
}

macro_rules! localized {
    ($faker:ident, $locale:expr, $rng:expr) => {{
        let value: String = match $locale {
            LocaleKey::EnUs => $faker(EN).fake_with_rng(&mut *$rng),
            LocaleKey::PtBr => $faker(PT_BR).fake_with_rng(&mut *$rng),
        };
        value
    }};
}

/// Bridge between synthetic processors and the `fake` crate.
pub struct FakeRsAdapter;

impl FakeRsAdapter {
    pub fn generate(kind: SyntheticKind, locale: LocaleKey, rng: &mut dyn RngCore) -> String {
        match kind {
            SyntheticKind::StreetAddress => {
                let number = localized!(BuildingNumber, locale, rng);
                let street = localized!(StreetName, locale, rng);
                format!("{number} {street}")
            }
            SyntheticKind::City => localized!(CityName, locale, rng),
            SyntheticKind::EmailAddress => localized!(SafeEmail, locale, rng),
            SyntheticKind::FirstName => localized!(FirstName, locale, rng),
            SyntheticKind::FullName => localized!(Name, locale, rng),
            SyntheticKind::LastName => localized!(LastName, locale, rng),
            SyntheticKind::PhoneNumber => localized!(PhoneNumber, locale, rng),
            SyntheticKind::State => localized!(StateName, locale, rng),
            SyntheticKind::Username => localized!(Username, locale, rng),
            SyntheticKind::Zip => localized!(ZipCode, locale, rng),
        }
    }
}
