mod adapter;
pub mod locales;

pub use adapter::{FakeRsAdapter, SyntheticKind};
pub use locales::LocaleKey;
