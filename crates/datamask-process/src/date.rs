use rand::{Rng, RngCore};

use crate::errors::ProcessError;

/// Replace month and day of an ISO-style `YYYY-MM-DD` date, keeping the year.
///
/// Only the component count and the year are validated; the original month and
/// day are discarded without being parsed. Any integer year is kept as is.
pub fn randomize_date(input: &str, rng: &mut dyn RngCore) -> Result<String, ProcessError> {
    let parts: Vec<&str> = input.split('-').collect();
    if parts.len() != 3 {
        return Err(date_error(
            input,
            format!("expected 3 components, found {}", parts.len()),
        ));
    }
    let year: i64 = parts[0]
        .parse()
        .map_err(|_| date_error(input, format!("unable to parse year {:?}", parts[0])))?;

    let (month, day) = random_month_day(year, rng);
    Ok(format!("{year:04}-{month:02}-{day:02}"))
}

/// Uniform month, then a uniform day within that month.
pub fn random_month_day(year: i64, rng: &mut dyn RngCore) -> (u32, u32) {
    let month = rng.random_range(1..=12);
    let day = rng.random_range(1..=days_in_month(year, month));
    (month, day)
}

pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Last valid day of `month` (1-12) in `year`.
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn date_error(input: &str, reason: String) -> ProcessError {
    ProcessError::DateFormat {
        input: input.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn split(output: &str) -> (String, u32, u32) {
        let (rest, day) = output.rsplit_once('-').expect("day");
        let (year, month) = rest.rsplit_once('-').expect("month");
        (
            year.to_string(),
            month.parse().expect("month digits"),
            day.parse().expect("day digits"),
        )
    }

    #[test]
    fn february_follows_gregorian_leap_rules() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn keeps_year_and_produces_valid_dates() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..2000 {
            let output = randomize_date("2023-08-28", &mut rng).expect("valid date");
            let (year, month, day) = split(&output);
            assert_eq!(year, "2023");
            assert!((1..=12).contains(&month));
            assert!(day >= 1 && day <= days_in_month(2023, month));
            assert_ne!(output, "2023-02-29");
            assert_eq!(output.len(), 10);
        }
    }

    #[test]
    fn leap_day_is_reachable_in_leap_years() {
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        let hit = (0..20_000).any(|_| {
            randomize_date("2024-01-01", &mut rng).expect("valid date") == "2024-02-29"
        });
        assert!(hit);
    }

    #[test]
    fn keeps_years_beyond_four_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for input in ["10000-01-01", "300000-06-15"] {
            let year = input.split('-').next().expect("year");
            for _ in 0..200 {
                let output = randomize_date(input, &mut rng).expect("integer year");
                let (kept, month, day) = split(&output);
                assert_eq!(kept, year);
                assert!(day <= days_in_month(year.parse().expect("year"), month));
            }
        }
    }

    #[test]
    fn pads_short_years() {
        let mut rng = ChaCha8Rng::seed_from_u64(37);
        let output = randomize_date("18-08-28", &mut rng).expect("integer year");
        assert!(output.starts_with("0018-"), "{output}");
    }

    #[test]
    fn rejects_wrong_component_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for input in ["2018-08", "2018/08/28", "2018-08-28-01", ""] {
            let result = randomize_date(input, &mut rng);
            assert!(
                matches!(result, Err(ProcessError::DateFormat { .. })),
                "{input}"
            );
        }
    }

    #[test]
    fn rejects_non_integer_year() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = randomize_date("20x8-08-28", &mut rng);
        assert!(matches!(result, Err(ProcessError::DateFormat { .. })));
    }

    #[test]
    fn ignores_original_month_and_day_contents() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let output = randomize_date("2018-xx-yy", &mut rng).expect("year is enough");
        assert!(output.starts_with("2018-"));
    }
}
