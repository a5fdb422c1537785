//! Validated life configuration.
//!
//! # Invariants
//! - `life_expectancy` is strictly positive.
//! - `birthdate` is not after the reference date used at construction.
//! - No upper bound is imposed here; range limits belong to input surfaces.

use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default birthdate used when nothing valid is stored.
pub const DEFAULT_BIRTHDATE: (i32, u32, u32) = (2002, 11, 3);
/// Default life expectancy in years.
pub const DEFAULT_LIFE_EXPECTANCY: u32 = 100;

/// Returns [`DEFAULT_BIRTHDATE`] as a calendar date.
pub fn default_birthdate() -> NaiveDate {
    let (year, month, day) = DEFAULT_BIRTHDATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Rejection reasons for user-supplied configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Life expectancy must be at least one year.
    ZeroLifeExpectancy,
    /// Birthdate lies after the reference date.
    BirthdateInFuture {
        birthdate: NaiveDate,
        today: NaiveDate,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLifeExpectancy => {
                write!(f, "life expectancy must be a positive number of years")
            }
            Self::BirthdateInFuture { birthdate, today } => {
                write!(f, "birthdate {birthdate} is after today ({today})")
            }
        }
    }
}

impl Error for ConfigError {}

/// Birthdate plus life expectancy, checked at the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    birthdate: NaiveDate,
    life_expectancy: u32,
}

impl LifeConfig {
    /// Validates user input against `today`.
    ///
    /// # Errors
    /// - [`ConfigError::ZeroLifeExpectancy`] when `life_expectancy == 0`.
    /// - [`ConfigError::BirthdateInFuture`] when `birthdate > today`.
    pub fn new(
        birthdate: NaiveDate,
        life_expectancy: u32,
        today: NaiveDate,
    ) -> Result<Self, ConfigError> {
        if life_expectancy == 0 {
            return Err(ConfigError::ZeroLifeExpectancy);
        }
        if birthdate > today {
            return Err(ConfigError::BirthdateInFuture { birthdate, today });
        }
        Ok(Self {
            birthdate,
            life_expectancy,
        })
    }

    pub fn birthdate(&self) -> NaiveDate {
        self.birthdate
    }

    pub fn life_expectancy(&self) -> u32 {
        self.life_expectancy
    }
}

#[cfg(test)]
mod tests {
    use super::{default_birthdate, ConfigError, LifeConfig};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("test dates should be valid")
    }

    #[test]
    fn default_birthdate_is_november_third_2002() {
        assert_eq!(default_birthdate(), date(2002, 11, 3));
    }

    #[test]
    fn accepts_birthdate_equal_to_today_and_large_expectancy() {
        let today = date(2024, 5, 1);
        let config = LifeConfig::new(today, 500, today).expect("no upper bound on life expectancy");
        assert_eq!(config.birthdate(), today);
        assert_eq!(config.life_expectancy(), 500);
    }

    #[test]
    fn rejects_zero_expectancy_and_future_birthdate() {
        let today = date(2024, 5, 1);
        assert_eq!(
            LifeConfig::new(date(1990, 1, 1), 0, today).expect_err("zero expectancy must fail"),
            ConfigError::ZeroLifeExpectancy
        );
        assert_eq!(
            LifeConfig::new(date(2024, 5, 2), 80, today).expect_err("future birthdate must fail"),
            ConfigError::BirthdateInFuture {
                birthdate: date(2024, 5, 2),
                today,
            }
        );
    }
}
