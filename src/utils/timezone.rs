use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Current calendar date as seen from this timezone
    pub(crate) fn today(self) -> NaiveDate {
        match self {
            Timezone::Local => Local::now().date_naive(),
            Timezone::Named(tz) => Utc::now().with_timezone(&tz).date_naive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_local() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Local));
    }

    #[test]
    fn parse_local_string_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("LOCAL")).unwrap(),
            Timezone::Local
        ));
        assert!(matches!(
            Timezone::parse(Some("  local  ")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z"] {
            let tz = Timezone::parse(Some(raw)).unwrap();
            assert!(matches!(tz, Timezone::Named(chrono_tz::UTC)));
        }
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Asia/Seoul")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Asia::Seoul)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn today_differs_by_at_most_one_day_across_zones() {
        let east = Timezone::parse(Some("Pacific/Kiritimati")).unwrap().today();
        let west = Timezone::parse(Some("Pacific/Pago_Pago")).unwrap().today();
        let gap = (east - west).num_days();
        assert!((0..=2).contains(&gap), "gap was {gap}");
    }
}
