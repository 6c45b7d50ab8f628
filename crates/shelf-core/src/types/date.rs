//! Calendar date parsing.

use chrono::{DateTime, NaiveDate};

use crate::error::{Error, InvalidInputError};

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps keep only their date part, as written (no timezone shift).
pub fn parse_date(s: &str) -> Result<NaiveDate, Error> {
    let trimmed = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.naive_local().date())
        .map_err(|e| {
            InvalidInputError::Date {
                value: s.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_date() {
        let date = parse_date("2021-03-14").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());
    }

    #[test]
    fn timestamp_keeps_written_date() {
        let date = parse_date("2021-03-14T23:30:00.000+05:30").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());
    }

    #[test]
    fn utc_timestamp() {
        let date = parse_date("2019-07-01T00:00:00.000Z").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 7, 1).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_date("14/03/2021").is_err());
        assert!(parse_date("").is_err());
    }
}
