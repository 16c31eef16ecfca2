use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::forecast::error::ForecastError;

const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a user-entered forecast date (`YYYY-MM-DD`).
///
/// Only an empty string counts as "no date entered"; blank text is a parse
/// error like any other malformed input.
pub fn parse_forecast_date(input: &str) -> Result<NaiveDate, ForecastError> {
    if input.is_empty() {
        return Err(ForecastError::EmptyInput);
    }

    let parse_error = || ForecastError::Parse {
        input: input.to_string(),
    };

    // chrono skips padding and accepts a signed year; the form here is digits and dashes only.
    if !input.starts_with(|c: char| c.is_ascii_digit())
        || !input.bytes().all(|b| b.is_ascii_digit() || b == b'-')
    {
        return Err(parse_error());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| parse_error())
}

/// Converts an IST wall-clock time to Universal Time.
pub fn local_to_ut(local: NaiveDateTime) -> NaiveDateTime {
    local - Duration::seconds(i64::from(IST_OFFSET_SECS))
}

pub fn ist_to_utc(local: NaiveDateTime) -> DateTime<Utc> {
    Utc.from_utc_datetime(&local_to_ut(local))
}

/// Calendar date in IST at the given instant.
pub fn today_ist(now_utc: DateTime<Utc>) -> anyhow::Result<NaiveDate> {
    let ist = chrono::FixedOffset::east_opt(IST_OFFSET_SECS).context("invalid IST offset")?;
    Ok(now_utc.with_timezone(&ist).date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        let d = parse_forecast_date("2024-03-15").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        for input in [
            "2024/01/01",
            "not-a-date",
            "2024-02-30",
            "15-03-2024",
            " 2024-03-15",
            "2024-03-15 ",
            "2024- 03-15",
            "+2024-03-15",
            "-2024-03-15",
        ] {
            assert_eq!(
                parse_forecast_date(input),
                Err(ForecastError::Parse {
                    input: input.to_string()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn empty_or_blank_input_is_distinct() {
        assert_eq!(parse_forecast_date(""), Err(ForecastError::EmptyInput));
        for blank in ["   ", "\t"] {
            assert_eq!(
                parse_forecast_date(blank),
                Err(ForecastError::Parse {
                    input: blank.to_string()
                })
            );
        }
    }

    #[test]
    fn local_to_ut_subtracts_ist_offset() {
        assert_eq!(local_to_ut(at(2024, 3, 15, 9, 30)), at(2024, 3, 15, 4, 0));
    }

    #[test]
    fn local_to_ut_crosses_midnight() {
        // 02:00 IST is 20:30 UTC on the previous day.
        assert_eq!(local_to_ut(at(2024, 3, 15, 2, 0)), at(2024, 3, 14, 20, 30));
    }

    #[test]
    fn ist_to_utc_tags_utc() {
        let utc = ist_to_utc(at(2024, 3, 15, 14, 0));
        assert_eq!(utc, Utc.with_ymd_and_hms(2024, 3, 15, 8, 30, 0).unwrap());
    }

    #[test]
    fn today_ist_rolls_over_before_utc_midnight() {
        // 2024-03-14 19:00 UTC = 2024-03-15 00:30 IST
        let now = Utc.with_ymd_and_hms(2024, 3, 14, 19, 0, 0).unwrap();
        assert_eq!(
            today_ist(now).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }
}
