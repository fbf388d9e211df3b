use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::Parser;

use nhldata_interface::errors::Result;
use nhldata_interface::nhl::model::DateRange;

const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Crawls NHL box scores and writes one CSV of skater stats per game.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// First day to crawl, e.g. 2020-01-31
    #[arg(long, value_parser = parse_date)]
    pub start_date: NaiveDate,

    /// Last day to crawl (inclusive)
    #[arg(long, value_parser = parse_date)]
    pub end_date: NaiveDate,
}

impl Cli {
    pub fn date_range(&self) -> Result<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

pub fn parse_date(value: &str) -> std::result::Result<NaiveDate, String> {
    let value = value.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
    {
        return Ok(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|date_time| date_time.date())
        .ok_or_else(|| format!("unrecognized date '{}', expected e.g. 2020-01-31", value))
}

#[cfg(test)]
mod tests {
    use nhldata_interface::errors::AppError;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_date_accepts_common_formats() {
        let expected = date(2020, 1, 31);

        for value in [
            "2020-01-31",
            "2020/01/31",
            "20200131",
            "01/31/2020",
            "January 31, 2020",
            "31 January 2020",
            "2020-01-31T19:00:00Z",
            "2020-01-31T19:00:00-05:00",
            "2020-01-31 19:00:00",
            " 2020-01-31 ",
        ] {
            assert_eq!(parse_date(value), Ok(expected), "{value}");
        }
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2020-02-30").is_err());
    }

    #[test]
    fn cli_requires_both_dates() {
        assert!(Cli::try_parse_from(["nhldata_app", "--start-date", "2020-01-01"]).is_err());
    }

    #[test]
    fn cli_parses_date_range() {
        let cli = Cli::try_parse_from([
            "nhldata_app",
            "--start-date",
            "2020-01-01",
            "--end-date",
            "01/03/2020",
        ])
        .unwrap();

        let range = cli.date_range().unwrap();
        assert_eq!(range.start(), date(2020, 1, 1));
        assert_eq!(range.end(), date(2020, 1, 3));
    }

    #[test]
    fn cli_rejects_reversed_range() {
        let cli = Cli::try_parse_from([
            "nhldata_app",
            "--start-date",
            "2020-01-03",
            "--end-date",
            "2020-01-01",
        ])
        .unwrap();

        assert!(matches!(cli.date_range(), Err(AppError::InvalidDateRange { .. })));
    }
}
