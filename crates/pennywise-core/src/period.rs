//! Named reporting periods
//!
//! Resolution is pure: the caller passes in "today" so the same input always
//! gives the same range.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::DateRange;

/// A named reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    ThisMonth,
    LastMonth,
    ThisYear,
    #[serde(rename = "last-30-days")]
    Last30Days,
    #[serde(rename = "last-90-days")]
    Last90Days,
    #[serde(rename = "last-12-months")]
    Last12Months,
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThisMonth => "this-month",
            Self::LastMonth => "last-month",
            Self::ThisYear => "this-year",
            Self::Last30Days => "last-30-days",
            Self::Last90Days => "last-90-days",
            Self::Last12Months => "last-12-months",
            Self::All => "all",
        }
    }

    pub fn all() -> &'static [Period] {
        &[
            Self::ThisMonth,
            Self::LastMonth,
            Self::ThisYear,
            Self::Last30Days,
            Self::Last90Days,
            Self::Last12Months,
            Self::All,
        ]
    }

    /// Resolve to an inclusive date range relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let month_start = first_of_month(today);

        match self {
            Self::ThisMonth => DateRange::new(month_start, today),
            Self::LastMonth => {
                let last_day = month_start.pred_opt().unwrap_or(month_start);
                DateRange::new(first_of_month(last_day), last_day)
            }
            Self::ThisYear => {
                let from = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
                DateRange::new(from, today)
            }
            Self::Last30Days => DateRange::new(days_before(today, 30), today),
            Self::Last90Days => DateRange::new(days_before(today, 90), today),
            Self::Last12Months => {
                let from = month_start
                    .checked_sub_months(Months::new(12))
                    .unwrap_or(month_start);
                DateRange::new(from, today)
            }
            Self::All => DateRange::unbounded(),
        }
    }
}

fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl std::str::FromStr for Period {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "this-month" => Ok(Self::ThisMonth),
            "last-month" => Ok(Self::LastMonth),
            "this-year" => Ok(Self::ThisYear),
            "last-30-days" => Ok(Self::Last30Days),
            "last-90-days" => Ok(Self::Last90Days),
            "last-12-months" => Ok(Self::Last12Months),
            "all" => Ok(Self::All),
            _ => Err(format!(
                "Unknown period: {}. Available: this-month, last-month, this-year, last-30-days, last-90-days, last-12-months, all",
                s
            )),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
