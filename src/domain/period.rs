//! Period and search predicates that narrow derived transaction views.

use std::{fmt, str::FromStr};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

/// Date range selector for list views and summaries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    #[default]
    All,
    Last7Days,
    Last30Days,
    /// Inclusive on both ends. A missing bound matches nothing.
    Custom {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

impl Period {
    pub fn custom(start: NaiveDate, end: NaiveDate) -> Self {
        Period::Custom {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Number of days the rolling periods look back from today.
    pub fn lookback_days(&self) -> Option<i64> {
        match self {
            Period::Last7Days => Some(7),
            Period::Last30Days => Some(30),
            Period::All | Period::Custom { .. } => None,
        }
    }

    /// Rolling periods have no upper bound, so future-dated entries still match.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::All => true,
            Period::Last7Days | Period::Last30Days => {
                let days = self.lookback_days().unwrap_or_default();
                date >= today - Duration::days(days)
            }
            Period::Custom {
                start: Some(start),
                end: Some(end),
            } => *start <= date && date <= *end,
            Period::Custom { .. } => false,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::All => f.write_str("all"),
            Period::Last7Days => f.write_str("last 7 days"),
            Period::Last30Days => f.write_str("last 30 days"),
            Period::Custom {
                start: Some(start),
                end: Some(end),
            } => write!(f, "{start} to {end}"),
            Period::Custom { .. } => f.write_str("custom (incomplete)"),
        }
    }
}

impl FromStr for Period {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Period::All),
            "7d" | "last7days" => Ok(Period::Last7Days),
            "30d" | "last30days" => Ok(Period::Last30Days),
            "custom" => Ok(Period::Custom {
                start: None,
                end: None,
            }),
            other => Err(format!(
                "unknown period `{other}` (expected all, 7d, 30d or custom)"
            )),
        }
    }
}

/// Period and description search, combined with logical AND.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransactionFilter {
    pub period: Period,
    pub search: String,
}

impl TransactionFilter {
    pub fn new(period: Period, search: impl Into<String>) -> Self {
        Self {
            period,
            search: search.into(),
        }
    }

    /// The identity filter.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matches(&self, transaction: &Transaction, today: NaiveDate) -> bool {
        if !self.period.contains(transaction.date, today) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        transaction
            .description
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    /// Returns the matching transactions in their original order.
    pub fn apply(&self, transactions: &[Transaction], today: NaiveDate) -> Vec<Transaction> {
        transactions
            .iter()
            .filter(|txn| self.matches(txn, today))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rolling_period_includes_lower_bound_and_future() {
        let today = day(2024, 6, 10);
        assert!(Period::Last7Days.contains(day(2024, 6, 3), today));
        assert!(!Period::Last7Days.contains(day(2024, 6, 2), today));
        assert!(Period::Last7Days.contains(day(2024, 7, 1), today));
        assert!(Period::Last30Days.contains(day(2024, 5, 11), today));
        assert!(!Period::Last30Days.contains(day(2024, 5, 10), today));
    }

    #[test]
    fn incomplete_custom_period_matches_nothing() {
        let today = day(2024, 6, 10);
        let open_end = Period::Custom {
            start: Some(day(2024, 1, 1)),
            end: None,
        };
        assert!(!open_end.contains(day(2024, 6, 1), today));
        assert!(!Period::Custom {
            start: None,
            end: None
        }
        .contains(today, today));
    }

    #[test]
    fn reversed_custom_period_matches_nothing() {
        let period = Period::custom(day(2024, 6, 5), day(2024, 6, 1));
        assert!(!period.contains(day(2024, 6, 3), day(2024, 6, 10)));
    }

    #[test]
    fn parses_short_and_long_names() {
        assert_eq!("7d".parse::<Period>(), Ok(Period::Last7Days));
        assert_eq!("LAST30DAYS".parse::<Period>(), Ok(Period::Last30Days));
        assert!("yesterday".parse::<Period>().is_err());
    }
}
