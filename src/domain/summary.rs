//! Aggregate shapes returned by the query layer.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::category::ColorTag;

/// Income, expense and balance over some set of transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

impl Totals {
    pub fn from_parts(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            balance: income - expenses,
        }
    }

    pub fn status(&self) -> BalanceStatus {
        if self.balance < 0.0 {
            BalanceStatus::Negative
        } else {
            BalanceStatus::Positive
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BalanceStatus {
    Positive,
    Negative,
}

/// One slice of a category breakdown chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category_id: Uuid,
    pub name: String,
    pub total: f64,
    pub color: ColorTag,
}

/// Orders a breakdown largest first, as bar charts present it.
pub fn sorted_by_total_desc(mut totals: Vec<CategoryTotal>) -> Vec<CategoryTotal> {
    totals.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    totals
}

/// Income and expense sums for one calendar month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    pub income: f64,
    pub expense: f64,
}

impl MonthlyTotals {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            income: 0.0,
            expense: 0.0,
        }
    }

    /// Short axis label such as `Jun/24`.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%b/%y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_balance_counts_as_positive() {
        assert_eq!(Totals::from_parts(10.0, 10.0).status(), BalanceStatus::Positive);
        assert_eq!(Totals::from_parts(5.0, 10.0).status(), BalanceStatus::Negative);
    }

    #[test]
    fn breakdown_sorts_largest_first() {
        let slice = |name: &str, total: f64| CategoryTotal {
            category_id: Uuid::new_v4(),
            name: name.into(),
            total,
            color: ColorTag::Gray,
        };
        let sorted = sorted_by_total_desc(vec![slice("a", 5.0), slice("b", 50.0), slice("c", 20.0)]);
        let names: Vec<_> = sorted.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["b", "c", "a"]);
    }
}
