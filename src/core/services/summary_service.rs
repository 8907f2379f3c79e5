//! Read-only queries recomputed from the current ledger state.

use std::collections::BTreeMap;

use chrono::Datelike;
use tracing::debug;

use crate::core::time::Clock;
use crate::domain::{
    common::of_kind, Category, CategoryTotal, MonthlyTotals, Totals, Transaction,
    TransactionFilter, TransactionType,
};
use crate::ledger::Ledger;

pub struct SummaryService;

impl SummaryService {
    /// Applies the period and search filter against the clock's current day.
    pub fn filter_transactions(
        ledger: &Ledger,
        filter: &TransactionFilter,
        clock: &dyn Clock,
    ) -> Vec<Transaction> {
        let filtered = filter.apply(ledger.transactions(), clock.today());
        debug!(
            total = ledger.transaction_count(),
            matched = filtered.len(),
            period = %filter.period,
            "transactions filtered"
        );
        filtered
    }

    pub fn compute_totals(transactions: &[Transaction]) -> Totals {
        let mut income = 0.0;
        let mut expenses = 0.0;
        for txn in transactions {
            match txn.kind {
                TransactionType::Income => income += txn.amount,
                TransactionType::Expense => expenses += txn.amount,
            }
        }
        Totals::from_parts(income, expenses)
    }

    /// Totals over the entire, unfiltered ledger.
    pub fn ledger_totals(ledger: &Ledger) -> Totals {
        Self::compute_totals(ledger.transactions())
    }

    /// Income minus expenses over every stored transaction, ignoring any view filter.
    pub fn running_balance(ledger: &Ledger) -> f64 {
        Self::ledger_totals(ledger).balance
    }

    /// Sums transactions of `kind` per category of the same kind, in category
    /// order. Categories without spending are left out.
    pub fn aggregate_by_category(
        transactions: &[Transaction],
        categories: &[Category],
        kind: TransactionType,
    ) -> Vec<CategoryTotal> {
        of_kind(categories, kind)
            .filter_map(|category| {
                let total: f64 = of_kind(transactions, kind)
                    .filter(|txn| txn.category_id == category.id)
                    .map(|txn| txn.amount)
                    .sum();
                (total > 0.0).then(|| CategoryTotal {
                    category_id: category.id,
                    name: category.name.clone(),
                    total,
                    color: category.color,
                })
            })
            .collect()
    }

    /// Buckets by calendar month, oldest first.
    pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthlyTotals> {
        let mut buckets: BTreeMap<(i32, u32), MonthlyTotals> = BTreeMap::new();
        for txn in transactions {
            let key = (txn.date.year(), txn.date.month());
            let bucket = buckets
                .entry(key)
                .or_insert_with(|| MonthlyTotals::new(key.0, key.1));
            match txn.kind {
                TransactionType::Income => bucket.income += txn.amount,
                TransactionType::Expense => bucket.expense += txn.amount,
            }
        }
        buckets.into_values().collect()
    }

    /// Newest first; entries sharing a date keep their insertion order.
    pub fn sorted_for_display(transactions: &[Transaction]) -> Vec<Transaction> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
