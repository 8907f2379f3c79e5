use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::defaults;
use crate::domain::{
    common::{find_by_id, position_by_id},
    Category, Transaction,
};

/// Authoritative in-memory collections. Both keep insertion order.
///
/// Mutation goes through the services in [`crate::core::services`], which
/// enforce the ledger invariants; readers use the accessors below.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    categories: Vec<Category>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            transactions: Vec::new(),
            categories: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a ledger holding the stock categories and a few sample entries
    /// dated relative to `today`.
    pub fn with_defaults(today: NaiveDate) -> Self {
        let mut ledger = Self::with_default_categories();
        ledger.transactions = defaults::sample_transactions(&ledger.categories, today);
        ledger
    }

    /// Stock categories only, no transactions.
    pub fn with_default_categories() -> Self {
        let mut ledger = Self::new();
        ledger.categories = defaults::default_categories();
        ledger
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        find_by_id(&self.transactions, id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        find_by_id(&self.categories, id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn push_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    /// Replaces the stored transaction in place, keeping its position.
    pub(crate) fn replace_transaction(&mut self, transaction: Transaction) -> bool {
        match position_by_id(&self.transactions, transaction.id) {
            Some(idx) => {
                self.transactions[idx] = transaction;
                self.touch();
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let idx = position_by_id(&self.transactions, id)?;
        let removed = self.transactions.remove(idx);
        self.touch();
        Some(removed)
    }

    /// Removes every transaction referencing `category_id`, returning how many went.
    pub(crate) fn remove_transactions_in_category(&mut self, category_id: Uuid) -> usize {
        let before = self.transactions.len();
        self.transactions
            .retain(|txn| txn.category_id != category_id);
        let removed = before - self.transactions.len();
        if removed > 0 {
            self.touch();
        }
        removed
    }

    pub(crate) fn clear_transactions(&mut self) -> usize {
        let removed = self.transactions.len();
        self.transactions.clear();
        self.touch();
        removed
    }

    pub(crate) fn push_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        self.touch();
        id
    }

    pub(crate) fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    pub(crate) fn remove_category(&mut self, id: Uuid) -> Option<Category> {
        let idx = position_by_id(&self.categories, id)?;
        let removed = self.categories.remove(idx);
        self.touch();
        Some(removed)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionType;

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.transactions().is_empty());
        assert!(ledger.categories().is_empty());
    }

    #[test]
    fn defaults_reference_existing_categories_of_matching_type() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let ledger = Ledger::with_defaults(today);
        assert_eq!(ledger.categories().len(), 13);
        assert_eq!(ledger.transaction_count(), 4);
        for txn in ledger.transactions() {
            let category = ledger.category(txn.category_id).expect("seed category");
            assert_eq!(category.kind, txn.kind);
        }
        let income_count = ledger
            .categories()
            .iter()
            .filter(|category| category.kind == TransactionType::Income)
            .count();
        assert_eq!(income_count, 6);
    }

    #[test]
    fn replace_keeps_position() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut ledger = Ledger::with_defaults(today);
        let mut second = ledger.transactions()[1].clone();
        second.description = "Fuel (edited)".into();
        assert!(ledger.replace_transaction(second.clone()));
        assert_eq!(ledger.transactions()[1], second);
    }
}
