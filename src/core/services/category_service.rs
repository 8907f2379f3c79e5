use tracing::info;
use uuid::Uuid;

use crate::core::errors::{InvalidField, LedgerError, Result};
use crate::domain::{Category, NewCategory, TransactionType};
use crate::ledger::Ledger;

/// Outcome of a cascading category removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    pub category_removed: bool,
    pub transactions_removed: usize,
}

pub struct CategoryService;

impl CategoryService {
    pub fn add(ledger: &mut Ledger, input: NewCategory) -> Result<Uuid> {
        let name = Self::validate_name(&input.name)?;
        let category = Category::new(name, input.kind, input.color);
        let id = ledger.push_category(category);
        info!(category_id = %id, kind = %input.kind, "category added");
        Ok(id)
    }

    /// Applies a new name and color. The id and type are fixed at creation;
    /// a payload carrying a different type is rejected.
    pub fn update(ledger: &mut Ledger, changes: Category) -> Result<()> {
        let name = Self::validate_name(&changes.name)?;
        let category = ledger
            .category_mut(changes.id)
            .ok_or(LedgerError::CategoryNotFound(changes.id))?;
        if category.kind != changes.kind {
            return Err(LedgerError::CategoryTypeImmutable(changes.id));
        }
        category.name = name;
        category.color = changes.color;
        ledger.touch();
        info!(category_id = %changes.id, "category updated");
        Ok(())
    }

    /// Removes the category together with every transaction filed under it.
    /// Unknown ids leave the ledger untouched.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> CascadeReport {
        if ledger.category(id).is_none() {
            return CascadeReport::default();
        }
        let transactions_removed = ledger.remove_transactions_in_category(id);
        let category_removed = ledger.remove_category(id).is_some();
        info!(
            category_id = %id,
            transactions_removed,
            "category removed with cascade"
        );
        CascadeReport {
            category_removed,
            transactions_removed,
        }
    }

    /// Number of transactions a removal of `id` would take with it.
    pub fn linked_transaction_count(ledger: &Ledger, id: Uuid) -> usize {
        ledger
            .transactions()
            .iter()
            .filter(|txn| txn.category_id == id)
            .count()
    }

    pub fn list(ledger: &Ledger) -> &[Category] {
        ledger.categories()
    }

    pub fn list_of_kind(ledger: &Ledger, kind: TransactionType) -> Vec<&Category> {
        crate::domain::common::of_kind(ledger.categories(), kind).collect()
    }

    fn validate_name(candidate: &str) -> Result<String> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            Err(LedgerError::Validation(vec![InvalidField::Name]))
        } else {
            Ok(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ColorTag;

    #[test]
    fn add_rejects_blank_names() {
        let mut ledger = Ledger::new();
        let err = CategoryService::add(
            &mut ledger,
            NewCategory::new("  ", TransactionType::Expense, ColorTag::Red),
        )
        .expect_err("blank name");
        assert_eq!(err.invalid_fields(), [InvalidField::Name]);
        assert!(ledger.categories().is_empty());
    }

    #[test]
    fn update_changes_name_and_color_only() {
        let mut ledger = Ledger::new();
        let id = CategoryService::add(
            &mut ledger,
            NewCategory::new("Pets", TransactionType::Expense, ColorTag::Pink),
        )
        .unwrap();

        let mut changes = ledger.category(id).unwrap().clone();
        changes.name = " Pet care ".into();
        changes.color = ColorTag::Violet;
        CategoryService::update(&mut ledger, changes).unwrap();

        let stored = ledger.category(id).unwrap();
        assert_eq!(stored.name, "Pet care");
        assert_eq!(stored.color, ColorTag::Violet);
        assert_eq!(stored.kind, TransactionType::Expense);
    }

    #[test]
    fn update_rejects_type_change() {
        let mut ledger = Ledger::new();
        let id = CategoryService::add(
            &mut ledger,
            NewCategory::new("Pets", TransactionType::Expense, ColorTag::Pink),
        )
        .unwrap();
        let mut changes = ledger.category(id).unwrap().clone();
        changes.kind = TransactionType::Income;
        changes.name = "Renamed".into();

        let err = CategoryService::update(&mut ledger, changes).expect_err("type is fixed");
        assert_eq!(err, LedgerError::CategoryTypeImmutable(id));
        assert_eq!(ledger.category(id).unwrap().name, "Pets");
    }

    #[test]
    fn update_unknown_category_fails() {
        let mut ledger = Ledger::new();
        let ghost = Category::new("Ghost", TransactionType::Income, ColorTag::Gray);
        let err = CategoryService::update(&mut ledger, ghost.clone()).expect_err("missing");
        assert_eq!(err, LedgerError::CategoryNotFound(ghost.id));
    }

    #[test]
    fn removing_unknown_category_is_a_no_op() {
        let mut ledger = Ledger::new();
        let report = CategoryService::remove(&mut ledger, Uuid::new_v4());
        assert_eq!(report, CascadeReport::default());
    }
}
