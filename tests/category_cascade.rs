mod common;

use common::{day, Fixture};
use finance_core::{
    core::services::{CategoryService, SummaryService},
    domain::{Category, ColorTag, NewCategory, TransactionType},
    InvalidField, LedgerError,
};
use uuid::Uuid;

#[test]
fn impact_count_matches_cascade() {
    let mut fx = Fixture::new();
    fx.earn(300.0, day(2024, 1, 1));
    fx.spend(10.0, day(2024, 1, 2));
    fx.spend(20.0, day(2024, 1, 3));

    let linked = CategoryService::linked_transaction_count(&fx.ledger, fx.expense);
    let report = CategoryService::remove(&mut fx.ledger, fx.expense);
    assert_eq!(linked, 2);
    assert_eq!(report.transactions_removed, linked);
    assert_eq!(SummaryService::running_balance(&fx.ledger), 300.0);
}

#[test]
fn removing_unknown_category_changes_nothing() {
    let mut fx = Fixture::new();
    fx.earn(10.0, day(2024, 1, 1));
    let before = fx.ledger.categories().to_vec();

    let report = CategoryService::remove(&mut fx.ledger, Uuid::new_v4());
    assert!(!report.category_removed);
    assert_eq!(report.transactions_removed, 0);
    assert_eq!(fx.ledger.categories(), before.as_slice());
    assert_eq!(fx.ledger.transaction_count(), 1);
}

#[test]
fn update_keeps_kind_fixed() {
    let mut fx = Fixture::new();
    let mut changed = fx.ledger.category(fx.expense).cloned().unwrap();
    changed.kind = TransactionType::Income;
    assert_eq!(
        CategoryService::update(&mut fx.ledger, changed),
        Err(LedgerError::CategoryTypeImmutable(fx.expense))
    );

    let mut renamed = fx.ledger.category(fx.expense).cloned().unwrap();
    renamed.name = "Food".into();
    renamed.color = ColorTag::Lime;
    CategoryService::update(&mut fx.ledger, renamed).unwrap();
    let stored = fx.ledger.category(fx.expense).unwrap();
    assert_eq!(stored.name, "Food");
    assert_eq!(stored.color, ColorTag::Lime);
}

#[test]
fn blank_names_are_rejected() {
    let mut fx = Fixture::new();
    let err = CategoryService::add(
        &mut fx.ledger,
        NewCategory::new("   ", TransactionType::Expense, ColorTag::Gray),
    )
    .unwrap_err();
    assert_eq!(err.invalid_fields(), &[InvalidField::Name]);

    let ghost = Category::new("Ghost", TransactionType::Expense, ColorTag::Gray);
    let ghost_id = ghost.id;
    assert_eq!(
        CategoryService::update(&mut fx.ledger, ghost),
        Err(LedgerError::CategoryNotFound(ghost_id))
    );
}

#[test]
fn list_of_kind_splits_sides() {
    let fx = Fixture::new();
    let income: Vec<_> = CategoryService::list_of_kind(&fx.ledger, TransactionType::Income)
        .into_iter()
        .map(|c| c.name.clone())
        .collect();
    assert_eq!(income, vec!["Salary".to_string()]);
}
