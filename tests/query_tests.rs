mod common;

use common::{day, Fixture};
use finance_core::{
    core::services::SummaryService,
    core::time::FixedClock,
    currency::{format_currency, NumberFormat},
    domain::{
        summary::sorted_by_total_desc, BalanceStatus, Period, TransactionFilter, TransactionType,
    },
    Ledger,
};
use regex::Regex;

#[test]
fn month_labels_follow_calendar_order() {
    let mut fx = Fixture::new();
    fx.earn(900.0, day(2024, 2, 10));
    fx.earn(900.0, day(2023, 12, 24));
    fx.spend(15.0, day(2024, 1, 3));
    fx.spend(15.0, day(2024, 2, 28));

    let labels: Vec<String> = SummaryService::aggregate_by_month(fx.ledger.transactions())
        .iter()
        .map(|month| month.label())
        .collect();
    insta::assert_snapshot!(labels.join(","), @"Dec/23,Jan/24,Feb/24");
}

#[test]
fn rolling_periods_have_no_upper_bound() {
    let mut fx = Fixture::new();
    fx.earn(10.0, day(2024, 6, 25));
    fx.earn(10.0, day(2024, 6, 3));
    fx.earn(10.0, day(2024, 6, 2));
    let clock = FixedClock(day(2024, 6, 10));

    let recent = SummaryService::filter_transactions(
        &fx.ledger,
        &TransactionFilter::new(Period::Last7Days, ""),
        &clock,
    );
    let dates: Vec<_> = recent.iter().map(|txn| txn.date).collect();
    assert_eq!(dates, vec![day(2024, 6, 25), day(2024, 6, 3)]);
}

#[test]
fn reversed_or_open_custom_ranges_match_nothing() {
    let mut fx = Fixture::new();
    fx.earn(10.0, day(2024, 6, 1));
    let today = day(2024, 6, 10);

    let reversed = TransactionFilter::new(Period::custom(day(2024, 6, 5), day(2024, 5, 1)), "");
    assert!(reversed.apply(fx.ledger.transactions(), today).is_empty());

    let open = TransactionFilter::new(
        Period::Custom {
            start: Some(day(2024, 1, 1)),
            end: None,
        },
        "",
    );
    assert!(open.apply(fx.ledger.transactions(), today).is_empty());
}

#[test]
fn headline_balance_ignores_view_filter() {
    let ledger = Ledger::with_defaults(day(2024, 6, 10));
    let clock = FixedClock(day(2024, 6, 10));
    let only_fuel = SummaryService::filter_transactions(
        &ledger,
        &TransactionFilter::new(Period::All, "fuel"),
        &clock,
    );
    let filtered = SummaryService::compute_totals(&only_fuel);

    assert_eq!(filtered.balance, -120.5);
    assert_eq!(filtered.status(), BalanceStatus::Negative);
    assert_eq!(SummaryService::running_balance(&ledger), 3528.75);
}

#[test]
fn expense_breakdown_is_largest_first() {
    let ledger = Ledger::with_defaults(day(2024, 6, 10));
    let slices = sorted_by_total_desc(SummaryService::aggregate_by_category(
        ledger.transactions(),
        ledger.categories(),
        TransactionType::Expense,
    ));
    let names: Vec<&str> = slices.iter().map(|slice| slice.name.as_str()).collect();
    assert_eq!(names, vec!["Home", "Groceries", "Vehicle"]);
}

#[test]
fn currency_output_has_symbol_and_two_decimals() {
    let pattern = Regex::new(r"^R\$ -?\d{1,3}(,\d{3})*\.\d{2}$").unwrap();
    for value in [0.0, 5500.0, 1234567.891, -42.5] {
        let text = format_currency(value, "R$", NumberFormat::default());
        assert!(pattern.is_match(&text), "{text}");
    }

    let pattern = Regex::new(r"^R\$ -?\d{1,3}(\.\d{3})*,\d{2}$").unwrap();
    for value in [0.0, 5500.0, 1234567.891, -42.5] {
        let text = format_currency(value, "R$", NumberFormat::for_locale("pt-BR"));
        assert!(pattern.is_match(&text), "{text}");
    }
}
