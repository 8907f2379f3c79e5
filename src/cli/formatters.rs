//! Plain-text rendering of ledger rows and charts.

use crate::domain::{Category, CategoryTotal, MonthlyTotals, Transaction, TransactionType};

const BAR_WIDTH: usize = 30;

pub fn transaction_row(
    position: usize,
    txn: &Transaction,
    category: Option<&Category>,
    amount: &str,
) -> String {
    let sign = match txn.kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };
    format!(
        "{:>3}. {}  {:<7}  {:<24}  {:<14}  {}{}",
        position,
        txn.date.format("%Y-%m-%d"),
        txn.kind,
        truncate(&txn.description, 24),
        category.map(|c| c.name.as_str()).unwrap_or("?"),
        sign,
        amount
    )
}

pub fn category_row(position: usize, category: &Category, linked: usize) -> String {
    format!(
        "{:>3}. {:<16}  {:<7}  {:<8}  {} txn",
        position,
        truncate(&category.name, 16),
        category.kind,
        category.color,
        linked
    )
}

/// Horizontal bar proportional to `value / max`; at least one cell for any positive value.
pub fn bar(value: f64, max: f64) -> String {
    if value <= 0.0 || max <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "#".repeat(cells.clamp(1, BAR_WIDTH))
}

pub fn category_chart_row(slice: &CategoryTotal, max: f64, amount: &str) -> String {
    format!(
        "  {:<16} {:<width$} {}",
        truncate(&slice.name, 16),
        bar(slice.total, max),
        amount,
        width = BAR_WIDTH
    )
}

pub fn month_chart_rows(
    month: &MonthlyTotals,
    max: f64,
    income: &str,
    expense: &str,
) -> [String; 2] {
    let label = month.label();
    [
        format!(
            "  {:<7} in  {:<width$} {}",
            label,
            bar(month.income, max),
            income,
            width = BAR_WIDTH
        ),
        format!(
            "  {:<7} out {:<width$} {}",
            "",
            bar(month.expense, max),
            expense,
            width = BAR_WIDTH
        ),
    ]
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
