//! Stock categories and sample entries installed on first start.

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::domain::{Category, CategoryIcon, ColorTag, Transaction, TransactionType};

const INCOME_CATEGORIES: [(&str, ColorTag, CategoryIcon); 6] = [
    ("Salary", ColorTag::Green, CategoryIcon::Salary),
    ("Voucher", ColorTag::Teal, CategoryIcon::Voucher),
    ("Loan", ColorTag::Cyan, CategoryIcon::Loan),
    ("Bonus", ColorTag::Lime, CategoryIcon::Bonus),
    ("Commission", ColorTag::Emerald, CategoryIcon::Commission),
    ("Investment", ColorTag::Sky, CategoryIcon::Investment),
];

const EXPENSE_CATEGORIES: [(&str, ColorTag, CategoryIcon); 7] = [
    ("Shopping", ColorTag::Orange, CategoryIcon::ShoppingCart),
    ("Groceries", ColorTag::Amber, CategoryIcon::Market),
    ("Vehicle", ColorTag::Red, CategoryIcon::Car),
    ("Home", ColorTag::Rose, CategoryIcon::Home),
    ("Transport", ColorTag::Blue, CategoryIcon::Transport),
    ("Entertainment", ColorTag::Purple, CategoryIcon::Entertainment),
    ("Personal Care", ColorTag::Pink, CategoryIcon::PersonalCare),
];

/// (description, amount, days before today, type, category name)
const SAMPLE_TRANSACTIONS: [(&str, f64, i64, TransactionType, &str); 4] = [
    ("Monthly groceries", 350.75, 0, TransactionType::Expense, "Groceries"),
    ("Fuel", 120.50, 2, TransactionType::Expense, "Vehicle"),
    ("Rent payment", 1500.00, 5, TransactionType::Expense, "Home"),
    ("Salary", 5500.00, 5, TransactionType::Income, "Salary"),
];

pub fn default_categories() -> Vec<Category> {
    let income = INCOME_CATEGORIES
        .iter()
        .map(|(name, color, icon)| (TransactionType::Income, name, color, icon));
    let expense = EXPENSE_CATEGORIES
        .iter()
        .map(|(name, color, icon)| (TransactionType::Expense, name, color, icon));
    income
        .chain(expense)
        .map(|(kind, name, color, icon)| Category::new(*name, kind, *color).with_icon(*icon))
        .collect()
}

/// Builds the sample entries against `categories`, skipping any whose
/// category is not present.
pub fn sample_transactions(categories: &[Category], today: NaiveDate) -> Vec<Transaction> {
    SAMPLE_TRANSACTIONS
        .iter()
        .filter_map(|(description, amount, days_ago, kind, category_name)| {
            let category = categories
                .iter()
                .find(|category| category.kind == *kind && category.name == *category_name)?;
            Some(Transaction {
                id: Uuid::new_v4(),
                description: (*description).to_string(),
                amount: *amount,
                date: today - Duration::days(*days_ago),
                kind: *kind,
                category_id: category.id,
            })
        })
        .collect()
}
