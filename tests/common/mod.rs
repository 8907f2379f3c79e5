#![allow(dead_code)]

use chrono::NaiveDate;
use finance_core::{
    core::services::{CategoryService, TransactionService},
    domain::{ColorTag, NewCategory, TransactionDraft, TransactionInput, TransactionType},
    Ledger,
};
use uuid::Uuid;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Empty ledger with one income and one expense category.
pub struct Fixture {
    pub ledger: Ledger,
    pub income: Uuid,
    pub expense: Uuid,
}

impl Fixture {
    pub fn new() -> Self {
        let mut ledger = Ledger::new();
        let income = CategoryService::add(
            &mut ledger,
            NewCategory::new("Salary", TransactionType::Income, ColorTag::Green),
        )
        .expect("income category");
        let expense = CategoryService::add(
            &mut ledger,
            NewCategory::new("Groceries", TransactionType::Expense, ColorTag::Amber),
        )
        .expect("expense category");
        Self {
            ledger,
            income,
            expense,
        }
    }

    pub fn earn(&mut self, amount: f64, date: NaiveDate) -> Uuid {
        let draft = TransactionDraft::income(amount, "pay", date, self.income);
        TransactionService::save(&mut self.ledger, TransactionInput::New(draft))
            .expect("income saved")
    }

    pub fn spend(&mut self, amount: f64, date: NaiveDate) -> Uuid {
        let draft = TransactionDraft::expense(amount, "shop", date, self.expense);
        TransactionService::save(&mut self.ledger, TransactionInput::New(draft))
            .expect("expense saved")
    }
}
