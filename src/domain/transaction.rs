//! Domain models for ledger transactions and the inputs that create or edit them.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable, Typed};

/// Direction of money flow. Amounts are always stored positive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Applies the direction to a positive amount.
    pub fn signed(self, amount: f64) -> f64 {
        match self {
            TransactionType::Income => amount,
            TransactionType::Expense => -amount,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionType::Income => "Income",
            TransactionType::Expense => "Expense",
        };
        f.write_str(label)
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(TransactionType::Income),
            "expense" | "out" => Ok(TransactionType::Expense),
            other => Err(format!(
                "unknown transaction type `{other}` (expected income or expense)"
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category_id: Uuid,
}

impl Transaction {
    pub(crate) fn from_draft(id: Uuid, draft: TransactionDraft, category_id: Uuid) -> Self {
        Self {
            id,
            description: draft.description.trim().to_string(),
            amount: draft.amount,
            date: draft.date,
            kind: draft.kind,
            category_id,
        }
    }

    /// Contribution of this transaction to the running balance.
    pub fn signed_amount(&self) -> f64 {
        self.kind.signed(self.amount)
    }

    /// Rebuilds the form fields for an edit.
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            description: self.description.clone(),
            amount: self.amount,
            date: self.date,
            kind: self.kind,
            category_id: Some(self.category_id),
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Typed for Transaction {
    fn kind(&self) -> TransactionType {
        self.kind
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} {} ({:.2})", self.date, self.description, self.signed_amount())
    }
}

/// Fields collected by a transaction form, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub kind: TransactionType,
    pub category_id: Option<Uuid>,
}

impl TransactionDraft {
    pub fn new(
        kind: TransactionType,
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        category_id: Option<Uuid>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            kind,
            category_id,
        }
    }

    pub fn expense(
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        category_id: Uuid,
    ) -> Self {
        Self::new(
            TransactionType::Expense,
            amount,
            description,
            date,
            Some(category_id),
        )
    }

    pub fn income(
        amount: f64,
        description: impl Into<String>,
        date: NaiveDate,
        category_id: Uuid,
    ) -> Self {
        Self::new(
            TransactionType::Income,
            amount,
            description,
            date,
            Some(category_id),
        )
    }
}

/// A save request: either a brand-new record or an edit of a stored one.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionInput {
    New(TransactionDraft),
    Edit { id: Uuid, draft: TransactionDraft },
}

impl TransactionInput {
    /// Splits into the id being edited, if any, and the submitted fields.
    pub fn into_parts(self) -> (Option<Uuid>, TransactionDraft) {
        match self {
            TransactionInput::New(draft) => (None, draft),
            TransactionInput::Edit { id, draft } => (Some(id), draft),
        }
    }
}
