use std::fmt;
use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::transaction::TransactionType;

/// Form fields that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidField {
    Amount,
    Description,
    Category,
    Name,
}

impl fmt::Display for InvalidField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvalidField::Amount => "amount",
            InvalidField::Description => "description",
            InvalidField::Category => "category",
            InvalidField::Name => "name",
        };
        f.write_str(label)
    }
}

fn join_fields(fields: &[InvalidField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures reported by ledger mutations. Messages are shown to users verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Please fill in the required field(s): {}.", join_fields(.0))]
    Validation(Vec<InvalidField>),
    #[error(
        "Insufficient balance: the expense of {requested:.2} exceeds the available balance of {available:.2}."
    )]
    InsufficientBalance { available: f64, requested: f64 },
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Category not found: {0}")]
    CategoryNotFound(Uuid),
    #[error("Category `{category}` holds {found} entries, not {expected} entries")]
    CategoryTypeMismatch {
        category: String,
        expected: TransactionType,
        found: TransactionType,
    },
    #[error("The type of category {0} cannot be changed")]
    CategoryTypeImmutable(Uuid),
}

impl LedgerError {
    /// Offending fields for validation failures, empty otherwise.
    pub fn invalid_fields(&self) -> &[InvalidField] {
        match self {
            LedgerError::Validation(fields) => fields,
            _ => &[],
        }
    }
}

pub type Result<T> = StdResult<T, LedgerError>;
