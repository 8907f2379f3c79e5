//! Business logic for creating, editing and removing transactions.

use tracing::{info, warn};
use uuid::Uuid;

use crate::core::errors::{InvalidField, LedgerError, Result};
use crate::core::services::SummaryService;
use crate::currency::round_cents;
use crate::domain::{Transaction, TransactionDraft, TransactionInput, TransactionType};
use crate::ledger::Ledger;

/// Validated write operations over the ledger's transactions.
pub struct TransactionService;

impl TransactionService {
    /// Creates or edits a transaction and returns its identifier.
    ///
    /// Nothing is written unless every check passes. Expenses are vetoed when
    /// they would leave the unfiltered running balance below zero.
    pub fn save(ledger: &mut Ledger, input: TransactionInput) -> Result<Uuid> {
        let (edit_id, mut draft) = input.into_parts();

        let category_id = Self::validate_fields(&draft)?;
        draft.amount = round_cents(draft.amount);
        Self::validate_category(ledger, category_id, draft.kind)?;

        let original_contribution = match edit_id {
            Some(id) => ledger
                .transaction(id)
                .map(Transaction::signed_amount)
                .ok_or(LedgerError::TransactionNotFound(id))?,
            None => 0.0,
        };

        let balance = SummaryService::running_balance(ledger);
        let available = balance - original_contribution;
        let potential = available + draft.kind.signed(draft.amount);
        // An overflowed balance can no longer be compared against zero.
        if !potential.is_finite() {
            warn!(available, requested = draft.amount, "transaction rejected: balance overflow");
            return Err(LedgerError::Validation(vec![InvalidField::Amount]));
        }
        if draft.kind == TransactionType::Expense && round_cents(potential) < 0.0 {
            let available = round_cents(available);
            warn!(
                available,
                requested = draft.amount,
                "expense rejected: insufficient balance"
            );
            return Err(LedgerError::InsufficientBalance {
                available,
                requested: draft.amount,
            });
        }

        match edit_id {
            Some(id) => {
                let transaction = Transaction::from_draft(id, draft, category_id);
                ledger.replace_transaction(transaction);
                info!(transaction_id = %id, "transaction updated");
                Ok(id)
            }
            None => {
                let transaction = Transaction::from_draft(Uuid::new_v4(), draft, category_id);
                let id = ledger.push_transaction(transaction);
                info!(transaction_id = %id, "transaction added");
                Ok(id)
            }
        }
    }

    /// Removes the transaction if present. Absent ids are a no-op.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> bool {
        let removed = ledger.remove_transaction(id).is_some();
        if removed {
            info!(transaction_id = %id, "transaction removed");
        }
        removed
    }

    /// Drops every transaction and returns how many were removed.
    pub fn clear_all(ledger: &mut Ledger) -> usize {
        let removed = ledger.clear_transactions();
        info!(removed, "all transactions cleared");
        removed
    }

    /// Returns the ledger's transactions in insertion order.
    pub fn list(ledger: &Ledger) -> &[Transaction] {
        ledger.transactions()
    }

    /// Collects every failing field before reporting.
    fn validate_fields(draft: &TransactionDraft) -> Result<Uuid> {
        let mut invalid = Vec::new();
        let rounded = round_cents(draft.amount);
        if !rounded.is_finite() || rounded <= 0.0 {
            invalid.push(InvalidField::Amount);
        }
        if draft.description.trim().is_empty() {
            invalid.push(InvalidField::Description);
        }
        match draft.category_id {
            Some(category_id) if invalid.is_empty() => Ok(category_id),
            Some(_) => Err(LedgerError::Validation(invalid)),
            None => {
                invalid.push(InvalidField::Category);
                Err(LedgerError::Validation(invalid))
            }
        }
    }

    fn validate_category(ledger: &Ledger, category_id: Uuid, kind: TransactionType) -> Result<()> {
        let category = ledger
            .category(category_id)
            .ok_or(LedgerError::CategoryNotFound(category_id))?;
        if category.kind != kind {
            return Err(LedgerError::CategoryTypeMismatch {
                category: category.name.clone(),
                expected: category.kind,
                found: kind,
            });
        }
        Ok(())
    }
}
