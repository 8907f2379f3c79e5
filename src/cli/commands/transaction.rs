use crate::cli::core::{parse_amount, parse_date, CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::core::services::TransactionService;
use crate::domain::{Displayable, TransactionDraft, TransactionInput, TransactionType};

const USAGE: &str = "transaction <add|edit|remove|clear|list> ...\n         \
transaction add <income|expense> <amount> <category> <YYYY-MM-DD> <description...>\n         \
transaction edit <position> <income|expense> <amount> <category> <YYYY-MM-DD> \
<description...>\n         \
transaction edit <position> <amount|description|date|category|type> <value...>\n         \
transaction remove <position>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "transaction",
        "Add, edit, remove or list transactions",
        USAGE,
        cmd_transaction,
    )]
}

fn cmd_transaction(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((sub, rest)) = args.split_first() else {
        return list(context);
    };
    match sub.to_lowercase().as_str() {
        "add" => add(context, rest),
        "edit" => edit(context, rest),
        "remove" | "rm" => remove(context, rest),
        "clear" => clear(context),
        "list" | "ls" => list(context),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown transaction action `{}`",
            other
        ))),
    }
}

/// Builds a draft from `<type> <amount> <category> <date> <description...>`.
/// An unknown category name leaves the draft without one so the ledger reports it.
fn parse_draft(context: &ShellContext, args: &[&str]) -> Result<TransactionDraft, CommandError> {
    if args.len() < 4 {
        return Err(CommandError::InvalidArguments(
            "expected <income|expense> <amount> <category> <YYYY-MM-DD> <description...>".into(),
        ));
    }
    let kind: TransactionType = args[0].parse().map_err(CommandError::InvalidArguments)?;
    let amount = parse_amount(args[1], context.number_format())?;
    let category_id = context.find_category(args[2], kind);
    if category_id.is_none() {
        context.print_warning(&format!("No category named `{}`.", args[2]));
    }
    let date = parse_date(args[3])?;
    let description = args[4..].join(" ");
    Ok(TransactionDraft::new(kind, amount, description, date, category_id))
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = parse_draft(context, args)?;
    let id = TransactionService::save(&mut context.ledger, TransactionInput::New(draft))?;
    if let Some(txn) = context.ledger.transaction(id) {
        io::print_success(format!(
            "Transaction added: {} ({})",
            txn.description,
            context.money(txn.amount)
        ));
    }
    Ok(())
}

fn edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((position, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: transaction edit <position> <field> <value...>".into(),
        ));
    };
    let target = context.transaction_at(position)?;
    let draft = match rest.first().map(|field| field.to_lowercase()) {
        Some(field) if EDIT_FIELDS.contains(&field.as_str()) => {
            edit_field(context, target.to_draft(), &field, &rest[1..])?
        }
        _ => parse_draft(context, rest)?,
    };
    TransactionService::save(
        &mut context.ledger,
        TransactionInput::Edit {
            id: target.id,
            draft,
        },
    )?;
    io::print_success(format!("Transaction {} updated.", position));
    Ok(())
}

const EDIT_FIELDS: [&str; 5] = ["amount", "description", "date", "category", "type"];

/// Changes one field of the stored values, keeping the rest.
fn edit_field(
    context: &ShellContext,
    mut draft: TransactionDraft,
    field: &str,
    values: &[&str],
) -> Result<TransactionDraft, CommandError> {
    let value = values.join(" ");
    if value.trim().is_empty() {
        return Err(CommandError::InvalidArguments(format!(
            "usage: transaction edit <position> {} <value...>",
            field
        )));
    }
    match field {
        "amount" => draft.amount = parse_amount(&value, context.number_format())?,
        "description" => draft.description = value,
        "date" => draft.date = parse_date(&value)?,
        "category" => {
            draft.category_id = context.find_category(&value, draft.kind);
            if draft.category_id.is_none() {
                context.print_warning(&format!("No category named `{}`.", value));
            }
        }
        _ => draft.kind = value.parse().map_err(CommandError::InvalidArguments)?,
    }
    Ok(draft)
}

fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let position = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: transaction remove <position>".into())
    })?;
    let target = context.transaction_at(position)?;
    if !context.confirm(&format!("Remove transaction `{}`?", target.display_label()))? {
        io::print_info("Removal cancelled.");
        return Ok(());
    }
    if TransactionService::remove(&mut context.ledger, target.id) {
        io::print_success(format!("Transaction `{}` removed.", target.description));
    }
    Ok(())
}

fn clear(context: &mut ShellContext) -> CommandResult {
    let count = context.ledger.transaction_count();
    if count == 0 {
        io::print_info("No transactions to clear.");
        return Ok(());
    }
    if !context.confirm(&format!("Remove all {} transactions?", count))? {
        io::print_info("Clear cancelled.");
        return Ok(());
    }
    let removed = TransactionService::clear_all(&mut context.ledger);
    io::print_success(format!("Cleared {} transactions.", removed));
    Ok(())
}

fn list(context: &mut ShellContext) -> CommandResult {
    let visible = context.visible_transactions();
    output_section(format!("Transactions ({})", context.filter.period));
    if visible.is_empty() {
        io::print_info("No transactions match the current filter.");
        return Ok(());
    }
    for (idx, txn) in visible.iter().enumerate() {
        let category = context.ledger.category(txn.category_id);
        let amount = context.money(txn.amount);
        io::print_info(formatters::transaction_row(idx + 1, txn, category, &amount));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::core::process_script;
    use crate::core::time::Clock;
    use crate::domain::{Transaction, TransactionType};

    fn by_description<'a>(txns: &'a [Transaction], description: &str) -> Option<&'a Transaction> {
        txns.iter().find(|txn| txn.description == description)
    }

    #[test]
    fn edit_single_field_keeps_the_others() {
        // Position 1 is the newest sample, "Monthly groceries" at 350.75.
        let app = process_script(&["transaction edit 1 amount 12.5"]).unwrap();
        let edited = by_description(app.ledger.transactions(), "Monthly groceries").unwrap();
        assert_eq!(edited.amount, 12.5);
        assert_eq!(edited.kind, TransactionType::Expense);
        assert_eq!(edited.date, app.clock().today());

        let app = process_script(&["transaction edit 1 description \"Corner shop\""]).unwrap();
        let edited = by_description(app.ledger.transactions(), "Corner shop").unwrap();
        assert_eq!(edited.amount, 350.75);
        assert_eq!(app.ledger.transaction_count(), 4);
    }

    #[test]
    fn edit_with_full_form_replaces_every_field() {
        let app =
            process_script(&["transaction edit 1 income 80 Bonus 2024-06-02 Refund"]).unwrap();
        let txns = app.ledger.transactions();
        assert!(by_description(txns, "Monthly groceries").is_none());
        let edited = by_description(txns, "Refund").unwrap();
        assert_eq!(edited.amount, 80.0);
        assert_eq!(edited.kind, TransactionType::Income);
        assert_eq!(txns.len(), 4);
    }

    #[test]
    fn edit_rejects_an_empty_field_value() {
        let app = process_script(&["transaction edit 1 amount"]).unwrap();
        let edited = by_description(app.ledger.transactions(), "Monthly groceries").unwrap();
        assert_eq!(edited.amount, 350.75);
    }
}
