use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::core::services::CategoryService;
use crate::domain::{ColorTag, Displayable, NewCategory, TransactionType};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "Add, edit, remove or list categories",
        "category <add|edit|remove|list> ...\n         \
category add <income|expense> <color> <name...>\n         \
category edit <position> <color> <name...>\n         \
category remove <position>",
        cmd_category,
    )]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((sub, rest)) = args.split_first() else {
        return list(context);
    };
    match sub.to_lowercase().as_str() {
        "add" => add(context, rest),
        "edit" => edit(context, rest),
        "remove" | "rm" => remove(context, rest),
        "list" | "ls" => list(context),
        "colors" => colors(),
        other => Err(CommandError::InvalidArguments(format!(
            "unknown category action `{}`",
            other
        ))),
    }
}

fn parse_color(input: &str) -> Result<ColorTag, CommandError> {
    input.parse().map_err(|err: String| {
        CommandError::InvalidArguments(format!("{} (see `category colors`)", err))
    })
}

fn add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: category add <income|expense> <color> <name...>".into(),
        ));
    }
    let kind: TransactionType = args[0].parse().map_err(CommandError::InvalidArguments)?;
    let color = parse_color(args[1])?;
    let name = args[2..].join(" ");
    CategoryService::add(&mut context.ledger, NewCategory::new(name.clone(), kind, color))?;
    io::print_success(format!("Category `{}` added.", name.trim()));
    Ok(())
}

fn edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: category edit <position> <color> <name...>".into(),
        ));
    }
    let mut category = context.category_at(args[0])?;
    category.color = parse_color(args[1])?;
    category.name = args[2..].join(" ");
    CategoryService::update(&mut context.ledger, category)?;
    io::print_success(format!("Category {} updated.", args[0]));
    Ok(())
}

fn remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let position = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: category remove <position>".into())
    })?;
    let category = context.category_at(position)?;
    let linked = CategoryService::linked_transaction_count(&context.ledger, category.id);
    if linked > 0 {
        io::print_warning(format!(
            "Removing `{}` also deletes {} linked transaction(s).",
            category.name, linked
        ));
    }
    if !context.confirm(&format!("Remove category {}?", category.display_label()))? {
        io::print_info("Removal cancelled.");
        return Ok(());
    }
    let report = CategoryService::remove(&mut context.ledger, category.id);
    if report.category_removed {
        io::print_success(format!(
            "Category `{}` removed ({} transaction(s) deleted).",
            category.name, report.transactions_removed
        ));
    }
    Ok(())
}

fn list(context: &mut ShellContext) -> CommandResult {
    output_section("Categories");
    for (idx, category) in context.ledger.categories().iter().enumerate() {
        let linked = CategoryService::linked_transaction_count(&context.ledger, category.id);
        io::print_info(formatters::category_row(idx + 1, category, linked));
    }
    Ok(())
}

fn colors() -> CommandResult {
    output_section("Colors");
    let names: Vec<&str> = ColorTag::PALETTE.iter().map(|tag| tag.label()).collect();
    io::print_info(format!("  {}", names.join(", ")));
    Ok(())
}
