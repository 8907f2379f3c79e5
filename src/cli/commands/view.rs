use serde::Serialize;

use crate::cli::core::{parse_date, CommandError, CommandResult, ShellContext};
use crate::cli::formatters;
use crate::cli::io;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::core::services::SummaryService;
use crate::domain::{
    summary::sorted_by_total_desc, BalanceStatus, Category, Period, Transaction, TransactionType,
};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "period",
            "Set the period filter",
            "period <all|7d|30d|custom START END>",
            cmd_period,
        ),
        CommandEntry::new(
            "search",
            "Filter by description; no term clears it",
            "search [term...]",
            cmd_search,
        ),
        CommandEntry::new(
            "summary",
            "Show balance and totals for the current filter",
            "summary",
            cmd_summary,
        ),
        CommandEntry::new(
            "chart",
            "Expense breakdown or monthly income/expense bars",
            "chart <categories|months>",
            cmd_chart,
        ),
        CommandEntry::new(
            "export",
            "Print the ledger as JSON",
            "export",
            cmd_export,
        ),
    ]
}

fn cmd_period(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args.first().ok_or_else(|| {
        CommandError::InvalidArguments("usage: period <all|7d|30d|custom START END>".into())
    })?;
    let mut period: Period = raw.parse().map_err(CommandError::InvalidArguments)?;
    if let Period::Custom { .. } = period {
        let (Some(start), Some(end)) = (args.get(1), args.get(2)) else {
            return Err(CommandError::InvalidArguments(
                "custom period needs START and END dates".into(),
            ));
        };
        let (start, end) = (parse_date(start)?, parse_date(end)?);
        if start > end {
            return Err(CommandError::InvalidArguments(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
        period = Period::custom(start, end);
    }
    context.filter.period = period;
    io::print_success(format!("Period set to {}.", period));
    Ok(())
}

fn cmd_search(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    context.filter.search = args.join(" ");
    if context.filter.search.is_empty() {
        io::print_success("Search cleared.");
    } else {
        io::print_success(format!("Searching for `{}`.", context.filter.search));
    }
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let balance = SummaryService::running_balance(&context.ledger);
    let visible =
        SummaryService::filter_transactions(&context.ledger, &context.filter, context.clock());
    let totals = SummaryService::compute_totals(&visible);

    output_section("Summary");
    let headline = context.money(balance);
    io::print_info(format!(
        "  Total balance : {}",
        output::signed_amount(headline, balance < 0.0)
    ));
    io::print_info(format!("  Period        : {}", context.filter.period));
    if !context.filter.search.is_empty() {
        io::print_info(format!("  Search        : {}", context.filter.search));
    }
    io::print_info(format!("  Income        : {}", context.money(totals.income)));
    io::print_info(format!("  Expenses      : {}", context.money(totals.expenses)));
    let status = match totals.status() {
        BalanceStatus::Positive => "positive",
        BalanceStatus::Negative => "negative",
    };
    io::print_info(format!(
        "  Balance       : {} ({})",
        output::signed_amount(context.money(totals.balance), totals.balance < 0.0),
        status
    ));
    io::print_info(format!("  Transactions  : {}", visible.len()));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let visible =
        SummaryService::filter_transactions(&context.ledger, &context.filter, context.clock());
    match args.first().map(|arg| arg.to_lowercase()).as_deref() {
        Some("categories") | Some("category") => {
            let slices = sorted_by_total_desc(SummaryService::aggregate_by_category(
                &visible,
                context.ledger.categories(),
                TransactionType::Expense,
            ));
            output_section("Expenses by category");
            if slices.is_empty() {
                io::print_info("No expenses in the current filter.");
                return Ok(());
            }
            let max = slices.first().map(|slice| slice.total).unwrap_or_default();
            for slice in &slices {
                let amount = context.money(slice.total);
                io::print_info(formatters::category_chart_row(slice, max, &amount));
            }
            Ok(())
        }
        Some("months") | Some("monthly") => {
            let months = SummaryService::aggregate_by_month(&visible);
            output_section("Income and expenses by month");
            if months.is_empty() {
                io::print_info("No transactions in the current filter.");
                return Ok(());
            }
            let max = months
                .iter()
                .map(|month| month.income.max(month.expense))
                .fold(0.0, f64::max);
            for month in &months {
                let rows = formatters::month_chart_rows(
                    month,
                    max,
                    &context.money(month.income),
                    &context.money(month.expense),
                );
                for row in rows {
                    io::print_info(row);
                }
            }
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: chart <categories|months>".into(),
        )),
    }
}

#[derive(Serialize)]
struct ExportSnapshot<'a> {
    categories: &'a [Category],
    transactions: &'a [Transaction],
    balance: f64,
}

fn cmd_export(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let snapshot = ExportSnapshot {
        categories: context.ledger.categories(),
        transactions: context.ledger.transactions(),
        balance: SummaryService::running_balance(&context.ledger),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
