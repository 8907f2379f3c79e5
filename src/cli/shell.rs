use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::io as cli_io;
use crate::core::services::SummaryService;

pub const SCRIPT_ENV: &str = "FINANCE_CORE_CLI_SCRIPT";

/// Subcommands offered after the first word.
const SUBCOMMANDS: &[(&str, &[&str])] = &[
    ("transaction", &["add", "edit", "remove", "clear", "list"]),
    ("category", &["add", "edit", "remove", "list", "colors"]),
    ("period", &["all", "7d", "30d", "custom"]),
    ("chart", &["categories", "months"]),
    ("config", &["show", "set", "reset"]),
];

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    tracing::info!(?mode, "shell started");

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    let balance = SummaryService::running_balance(&context.ledger);
    cli_io::print_info(format!(
        "Finance Core shell. Balance: {}. Type `help` for commands.",
        context.money(balance)
    ));

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if run_line(context, trimmed)? == LoopControl::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                cli_io::print_info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !context.running || run_line(context, &line)? == LoopControl::Exit {
            break;
        }
    }
    Ok(())
}

fn run_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CliError> {
    match handle_line(context, line) {
        Ok(control) => Ok(control),
        Err(err) => {
            context.report_error(err)?;
            Ok(LoopControl::Continue)
        }
    }
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&err.message);
            return Ok(LoopControl::Continue);
        }
    };

    let Some(raw) = tokens.first() else {
        return Ok(LoopControl::Continue);
    };
    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    context.last_command = Some(line.trim().to_string());

    let control = context.dispatch(&command, raw, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    fn candidates(&self, head: Option<&str>) -> Vec<&str> {
        match head {
            None => self.commands.iter().map(String::as_str).collect(),
            Some(head) => SUBCOMMANDS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(head))
                .map(|(_, subs)| subs.to_vec())
                .unwrap_or_default(),
        }
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);

        let words: Vec<&str> = prefix[..start].split_whitespace().collect();
        let head = match words.as_slice() {
            [] => None,
            [head] => Some(*head),
            _ => return Ok((start, Vec::new())),
        };

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .candidates(head)
            .into_iter()
            .filter(|name| name.starts_with(&needle))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_arguments_stay_together() {
        let tokens =
            parse_command_line("transaction add expense 10 \"Personal Care\" 2024-01-01 soap")
                .unwrap();
        assert_eq!(tokens[4], "Personal Care");
        assert!(parse_command_line("search \"unterminated").is_err());
    }

    #[test]
    fn completion_offers_subcommands_after_command() {
        let helper = CommandHelper::new(vec!["transaction", "chart", "category"]);
        assert_eq!(helper.candidates(None), vec!["category", "chart", "transaction"]);
        assert_eq!(helper.candidates(Some("chart")), vec!["categories", "months"]);
        assert!(helper.candidates(Some("summary")).is_empty());
    }
}
