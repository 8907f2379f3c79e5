//! Shell context, dispatch, and argument parsing shared by command handlers.

use std::io;

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use uuid::Uuid;

use crate::{
    config::{Config, ConfigError, ConfigManager},
    core::{
        errors::LedgerError,
        services::SummaryService,
        time::{Clock, SystemClock},
    },
    currency::{format_currency, NumberFormat},
    domain::{Category, Transaction, TransactionFilter, TransactionType},
    ledger::Ledger,
};

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub filter: TransactionFilter,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
    clock: Box<dyn Clock>,
    config_store: Option<ConfigManager>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let manager = ConfigManager::from_env();
        let config = manager.load()?;
        Ok(Self::with_parts(mode, config, Box::new(SystemClock)).with_config_store(manager))
    }

    /// Builds a context from an already loaded config and an explicit clock.
    pub fn with_parts(mode: CliMode, config: Config, clock: Box<dyn Clock>) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        cli_io::apply_config(&config);

        let ledger = if config.seed_sample_data {
            Ledger::with_defaults(clock.today())
        } else {
            Ledger::with_default_categories()
        };
        let filter = TransactionFilter::new(config.default_period, "");

        tracing::debug!(
            categories = ledger.categories().len(),
            transactions = ledger.transaction_count(),
            "shell context ready"
        );

        Self {
            mode,
            registry,
            ledger,
            filter,
            config,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
            clock,
            config_store: None,
        }
    }

    /// Persists preference changes made with `config set` through `manager`.
    pub fn with_config_store(mut self, manager: ConfigManager) -> Self {
        self.config_store = Some(manager);
        self
    }

    pub(crate) fn config_path(&self) -> Option<&std::path::Path> {
        self.config_store.as_ref().map(ConfigManager::config_path)
    }

    /// Replaces the preferences, re-applies the output style and saves them when a
    /// store is attached. Returns whether the change was written to disk.
    pub(crate) fn update_config(&mut self, config: Config) -> Result<bool, CommandError> {
        cli_io::apply_config(&config);
        self.config = config;
        match &self.config_store {
            Some(manager) => {
                manager.save(&self.config)?;
                tracing::info!(path = %manager.config_path().display(), "config saved");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn prompt(&self) -> String {
        format!("finance [{}]> ", self.filter.period)
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub(crate) fn number_format(&self) -> NumberFormat {
        NumberFormat::for_locale(&self.config.locale)
    }

    pub(crate) fn money(&self, value: f64) -> String {
        format_currency(value, &self.config.currency_symbol, self.number_format())
    }

    /// Transactions passing the active filter, newest first. Shell indices point into this list.
    pub(crate) fn visible_transactions(&self) -> Vec<Transaction> {
        let filtered =
            SummaryService::filter_transactions(&self.ledger, &self.filter, self.clock());
        SummaryService::sorted_for_display(&filtered)
    }

    pub(crate) fn transaction_at(&self, raw: &str) -> Result<Transaction, CommandError> {
        let index = parse_index(raw)?;
        self.visible_transactions()
            .into_iter()
            .nth(index)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!("no transaction at position {}", raw))
            })
    }

    pub(crate) fn category_at(&self, raw: &str) -> Result<Category, CommandError> {
        let index = parse_index(raw)?;
        self.ledger
            .categories()
            .get(index)
            .cloned()
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!("no category at position {}", raw))
            })
    }

    /// Case-insensitive name lookup, preferring a category on the requested side.
    pub(crate) fn find_category(&self, name: &str, kind: TransactionType) -> Option<Uuid> {
        let matches = |category: &&Category| category.name.eq_ignore_ascii_case(name.trim());
        let categories = self.ledger.categories();
        categories
            .iter()
            .filter(matches)
            .find(|category| category.kind == kind)
            .or_else(|| categories.iter().find(matches))
            .map(|category| category.id)
    }

    /// Asks before destructive actions; script mode always proceeds.
    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, prompt, false)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&raw.to_lowercase(), raw, &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        if let Some(best) = closest_command(self.registry.names(), input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        self.confirm("Exit shell?").map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match &err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Ledger(LedgerError::InsufficientBalance { .. }) => {
                self.print_error(&err.to_string());
                self.print_hint("Record income first or lower the amount.");
                Ok(())
            }
            _ => {
                self.print_error(&err.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_info(format!("Hint: {}", message));
    }
}

/// Nearest registered command within an edit distance of three.
pub(crate) fn closest_command<'a>(
    names: impl Iterator<Item = &'a str>,
    input: &str,
) -> Option<&'a str> {
    let needle = input.to_lowercase();
    names
        .map(|name| (levenshtein(name, &needle), name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, name)| name)
}

/// 1-based position as printed by the list commands.
pub(crate) fn parse_index(input: &str) -> Result<usize, CommandError> {
    match input.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "invalid position `{}` (use the number shown by `list`)",
            input
        ))),
    }
}

pub(crate) fn parse_date(input: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("invalid date `{}` (use YYYY-MM-DD)", input))
    })
}

pub(crate) fn parse_amount(input: &str, format: NumberFormat) -> Result<f64, CommandError> {
    format
        .parse(input)
        .ok_or_else(|| CommandError::InvalidArguments(format!("invalid amount `{}`", input)))
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("input error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn process_script(lines: &[&str]) -> Result<ShellContext, CliError> {
    use crate::core::time::FixedClock;

    let today = NaiveDate::from_ymd_opt(2024, 6, 10).ok_or_else(|| {
        CliError::Command("invalid fixture date".into())
    })?;
    let mut app = ShellContext::with_parts(
        CliMode::Script,
        Config {
            ui_color_enabled: false,
            ..Config::default()
        },
        Box::new(FixedClock(today)),
    );
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
