use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::core::CommandError;
use crate::cli::output;
use crate::config::Config;

pub fn apply_config(config: &Config) {
    output::set_preferences(output::OutputPreferences::from(config));
}

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
