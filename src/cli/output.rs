use std::fmt;
use std::sync::RwLock;

use colored::Colorize;
use once_cell::sync::Lazy;

use crate::config::Config;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputPreferences {
    pub color_enabled: bool,
    pub high_contrast_mode: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
            high_contrast_mode: false,
        }
    }
}

impl From<&Config> for OutputPreferences {
    fn from(config: &Config) -> Self {
        Self {
            color_enabled: config.ui_color_enabled,
            high_contrast_mode: config.high_contrast,
        }
    }
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "",
        MessageKind::Success => "OK:",
        MessageKind::Warning => "WARNING:",
        MessageKind::Error => "ERROR:",
        MessageKind::Section => "",
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Info => text,
        _ => format!("{} {}", label(kind), text),
    };

    if !prefs.color_enabled {
        return formatted;
    }

    if prefs.high_contrast_mode {
        return match kind {
            MessageKind::Info => formatted,
            _ => formatted.bold().to_string(),
        };
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &current_preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Colors a money figure green or red by sign, honoring the current preferences.
pub fn signed_amount(text: String, negative: bool) -> String {
    let prefs = current_preferences();
    if !prefs.color_enabled || prefs.high_contrast_mode {
        return text;
    }
    if negative {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}
