use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::config::Config;
use crate::currency::{format_amount_with, NumberFormat};
use crate::domain::Period;

const SET_USAGE: &str =
    "usage: config set <locale|currency|color|high-contrast|sample-data|period> <value>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved shell preferences",
        "config [show|set <key> <value>|reset]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        return show(context);
    }

    match args[0].to_lowercase().as_str() {
        "set" => {
            if args.len() < 3 {
                return Err(CommandError::InvalidArguments(SET_USAGE.into()));
            }
            let value = args[2..].join(" ");
            let config = apply(context.config.clone(), &args[1].to_lowercase(), value.trim())?;
            let saved = context.update_config(config)?;
            io::print_success(format!("Preference `{}` updated.", args[1]));
            if !saved {
                io::print_warning("No config file attached; the change lasts for this session.");
            }
            Ok(())
        }
        "reset" => {
            if !context.confirm("Restore default preferences?")? {
                io::print_info("Reset cancelled.");
                return Ok(());
            }
            context.update_config(Config::default())?;
            io::print_success("Preferences restored to defaults.");
            Ok(())
        }
        other => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{}`",
            other
        ))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    let format = NumberFormat::for_locale(&config.locale);
    output_section("Preferences");
    io::print_info(format!(
        "  locale        : {} (amounts like {})",
        config.locale,
        format_amount_with(1234.5, format)
    ));
    io::print_info(format!("  currency      : {}", config.currency_symbol));
    io::print_info(format!("  color         : {}", on_off(config.ui_color_enabled)));
    io::print_info(format!("  high-contrast : {}", on_off(config.high_contrast)));
    io::print_info(format!("  sample-data   : {}", on_off(config.seed_sample_data)));
    io::print_info(format!("  period        : {}", config.default_period));
    match context.config_path() {
        Some(path) => io::print_info(format!("  file          : {}", path.display())),
        None => io::print_info("  file          : (not persisted)"),
    }
    Ok(())
}

/// Returns `config` with one preference changed.
fn apply(mut config: Config, key: &str, value: &str) -> Result<Config, CommandError> {
    match key {
        "locale" => config.locale = value.to_string(),
        "currency" | "currency_symbol" => config.currency_symbol = value.to_string(),
        "color" | "ui_color_enabled" => config.ui_color_enabled = parse_switch(value)?,
        "high-contrast" | "high_contrast" => config.high_contrast = parse_switch(value)?,
        "sample-data" | "seed_sample_data" => config.seed_sample_data = parse_switch(value)?,
        "period" | "default_period" => {
            let period: Period = value.parse().map_err(CommandError::InvalidArguments)?;
            if let Period::Custom { .. } = period {
                return Err(CommandError::InvalidArguments(
                    "default period must be all, 7d or 30d".into(),
                ));
            }
            config.default_period = period;
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown preference `{}`; {}",
                other, SET_USAGE
            )))
        }
    }
    Ok(config)
}

fn parse_switch(value: &str) -> Result<bool, CommandError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(CommandError::InvalidArguments(format!(
            "expected on or off, got `{}`",
            other
        ))),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::core::{process_script, CliMode};
    use crate::config::ConfigManager;
    use crate::core::time::FixedClock;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn set_changes_one_preference() {
        let config = apply(Config::default(), "locale", "pt-BR").unwrap();
        assert_eq!(config.locale, "pt-BR");
        assert_eq!(config.currency_symbol, "R$");

        let config = apply(config, "period", "30d").unwrap();
        assert_eq!(config.default_period, Period::Last30Days);
        assert!(apply(Config::default(), "period", "custom").is_err());
        assert!(apply(Config::default(), "color", "maybe").is_err());
        assert!(apply(Config::default(), "theme", "dark").is_err());
    }

    #[test]
    fn session_change_without_store_switches_money_format() {
        let app = process_script(&["config set locale pt-BR"]).unwrap();
        assert_eq!(app.config.locale, "pt-BR");
        assert_eq!(app.money(1500.0), "R$ 1.500,00");
        assert!(app.config_path().is_none());
    }

    #[test]
    fn set_persists_through_attached_store() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::new(dir.path().join("config.json"));
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let config = Config {
            ui_color_enabled: false,
            ..Config::default()
        };
        let mut app =
            ShellContext::with_parts(CliMode::Script, config, Box::new(FixedClock(today)))
                .with_config_store(manager.clone());

        cmd_config(&mut app, &["set", "currency", "US$"]).unwrap();
        cmd_config(&mut app, &["set", "sample-data", "off"]).unwrap();
        let saved = manager.load().unwrap();
        assert_eq!(saved.currency_symbol, "US$");
        assert!(!saved.seed_sample_data);

        cmd_config(&mut app, &["reset"]).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }
}
