//! Money helpers. Amounts are plain `f64` values with cent precision.

/// Rounds to two decimal places, the precision every stored amount carries.
pub fn round_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid printing "-0.00".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Separators used when printing and reading amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl NumberFormat {
    /// Picks separators for a language tag such as `en-US` or `pt-BR`.
    /// Unknown tags fall back to `1,234.56`.
    pub fn for_locale(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "pt" | "de" | "es" | "it" | "nl" => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            "fr" => Self {
                decimal_separator: ',',
                grouping_separator: ' ',
            },
            _ => Self::default(),
        }
    }

    /// Parses user input written with these separators, e.g. `1.234,56` for `pt-BR`.
    pub fn parse(&self, input: &str) -> Option<f64> {
        let normalized: String = input
            .trim()
            .chars()
            .filter(|ch| *ch != self.grouping_separator)
            .map(|ch| if ch == self.decimal_separator { '.' } else { ch })
            .collect();
        normalized.parse().ok()
    }
}

/// Formats a value with two decimals and `,` thousands grouping.
pub fn format_amount(value: f64) -> String {
    format_amount_with(value, NumberFormat::default())
}

pub fn format_amount_with(value: f64, format: NumberFormat) -> String {
    let rounded = round_cents(value);
    let negative = rounded < 0.0;
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, ch) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(format.grouping_separator);
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}{}{fraction}", format.decimal_separator)
}

/// Formats a value with the configured currency symbol, e.g. `R$ 1,500.00`.
pub fn format_currency(value: f64, symbol: &str, format: NumberFormat) -> String {
    if symbol.is_empty() {
        format_amount_with(value, format)
    } else {
        format!("{symbol} {}", format_amount_with(value, format))
    }
}
