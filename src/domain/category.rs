//! Domain types representing transaction categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::domain::transaction::TransactionType;

/// Groups transactions of one side of the ledger for listing and charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub color: ColorTag,
    #[serde(default)]
    pub icon: CategoryIcon,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default = "Category::default_deletable")]
    pub is_deletable: bool,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: TransactionType, color: ColorTag) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color,
            icon: CategoryIcon::Generic,
            kind,
            is_deletable: true,
        }
    }

    pub fn with_icon(mut self, icon: CategoryIcon) -> Self {
        self.icon = icon;
        self
    }

    fn default_deletable() -> bool {
        true
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Typed for Category {
    fn kind(&self) -> TransactionType {
        self.kind
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// Payload for creating a category. The engine assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub color: ColorTag,
    pub kind: TransactionType,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, kind: TransactionType, color: ColorTag) -> Self {
        Self {
            name: name.into(),
            color,
            kind,
        }
    }
}

/// Symbolic color drawn from the fixed presentation palette.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Red,
    Orange,
    Amber,
    Yellow,
    Lime,
    Green,
    Emerald,
    Teal,
    Cyan,
    Sky,
    Blue,
    Indigo,
    Violet,
    Purple,
    Fuchsia,
    Pink,
    Rose,
    #[default]
    Gray,
}

impl ColorTag {
    /// Colors offered when creating or editing a category. `Gray` is only the default.
    pub const PALETTE: [ColorTag; 17] = [
        ColorTag::Red,
        ColorTag::Orange,
        ColorTag::Amber,
        ColorTag::Yellow,
        ColorTag::Lime,
        ColorTag::Green,
        ColorTag::Emerald,
        ColorTag::Teal,
        ColorTag::Cyan,
        ColorTag::Sky,
        ColorTag::Blue,
        ColorTag::Indigo,
        ColorTag::Violet,
        ColorTag::Purple,
        ColorTag::Fuchsia,
        ColorTag::Pink,
        ColorTag::Rose,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Orange => "orange",
            ColorTag::Amber => "amber",
            ColorTag::Yellow => "yellow",
            ColorTag::Lime => "lime",
            ColorTag::Green => "green",
            ColorTag::Emerald => "emerald",
            ColorTag::Teal => "teal",
            ColorTag::Cyan => "cyan",
            ColorTag::Sky => "sky",
            ColorTag::Blue => "blue",
            ColorTag::Indigo => "indigo",
            ColorTag::Violet => "violet",
            ColorTag::Purple => "purple",
            ColorTag::Fuchsia => "fuchsia",
            ColorTag::Pink => "pink",
            ColorTag::Rose => "rose",
            ColorTag::Gray => "gray",
        }
    }

    /// Chart fill color.
    pub fn hex(self) -> &'static str {
        match self {
            ColorTag::Red => "#ef4444",
            ColorTag::Orange => "#f97316",
            ColorTag::Amber => "#f59e0b",
            ColorTag::Yellow => "#eab308",
            ColorTag::Lime => "#84cc16",
            ColorTag::Green => "#22c55e",
            ColorTag::Emerald => "#10b981",
            ColorTag::Teal => "#14b8a6",
            ColorTag::Cyan => "#06b6d4",
            ColorTag::Sky => "#0ea5e9",
            ColorTag::Blue => "#3b82f6",
            ColorTag::Indigo => "#6366f1",
            ColorTag::Violet => "#8b5cf6",
            ColorTag::Purple => "#a855f7",
            ColorTag::Fuchsia => "#d946ef",
            ColorTag::Pink => "#ec4899",
            ColorTag::Rose => "#f43f5e",
            ColorTag::Gray => "#6b7280",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorTag {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim().to_ascii_lowercase();
        ColorTag::PALETTE
            .iter()
            .chain(std::iter::once(&ColorTag::Gray))
            .copied()
            .find(|tag| tag.label() == needle)
            .ok_or_else(|| format!("unknown color `{}`", value.trim()))
    }
}

/// Symbolic icon key, resolved to an asset by whoever renders the category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryIcon {
    Salary,
    Voucher,
    Loan,
    Bonus,
    Commission,
    Investment,
    ShoppingCart,
    Market,
    Car,
    Home,
    Transport,
    Entertainment,
    PersonalCare,
    #[default]
    Generic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_tags_parse_case_insensitively() {
        assert_eq!("Teal".parse::<ColorTag>(), Ok(ColorTag::Teal));
        assert_eq!("gray".parse::<ColorTag>(), Ok(ColorTag::Gray));
        assert!("magenta".parse::<ColorTag>().is_err());
    }

    #[test]
    fn palette_excludes_default_gray() {
        assert!(!ColorTag::PALETTE.contains(&ColorTag::Gray));
        assert_eq!(ColorTag::default(), ColorTag::Gray);
    }

    #[test]
    fn new_categories_are_generic_and_deletable() {
        let category = Category::new("Pets", TransactionType::Expense, ColorTag::Pink);
        assert_eq!(category.icon, CategoryIcon::Generic);
        assert!(category.is_deletable);
        assert_eq!(category.display_label(), "Pets (Expense)");
    }
}
