//! Shared primitive types used across the pricing core.

use crate::error::{PricingError, PricingResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A top-level retail category tracked by the catalog.
///
/// Closed set: adding a category means adding a variant here, a row in
/// the builtin table, and a subcategory list. String keys from the CLI,
/// IPC commands, and config files are parsed through `FromStr` so an
/// unknown name fails loudly instead of silently resolving to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Baby,
    Books,
    ToolsHome,
    Electronics,
    Grocery,
    Apparel,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Baby,
        Category::Books,
        Category::ToolsHome,
        Category::Electronics,
        Category::Grocery,
        Category::Apparel,
    ];

    /// Stable key used in config files and IPC payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Baby => "baby",
            Self::Books => "books",
            Self::ToolsHome => "tools_home",
            Self::Electronics => "electronics",
            Self::Grocery => "grocery",
            Self::Apparel => "apparel",
        }
    }

    /// Human-readable label for summaries and chart legends.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Baby => "Baby",
            Self::Books => "Books",
            Self::ToolsHome => "Tools & Home",
            Self::Electronics => "Electronics",
            Self::Grocery => "Grocery",
            Self::Apparel => "Apparel",
        }
    }

    /// The enumerated subcategory set for this category.
    pub fn subcategories(&self) -> &'static [&'static str] {
        match self {
            Self::Baby => &["diapers", "formula", "strollers"],
            Self::Books => &["fiction", "textbooks", "children"],
            Self::ToolsHome => &["power_tools", "hand_tools", "garden"],
            Self::Electronics => &["tv", "audio", "accessories"],
            Self::Grocery => &["snacks", "beverages", "staples"],
            Self::Apparel => &["outerwear", "activewear", "basics"],
        }
    }

    pub fn has_subcategory(&self, subcategory: &str) -> bool {
        self.subcategories().contains(&subcategory)
    }
}

impl FromStr for Category {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| PricingError::UnknownCategory {
                category: s.to_string(),
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A calendar month, 1 = January through 12 = December.
///
/// Construction is validated; an out-of-range month cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(u8);

impl Month {
    pub fn new(number: u8) -> PricingResult<Self> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PricingError::UnknownMonth { month: number })
        }
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    /// English month name, e.g. "April".
    pub fn name(&self) -> &'static str {
        // Month(n) is validated on construction, so the conversion holds.
        chrono::Month::try_from(self.0)
            .map(|m| m.name())
            .unwrap_or("invalid")
    }
}

impl TryFrom<u8> for Month {
    type Error = PricingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Month::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> u8 {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
