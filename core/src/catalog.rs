//! Elasticity catalog — resolves the price-elasticity coefficient for a
//! (category, subcategory, month) key.
//!
//! RULE: the catalog is loaded once at startup and immutable afterwards.
//! Seasonal adjustments are written in config as multipliers on the
//! owning coefficient and expanded to resolved numeric values at load
//! time, so resolution is a pure map lookup over a fixed fallback chain:
//!
//!   (category, subcategory, month)
//!     -> (category, subcategory)
//!     -> (category, month)
//!     -> category base

use crate::{
    error::{PricingError, PricingResult},
    types::{Category, Month},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which level of the fallback chain produced a coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionLevel {
    SubcategoryMonth,
    Subcategory,
    CategoryMonth,
    CategoryBase,
}

impl ResolutionLevel {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::SubcategoryMonth => "subcategory seasonal",
            Self::Subcategory => "subcategory",
            Self::CategoryMonth => "category seasonal",
            Self::CategoryBase => "category base",
        }
    }
}

/// A resolved coefficient plus the level it came from.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResolvedElasticity {
    pub value: f64,
    pub level: ResolutionLevel,
}

#[derive(Debug, Clone)]
struct CategoryTable {
    base: f64,
    by_subcategory: HashMap<String, f64>,
    by_month: HashMap<u8, f64>,
    by_subcategory_month: HashMap<(String, u8), f64>,
}

/// The full coefficient table, one entry per category.
#[derive(Debug, Clone)]
pub struct ElasticityCatalog {
    tables: HashMap<Category, CategoryTable>,
}

// ── Config file shapes ─────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct CategoryEntry {
    category: Category,
    base_elasticity: f64,
    #[serde(default)]
    subcategories: Vec<SubcategoryEntry>,
    #[serde(default)]
    seasonal: Vec<SeasonalEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct SubcategoryEntry {
    subcategory: String,
    elasticity: f64,
    #[serde(default)]
    seasonal: Vec<SeasonalEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct SeasonalEntry {
    month: Month,
    multiplier: f64,
}

impl ElasticityCatalog {
    /// Load from `{data_dir}/elasticity/elasticity_catalog.json`.
    /// In tests, use `ElasticityCatalog::builtin()`.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = format!("{data_dir}/elasticity/elasticity_catalog.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let catalog = Self::from_json(&content)?;
        log::info!(
            "catalog: loaded {} categories from {path}",
            catalog.tables.len()
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON.
    pub fn from_json(content: &str) -> PricingResult<Self> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::from_entries(file.categories)
    }

    fn from_entries(entries: Vec<CategoryEntry>) -> PricingResult<Self> {
        let mut tables = HashMap::new();

        for entry in entries {
            let category = entry.category;
            validate_coefficient(category.key(), entry.base_elasticity)?;

            let mut by_subcategory = HashMap::new();
            let mut by_month = HashMap::new();
            let mut by_subcategory_month = HashMap::new();

            for seasonal in &entry.seasonal {
                let key = format!("{}@{}", category.key(), seasonal.month.number());
                validate_multiplier(&key, seasonal.multiplier)?;
                let value = entry.base_elasticity * seasonal.multiplier;
                if by_month.insert(seasonal.month.number(), value).is_some() {
                    return Err(duplicate_key(&key, value));
                }
            }

            for sub in &entry.subcategories {
                let key = format!("{}/{}", category.key(), sub.subcategory);
                if !category.has_subcategory(&sub.subcategory) {
                    return Err(PricingError::InvalidCoefficient {
                        key,
                        reason: "subcategory not in category's enumerated set",
                        value: sub.elasticity,
                    });
                }
                validate_coefficient(&key, sub.elasticity)?;
                if by_subcategory
                    .insert(sub.subcategory.clone(), sub.elasticity)
                    .is_some()
                {
                    return Err(duplicate_key(&key, sub.elasticity));
                }

                for seasonal in &sub.seasonal {
                    let month_key = format!("{key}@{}", seasonal.month.number());
                    validate_multiplier(&month_key, seasonal.multiplier)?;
                    let value = sub.elasticity * seasonal.multiplier;
                    let slot = (sub.subcategory.clone(), seasonal.month.number());
                    if by_subcategory_month.insert(slot, value).is_some() {
                        return Err(duplicate_key(&month_key, value));
                    }
                }
            }

            let table = CategoryTable {
                base: entry.base_elasticity,
                by_subcategory,
                by_month,
                by_subcategory_month,
            };
            if tables.insert(category, table).is_some() {
                return Err(duplicate_key(category.key(), entry.base_elasticity));
            }
        }

        Ok(Self { tables })
    }

    /// Resolve a coefficient, most specific key first.
    ///
    /// A subcategory the catalog has no row for falls through to the
    /// category levels below it; only the category itself is required.
    pub fn resolve(
        &self,
        category: Category,
        subcategory: Option<&str>,
        month: Option<Month>,
    ) -> PricingResult<f64> {
        self.resolve_traced(category, subcategory, month)
            .map(|r| r.value)
    }

    /// As `resolve`, also reporting which fallback level matched.
    pub fn resolve_traced(
        &self,
        category: Category,
        subcategory: Option<&str>,
        month: Option<Month>,
    ) -> PricingResult<ResolvedElasticity> {
        let table =
            self.tables
                .get(&category)
                .ok_or_else(|| PricingError::UnknownCategory {
                    category: category.key().to_string(),
                })?;

        if let Some(sub) = subcategory {
            if !category.has_subcategory(sub) {
                log::warn!(
                    "catalog: '{sub}' is not a subcategory of {category}, falling back"
                );
            }
            if let Some(m) = month {
                if let Some(&value) =
                    table.by_subcategory_month.get(&(sub.to_string(), m.number()))
                {
                    return Ok(self.traced(category, ResolutionLevel::SubcategoryMonth, value));
                }
            }
            if let Some(&value) = table.by_subcategory.get(sub) {
                return Ok(self.traced(category, ResolutionLevel::Subcategory, value));
            }
        }

        if let Some(m) = month {
            if let Some(&value) = table.by_month.get(&m.number()) {
                return Ok(self.traced(category, ResolutionLevel::CategoryMonth, value));
            }
        }

        Ok(self.traced(category, ResolutionLevel::CategoryBase, table.base))
    }

    fn traced(
        &self,
        category: Category,
        level: ResolutionLevel,
        value: f64,
    ) -> ResolvedElasticity {
        log::debug!(
            "catalog: {category} resolved to {value:.4} via {}",
            level.describe()
        );
        ResolvedElasticity { value, level }
    }

    /// Categories present in this catalog.
    pub fn categories(&self) -> Vec<Category> {
        let mut cats: Vec<Category> = self.tables.keys().copied().collect();
        cats.sort_by_key(|c| c.key());
        cats
    }

    /// The builtin reference table shipped with the crate. Mirrors
    /// `data/elasticity/elasticity_catalog.json`.
    pub fn builtin() -> Self {
        let entries = vec![
            CategoryEntry {
                category: Category::Baby,
                base_elasticity: -0.27,
                subcategories: vec![
                    sub("diapers", -0.22, vec![]),
                    sub("formula", -0.18, vec![]),
                    sub("strollers", -0.45, vec![]),
                ],
                seasonal: vec![season(11, 1.15), season(12, 1.15)],
            },
            CategoryEntry {
                category: Category::Books,
                base_elasticity: -0.65,
                subcategories: vec![
                    sub("fiction", -0.80, vec![]),
                    sub("textbooks", -0.35, vec![season(8, 1.40)]),
                    sub("children", -0.55, vec![]),
                ],
                seasonal: vec![season(8, 1.20), season(12, 1.30)],
            },
            CategoryEntry {
                category: Category::ToolsHome,
                base_elasticity: -1.10,
                subcategories: vec![
                    sub("power_tools", -1.35, vec![season(4, 2.00)]),
                    sub("hand_tools", -0.95, vec![]),
                    sub("garden", -1.25, vec![season(4, 1.60), season(5, 1.40)]),
                ],
                // April is the spring DIY peak for the category as a whole.
                seasonal: vec![season(4, 2.00), season(5, 1.60), season(6, 1.30)],
            },
            CategoryEntry {
                category: Category::Electronics,
                base_elasticity: -1.45,
                subcategories: vec![
                    sub("tv", -1.70, vec![season(11, 1.25)]),
                    sub("audio", -1.30, vec![]),
                    sub("accessories", -0.90, vec![]),
                ],
                seasonal: vec![season(11, 1.35), season(12, 1.25)],
            },
            CategoryEntry {
                category: Category::Grocery,
                base_elasticity: -0.35,
                subcategories: vec![
                    sub("snacks", -0.60, vec![]),
                    sub("beverages", -0.55, vec![]),
                    sub("staples", -0.20, vec![]),
                ],
                seasonal: vec![],
            },
            CategoryEntry {
                category: Category::Apparel,
                base_elasticity: -1.20,
                subcategories: vec![
                    sub("outerwear", -1.05, vec![season(1, 1.30)]),
                    sub("activewear", -1.35, vec![]),
                    sub("basics", -0.85, vec![]),
                ],
                seasonal: vec![season(1, 1.25), season(7, 1.20)],
            },
        ];

        // The builtin table is validated like any loaded config; a bad
        // entry here is a programming error caught by the test suite.
        Self::from_entries(entries).expect("builtin catalog must validate")
    }
}

fn sub(name: &str, elasticity: f64, seasonal: Vec<SeasonalEntry>) -> SubcategoryEntry {
    SubcategoryEntry {
        subcategory: name.to_string(),
        elasticity,
        seasonal,
    }
}

fn season(month: u8, multiplier: f64) -> SeasonalEntry {
    SeasonalEntry {
        month: Month::new(month).expect("builtin month must be 1-12"),
        multiplier,
    }
}

/// Demand elasticity is negative by definition; zero or positive values
/// are config errors, not valid edge cases.
fn validate_coefficient(key: &str, value: f64) -> PricingResult<()> {
    if !value.is_finite() {
        return Err(PricingError::InvalidCoefficient {
            key: key.to_string(),
            reason: "must be finite",
            value,
        });
    }
    if value >= 0.0 {
        return Err(PricingError::InvalidCoefficient {
            key: key.to_string(),
            reason: "must be negative",
            value,
        });
    }
    Ok(())
}

fn validate_multiplier(key: &str, value: f64) -> PricingResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PricingError::InvalidCoefficient {
            key: key.to_string(),
            reason: "seasonal multiplier must be finite and positive",
            value,
        });
    }
    Ok(())
}

fn duplicate_key(key: &str, value: f64) -> PricingError {
    PricingError::InvalidCoefficient {
        key: key.to_string(),
        reason: "duplicate key",
        value,
    }
}
