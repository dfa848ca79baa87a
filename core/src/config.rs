//! Configuration loading for the pricing core.
//!
//! The catalog and tuning knobs live under a `data/` directory as JSON;
//! `PricingConfig::builtin()` carries the same reference values
//! hardcoded for tests and for consumers that ship without data files.

use crate::{
    catalog::ElasticityCatalog,
    error::{PricingError, PricingResult},
    solver::DEFAULT_DISCOUNT_CAP,
    sweep::SweepRange,
};
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub catalog: ElasticityCatalog,
    pub discount_cap: f64,
    pub sweep: SweepRange,
}

/// Internal file shape for pricing_settings.json.
#[derive(Debug, Clone, Deserialize)]
struct SettingsFile {
    discount_cap: Option<f64>,
    sweep: Option<SweepRange>,
}

impl PricingConfig {
    /// Load from the data/ directory. The catalog file is required;
    /// `pricing/pricing_settings.json` is optional and falls back to
    /// the builtin cap and sweep bounds.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let catalog = ElasticityCatalog::load(data_dir)?;

        let settings_path = format!("{data_dir}/pricing/pricing_settings.json");
        let (discount_cap, sweep) = match std::fs::read_to_string(&settings_path) {
            Ok(content) => {
                let file: SettingsFile = serde_json::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Cannot parse {settings_path}: {e}"))?;
                (
                    file.discount_cap.unwrap_or(DEFAULT_DISCOUNT_CAP),
                    file.sweep.unwrap_or_default(),
                )
            }
            Err(_) => {
                log::info!("config: {settings_path} not found, using builtin settings");
                (DEFAULT_DISCOUNT_CAP, SweepRange::default())
            }
        };

        let config = Self {
            catalog,
            discount_cap,
            sweep,
        };
        config.validate()?;
        Ok(config)
    }

    /// Config with the builtin reference catalog, for tests and as the
    /// consumer fallback when no data directory is supplied.
    pub fn builtin() -> Self {
        Self {
            catalog: ElasticityCatalog::builtin(),
            discount_cap: DEFAULT_DISCOUNT_CAP,
            sweep: SweepRange::default(),
        }
    }

    fn validate(&self) -> PricingResult<()> {
        if !self.discount_cap.is_finite() || self.discount_cap <= 0.0 {
            return Err(PricingError::InvalidInput {
                field: "discount_cap",
                reason: "must be finite and positive",
                value: self.discount_cap,
            });
        }
        self.sweep.validate()
    }
}
