use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bmi::classify::BmiBands;
use crate::data::chart::{clamp_bins, DEFAULT_BINS};

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Optional startup settings, read from a JSON file.
///
/// Every field has a default, so `{}` and partial files are valid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bmi: BmiSettings,
    pub explorer: ExplorerSettings,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BmiSettings {
    pub bands: BmiBands,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    /// Rows shown in the data preview.
    pub preview_rows: usize,
    /// Initial histogram bin count.
    pub default_bins: usize,
    /// Fixed seed for reproducible synthetic data; random when absent.
    pub seed: Option<u64>,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            preview_rows: 10,
            default_bins: DEFAULT_BINS,
            seed: None,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        let mut settings: Settings = serde_json::from_str(&text).context("parsing settings JSON")?;
        settings.explorer.default_bins = clamp_bins(settings.explorer.default_bins);
        Ok(settings)
    }

    /// Settings from `path` if given, defaults otherwise. A bad file is
    /// logged and ignored.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {e:#}");
                Self::default()
            }
        }
    }
}
