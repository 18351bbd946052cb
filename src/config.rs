// ⚙️ Configuration - Locale selection from JSON
//
// {
//   "locale": "de-CH",
//   "locales": [ { "tag": "de-CH", "currency_symbol": "CHF", ... } ]
// }
//
// Custom locales are searched before the built-in ones.

use crate::locale::Locale;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    /// Tag of the locale to render with (None = thread's current locale)
    #[serde(default)]
    pub locale: Option<String>,

    /// Extra locale definitions
    #[serde(default)]
    pub locales: Vec<Locale>,
}

impl ShowcaseConfig {
    /// Load config from JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config JSON")
    }

    /// Find a locale by tag: custom definitions first, then built-ins
    pub fn find_locale(&self, tag: &str) -> Result<Locale> {
        if let Some(custom) = self
            .locales
            .iter()
            .find(|locale| locale.tag.eq_ignore_ascii_case(tag))
        {
            return Ok(custom.clone());
        }

        Locale::from_tag(tag).with_context(|| format!("No locale configured for {:?}", tag))
    }

    /// The configured locale, or the thread's current one when unset
    pub fn resolve_locale(&self) -> Result<Locale> {
        match &self.locale {
            Some(tag) => self.find_locale(tag),
            None => Ok(Locale::current()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
