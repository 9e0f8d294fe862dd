//! Theme taxonomy and known-name lists
//!
//! The taxonomy maps theme names to representative keyword lists. Keyword →
//! theme attribution is first-match-wins, so the taxonomy is stored as an
//! ordered sequence; loading it from a YAML mapping would reintroduce the
//! nondeterministic iteration order this design exists to avoid.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One theme with its keyword list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeEntry {
    /// Theme display name, e.g. "Lead Capture"
    pub name: String,
    /// Keywords whose exact (case-insensitive) presence indicates the theme
    pub keywords: Vec<String>,
}

/// Ordered theme → keyword-list taxonomy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeTaxonomy {
    pub themes: Vec<ThemeEntry>,
}

impl ThemeTaxonomy {
    /// Load from a YAML file (a sequence of `{name, keywords}` entries)
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;
        let taxonomy: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// First theme (in taxonomy order) whose keyword list contains the
    /// keyword, compared case-insensitively.
    pub fn theme_for(&self, keyword: &str) -> Option<&str> {
        let lower = keyword.to_lowercase();
        self.themes
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| k.to_lowercase() == lower))
            .map(|entry| entry.name.as_str())
    }

    /// Iterate themes in attribution order
    pub fn iter(&self) -> impl Iterator<Item = &ThemeEntry> {
        self.themes.iter()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.themes {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "themes.name".to_string(),
                    message: "theme name must not be empty".to_string(),
                });
            }
            if entry.keywords.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("themes.{}.keywords", entry.name),
                    message: "theme needs at least one keyword".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ThemeTaxonomy {
    /// Built-in taxonomy covering the standard report themes
    fn default() -> Self {
        fn entry(name: &str, keywords: &[&str]) -> ThemeEntry {
            ThemeEntry {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }

        Self {
            themes: vec![
                entry("Lead Capture", &["email", "phone", "contact", "address"]),
                entry(
                    "Customer Support",
                    &["assistance", "support", "help", "question"],
                ),
                entry("AI Trust", &["ai", "agent", "human", "real", "bot"]),
                entry(
                    "Sales Inquiry",
                    &["price", "cost", "service", "buy", "purchase"],
                ),
                entry(
                    "Appointment Booking",
                    &["appointment", "schedule", "meeting", "consultation"],
                ),
            ],
        }
    }
}

/// Known company and location names, used to collapse extracted keywords
/// into category labels before theme tallying.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnownNames {
    #[serde(default)]
    pub companies: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

impl KnownNames {
    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;
        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn is_company(&self, keyword: &str) -> bool {
        let lower = keyword.to_lowercase();
        self.companies.iter().any(|c| c.to_lowercase() == lower)
    }

    pub fn is_location(&self, keyword: &str) -> bool {
        let lower = keyword.to_lowercase();
        self.locations.iter().any(|l| l.to_lowercase() == lower)
    }
}
