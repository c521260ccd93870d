//! Report settings
//!
//! Presentation preferences gathered from command-line flags and their
//! environment-variable fallbacks. Nothing is read from or written to disk.

use serde::Serialize;

/// How the result is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sentences (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// User settings for report rendering
#[derive(Debug, Clone, Serialize, Default)]
pub struct Settings {
    /// Symbol placed before every amount in the text report
    #[serde(default)]
    pub currency_symbol: String,

    /// Output format
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Settings {
    /// Build settings from the resolved flag values
    pub fn new(currency_symbol: Option<String>, json: bool) -> Self {
        Self {
            currency_symbol: currency_symbol
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            output_format: if json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
        }
    }
}
