use crate::convert::{Format, Segmentation};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub segmentation: Segmentation,

    #[serde(default)]
    pub default_format: Format,
}

impl Config {
    /// Parse a TOML document; missing keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse case conversion config")
    }

    /// Layer `other` on top of `self`: its values win where they differ from defaults.
    ///
    /// A default value in `other` is indistinguishable from an unset one, so a
    /// later layer cannot reset `self` back to the default.
    pub fn merge(mut self, other: Self) -> Self {
        if other.segmentation != Segmentation::default() {
            self.segmentation = other.segmentation;
        }
        if other.default_format != Format::default() {
            self.default_format = other.default_format;
        }
        self
    }
}
