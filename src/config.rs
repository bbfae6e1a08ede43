use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{FalimError, Result};
use crate::i18n::{Language, TranslationTable, Translator};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FalimConfig {
    /// Language selected at startup.
    pub language: Language,
    /// Optional TOML file with translation overrides, one table per language.
    pub translations: Option<PathBuf>,
    pub chart: ChartConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// How many houses the legend lists.
    pub legend_houses: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig { legend_houses: 6 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

impl FalimConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FalimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = FalimConfig::from_toml_str(&content)?;

        // Override paths are relative to the config file.
        if let (Some(translations), Some(dir)) = (config.translations.as_mut(), path.parent()) {
            if translations.is_relative() {
                *translations = dir.join(&*translations);
            }
        }

        tracing::debug!(path = %path.display(), language = %config.language, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.chart.legend_houses > 12 {
            return Err(FalimError::Config {
                message: format!(
                    "chart.legend_houses must be at most 12, got {}",
                    self.chart.legend_houses
                ),
            });
        }
        Ok(())
    }

    /// Builds the translation table, applying overrides when configured.
    pub fn translation_table(&self) -> Result<TranslationTable> {
        let table = TranslationTable::builtin();
        match &self.translations {
            Some(path) => table.with_overrides_file(path),
            None => Ok(table),
        }
    }

    pub fn translator(&self) -> Result<Translator> {
        Ok(Translator::new(
            Arc::new(self.translation_table()?),
            self.language,
        ))
    }
}
