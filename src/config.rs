// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale table configuration.
//!
//! Read from a JSON or YAML file, then overridden by environment variables:
//!
//! | Variable                     | Field           |
//! |------------------------------|-----------------|
//! | `OPERATOR_LOCALES_DEFAULT`   | `default_locale` |
//! | `OPERATOR_LOCALES_RESOURCES` | `resources_dir` |

use crate::error::LoadError;
use crate::loader;
use crate::locale::LocaleCode;
use crate::table::{LocaleTable, MissingKeyPolicy};
use crate::template::MissingParameterPolicy;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const ENV_DEFAULT_LOCALE: &str = "OPERATOR_LOCALES_DEFAULT";
pub const ENV_RESOURCES_DIR: &str = "OPERATOR_LOCALES_RESOURCES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_locale: LocaleCode,
    pub missing_key: MissingKeyPolicy,
    pub missing_parameter: MissingParameterPolicy,
    /// Load bundles from this directory instead of the built-in catalogs.
    pub resources_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: LocaleCode::en_us(),
            missing_key: MissingKeyPolicy::default(),
            missing_parameter: MissingParameterPolicy::default(),
            resources_dir: None,
        }
    }
}

impl Config {
    /// Load a config file and apply environment overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing json config {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("parsing yaml config {}", path.display()))?,
            _ => return Err(anyhow!("unsupported config extension for {}", path.display())),
        };
        Ok(config.with_env_overrides())
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        Config::default().with_env_overrides()
    }

    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    fn apply_overrides(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = var(ENV_DEFAULT_LOCALE).filter(|v| !v.trim().is_empty()) {
            match LocaleCode::parse(&value) {
                Ok(locale) => self.default_locale = locale,
                Err(err) => warn!(variable = ENV_DEFAULT_LOCALE, error = %err, "ignoring override"),
            }
        }
        if let Some(value) = var(ENV_RESOURCES_DIR).filter(|v| !v.trim().is_empty()) {
            self.resources_dir = Some(PathBuf::from(value));
        }
        self
    }

    /// Build a table from the configured source and policies.
    pub fn build_table(&self) -> Result<LocaleTable, LoadError> {
        let bundles = match &self.resources_dir {
            Some(dir) => loader::load_dir(dir)?,
            None => crate::catalog::builtin_bundles()?,
        };
        LocaleTable::builder()
            .bundles(bundles)
            .default_locale(self.default_locale.clone())
            .missing_key(self.missing_key)
            .missing_parameter(self.missing_parameter)
            .build()
    }
}
