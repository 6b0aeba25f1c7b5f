//! Run settings for obelus: which files count as documents, which rules apply, and how the
//! root directory is walked.
//!
//! Settings come from `obelus.toml` in the working directory or from a file named with
//! `--config`. Any field left out takes its default, and command line flags override the result.

use crate::error::ConfigError;
use crate::validate::{Rule, RuleSet};
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// File looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE: &str = "obelus.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from obelus.toml or falling back to defaults.
pub struct Config {
    #[facet(default = default_extensions())]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = default_rules())]
    /// Names of the structural rules to enforce.
    pub rules: Vec<String>,
    #[facet(default = false)]
    /// Descend into dot-files and dot-directories below the root.
    pub include_hidden: bool,
    #[facet(default = false)]
    /// Follow symbolic links while walking the root.
    pub follow_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: default_extensions(),
            rules: default_rules(),
            include_hidden: false,
            follow_links: false,
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}

fn default_rules() -> Vec<String> {
    RuleSet::default()
        .iter()
        .map(|rule| rule.name().to_string())
        .collect()
}

impl Config {
    /// Load configuration from `explicit` if given, else from obelus.toml if present.
    ///
    /// A discovered obelus.toml that fails to load is reported and ignored, while an explicitly
    /// requested file must load.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        let path = Path::new(CONFIG_FILE);
        if !path.is_file() {
            debug!("no {CONFIG_FILE} found, using defaults");
            return Ok(Self::default());
        }
        match Self::load_from(path) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!(%err, "ignoring {CONFIG_FILE}");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the deserializer's message if the text is not a valid configuration.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    /// Resolve the configured rule names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRule`] for the first name that is not a known rule.
    pub fn rule_set(&self) -> Result<RuleSet, ConfigError> {
        self.rules
            .iter()
            .map(|name| name.parse::<Rule>())
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
