use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::units::UnitEntry;

/// Top-level importer configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ImportConfig {
    /// How linked-data recipes are mapped onto the Tandoor schema
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    /// Settings for the payload handed to Tandoor
    #[serde(default)]
    pub import: TandoorConfig,
}

/// Defaults and vocabulary used by the normalizer
#[derive(Debug, Deserialize, Clone)]
pub struct NormalizerConfig {
    /// Name used when the recipe has none
    #[serde(default = "default_name")]
    pub default_name: String,
    /// Servings used when the recipe has no usable yield
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// Units recognised in addition to the built-in ones
    #[serde(default)]
    pub extra_units: Vec<UnitEntry>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            default_name: default_name(),
            default_servings: default_servings(),
            extra_units: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TandoorConfig {
    /// Value of the `url` field in the import payload
    #[serde(default)]
    pub source_url: String,
}

// Default value functions
fn default_name() -> String {
    "Unbenanntes Rezept".to_string()
}

fn default_servings() -> u32 {
    4
}

impl ImportConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with TANDOOR_IMPORT__ prefix
    /// 2. tandoor-import.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: TANDOOR_IMPORT__NORMALIZER__DEFAULT_SERVINGS
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// Load configuration from file and environment variables, see [`ImportConfig::load`]
pub fn load_config() -> Result<ImportConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("tandoor-import").required(false))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Environment variables with TANDOOR_IMPORT__ prefix, `__` between nested keys
fn environment() -> Environment {
    Environment::with_prefix("TANDOOR_IMPORT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
