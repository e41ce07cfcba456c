use anyhow::Context;
use forwardkit_codegen::EmitOptions;
use forwardkit_core::{SelectorOptions, StrategyCatalog};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_NAME: &str = "forwardkit.config.json";

/// Suffix of component manifest files
pub const MANIFEST_SUFFIX: &str = ".refs.json";

/// forwardkit configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory containing `*.refs.json` manifests
    #[serde(default = "default_src_dir")]
    pub src_dir: String,

    /// Fall back to a degraded generic wrapper instead of failing when no
    /// catalog rule matches
    #[serde(default)]
    pub allow_degraded_fallback: bool,

    /// Path to a JSON catalog replacing the builtin one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Output directory for emitted declarations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    /// Prop name carrying the ref into generic wrapper components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper_ref_prop: Option<String>,
}

fn default_src_dir() -> String {
    "src".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to source directory
    pub fn get_src_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.src_dir)
    }

    /// The configured catalog, or the builtin one
    pub fn load_catalog(&self, cwd: &str) -> anyhow::Result<StrategyCatalog> {
        let Some(path) = &self.catalog else {
            return Ok(StrategyCatalog::builtin().clone());
        };

        let catalog_path = PathBuf::from(cwd).join(path);
        let content = std::fs::read_to_string(&catalog_path)
            .with_context(|| format!("Cannot read catalog {}", catalog_path.display()))?;
        let catalog = StrategyCatalog::from_json(&content)
            .with_context(|| format!("Invalid catalog {}", catalog_path.display()))?;

        if let Err(err) = catalog.validate() {
            warn!(path = %catalog_path.display(), error = %err, "Catalog does not cover every profile");
        }

        Ok(catalog)
    }

    pub fn selector_options(&self) -> SelectorOptions {
        SelectorOptions {
            allow_degraded_fallback: self.allow_degraded_fallback,
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        let mut options = EmitOptions::default();
        if let Some(prop) = &self.wrapper_ref_prop {
            options.wrapper_ref_prop = prop.clone();
        }
        options
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            allow_degraded_fallback: false,
            catalog: None,
            out_dir: None,
            wrapper_ref_prop: None,
        }
    }
}
