use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::TableSpec;
use crate::error::{Error, Result};

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "shopgen.toml";

/// Pipeline configuration. Relative paths resolve against the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Directory holding the generated CSV files.
    pub data_dir: PathBuf,
    /// SQLite database file.
    pub database: PathBuf,
    /// Report CSV written by the reporter.
    pub report: PathBuf,
    /// Optional NDJSON log file; logs go to stderr when unset.
    pub log_file: Option<PathBuf>,
    pub generate: GenerateSettings,
}

/// Seeds for the two pseudo-random sequences used by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateSettings {
    pub order_seed: u64,
    pub review_seed: u64,
}

impl Default for GenerateSettings {
    fn default() -> Self {
        Self {
            order_seed: 42,
            review_seed: 7,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            database: PathBuf::from("ecom.db"),
            report: PathBuf::from("output").join("order_summary.csv"),
            log_file: None,
            generate: GenerateSettings::default(),
        }
    }
}

impl PipelineConfig {
    /// Load the config at `path`, falling back to defaults when it is absent.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve every configured path against `root`.
    pub fn paths(&self, root: &Path) -> PipelinePaths {
        PipelinePaths {
            root: root.to_path_buf(),
            data_dir: resolve(root, &self.data_dir),
            database: resolve(root, &self.database),
            report: resolve(root, &self.report),
            log_file: self.log_file.as_deref().map(|path| resolve(root, path)),
        }
    }
}

/// Absolute locations of every pipeline artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelinePaths {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub database: PathBuf,
    pub report: PathBuf,
    pub log_file: Option<PathBuf>,
}

impl PipelinePaths {
    /// Paths rooted at `root` with the default layout.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        PipelineConfig::default().paths(&root.into())
    }

    pub fn csv_path(&self, spec: &TableSpec) -> PathBuf {
        self.data_dir.join(spec.csv_file)
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ORDERS;

    #[test]
    fn defaults_follow_project_layout() {
        let paths = PipelinePaths::with_root("/srv/shop");
        assert_eq!(paths.data_dir, PathBuf::from("/srv/shop/data"));
        assert_eq!(paths.database, PathBuf::from("/srv/shop/ecom.db"));
        assert_eq!(
            paths.report,
            PathBuf::from("/srv/shop/output/order_summary.csv")
        );
        assert_eq!(paths.csv_path(&ORDERS), PathBuf::from("/srv/shop/data/orders.csv"));
        assert!(paths.log_file.is_none());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: PipelineConfig = toml::from_str(
            r#"
            database = "/tmp/shop.db"
            log_file = "logs/run.ndjson"

            [generate]
            order_seed = 1
            "#,
        )
        .expect("parse config");

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.generate.order_seed, 1);
        assert_eq!(config.generate.review_seed, 7);

        let paths = config.paths(Path::new("/work"));
        assert_eq!(paths.database, PathBuf::from("/tmp/shop.db"));
        assert_eq!(paths.log_file, Some(PathBuf::from("/work/logs/run.ndjson")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = toml::from_str::<PipelineConfig>("datadir = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("shopgen-missing-config-for-test.toml");
        let config = PipelineConfig::load_or_default(&path).expect("defaults");
        assert_eq!(config, PipelineConfig::default());
    }
}
