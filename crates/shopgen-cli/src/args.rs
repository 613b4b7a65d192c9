use std::path::PathBuf;

use clap::Args;

use shopgen_core::{CONFIG_FILE, PipelineConfig, PipelinePaths};

use crate::CliError;

/// Location flags shared by every executable. All are optional.
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Project root that relative paths resolve against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
    /// Config file (defaults to shopgen.toml in the project root).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl PipelineArgs {
    /// Load the config (or defaults) and resolve every pipeline path.
    pub fn resolve(&self) -> Result<(PipelineConfig, PipelinePaths), CliError> {
        let config_path = self
            .config
            .clone()
            .unwrap_or_else(|| self.root.join(CONFIG_FILE));
        let config = PipelineConfig::load_or_default(&config_path)?;
        let paths = config.paths(&self.root);
        Ok((config, paths))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        pipeline: PipelineArgs,
    }

    fn temp_root() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("shopgen_cli_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).expect("create temp root");
        dir
    }

    #[test]
    fn no_arguments_use_current_directory_defaults() {
        let cli = TestCli::try_parse_from(["shopgen-load"]).expect("parse");
        assert_eq!(cli.pipeline.root, PathBuf::from("."));
        assert!(cli.pipeline.config.is_none());
    }

    #[test]
    fn config_in_root_is_picked_up() {
        let root = temp_root();
        std::fs::write(root.join(CONFIG_FILE), "data_dir = \"fixtures\"\n").expect("write config");

        let cli = TestCli::try_parse_from([
            "shopgen-generate",
            "--root",
            root.to_str().expect("utf-8 path"),
        ])
        .expect("parse");
        let (config, paths) = cli.pipeline.resolve().expect("resolve");

        assert_eq!(config.data_dir, PathBuf::from("fixtures"));
        assert_eq!(paths.data_dir, root.join("fixtures"));
        assert_eq!(paths.database, root.join("ecom.db"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let root = temp_root();
        let config = root.join("broken.toml");
        std::fs::write(&config, "data_dir = [").expect("write config");

        let args = PipelineArgs {
            root,
            config: Some(config),
        };
        assert!(matches!(args.resolve(), Err(CliError::Config(_))));
    }
}
