//! Shared plumbing for the three pipeline executables.

mod args;
mod logging;

pub use args::PipelineArgs;
pub use logging::init_logging;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(#[from] shopgen_core::Error),
    #[error("generation error: {0}")]
    Generate(#[from] shopgen_generate::GenerationError),
    #[error("load error: {0}")]
    Load(#[from] shopgen_load::LoadError),
    #[error("report error: {0}")]
    Report(#[from] shopgen_report::ReportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logging error: {0}")]
    Logging(String),
}
