use clap::Parser;
use shopgen_cli::{CliError, PipelineArgs, init_logging};
use shopgen_generate::{GenerateOptions, GenerationEngine};

#[derive(Parser, Debug)]
#[command(
    name = "shopgen-generate",
    version,
    about = "Write the deterministic e-commerce CSV dataset"
)]
struct Cli {
    #[command(flatten)]
    pipeline: PipelineArgs,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let (config, paths) = cli.pipeline.resolve()?;
    init_logging(paths.log_file.as_deref())?;
    tracing::info!(event = "run_started", data_dir = %paths.data_dir.display());

    let options = GenerateOptions::from_settings(paths.data_dir.clone(), &config.generate);
    let result = GenerationEngine::new(options).run()?;
    tracing::info!(event = "run_finished", rows = result.report.total_rows());

    println!("Generated CSV files in {}", result.out_dir.display());
    Ok(())
}
