use clap::Parser;
use shopgen_cli::{CliError, PipelineArgs, init_logging};
use shopgen_report::run_report;

#[derive(Parser, Debug)]
#[command(
    name = "shopgen-report",
    version,
    about = "Export the order summary report from the SQLite database"
)]
struct Cli {
    #[command(flatten)]
    pipeline: PipelineArgs,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let (_, paths) = cli.pipeline.resolve()?;
    init_logging(paths.log_file.as_deref())?;
    tracing::info!(
        event = "run_started",
        database = %paths.database.display(),
        report = %paths.report.display()
    );

    let summary = run_report(&paths).await?;
    tracing::info!(event = "run_finished", rows = summary.rows);

    println!("Wrote {} records to {}", summary.rows, summary.output.display());
    Ok(())
}
