use clap::Parser;
use shopgen_cli::{CliError, PipelineArgs, init_logging};
use shopgen_load::load_database;

#[derive(Parser, Debug)]
#[command(
    name = "shopgen-load",
    version,
    about = "Reset the SQLite schema and load the CSV dataset"
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
        data_dir = %paths.data_dir.display(),
        database = %paths.database.display()
    );

    let report = load_database(&paths).await?;
    tracing::info!(event = "run_finished", tables = report.tables.len());

    for table in &report.tables {
        println!("Inserted {} rows into {}.", table.rows, table.table);
    }
    println!("SQLite database populated at {}", report.database.display());
    Ok(())
}
