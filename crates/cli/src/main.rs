use crate::{commands::Commands, error::CliError};
use clap::Parser;
use connectors::{file::csv::loader::CsvTableLoader, loader::TableLoader};
use engine_config::settings::EngineSettings;
use engine_runtime::QueryExecutor;
use model::query::{descriptor::QueryDescriptor, join::RightJoinPolicy};
use std::str::FromStr;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "tabula",
    version = "0.1.0",
    about = "Join, filter and project CSV tables"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "TABULA_DATA_DIR",
        help = "Directory holding the table files"
    )]
    data_dir: Option<String>,

    #[arg(long, global = true, help = "Engine settings JSON file")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout only carries results.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => EngineSettings::from_file(path)?,
        None => EngineSettings::default(),
    };
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir.into();
    }

    match cli.command {
        Commands::Query {
            query,
            right_join,
            format,
            output,
        } => {
            if let Some(policy) = right_join {
                settings.right_join =
                    RightJoinPolicy::from_str(&policy).map_err(CliError::InvalidArgument)?;
            }

            let descriptor = read_descriptor(&query).await?;
            info!(
                "Running query on '{}' from {}",
                descriptor.table,
                settings.data_dir.display()
            );

            let rows = QueryExecutor::from_settings(&settings)
                .execute(&descriptor)
                .await?;
            output::emit(&rows, format, output).await?;
        }
        Commands::Table {
            name,
            format,
            output,
        } => {
            let loader = CsvTableLoader::new(&settings.data_dir, settings.csv.clone())
                .with_extension(&settings.extension);
            let rows = loader.load_table(&name).await?;
            info!("Loaded {} rows from table '{}'", rows.len(), name);
            output::emit(&rows, format, output).await?;
        }
    }

    Ok(())
}

async fn read_descriptor(path: &str) -> Result<QueryDescriptor, CliError> {
    let source = if path == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(path).await?
    };

    Ok(serde_json::from_str(&source)?)
}
