//! AHP Engine CLI - Evaluate decision models stored as YAML.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use ahp_engine::adapters::{read_model_file, FileModelStorage, InMemoryModelStorage};
use ahp_engine::application::{
    ComputeAnalysisCommand, ComputeAnalysisHandler, ComputeAnalysisResult,
};
use ahp_engine::config::AppConfig;
use ahp_engine::domain::foundation::ModelId;
use ahp_engine::ports::ModelStorage;
use ahp_engine::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[clap(
    name = "ahp-engine",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rank alternatives with the Analytic Hierarchy Process"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a model file without storing it
    Evaluate {
        /// Path to a YAML model file
        path: PathBuf,
        #[clap(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
    /// Copy a model file into the data directory
    Import {
        /// Path to a YAML model file
        path: PathBuf,
    },
    /// List stored model ids
    List,
    /// Evaluate a model from the data directory
    Compute {
        /// Id of a stored model
        model_id: String,
        #[clap(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// Full result bundle as JSON
    Json,
    /// Report tables as plain text
    Text,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let engine = config.engine.build_engine();

    match cli.command {
        Command::Evaluate { path, format } => {
            let model = read_model_file(&path).await?;
            let storage = Arc::new(InMemoryModelStorage::new());
            storage.save(&model).await?;

            let handler = ComputeAnalysisHandler::new(storage, engine);
            let result = handler
                .handle(ComputeAnalysisCommand { model_id: model.id })
                .await?;
            print_result(&result, format)?;
        }
        Command::Import { path } => {
            let model = read_model_file(&path).await?;
            let storage = FileModelStorage::new(&config.storage.data_dir);
            storage.save(&model).await?;
            println!("{}", model.id);
        }
        Command::List => {
            let storage = FileModelStorage::new(&config.storage.data_dir);
            for id in storage.list().await? {
                println!("{}", id);
            }
        }
        Command::Compute { model_id, format } => {
            let model_id: ModelId = model_id.parse()?;
            let storage = Arc::new(FileModelStorage::new(&config.storage.data_dir));

            let handler = ComputeAnalysisHandler::new(storage, engine);
            let result = handler.handle(ComputeAnalysisCommand { model_id }).await?;
            print_result(&result, format)?;
        }
    }

    Ok(())
}

fn print_result(
    result: &ComputeAnalysisResult,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let bundle = serde_json::json!({
                "analysis": result.analysis,
                "report": result.report,
                "progress": result.progress.value(),
            });
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
        OutputFormat::Text => print!("{}", result.report),
    }
    Ok(())
}
