use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sis_sync::api::router;
use sis_sync::canvas::CanvasHttpClient;
use sis_sync::config::Settings;
use sis_sync::jex::JexHttpClient;
use sis_sync::services::{GenerateOptions, Generator, GeneratorService};
use sis_sync::state::AppState;

#[derive(Parser)]
#[command(name = "sis-sync")]
#[command(about = "Generate Canvas SIS import CSVs from JEX course data")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one generator and write its CSV
    Generate {
        #[arg(value_enum)]
        generator: Generator,

        /// Reference date (YYYY-MM-DD) for date-filtered generators
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List generator names
    List,

    /// Serve generators over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn build_state(settings: Settings) -> Result<AppState, Box<dyn std::error::Error>> {
    let jex = JexHttpClient::new(settings.jex)?;
    let canvas = CanvasHttpClient::new(settings.canvas)?;
    Ok(AppState {
        jex: Arc::new(jex),
        canvas: Arc::new(canvas),
        output: Arc::new(settings.output),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "sis_sync=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for generator in Generator::ALL {
                println!("{}", generator);
            }
        }
        Commands::Generate { generator, today, out } => {
            let state = build_state(Settings::from_env()?)?;
            let service = GeneratorService::new(state.jex, state.canvas, state.output);
            let csv = service.run(generator, &GenerateOptions { today }).await?;

            match out {
                Some(path) => {
                    tokio::fs::write(&path, format!("{}\n", csv)).await?;
                    info!("Wrote {} to {}", generator, path.display());
                }
                None => println!("{}", csv),
            }
        }
        Commands::Serve { addr } => {
            let state = build_state(Settings::from_env()?)?;
            let app = router(state);

            info!("listening on http://{}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
