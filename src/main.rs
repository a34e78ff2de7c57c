use std::io::IsTerminal;
use std::net::SocketAddr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use vidseek::api;
use vidseek::config::Config;
use vidseek::interactive::InteractiveSession;
use vidseek::pipeline::VideoSearchPipeline;

/// Find YouTube videos by describing what you want to watch.
#[derive(Parser)]
#[command(name = "vidseek", version)]
struct Cli {
    /// Language model to use for topic extraction (overrides GEMINI_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the JSON search api
    Serve {
        #[arg(long, env = "VIDSEEK_BIND", default_value = "0.0.0.0:8000")]
        bind: SocketAddr,
    },
    /// Search from the terminal, one prompt per line
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap so env-backed flags see it too.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = match cli.command {
        Commands::Serve { .. } => "info",
        Commands::Interactive => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?.with_model(cli.model);
    tracing::debug!(?config, "loaded configuration");
    let pipeline = Arc::new(VideoSearchPipeline::from_config(&config)?);

    match cli.command {
        Commands::Serve { bind } => api::serve(pipeline, bind).await,
        Commands::Interactive => {
            let mut session = InteractiveSession::new(pipeline, std::io::stdout());
            if !std::io::stderr().is_terminal() {
                session = session.without_progress();
            }
            session.run(BufReader::new(tokio::io::stdin())).await
        }
    }
}
