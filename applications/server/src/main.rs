/// Roster Server - user record request handler
use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_server::{
    api, config::ServerConfig, dispatch, services::PasswordSource, state::AppState, ProxyRequest,
};
use std::{
    io::Read,
    path::{Path, PathBuf},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Proxy-event user record handler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP host
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Handle a single proxy event and print the response event
    Invoke {
        /// Event file path (reads stdin when omitted)
        #[arg(short, long)]
        event: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `invoke` output stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Invoke { event, config } => {
            invoke(event.as_deref(), config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load_from(config_path)?;
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let password = PasswordSource::from_config(config.users.auto_gen_password.clone());
    let app = api::create_router(AppState::in_memory(password));

    let addr = config.socket_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn invoke(event_path: Option<&Path>, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = ServerConfig::load_from(config_path)?;

    let raw = match event_path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read event from stdin")?;
            raw
        }
    };

    let event: ProxyRequest = serde_json::from_str(&raw).context("Invalid proxy event")?;

    let password = PasswordSource::from_config(config.users.auto_gen_password);
    let state = AppState::in_memory(password);
    let response = dispatch(state.users.as_ref(), &event).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
