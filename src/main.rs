use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use orgrepos::{build_router, AppState, Config, GitHubClient};

#[derive(Parser, Debug)]
#[command(name = "orgrepos")]
#[command(version)]
#[command(about = "Serve filtered and sorted views of a GitHub organization's repositories")]
struct Args {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// GitHub REST API base URL (overrides GITHUB_API_URL)
    #[arg(long)]
    github_api_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("orgrepos=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(ref url) = args.github_api_url {
        config.github = config.github.with_api_url(url)?;
    }

    let github = GitHubClient::new(&config.github)?;
    let app = build_router(AppState::new(github));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        "Listening on {} (GitHub API: {})",
        listener.local_addr()?,
        config.github.api_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
