use clap::Parser;
use std::sync::Arc;
use tokio::signal;
use utils::cli::Args;
use utils::state::AppState;

use crate::config::Config;

mod api;
mod config;
mod error;
mod service;
mod store;
mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = validate_config(&args);

    let state = Arc::new(AppState::new(config)?);
    let app = api::create_router(state.clone());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", state.config.host, state.config.port))
            .await?;
    println!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    println!("Shutting down...");
}

fn validate_config(args: &Args) -> Config {
    let mut validation_errors = Vec::new();

    if !args.upstream_url.starts_with("http://") && !args.upstream_url.starts_with("https://") {
        validation_errors.push(format!(
            "RELAY_UPSTREAM_URL `{}` is not an http(s) URL",
            args.upstream_url,
        ));
    }

    if args.repository.trim().is_empty() || args.repository.contains('/') {
        validation_errors.push(format!(
            "RELAY_UPSTREAM_REPO `{}` must be a single non-empty repository name",
            args.repository,
        ));
    }

    if args.timeout_secs == 0 {
        validation_errors.push("RELAY_UPSTREAM_TIMEOUT_SECS must be greater than zero".to_string());
    }

    if !validation_errors.is_empty() {
        eprintln!("{}", validation_errors.join("\n"));
        std::process::exit(1);
    }

    Config {
        host: args.host.clone(),
        port: args.port,
        base_url: args.upstream_url.trim_end_matches('/').to_string(),
        repository: args.repository.clone(),
        username: args.username.clone(),
        password: args.password.clone(),
        timeout_secs: args.timeout_secs,
        max_upload_bytes: args.max_upload_bytes,
    }
}
