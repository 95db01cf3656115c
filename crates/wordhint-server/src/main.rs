//! Wordhint HTTP server entrypoint.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use wordhint::config::Config;
use wordhint::embedding::{EncoderConfig, NliClassifier, NliConfig, SentenceEncoder};
use wordhint::scoring::SimilarityEngine;
use wordhint_server::gateway::{HandlerState, ModelInfo, create_router_with_state};
use wordhint_server::health;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const STUB_MODEL: &str = "stub";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
 _    _  ___  ____  ____  _   _ ___ _   _ _____
| |  | |/ _ \|  _ \|  _ \| | | |_ _| \ | |_   _|
| |/\| | | | | |_) | | | | |_| || ||  \| | | |
\  /\  / |_| |  _ <| |_| |  _  || || |\  | | |
 \/  \/ \___/|_| \_\____/|_| |_|___|_| \_| |_|

        GUESS. SCORE. HINT.
                                        AGPL-3.0
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        let addr = SocketAddr::from(([127, 0, 0, 1], health::port_from_env()));
        let code = if health::check_health(addr).await { 0 } else { 1 };
        std::process::exit(code);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;
    let scoring = Arc::new(config.load_scoring_config()?);

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Wordhint starting"
    );

    let started = Instant::now();
    let encoder_config = match &config.encoder_path {
        Some(path) => EncoderConfig::new(path.clone()),
        None => {
            tracing::warn!("No WORDHINT_ENCODER_PATH configured, running encoder in stub mode");
            EncoderConfig::stub()
        }
    };
    let nli_config = match &config.nli_path {
        Some(path) => NliConfig::new(path.clone()),
        None => {
            tracing::warn!("No WORDHINT_NLI_PATH configured, running classifier in stub mode");
            NliConfig::stub()
        }
    };
    let encoder = Arc::new(SentenceEncoder::load(encoder_config)?);
    let classifier = Arc::new(NliClassifier::load(nli_config)?);
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Models loaded"
    );

    let engine = SimilarityEngine::new(encoder, classifier, scoring);

    if config.warmup {
        let warm = engine.clone();
        let started = Instant::now();
        tokio::task::spawn_blocking(move || warm.warm_up()).await?;
        tracing::info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Warm-up finished"
        );
    }

    let models = ModelInfo {
        semantic: describe_model(config.encoder_path.as_deref()),
        nli: describe_model(config.nli_path.as_deref()),
    };
    let state = HandlerState::new(engine, models, config.target_latency_ms);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Wordhint shutdown complete");
    Ok(())
}

fn describe_model(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| STUB_MODEL.to_string())
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
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
