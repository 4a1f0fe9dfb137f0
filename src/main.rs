//! TruthLens HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use truthlens::analysis::{HeuristicsConfig, NewsAnalyzer};
use truthlens::classifier::StyleDetector;
use truthlens::config::Config;
use truthlens::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
████████╗██████╗ ██╗   ██╗████████╗██╗  ██╗██╗     ███████╗███╗   ██╗███████╗
╚══██╔══╝██╔══██╗██║   ██║╚══██╔══╝██║  ██║██║     ██╔════╝████╗  ██║██╔════╝
   ██║   ██████╔╝██║   ██║   ██║   ███████║██║     █████╗  ██╔██╗ ██║███████╗
   ██║   ██╔══██╗██║   ██║   ██║   ██╔══██║██║     ██╔══╝  ██║╚██╗██║╚════██║
   ██║   ██║  ██║╚██████╔╝   ██║   ██║  ██║███████╗███████╗██║ ╚████║███████║
   ╚═╝   ╚═╝  ╚═╝ ╚═════╝    ╚═╝   ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝  ╚═══╝╚══════╝

        READ. WEIGH. DECIDE.
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "TruthLens starting"
    );

    let detector = match config.classifier_config() {
        Some(classifier_config) => {
            tracing::info!(
                model_path = %classifier_config.model_path.display(),
                threshold = classifier_config.decision_threshold,
                "Loading custom model"
            );
            Some(StyleDetector::load(&classifier_config)?)
        }
        None => {
            tracing::warn!("No TRUTHLENS_MODEL_PATH configured, serving heuristics only");
            None
        }
    };

    let analyzer = NewsAnalyzer::new(detector, HeuristicsConfig::default());
    let state = HandlerState::new(analyzer);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("TruthLens shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("TRUTHLENS_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);

    let url = format!("http://127.0.0.1:{}/health", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
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
