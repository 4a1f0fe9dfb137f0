//! Test server harness.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use truthlens::analysis::{HeuristicsConfig, NewsAnalyzer};
use truthlens::classifier::{MockStyleModel, StyleDetector};
use truthlens::config::Config;
use truthlens::gateway::{HandlerState, create_router_with_state};

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

/// Which custom model the spawned server carries.
#[derive(Debug, Clone, Default)]
pub enum ModelSetup {
    /// No custom model; the slot reports UNKNOWN.
    #[default]
    None,
    /// Mock that always returns this formal-style probability.
    Formal(f64),
    /// Mock whose inference always fails with this reason.
    Failing(String),
}

#[derive(Debug, Clone, Default)]
pub struct TestServerConfig {
    pub port: u16,
    pub model: ModelSetup,
}

impl TestServerConfig {
    pub fn with_model(model: ModelSetup) -> Self {
        Self { port: 0, model }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
    #[error("Server startup failed: {0}")]
    StartupFailed(String),
}

fn build_analyzer(model: ModelSetup) -> NewsAnalyzer {
    let detector = match model {
        ModelSetup::None => None,
        ModelSetup::Formal(formal) => Some(StyleDetector::with_default_threshold(Arc::new(
            MockStyleModel::with_formal(formal),
        ))),
        ModelSetup::Failing(reason) => Some(StyleDetector::with_default_threshold(Arc::new(
            MockStyleModel::failing(reason),
        ))),
    };
    NewsAnalyzer::new(detector, HeuristicsConfig::default())
}

async fn serve(port: u16, analyzer: NewsAnalyzer) -> Result<TestServer, ServerStartupError> {
    let port = if port == 0 {
        find_available_port().await?
    } else {
        port
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let app = create_router_with_state(HandlerState::new(analyzer));

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
    })
}

/// Spawns a server with a mocked (or absent) custom model.
///
/// No model files are needed; the heuristics always run for real.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    serve(config.port, build_analyzer(config.model)).await
}

/// Spawns a server with the real BERT classifier from `TRUTHLENS_MODEL_PATH`.
///
/// Fails with `StartupFailed` when the variable is unset or the model does
/// not load.
pub async fn spawn_model_server(port: u16) -> Result<TestServer, ServerStartupError> {
    let config = Config::from_env().map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;
    config
        .validate()
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    let classifier_config = config.classifier_config().ok_or_else(|| {
        ServerStartupError::StartupFailed("TRUTHLENS_MODEL_PATH is not set".to_string())
    })?;
    let detector = StyleDetector::load(&classifier_config)
        .map_err(|e| ServerStartupError::StartupFailed(e.to_string()))?;

    serve(
        port,
        NewsAnalyzer::new(Some(detector), HeuristicsConfig::default()),
    )
    .await
}
