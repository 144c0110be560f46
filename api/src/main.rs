use api::config::ApiConfig;
use api::routes::routes;
use api::state::AppState;
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let config = ApiConfig::init();
    let _log_guard = init_logging(&config.log_file, config.log_to_stdout);

    // Set up shared state
    let app_state = AppState::new();

    // Configure middleware
    let cors = CorsLayer::very_permissive();

    // Build app router
    let app = Router::new()
        .nest("/api", routes(app_state))
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid address");

    println!(
        "Starting {} on http://{}:{}",
        config.project_name, config.host, config.port
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app,
    )
    .await
    .expect("Server crashed");
}

fn init_logging(
    log_file: &str,
    log_to_stdout: bool,
) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use std::path::Path;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let log_dir = Path::new(log_file)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("logs"));
    let log_name = Path::new(log_file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "api.log".to_string());
    fs::create_dir_all(log_dir).ok();

    let file_appender = rolling::daily(log_dir, log_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
