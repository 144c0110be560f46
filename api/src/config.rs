use once_cell::sync::OnceCell;
use std::{env, fs};

/// Runtime configuration for the api binary, loaded once from `.env` and
/// process environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
}

static CONFIG: OnceCell<ApiConfig> = OnceCell::new();

impl ApiConfig {
    pub fn init() -> &'static Self {
        dotenvy::dotenv().ok();

        CONFIG.get_or_init(|| {
            let project_name = env::var("PROJECT_NAME").unwrap_or_else(|_| "cellmark".into());
            let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info".into());
            let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/api.log".into());
            let log_to_stdout =
                env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "true".into()) == "true";
            let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
            let port = env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000);

            if let Some(parent) = std::path::Path::new(&log_file).parent() {
                fs::create_dir_all(parent).expect("Failed to create log directory");
            }

            ApiConfig {
                project_name,
                log_level,
                log_file,
                log_to_stdout,
                host,
                port,
            }
        })
    }

    pub fn get() -> &'static Self {
        CONFIG.get().expect("ApiConfig not initialized")
    }
}
