use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings of the dashboard process, read from the environment
/// (and `.env` when present).
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub config_path: PathBuf,
    pub request_timeout: Duration,
    pub download_dir: PathBuf,
    pub default_base_url: String,
    pub default_api_base_path: String,
    pub animations: bool,
    pub launch_url: Option<String>,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from("data/nodeboot-config.json"),
            request_timeout: Duration::from_millis(10_000),
            download_dir: PathBuf::from("."),
            default_base_url: "http://localhost:8080".to_string(),
            default_api_base_path: "/api/v1".to_string(),
            animations: true,
            launch_url: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppSettings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let defaults = Self::default();
        Self {
            config_path: env::var("NODEBOOT_CONFIG_PATH").map(PathBuf::from).unwrap_or(defaults.config_path),
            request_timeout: env::var("NODEBOOT_REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            download_dir: env::var("NODEBOOT_DOWNLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.download_dir),
            default_base_url: env::var("NODEBOOT_DEFAULT_BASE_URL").unwrap_or(defaults.default_base_url),
            default_api_base_path: env::var("NODEBOOT_DEFAULT_API_BASE_PATH").unwrap_or(defaults.default_api_base_path),
            animations: env::var("NODEBOOT_ANIMATIONS").map(|v| v != "false" && v != "0").unwrap_or(true),
            launch_url: env::var("NODEBOOT_LAUNCH_URL").ok().filter(|v| !v.trim().is_empty()),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dialog_prefill() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_base_url, "http://localhost:8080");
        assert_eq!(settings.default_api_base_path, "/api/v1");
        assert_eq!(settings.request_timeout, Duration::from_secs(10));
        assert!(settings.animations);
    }
}
