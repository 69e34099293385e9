use std::path::PathBuf;

/// Default channel whose uploads populate the library.
pub const DEFAULT_CHANNEL_ID: &str = "UC9W4EPj5VNING6pTioZy5hg";

/// Port the in-process YouTube proxy listens on by default.
pub const DEFAULT_PROXY_PORT: u16 = 4180;

/// Application configuration
/// In debug builds a .env file is loaded first, then everything comes
/// from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// YouTube Data API key. The proxy refuses to call upstream without it.
    pub youtube_api_key: Option<String>,
    /// Channel whose recent uploads are listed
    pub channel_id: String,
    /// Localhost port for the proxy server
    pub proxy_port: u16,
    /// Root directory for cache and persisted playback state
    pub data_dir: PathBuf,
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Config: dev mode - loaded .env file");
        }

        let youtube_api_key = std::env::var("YOUTUBE_API_KEY").ok();
        if youtube_api_key.is_none() {
            tracing::warn!("Config: YOUTUBE_API_KEY not set, proxy will serve errors");
        }

        let channel_id = std::env::var("AFTERGLOW_CHANNEL_ID")
            .unwrap_or_else(|_| DEFAULT_CHANNEL_ID.to_string());

        let proxy_port = std::env::var("AFTERGLOW_PROXY_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PROXY_PORT);

        let data_dir = std::env::var("AFTERGLOW_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        Self {
            youtube_api_key,
            channel_id,
            proxy_port,
            data_dir,
        }
    }

    fn default_data_dir() -> PathBuf {
        let home_dir = dirs::home_dir().expect("Failed to get home directory");
        home_dir.join(".afterglow")
    }

    /// Base URL UI components use to reach the proxy.
    pub fn proxy_base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.proxy_port)
    }

    /// Directory for cached proxy responses.
    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir.join("cache")
    }
}
