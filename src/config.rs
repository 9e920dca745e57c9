use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Twitch application client ID sent as `Client-ID`
    pub igdb_client_id: String,

    /// OAuth access token sent as a bearer token
    pub igdb_access_token: String,

    /// IGDB API base URL
    #[serde(default = "default_igdb_api_url")]
    pub igdb_api_url: String,

    /// Endpoint segment appended to the base URL
    #[serde(default = "default_igdb_endpoint")]
    pub igdb_endpoint: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_igdb_api_url() -> String {
    "https://api.igdb.com/v4".to_string()
}

fn default_igdb_endpoint() -> String {
    "games".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
