use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub news: NewsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSettings {
    pub api_key: String,
    pub base_url: String,
    pub default_query: String,
    pub lang: String,
    pub country: String,
    pub max_results: u32,
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                workers: num_cpus::get(),
            },
            news: NewsSettings {
                // The credential has no default; from_env refuses to start
                // without one.
                api_key: String::new(),
                base_url: "https://gnews.io/api/v4".to_string(),
                default_query: "example".to_string(),
                lang: "en".to_string(),
                country: "us".to_string(),
                max_results: 10,
                request_timeout_secs: 15,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Server configuration
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }

        // News provider configuration
        if let Ok(api_key) = env::var("GNEWS_API_KEY") {
            config.news.api_key = api_key;
        }
        if let Ok(base_url) = env::var("GNEWS_BASE_URL") {
            config.news.base_url = base_url;
        }
        if let Ok(default_query) = env::var("DEFAULT_QUERY") {
            config.news.default_query = default_query;
        }
        if let Ok(lang) = env::var("GNEWS_LANG") {
            config.news.lang = lang;
        }
        if let Ok(country) = env::var("GNEWS_COUNTRY") {
            config.news.country = country;
        }
        if let Ok(max_results) = env::var("GNEWS_MAX_RESULTS") {
            config.news.max_results = max_results.parse()?;
        }
        if let Ok(timeout) = env::var("GNEWS_TIMEOUT_SECS") {
            config.news.request_timeout_secs = timeout.parse()?;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.news.api_key.trim().is_empty() {
            anyhow::bail!(
                "GNEWS_API_KEY is not set; the service cannot reach the news provider without a credential"
            );
        }
        Ok(())
    }
}
