use std::fmt;
use std::net::SocketAddr;

use url::Url;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/sshleifer/distilbart-cnn-12-6";

// Startup configuration resolved once from the process environment and passed
// down explicitly; handlers never read the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub token: String,
    pub endpoint: Url,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingToken,
    InvalidPort(String),
    InvalidEndpoint(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingToken => write!(f, "HF_TOKEN must be set"),
            ConfigError::InvalidPort(raw) => write!(f, "PORT is not a valid port: {raw}"),
            ConfigError::InvalidEndpoint(raw) => {
                write!(f, "SUMMARIZER_API_URL is not a valid URL: {raw}")
            }
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_parts(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("HF_TOKEN").ok().as_deref(),
            std::env::var("SUMMARIZER_API_URL").ok().as_deref(),
        )
    }

    fn from_parts(
        port: Option<&str>,
        token: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<Config, ConfigError> {
        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?,
            None => DEFAULT_PORT,
        };

        let token = match token {
            Some(value) if !value.trim().is_empty() => value.to_string(),
            _ => return Err(ConfigError::MissingToken),
        };

        let endpoint_raw = endpoint.unwrap_or(DEFAULT_ENDPOINT);
        let endpoint = Url::parse(endpoint_raw)
            .map_err(|_| ConfigError::InvalidEndpoint(endpoint_raw.to_string()))?;

        Ok(Config {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            token,
            endpoint,
        })
    }
}
