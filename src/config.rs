use clap::Parser;
use config::{Config, Environment};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Base URL of the listings/application API
    #[arg(long, env = "LISTINGS_API_URL")]
    pub listings_api_url: Option<String>,

    /// Base URL of the chat assistant API
    #[arg(long, env = "CHAT_API_URL")]
    pub chat_api_url: Option<String>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub resilience: ResilienceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Where the two remote services live. The defaults match the development
/// docker-compose layout.
#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    pub listings_base_url: String,
    pub chat_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub timeout_disabled: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Layering: defaults, then CLI flags (with their env fallbacks), then
    /// `RENTAL_`-prefixed environment variables (e.g. `RENTAL_SERVER__PORT`).
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.listings_base_url", "http://localhost:8000")?
            .set_default("upstream.chat_base_url", "http://localhost:8001")?
            .set_default("resilience.timeout_disabled", false)?;

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(url) = cli.listings_api_url {
            builder = builder.set_override("upstream.listings_base_url", url)?;
        }
        if let Some(url) = cli.chat_api_url {
            builder = builder.set_override("upstream.chat_base_url", url)?;
        }
        if let Some(disabled) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", disabled)?;
        }

        builder = builder.add_source(
            Environment::with_prefix("RENTAL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
