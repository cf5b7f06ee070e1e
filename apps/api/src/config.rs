use anyhow::{ensure, Context, Result};

const DEFAULT_TOP_K: usize = 10;
const MAX_TOP_K: usize = 100;

/// Service configuration loaded from environment variables.
/// Every variable is optional; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Results returned when a match request omits `top_k`.
    pub default_top_k: usize,
    /// Largest `top_k` a caller may ask for.
    pub max_top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            default_top_k: DEFAULT_TOP_K,
            max_top_k: MAX_TOP_K,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let config = Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_top_k: parse_env("MATCH_DEFAULT_TOP_K", DEFAULT_TOP_K)?,
            max_top_k: parse_env("MATCH_MAX_TOP_K", MAX_TOP_K)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.default_top_k >= 1, "MATCH_DEFAULT_TOP_K must be at least 1");
        ensure!(
            self.max_top_k >= self.default_top_k,
            "MATCH_MAX_TOP_K ({}) must be >= MATCH_DEFAULT_TOP_K ({})",
            self.max_top_k,
            self.default_top_k
        );
        Ok(())
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
