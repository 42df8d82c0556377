use anyhow::{Context, Result, bail};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const MAX_HISTORY_CAPACITY: usize = 1000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub history_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys fall back to
    /// their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse().context("PORT must be a number")?,
            None => DEFAULT_PORT,
        };

        let history_capacity = match lookup("HISTORY_CAPACITY") {
            Some(capacity) => capacity
                .trim()
                .parse()
                .context("HISTORY_CAPACITY must be a positive integer")?,
            None => scoring::DEFAULT_HISTORY_CAPACITY,
        };
        if history_capacity == 0 {
            bail!("HISTORY_CAPACITY must be a positive integer");
        }
        if history_capacity > MAX_HISTORY_CAPACITY {
            bail!(
                "HISTORY_CAPACITY must be at most {}, got {}",
                MAX_HISTORY_CAPACITY,
                history_capacity
            );
        }

        Ok(Self {
            host,
            port,
            history_capacity,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
