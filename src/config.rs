//! Environment-driven application configuration.

use crate::error::AppError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl AppConfig {
    /// Reads `DATABASE_URL`, `BIND_ADDR`, and `MAX_CONNECTIONS` from the
    /// environment. `DATABASE_URL` is required; the rest have defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| AppError::BadRequest("DATABASE_URL is not set".into()))?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .map(|v| parse_max_connections(&v))
            .transpose()?
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);
        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

fn parse_max_connections(raw: &str) -> Result<u32, AppError> {
    let n: u32 = raw
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid MAX_CONNECTIONS: '{raw}'")))?;
    if n == 0 {
        return Err(AppError::BadRequest("MAX_CONNECTIONS must be at least 1".into()));
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_max_connections() {
        assert_eq!(parse_max_connections("8").unwrap(), 8);
        assert!(parse_max_connections("0").is_err());
        assert!(parse_max_connections("many").is_err());
    }
}
