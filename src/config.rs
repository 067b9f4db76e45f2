use anyhow::{anyhow, Result};
use dotenv::dotenv;

/// Environment variable holding the Mongo connection string.
pub const MONGO_URI_VAR: &str = "MONGO_CONNECTION_URI";

/// Everything the sync reads from the environment. The GraphQL endpoint and
/// the collection name are compile-time constants, so this is a single field.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mongo_uri: String,
}

impl AppConfig {
    /// Read the connection string from the environment (after `.env`
    /// loading). Unset and blank are treated the same.
    pub fn from_env() -> Result<Self> {
        ensure_dotenv();
        Self::from_lookup(std::env::var(MONGO_URI_VAR).ok())
    }

    fn from_lookup(value: Option<String>) -> Result<Self> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(Self { mongo_uri: v }),
            _ => Err(anyhow!("Missing {MONGO_URI_VAR} in env vars")),
        }
    }
}

/// `.env` support: working directory first, then the crate root, so
/// `cargo run` and a packaged deploy behave the same.
fn ensure_dotenv() {
    if dotenv().is_err() {
        let _ = dotenv::from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_populated_uri() {
        let cfg =
            AppConfig::from_lookup(Some("mongodb://localhost:27017/tarkov".into())).unwrap();
        assert_eq!(cfg.mongo_uri, "mongodb://localhost:27017/tarkov");
    }

    #[test]
    fn rejects_unset_var() {
        let err = AppConfig::from_lookup(None).unwrap_err();
        assert!(err.to_string().contains(MONGO_URI_VAR));
    }

    #[test]
    fn rejects_blank_var() {
        assert!(AppConfig::from_lookup(Some("   ".into())).is_err());
    }
}
