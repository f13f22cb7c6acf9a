use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let mongo_url = std::env::var("MONGO_URL").context("MONGO_URL must be set")?;
        let db_name = std::env::var("DB_NAME").context("DB_NAME must be set")?;
        let cors_origins =
            parse_origins(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));
        Ok(Self {
            mongo_url,
            db_name,
            cors_origins,
        })
    }

    /// True when the allow-list is `*` (or empty), i.e. any origin is allowed.
    pub fn allow_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:3000, https://app.example.com");
        assert_eq!(
            origins,
            vec!["http://localhost:3000", "https://app.example.com"]
        );
    }

    #[test]
    fn parse_origins_drops_empty_entries() {
        assert_eq!(
            parse_origins("http://localhost:3000,,"),
            vec!["http://localhost:3000"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn wildcard_allows_any_origin() {
        let config = AppConfig {
            mongo_url: "mongodb://localhost:27017".into(),
            db_name: "test".into(),
            cors_origins: parse_origins("*"),
        };
        assert!(config.allow_any_origin());
    }

    #[test]
    fn explicit_list_is_not_any() {
        let config = AppConfig {
            mongo_url: "mongodb://localhost:27017".into(),
            db_name: "test".into(),
            cors_origins: parse_origins("http://localhost:3000"),
        };
        assert!(!config.allow_any_origin());
    }
}
