use crate::{ConfigError, FromEnv};
use std::env;

/// Browser origins allowed to call the API.
///
/// Loaded from `FRONTEND_URL`. A single URL is the usual case; a
/// comma-separated list is accepted for setups with several frontends.
/// An empty list means no cross-origin access at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_origins: origins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.allowed_origins.is_empty()
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let allowed_origins = env::var("FRONTEND_URL")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| s.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { allowed_origins })
    }
}
