use {
    config::{Config, ConfigError, Environment},
    serde::Deserialize,
};

const ENV_PREFIX: &str = "SERVICE_TOOL";

/// Process settings, read from `SERVICE_TOOL_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Worker thread count, actix-web picks one per core when unset.
    pub workers: Option<usize>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_source(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8000)?
            .add_source(env.try_parsing(true))
            .build()?
            .try_deserialize::<Self>()
            .and_then(Self::validate)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        if self.workers == Some(0) {
            return Err(ConfigError::Message("workers must be greater than 0".into()));
        }

        Ok(self)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
