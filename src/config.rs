use crate::error::AppError;

/// Runtime configuration, read once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Authentication username; also used as the From address.
    pub user: String,
    pub pass: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            smtp: SmtpConfig {
                host: require("EMAIL_HOST")?,
                port: match std::env::var("EMAIL_PORT") {
                    Ok(raw) => raw
                        .parse()
                        .map_err(|_| AppError::Config("EMAIL_PORT must be a port number".into()))?,
                    Err(_) => 587,
                },
                user: require("EMAIL_USER")?,
                pass: require("EMAIL_PASS")?,
            },
        })
    }
}

fn require(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| AppError::Config(format!("{name} must be set")))
}
