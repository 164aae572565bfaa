use crate::error::{Error, Result};
use crate::services::session_store::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL_SECS};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub question_bank_file: PathBuf,
    pub log_json: bool,
    pub session_ttl_secs: i64,
    pub max_sessions: usize,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:8000"),
            question_bank_file: PathBuf::from(get_env_or(
                "QUESTION_BANK_FILE",
                "question_bank.json",
            )),
            log_json: get_env_parse_or("LOG_JSON", false)?,
            session_ttl_secs: get_env_parse_or("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?,
            max_sessions: get_env_parse_or("MAX_SESSIONS", DEFAULT_MAX_SESSIONS)?,
        })
    }
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
