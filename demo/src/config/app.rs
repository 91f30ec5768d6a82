use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use strum::Display;

use crate::error::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

/// Which of the two observer programs to replay.
#[derive(Debug, Deserialize, Display, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// Slots attached with `connect`, no handles kept.
    Connect,
    /// Two integer slots and one string slot with handles; the first integer
    /// slot is detached before exit.
    Handles,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub delay_ms: u64,
    pub int_value: i32,
    pub companion_value: i32,
    pub text: String,
    pub variant: Variant,
    pub log_level: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }
}
