use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::service::ChargePolicy;

/// 未指定 `--config` 时尝试读取的配置文件
pub const DEFAULT_CONFIG_FILE: &str = "charge.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub policy: ChargePolicy,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub time_format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            time_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 → 配置文件 → 环境变量 (CHARGE_POLICY__COUPON_OVERDRAW 等)
    ///
    /// 显式指定的文件必须存在，默认文件缺失时忽略。
    pub fn load(config_path: Option<&str>) -> Result<Self, SettingsError> {
        let file = match config_path {
            Some(path) => File::with_name(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(env_source())
            .build()?
            .try_deserialize::<AppConfig>()?;

        Ok(config)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("CHARGE")
        .prefix_separator("_")
        .separator("__")
}
