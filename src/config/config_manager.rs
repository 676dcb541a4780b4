// ==========================================
// 仓储库存管理系统 - 配置管理器
// ==========================================
// 职责: 配置加载（JSON 文件）+ 环境变量覆写 + 校验
// 优先级: 环境变量 > 配置文件 > 默认值
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::engine::alerts::DEFAULT_WINDOW_DAYS;

pub const ENV_SNAPSHOT: &str = "RELIABLE_INVENTORY_SNAPSHOT";
pub const ENV_ALERT_WINDOW_DAYS: &str = "RELIABLE_INVENTORY_ALERT_WINDOW_DAYS";
pub const ENV_LOCALE: &str = "RELIABLE_INVENTORY_LOCALE";

const APP_DIR: &str = "reliable-inventory";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_SNAPSHOT_FILE: &str = "inventory_snapshot.json";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 (path={path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("配置项无效 ({key}): {message}")]
    Invalid { key: String, message: String },
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 后端导出的库存快照路径
    pub snapshot_path: PathBuf,
    /// 临期预警窗口（天）
    pub alert_window_days: i64,
    /// 界面语言（zh-CN / en）
    pub locale: String,
    /// 日志过滤器（RUST_LOG 优先）
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_FILE),
            alert_window_days: DEFAULT_WINDOW_DAYS,
            locale: "zh-CN".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alert_window_days <= 0 {
            return Err(ConfigError::Invalid {
                key: "alertWindowDays".to_string(),
                message: format!("必须为正整数,当前值 {}", self.alert_window_days),
            });
        }
        if !matches!(self.locale.as_str(), "zh-CN" | "en") {
            return Err(ConfigError::Invalid {
                key: "locale".to_string(),
                message: format!("不支持的语言 {}", self.locale),
            });
        }
        Ok(())
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 默认配置文件路径: <config_dir>/reliable-inventory/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// 加载配置（文件不存在时使用默认值）,再应用环境变量覆写
    pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load_file(path)?,
            None => AppConfig::default(),
        };

        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// 读取配置文件
    pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "配置文件不存在,使用默认配置");
            return Ok(AppConfig::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// 应用覆写（lookup 通常为环境变量读取）
    pub fn apply_overrides<F>(config: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(ENV_SNAPSHOT).filter(|v| !v.trim().is_empty()) {
            config.snapshot_path = PathBuf::from(path.trim());
        }

        if let Some(raw) = lookup(ENV_ALERT_WINDOW_DAYS) {
            config.alert_window_days =
                raw.trim().parse::<i64>().map_err(|_| ConfigError::Invalid {
                    key: ENV_ALERT_WINDOW_DAYS.to_string(),
                    message: format!("无法解析为整数: {}", raw),
                })?;
        }

        if let Some(locale) = lookup(ENV_LOCALE).filter(|v| !v.trim().is_empty()) {
            config.locale = locale.trim().to_string();
        }

        Ok(())
    }
}
