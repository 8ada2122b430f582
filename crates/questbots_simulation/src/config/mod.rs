//! Конфигурация мода (config.json)
//!
//! Транспорт (HTTP к серверу, файл, строка из host'а) — внешний коллаборатор
//! за trait `ConfigSource`. Здесь только парсинг и process-scoped кэш:
//! `ConfigStore::get_or_load` загружает config один раз и дальше отдаёт
//! закэшированный.
//!
//! Ошибки загрузки не роняют симуляцию: логируем и берём `Default`.

use bevy::prelude::*;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;


/// Ошибки загрузки config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Host вернул пустую строку
    #[error("config payload is empty")]
    Empty,

    /// Транспорт не смог получить config
    #[error("failed to fetch config: {0}")]
    Fetch(String),

    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Корневой config
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestingBotsConfig {
    /// false → плагин ничего не регистрирует
    pub enabled: bool,
    pub debug: DebugConfig,
    pub hive_mind: HiveMindConfig,
}

impl Default for QuestingBotsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debug: DebugConfig::default(),
            hive_mind: HiveMindConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// true → LogLevel::Debug, иначе Info
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HiveMindConfig {
    /// Период автоматического refresh сенсоров (ms). 0 = только явный `RefreshHiveMind`
    pub refresh_interval_ms: u64,
}

/// Откуда берётся сырой JSON
pub trait ConfigSource {
    fn fetch_json(&self) -> Result<String, ConfigError>;
}

/// JSON, уже полученный host'ом
#[derive(Debug, Clone)]
pub struct StaticConfigSource(pub String);

impl ConfigSource for StaticConfigSource {
    fn fetch_json(&self) -> Result<String, ConfigError> {
        Ok(self.0.clone())
    }
}

/// config.json на диске
#[derive(Debug, Clone)]
pub struct FileConfigSource(pub PathBuf);

impl ConfigSource for FileConfigSource {
    fn fetch_json(&self) -> Result<String, ConfigError> {
        std::fs::read_to_string(&self.0).map_err(|source| ConfigError::Io {
            path: self.0.clone(),
            source,
        })
    }
}

pub fn parse_config(json: &str) -> Result<QuestingBotsConfig, ConfigError> {
    if json.trim().is_empty() {
        return Err(ConfigError::Empty);
    }

    Ok(serde_json::from_str(json)?)
}

pub fn load_config(source: &dyn ConfigSource) -> Result<QuestingBotsConfig, ConfigError> {
    let json = source.fetch_json()?;
    parse_config(&json)
}

/// Process-scoped кэш config (fetch once, then reuse)
///
/// Результат кэшируется и при ошибке (кэшируется `Default`), чтобы каждый
/// вызов не дёргал транспорт заново.
#[derive(Debug, Default)]
pub struct ConfigStore {
    config: OnceCell<QuestingBotsConfig>,
}

impl ConfigStore {
    pub const fn new() -> Self {
        Self {
            config: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Option<&QuestingBotsConfig> {
        self.config.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.config.get().is_some()
    }

    pub fn get_or_load(&self, source: &dyn ConfigSource) -> &QuestingBotsConfig {
        self.config.get_or_init(|| match load_config(source) {
            Ok(config) => {
                crate::logger::log_info("⚙️ Config loaded");
                config
            }
            Err(e) => {
                crate::logger::log_error(&format!(
                    "❌ Cannot retrieve config ({}). Falling back to defaults",
                    e
                ));
                QuestingBotsConfig::default()
            }
        })
    }
}

/// Единственный process-wide config
pub static CONFIG: ConfigStore = ConfigStore::new();
