//! QuestBots Simulation Core
//!
//! ECS-слой на Bevy 0.16 поверх host симуляции (игровой движок):
//! - hive_mind: общий кэш фактов о ботах (pull model, refresh по запросу)
//! - boss_group: замена boss'а в группе boss/followers по событию от host'а
//!
//! Боты — entities в World (arena). Все ссылки между ботами — Entity
//! (lookup key), никаких владеющих ссылок.

use bevy::prelude::*;

// Публичные модули
pub mod boss_group;
pub mod components;
pub mod config;
pub mod hive_mind;
pub mod logger;

// Re-export базовых типов для удобства
pub use boss_group::{
    BossGroupPlugin, GroupLeadershipCoordinator, SuccessionOutcome, SuccessionRequested,
};
pub use components::*;
pub use config::{ConfigError, ConfigSource, ConfigStore, QuestingBotsConfig, CONFIG};
pub use hive_mind::{CanQuestSensor, HiveMindPlugin, HiveMindSensor, RefreshHiveMind};
pub use logger::{log, log_error, log_info, log_warning, LogLevel, LogPrinter};

/// Главный plugin (объединяет все подсистемы)
///
/// Config вставляется как Resource; при `enabled == false` подсистемы не
/// регистрируются.
#[derive(Default)]
pub struct QuestingBotsPlugin {
    pub config: QuestingBotsConfig,
}

impl QuestingBotsPlugin {
    pub fn new(config: QuestingBotsConfig) -> Self {
        Self { config }
    }

    /// Config из process-wide store (первый вызов загружает через `source`)
    pub fn from_store(store: &ConfigStore, source: &dyn ConfigSource) -> Self {
        Self::new(store.get_or_load(source).clone())
    }
}

impl Plugin for QuestingBotsPlugin {
    fn build(&self, app: &mut App) {
        logger::set_log_level(if self.config.debug.enabled {
            LogLevel::Debug
        } else {
            LogLevel::Info
        });

        app.insert_resource(self.config.clone());

        if !self.config.enabled {
            logger::log_warning("QuestingBots disabled in config, no systems registered");
            return;
        }

        app.add_plugins((
            HiveMindPlugin::from_interval_ms(self.config.hive_mind.refresh_interval_ms),
            BossGroupPlugin,
        ));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}
