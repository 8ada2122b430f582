//! Hive mind — общий слой сенсоров для ботов
//!
//! Любой потребитель (логика бота, debug overlay, другой бот) читает
//! закэшированный факт через Resource, не пересчитывая его сам.
//!
//! Обновление:
//! - явный запрос: `world.trigger(RefreshHiveMind)` / `commands.trigger(RefreshHiveMind)`
//! - опционально cadence из config (`hive_mind.refresh_interval_ms`, 0 = только явно)

use bevy::prelude::*;
use std::time::Duration;
use crate::components::{Bot, BotObjectiveManager};

pub mod can_quest;
pub mod sensor;


pub use can_quest::{CanQuestSensor, ObjectiveLookup};
pub use sensor::HiveMindSensor;

/// Запрос на refresh всех hive mind сенсоров (observer trigger)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RefreshHiveMind;

/// Repeating timer для опционального cadence
#[derive(Resource, Debug, Clone)]
pub struct HiveMindRefreshTimer(pub Timer);

/// Hive Mind Plugin
///
/// Регистрирует сенсоры как Resources и observer на `RefreshHiveMind`.
/// Cadence system добавляется только если задан `refresh_interval`.
#[derive(Default)]
pub struct HiveMindPlugin {
    pub refresh_interval: Option<Duration>,
}

impl HiveMindPlugin {
    pub fn from_interval_ms(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval: (refresh_interval_ms > 0).then(|| Duration::from_millis(refresh_interval_ms)),
        }
    }
}

impl Plugin for HiveMindPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CanQuestSensor>()
            .add_observer(on_refresh_hive_mind);

        if let Some(interval) = self.refresh_interval {
            app.insert_resource(HiveMindRefreshTimer(Timer::new(interval, TimerMode::Repeating)))
                .add_systems(FixedUpdate, tick_hive_mind_refresh);
        }
    }
}

/// Observer: пересчёт всех сенсоров для ботов, которых host сейчас отслеживает
pub fn on_refresh_hive_mind(
    _trigger: Trigger<RefreshHiveMind>,
    mut can_quest: ResMut<CanQuestSensor>,
    bots: Query<Entity, With<Bot>>,
    objectives: Query<&BotObjectiveManager>,
) {
    can_quest.refresh(bots.iter(), &objectives);

    crate::logger::log(&format!(
        "🧠 HiveMind refresh #{}: {} bots tracked",
        can_quest.sensor().refresh_count(),
        can_quest.sensor().tracked_count()
    ));
}

/// System: cadence refresh (consumer-chosen interval из config)
pub fn tick_hive_mind_refresh(
    time: Res<Time>,
    mut timer: ResMut<HiveMindRefreshTimer>,
    mut commands: Commands,
) {
    if timer.0.tick(time.delta()).just_finished() {
        commands.trigger(RefreshHiveMind);
    }
}
