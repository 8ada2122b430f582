//! CanQuest сенсор: принимает ли бот сейчас новые objectives

use bevy::prelude::*;
use std::collections::HashMap;
use crate::components::BotObjectiveManager;
use super::sensor::HiveMindSensor;

/// Lookup objective подсистемы бота
///
/// None = подсистема ещё не создана (race при спавне) или уже снята.
pub trait ObjectiveLookup {
    fn objective_manager(&self, bot: Entity) -> Option<&BotObjectiveManager>;
}

impl<'w, 's, 'a> ObjectiveLookup for Query<'w, 's, &'a BotObjectiveManager> {
    fn objective_manager(&self, bot: Entity) -> Option<&BotObjectiveManager> {
        self.get(bot).ok()
    }
}

impl ObjectiveLookup for HashMap<Entity, BotObjectiveManager> {
    fn objective_manager(&self, bot: Entity) -> Option<&BotObjectiveManager> {
        self.get(&bot)
    }
}

/// Resource: CanQuest факт для всех отслеживаемых ботов
///
/// Default = false: бот без objective подсистемы не считается "может квестить",
/// но и не получает definite negative (см. `HiveMindSensor::reading`).
#[derive(Resource, Debug, Clone)]
pub struct CanQuestSensor {
    sensor: HiveMindSensor<bool>,
}

impl Default for CanQuestSensor {
    fn default() -> Self {
        Self {
            sensor: HiveMindSensor::new(false),
        }
    }
}

impl CanQuestSensor {
    pub fn refresh<I, L>(&mut self, bots: I, objectives: &L)
    where
        I: IntoIterator<Item = Entity>,
        L: ObjectiveLookup + ?Sized,
    {
        self.refresh_with(bots, objectives, |_| {});
    }

    pub fn refresh_with<I, L, A>(&mut self, bots: I, objectives: &L, extra_action: A)
    where
        I: IntoIterator<Item = Entity>,
        L: ObjectiveLookup + ?Sized,
        A: FnMut(Entity),
    {
        self.sensor.refresh_with(
            bots,
            |bot| {
                objectives
                    .objective_manager(bot)
                    .map(|manager| manager.is_objective_active)
            },
            extra_action,
        );
    }

    pub fn can_quest(&self, bot: Entity) -> bool {
        self.sensor.query(bot)
    }

    pub fn sensor(&self) -> &HiveMindSensor<bool> {
        &self.sensor
    }
}
