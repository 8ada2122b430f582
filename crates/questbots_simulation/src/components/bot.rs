//! Базовые компоненты ботов: Bot, BotProfile, BotObjectiveManager

use bevy::prelude::*;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Уникальный ключ профиля бота (выдаётся host'ом при спавне)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
pub struct ProfileId(pub String);

impl From<&str> for ProfileId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Marker: бот, которого host сейчас отслеживает
///
/// Hive mind сенсоры обходят только entities с этим компонентом.
/// Host снимает marker (или despawn'ит entity) когда бот убран из рейда.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Bot;

/// Профиль бота
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct BotProfile {
    pub id: ProfileId,
}

impl BotProfile {
    pub fn new(id: impl Into<ProfileId>) -> Self {
        Self { id: id.into() }
    }
}

/// Идентичность бота: ECS handle + profile key
///
/// Равенство и hash только по `profile`: entity может быть уже despawned
/// (лидер убран), а профиль остаётся стабильным ключом.
#[derive(Debug, Clone, Reflect)]
pub struct BotIdentity {
    pub entity: Entity,
    pub profile: ProfileId,
}

impl BotIdentity {
    pub fn new(entity: Entity, profile: impl Into<ProfileId>) -> Self {
        Self {
            entity,
            profile: profile.into(),
        }
    }
}

impl PartialEq for BotIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.profile == other.profile
    }
}

impl Eq for BotIdentity {}

impl Hash for BotIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.profile.hash(state);
    }
}

/// Objective подсистема бота (квесты)
///
/// Вставляется внешним коллаборатором при спавне бота. Отсутствие компонента
/// означает что подсистема ещё не создана (или уже снята) — это не "false".
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct BotObjectiveManager {
    /// Бот сейчас принимает/выполняет objectives
    pub is_objective_active: bool,
}

impl BotObjectiveManager {
    pub fn new(is_objective_active: bool) -> Self {
        Self { is_objective_active }
    }
}
