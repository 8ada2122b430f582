//! Boss group события от host'а

use bevy::prelude::*;
use crate::components::BotIdentity;

/// Host: состав группы изменился, текущий boss уходит
///
/// Доставляется через `world.trigger(..)` / `commands.trigger(..)` и
/// обрабатывается синхронно observer'ом в том же тике.
#[derive(Event, Debug, Clone)]
pub struct SuccessionRequested {
    /// Entity с `BossGroup`
    pub group: Entity,
    /// Уходящий boss (entity может быть уже despawned, profile — стабильный ключ)
    pub retiring_leader: BotIdentity,
    /// Кандидаты в порядке host'а; порядок = tie-break
    pub followers: Vec<Entity>,
}
