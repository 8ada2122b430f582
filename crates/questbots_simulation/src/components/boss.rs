//! Boss/follower компоненты: BossGroup, BotFollower, BossEligibility

use bevy::prelude::*;

/// Группа boss + followers (живёт на отдельной group entity)
///
/// Инвариант: 0 или 1 лидер. `leader` меняется только в succession.
#[derive(Component, Debug, Clone, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct BossGroup {
    pub leader: Option<Entity>,
    /// Порядок важен: выборы берут первого подходящего
    pub followers: Vec<Entity>,
}

impl BossGroup {
    pub fn new(leader: Option<Entity>, followers: Vec<Entity>) -> Self {
        Self { leader, followers }
    }

    pub fn is_leaderless(&self) -> bool {
        self.leader.is_none()
    }
}

/// Back-reference follower → boss
///
/// Это lookup key (foreign key), а не владение. Когда у группы есть лидер,
/// должен указывать на него; без лидера — None.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct BotFollower {
    pub boss_to_follow: Option<Entity>,
}

impl BotFollower {
    pub fn following(boss: Entity) -> Self {
        Self {
            boss_to_follow: Some(boss),
        }
    }

    pub fn is_following(&self, boss: Entity) -> bool {
        self.boss_to_follow == Some(boss)
    }
}

/// Флаг "может быть боссом" (выставляется снаружи)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct BossEligibility {
    pub i_am_boss: bool,
}

impl BossEligibility {
    pub fn new(i_am_boss: bool) -> Self {
        Self { i_am_boss }
    }
}
