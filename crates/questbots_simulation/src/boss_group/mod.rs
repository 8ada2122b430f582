//! Boss group module — иерархия boss/followers
//!
//! Host (игровой движок) сообщает о замене boss'а через `SuccessionRequested`.
//! Observer синхронно (в том же тике) прогоняет `GroupLeadershipCoordinator`.
//! Никакой случайности: одинаковый вход → одинаковый новый boss.

use bevy::prelude::*;

pub mod coordinator;
pub mod events;
pub mod succession;


pub use coordinator::GroupLeadershipCoordinator;
pub use events::SuccessionRequested;
pub use succession::{elect_successor, merge_followers, remaining_followers, Candidate, SuccessionOutcome};

/// Boss Group Plugin
pub struct BossGroupPlugin;

impl Plugin for BossGroupPlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(on_succession_requested);
    }
}

/// Observer: host запросил замену boss'а
pub fn on_succession_requested(
    trigger: Trigger<SuccessionRequested>,
    mut coordinator: GroupLeadershipCoordinator,
) {
    let request = trigger.event();
    let outcome = coordinator.on_succession_requested(
        request.group,
        &request.retiring_leader,
        &request.followers,
    );

    if outcome.is_leaderless() {
        crate::logger::log_info(&format!(
            "👑 Group {:?}: {} retired, no eligible follower among {} → leaderless",
            outcome.group,
            request.retiring_leader.profile,
            request.followers.len()
        ));
    } else if let Some(boss) = outcome.elected {
        crate::logger::log_info(&format!(
            "👑 Group {:?}: {} replaced by {:?} ({} followers relinked, {} stale links cleared)",
            outcome.group, request.retiring_leader.profile, boss, outcome.relinked, outcome.cleared_links
        ));
    }
}
