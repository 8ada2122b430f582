//! GroupLeadershipCoordinator — succession boss'а внутри ECS
//!
//! Три фазы, строго по порядку:
//! 1. pre-clear: followers, которые следуют за уходящим boss'ом, отпускают ссылку
//!    (до выборов, чтобы никто не "следовал" за двумя лидерами сразу)
//! 2. election: `BossGroup.leader = None`, затем первый eligible follower
//!    (не уходящий boss) становится лидером
//! 3. relink: остальные члены группы указывают на нового boss'а (или None)
//!
//! Члены группы = `BossGroup.followers` плюс followers из события, которых там
//! ещё нет. Бот, о котором host не упомянул, из группы не выпадает.

use bevy::prelude::*;
use bevy::ecs::system::SystemParam;
use crate::components::{BossEligibility, BossGroup, BotFollower, BotIdentity, BotProfile};
use super::succession::{
    elect_successor, merge_followers, remaining_followers, Candidate, SuccessionOutcome,
};

/// SystemParam: всё, что меняет succession
///
/// Единственный writer для `BossGroup.leader` и `BotFollower.boss_to_follow`.
#[derive(SystemParam)]
pub struct GroupLeadershipCoordinator<'w, 's> {
    groups: Query<'w, 's, &'static mut BossGroup>,
    bots: Query<
        'w,
        's,
        (
            Option<&'static BotProfile>,
            Option<&'static BossEligibility>,
            Option<&'static mut BotFollower>,
        ),
    >,
}

impl GroupLeadershipCoordinator<'_, '_> {
    /// Обрабатывает замену boss'а. Не паникует и не возвращает ошибок:
    /// пустой список, отсутствие кандидатов и неизвестная группа дают
    /// группу без лидера.
    pub fn on_succession_requested(
        &mut self,
        group: Entity,
        retiring_leader: &BotIdentity,
        followers: &[Entity],
    ) -> SuccessionOutcome {
        // Фаза 1: pre-clear
        let cleared_links = self.sever_links_to(retiring_leader.entity, followers);

        // Фаза 2: election
        let members = self.groups.get_mut(group).ok().map(|mut state| {
            state.leader = None;
            merge_followers(&state.followers, followers)
        });

        // Без BossGroup некому быть лидером: все ссылки → None
        let Some(members) = members else {
            crate::logger::log_warning(&format!(
                "⚠️ Succession for {:?}: entity has no BossGroup, followers left without boss",
                group
            ));
            let relinked = self.relink(retiring_leader, followers, None);
            return SuccessionOutcome {
                group,
                elected: None,
                cleared_links,
                relinked,
            };
        };

        let elected = self.elect(retiring_leader, followers);

        if let Ok(mut state) = self.groups.get_mut(group) {
            state.leader = elected;
            state.followers = remaining_followers(&members, retiring_leader, elected);
        }

        // Фаза 3: relink (вся группа, не только followers из события)
        let relinked = self.relink(retiring_leader, &members, elected);

        SuccessionOutcome {
            group,
            elected,
            cleared_links,
            relinked,
        }
    }

    fn sever_links_to(&mut self, retiring: Entity, followers: &[Entity]) -> usize {
        let mut cleared = 0;

        for &follower in followers {
            let Ok((_, _, Some(mut link))) = self.bots.get_mut(follower) else {
                continue;
            };

            if link.is_following(retiring) {
                link.boss_to_follow = None;
                cleared += 1;
            }
        }

        cleared
    }

    /// Follower без `BotProfile` или без `BossEligibility` считается ineligible
    fn elect(&self, retiring: &BotIdentity, followers: &[Entity]) -> Option<Entity> {
        let candidates = followers.iter().filter_map(|&entity| {
            let (profile, eligibility, _) = self.bots.get(entity).ok()?;
            Some(Candidate {
                entity,
                profile: &profile?.id,
                eligible: eligibility.is_some_and(|e| e.i_am_boss),
            })
        });

        elect_successor(retiring, candidates)
    }

    fn relink(&mut self, retiring: &BotIdentity, followers: &[Entity], elected: Option<Entity>) -> usize {
        let mut relinked = 0;

        for &follower in followers {
            let Ok((_, _, Some(mut link))) = self.bots.get_mut(follower) else {
                continue;
            };

            // Сам новый boss и уходящий никому не следуют
            let target = if follower == retiring.entity || Some(follower) == elected {
                None
            } else {
                elected
            };

            if link.boss_to_follow != target {
                link.boss_to_follow = target;
            }
            if target.is_some() {
                relinked += 1;
            }
        }

        relinked
    }
}
