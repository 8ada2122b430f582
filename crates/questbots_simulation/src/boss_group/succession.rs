//! Выборы нового boss'а (чистая логика, без ECS доступа)

use bevy::prelude::*;
use crate::components::{BotIdentity, ProfileId};

/// Кандидат на лидерство (snapshot follower'а на момент выборов)
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub entity: Entity,
    pub profile: &'a ProfileId,
    pub eligible: bool,
}

/// Результат succession для логов и тестов
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessionOutcome {
    pub group: Entity,
    pub elected: Option<Entity>,
    /// Сколько back-references на уходящего boss'а сброшено в pre-clear
    pub cleared_links: usize,
    /// Сколько followers перепривязано к новому boss'у
    pub relinked: usize,
}

impl SuccessionOutcome {
    pub fn is_leaderless(&self) -> bool {
        self.elected.is_none()
    }
}

/// Первый `eligible` кандидат в порядке итерации, который не является `retiring`
///
/// Уходящий boss отфильтровывается и по profile, и по entity, даже если host
/// положил его в список followers и он всё ещё eligible.
/// None — валидный исход (группа без лидера), не ошибка.
pub fn elect_successor<'a, I>(retiring: &BotIdentity, candidates: I) -> Option<Entity>
where
    I: IntoIterator<Item = Candidate<'a>>,
{
    candidates
        .into_iter()
        .find(|candidate| {
            candidate.eligible
                && *candidate.profile != retiring.profile
                && candidate.entity != retiring.entity
        })
        .map(|candidate| candidate.entity)
}

/// Текущие члены группы плюс followers из события, которых в группе ещё нет
///
/// Порядок: сначала `existing`, затем новые из `requested`. Дубликаты убираются.
pub fn merge_followers(existing: &[Entity], requested: &[Entity]) -> Vec<Entity> {
    let mut members = Vec::with_capacity(existing.len() + requested.len());
    for &follower in existing.iter().chain(requested) {
        if !members.contains(&follower) {
            members.push(follower);
        }
    }
    members
}

/// Новый порядок followers после succession (без нового boss'а и без уходящего)
pub fn remaining_followers(
    followers: &[Entity],
    retiring: &BotIdentity,
    elected: Option<Entity>,
) -> Vec<Entity> {
    followers
        .iter()
        .copied()
        .filter(|&follower| follower != retiring.entity && Some(follower) != elected)
        .collect()
}
