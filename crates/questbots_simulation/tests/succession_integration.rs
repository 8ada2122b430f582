//! Boss succession integration test
//!
//! Host trigger → observer → GroupLeadershipCoordinator, всё в одном вызове
//! `world.trigger(..)`, без app.update().
//!
//! Проверяем:
//! - первый eligible follower становится boss'ом
//! - уходящий boss не переизбирается
//! - ни один follower не ссылается на уходящего boss'а
//! - пустая группа / нет кандидатов → leaderless, без паники

use bevy::prelude::*;
use questbots_simulation::*;

fn create_app() -> App {
    let mut app = create_headless_app();
    app.add_plugins(QuestingBotsPlugin::default());
    app
}

/// Helper: spawn follower, который следует за `boss`
fn spawn_follower(app: &mut App, profile: &str, eligible: bool, boss: Entity) -> Entity {
    app.world_mut()
        .spawn((
            Bot,
            BotProfile::new(profile),
            BossEligibility::new(eligible),
            BotFollower::following(boss),
        ))
        .id()
}

fn spawn_group(app: &mut App, boss: Entity, followers: &[Entity]) -> Entity {
    app.world_mut()
        .spawn(BossGroup::new(Some(boss), followers.to_vec()))
        .id()
}

fn request_succession(app: &mut App, group: Entity, boss: Entity, boss_profile: &str, followers: &[Entity]) {
    app.world_mut().trigger(SuccessionRequested {
        group,
        retiring_leader: BotIdentity::new(boss, boss_profile),
        followers: followers.to_vec(),
    });
}

fn link(app: &App, follower: Entity) -> Option<Entity> {
    app.world()
        .get::<BotFollower>(follower)
        .and_then(|f| f.boss_to_follow)
}

fn group_state(app: &App, group: Entity) -> BossGroup {
    app.world().get::<BossGroup>(group).cloned().unwrap_or_default()
}

#[test]
fn test_first_eligible_follower_becomes_boss() {
    let mut app = create_app();
    let boss = app
        .world_mut()
        .spawn((Bot, BotProfile::new("boss"), BossEligibility::new(true)))
        .id();

    let f1 = spawn_follower(&mut app, "f1", false, boss);
    let f2 = spawn_follower(&mut app, "f2", true, boss);
    let f3 = spawn_follower(&mut app, "f3", true, boss);
    let followers = [f1, f2, f3];
    let group = spawn_group(&mut app, boss, &followers);

    request_succession(&mut app, group, boss, "boss", &followers);

    let state = group_state(&app, group);
    assert_eq!(state.leader, Some(f2));
    assert_eq!(state.followers, vec![f1, f3]);

    // Остальные следуют за новым boss'ом, сам boss — ни за кем
    assert_eq!(link(&app, f1), Some(f2));
    assert_eq!(link(&app, f3), Some(f2));
    assert_eq!(link(&app, f2), None);
}

#[test]
fn test_retiring_boss_in_followers_is_not_reelected() {
    let mut app = create_app();
    let boss = app
        .world_mut()
        .spawn((
            Bot,
            BotProfile::new("boss"),
            BossEligibility::new(true),
            BotFollower::default(),
        ))
        .id();
    let group = spawn_group(&mut app, boss, &[boss]);

    // Malformed вход: host положил boss'а в его же followers
    request_succession(&mut app, group, boss, "boss", &[boss]);

    let state = group_state(&app, group);
    assert_eq!(state.leader, None);
    assert!(state.followers.is_empty());
}

#[test]
fn test_same_profile_different_entity_is_not_elected() {
    let mut app = create_app();
    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();
    // Respawn того же профиля под другим Entity
    let clone = spawn_follower(&mut app, "boss", true, boss);
    let group = spawn_group(&mut app, boss, &[clone]);

    request_succession(&mut app, group, boss, "boss", &[clone]);

    assert_eq!(group_state(&app, group).leader, None);
    assert_eq!(link(&app, clone), None);
}

#[test]
fn test_empty_group_becomes_leaderless() {
    let mut app = create_app();
    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();
    let group = spawn_group(&mut app, boss, &[]);

    request_succession(&mut app, group, boss, "boss", &[]);

    assert!(group_state(&app, group).is_leaderless());
}

#[test]
fn test_no_eligible_follower_clears_all_links() {
    let mut app = create_app();
    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();
    let f1 = spawn_follower(&mut app, "f1", false, boss);
    let f2 = spawn_follower(&mut app, "f2", false, boss);
    let followers = [f1, f2];
    let group = spawn_group(&mut app, boss, &followers);

    request_succession(&mut app, group, boss, "boss", &followers);

    assert!(group_state(&app, group).is_leaderless());
    assert_eq!(link(&app, f1), None);
    assert_eq!(link(&app, f2), None);
}

#[test]
fn test_despawned_boss_and_incomplete_followers() {
    let mut app = create_app();
    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();

    // Follower без BossEligibility (подсистема не создана) и без BotFollower
    let partial = app.world_mut().spawn((Bot, BotProfile::new("partial"))).id();
    let ready = spawn_follower(&mut app, "ready", true, boss);
    let followers = [partial, ready];
    let group = spawn_group(&mut app, boss, &followers);

    // Boss уже убран из мира к моменту события
    app.world_mut().despawn(boss);
    request_succession(&mut app, group, boss, "boss", &followers);

    let state = group_state(&app, group);
    assert_eq!(state.leader, Some(ready));
    assert_eq!(state.followers, vec![partial]);
    assert_eq!(link(&app, ready), None);
}

#[test]
fn test_no_follower_points_at_retiring_boss() {
    let mut app = create_app();
    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();
    let followers: Vec<Entity> = (0..6)
        .map(|i| spawn_follower(&mut app, &format!("f{}", i), i % 3 == 2, boss))
        .collect();
    let group = spawn_group(&mut app, boss, &followers);

    request_succession(&mut app, group, boss, "boss", &followers);

    for &follower in &followers {
        assert_ne!(link(&app, follower), Some(boss), "{:?} still follows retired boss", follower);
    }
    assert_eq!(group_state(&app, group).leader, Some(followers[2]));
}

#[test]
fn test_unknown_group_entity_leaves_followers_without_boss() {
    let mut app = create_app();
    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();
    let f1 = spawn_follower(&mut app, "f1", true, boss);
    let f2 = spawn_follower(&mut app, "f2", false, boss);
    let not_a_group = app.world_mut().spawn_empty().id();

    request_succession(&mut app, not_a_group, boss, "boss", &[f1, f2]);

    // Группы нет → лидера нет, никто ни за кем не следует (и за f1 тоже)
    assert_eq!(link(&app, f1), None);
    assert_eq!(link(&app, f2), None);
    assert!(app.world().get::<BossGroup>(not_a_group).is_none());
}

#[test]
fn test_group_member_missing_from_request_stays_and_relinks() {
    let mut app = create_app();
    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();
    let f1 = spawn_follower(&mut app, "f1", true, boss);
    let quiet = spawn_follower(&mut app, "quiet", false, boss);
    let group = spawn_group(&mut app, boss, &[f1, quiet]);

    // Host прислал неполный список: `quiet` в группе, но не в событии
    app.world_mut().despawn(boss);
    request_succession(&mut app, group, boss, "boss", &[f1]);

    let state = group_state(&app, group);
    assert_eq!(state.leader, Some(f1));
    assert_eq!(state.followers, vec![quiet]);
    assert_eq!(link(&app, quiet), Some(f1));
    assert_eq!(link(&app, f1), None);
}

#[test]
fn test_group_member_missing_from_request_cleared_when_leaderless() {
    let mut app = create_app();
    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();
    let f1 = spawn_follower(&mut app, "f1", false, boss);
    let quiet = spawn_follower(&mut app, "quiet", true, boss);
    let group = spawn_group(&mut app, boss, &[f1, quiet]);

    // Выборы идут только среди followers события: eligible `quiet` не кандидат
    request_succession(&mut app, group, boss, "boss", &[f1]);

    let state = group_state(&app, group);
    assert!(state.is_leaderless());
    assert_eq!(state.followers, vec![f1, quiet]);
    assert_eq!(link(&app, quiet), None);
    assert_eq!(link(&app, f1), None);
}

#[test]
fn test_disabled_config_registers_nothing() {
    let mut app = create_headless_app();
    app.add_plugins(QuestingBotsPlugin::new(QuestingBotsConfig {
        enabled: false,
        ..Default::default()
    }));

    let boss = app.world_mut().spawn((Bot, BotProfile::new("boss"))).id();
    let f1 = spawn_follower(&mut app, "f1", true, boss);
    let group = spawn_group(&mut app, boss, &[f1]);

    request_succession(&mut app, group, boss, "boss", &[f1]);

    // Observer не зарегистрирован — состояние не тронуто
    assert_eq!(group_state(&app, group).leader, Some(boss));
    assert_eq!(link(&app, f1), Some(boss));
    assert!(app.world().get_resource::<CanQuestSensor>().is_none());
    assert!(app.world().get_resource::<QuestingBotsConfig>().is_some());
}
