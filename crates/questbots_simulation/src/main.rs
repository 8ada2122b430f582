//! Headless сессия QuestBots
//!
//! Спавнит группу ботов, обновляет hive mind, снимает boss'а и печатает
//! результат succession. Путь к config.json — первый аргумент (опционально).

use bevy::prelude::*;
use questbots_simulation::config::{FileConfigSource, StaticConfigSource};
use questbots_simulation::*;

fn main() {
    let plugin = match std::env::args().nth(1) {
        Some(path) => QuestingBotsPlugin::from_store(&CONFIG, &FileConfigSource(path.into())),
        None => QuestingBotsPlugin::from_store(&CONFIG, &StaticConfigSource("{}".to_string())),
    };

    let mut app = create_headless_app();
    app.add_plugins(plugin);

    let world = app.world_mut();
    let boss = world
        .spawn((Bot, BotProfile::new("boss_reshala"), BossEligibility::new(true)))
        .id();

    let followers: Vec<Entity> = (1..=3)
        .map(|i| {
            world
                .spawn((
                    Bot,
                    BotProfile::new(format!("follower_{}", i)),
                    BossEligibility::new(i > 1),
                    BotFollower::following(boss),
                    BotObjectiveManager::new(i % 2 == 1),
                ))
                .id()
        })
        .collect();

    let group = world
        .spawn(BossGroup::new(Some(boss), followers.clone()))
        .id();

    world.trigger(RefreshHiveMind);

    for tick in 0..10 {
        app.update();

        if tick == 5 {
            let world = app.world_mut();
            world.trigger(SuccessionRequested {
                group,
                retiring_leader: BotIdentity::new(boss, "boss_reshala"),
                followers: followers.clone(),
            });
            world.despawn(boss);
        }
    }

    let world = app.world();
    let Some(state) = world.get::<BossGroup>(group) else {
        log_error("Group entity disappeared");
        return;
    };
    log_info(&format!("New boss: {:?}, followers: {:?}", state.leader, state.followers));

    if let Some(sensor) = world.get_resource::<CanQuestSensor>() {
        for &follower in &followers {
            log_info(&format!("{:?} can quest: {}", follower, sensor.can_quest(follower)));
        }
    }
}
