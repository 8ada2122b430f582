//! ECS Components для ботов
//!
//! Организация по доменам:
//! - bot: идентичность и per-bot подсистемы (Bot, BotProfile, BotObjectiveManager)
//! - boss: иерархия boss/followers (BossGroup, BotFollower, BossEligibility)

pub mod bot;
pub mod boss;

// Re-exports для удобного импорта
pub use bot::*;
pub use boss::*;
