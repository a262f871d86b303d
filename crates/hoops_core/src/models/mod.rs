pub mod attributes;
pub mod box_score;
pub mod game_result;
pub mod generator;
pub mod play;
pub mod player;
pub mod roster;
pub mod shot;
pub mod team;
pub mod traits;

pub use attributes::PlayerAttributes;
pub use box_score::{PlayerBoxScore, TeamBoxScore};
pub use game_result::{GameAnomaly, GameResult, QuarterResult};
pub use play::{Play, PlayType, ShotInfo, TurnoverKind};
pub use player::{PlayerId, Position, SimPlayer};
pub use roster::{PlayerRecord, TeamId, TeamRoster};
pub use shot::{ContestLevel, ShotSkill, ShotType};
pub use team::{SimTeam, LINEUP_SIZE};
pub use traits::{PlayerTrait, TraitCategory, TraitId, TraitTier};
