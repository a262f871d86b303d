use serde::{Deserialize, Serialize};

use super::attributes::PlayerAttributes;
use super::box_score::PlayerBoxScore;
use super::roster::PlayerRecord;
use super::traits::{equipped_tier, PlayerTrait, TraitId, TraitTier};
use crate::engine::streak::StreakState;

pub type PlayerId = u32;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Position {
    PG,
    SG,
    SF,
    PF,
    C,
}

impl Position {
    /// Lineup slot order: one of each.
    pub const LINEUP: [Position; 5] =
        [Position::PG, Position::SG, Position::SF, Position::PF, Position::C];

    pub fn slot(self) -> usize {
        match self {
            Position::PG => 0,
            Position::SG => 1,
            Position::SF => 2,
            Position::PF => 3,
            Position::C => 4,
        }
    }

    pub fn is_guard(self) -> bool {
        matches!(self, Position::PG | Position::SG)
    }

    pub fn is_big(self) -> bool {
        matches!(self, Position::PF | Position::C)
    }

    /// 1.0 for the same position, 0.5 for a neighbouring one, 0 otherwise.
    pub fn fit(self, other: Position) -> f32 {
        let distance = (self.slot() as i32 - other.slot() as i32).abs();
        match distance {
            0 => 1.0,
            1 => 0.5,
            _ => 0.0,
        }
    }

    /// Rebounding position weight (C 1.4 down to PG 0.6).
    pub fn rebound_modifier(self) -> f32 {
        match self {
            Position::C => 1.4,
            Position::PF => 1.2,
            Position::SF => 1.0,
            Position::SG => 0.8,
            Position::PG => 0.6,
        }
    }
}

/// A player as the engine sees them during one game.
///
/// Identity, ratings and badges are fixed; everything under "per-game state"
/// starts zeroed when the game is created and is discarded with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimPlayer {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Height in inches.
    pub height: u8,
    pub overall: u8,
    pub attributes: PlayerAttributes,
    pub traits: Vec<PlayerTrait>,

    // === Per-game state ===
    /// 0.0 (fresh) ..= 100.0 (exhausted)
    pub fatigue: f32,
    pub minutes_played: f32,
    pub fouls: u8,
    pub is_on_court: bool,
    pub streak: StreakState,
    pub box_score: PlayerBoxScore,
}

impl SimPlayer {
    pub fn from_record(record: &PlayerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            position: record.position,
            height: record.height,
            overall: record.overall,
            attributes: record.attributes.clone(),
            traits: record.traits.clone(),
            fatigue: 0.0,
            minutes_played: 0.0,
            fouls: 0,
            is_on_court: false,
            streak: StreakState::default(),
            box_score: PlayerBoxScore::new(record.id, &record.name),
        }
    }

    pub fn trait_tier(&self, id: TraitId) -> Option<TraitTier> {
        equipped_tier(&self.traits, id)
    }

    pub fn has_trait(&self, id: TraitId) -> bool {
        self.trait_tier(id).is_some()
    }

    pub fn is_fouled_out(&self, foul_limit: u8) -> bool {
        self.fouls >= foul_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_fit_is_symmetric() {
        for a in Position::LINEUP {
            for b in Position::LINEUP {
                assert_eq!(a.fit(b), b.fit(a));
            }
        }
        assert_eq!(Position::PG.fit(Position::SG), 0.5);
        assert_eq!(Position::PG.fit(Position::C), 0.0);
    }

    #[test]
    fn rebound_modifier_favors_bigs() {
        assert!(Position::C.rebound_modifier() > Position::PF.rebound_modifier());
        assert!(Position::SG.rebound_modifier() > Position::PG.rebound_modifier());
    }
}
