//! Roster input boundary.
//!
//! These are the records a team-loading collaborator hands to the engine.
//! They are validated once in `SimTeam::from_roster`; past that point the
//! engine only sees checked `SimPlayer`s.

use serde::{Deserialize, Serialize};

use super::attributes::PlayerAttributes;
use super::player::{PlayerId, Position};
use super::traits::PlayerTrait;

pub type TeamId = u32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    /// Height in inches.
    pub height: u8,
    pub overall: u8,
    pub attributes: PlayerAttributes,
    #[serde(default)]
    pub traits: Vec<PlayerTrait>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamRoster {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<PlayerRecord>,
}
