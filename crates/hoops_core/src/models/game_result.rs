//! Game output.
//!
//! `GameResult` is built once at the end of a game and handed to whoever
//! persists it; nothing in the engine touches it afterwards.

use serde::{Deserialize, Serialize};

use super::box_score::{PlayerBoxScore, TeamBoxScore};
use super::play::Play;
use super::player::PlayerId;
use super::roster::TeamId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuarterResult {
    /// 1-based period number. Periods past `ClockConfig::quarters` are overtime.
    pub quarter: u8,
    pub plays: Vec<Play>,
    pub home_points: u16,
    pub away_points: u16,
}

/// Detectable bug states found while aggregating a finished game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameAnomaly {
    ZeroFieldGoalAttempts { team_id: TeamId },
    PointsMismatch { team_id: TeamId, box_points: u16, score: u16 },
    LineupRepaired { team_id: TeamId, repairs: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameResult {
    pub seed: u64,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub home_score: u16,
    pub away_score: u16,
    pub winner_id: TeamId,
    pub overtime: bool,
    pub overtime_periods: u8,
    /// Overtime cap reached; winner picked by tiebreak with scores level.
    pub forced_tiebreak: bool,
    /// Opening lineups in PG..C slot order. Together with the
    /// `Substitution` plays they give the five on court at any point.
    pub home_starters: Vec<PlayerId>,
    pub away_starters: Vec<PlayerId>,
    pub quarters: Vec<QuarterResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plays: Vec<Play>,
    pub home_box: TeamBoxScore,
    pub away_box: TeamBoxScore,
    pub home_players: Vec<PlayerBoxScore>,
    pub away_players: Vec<PlayerBoxScore>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anomalies: Vec<GameAnomaly>,
}

impl GameResult {
    pub fn home_won(&self) -> bool {
        self.winner_id == self.home_team_id
    }

    pub fn total_points(&self) -> u32 {
        self.home_score as u32 + self.away_score as u32
    }

    pub fn margin(&self) -> i32 {
        self.home_score as i32 - self.away_score as i32
    }

    /// Periods played before overtime, whatever the configured length.
    pub fn regulation_periods(&self) -> u8 {
        (self.quarters.len() as u8).saturating_sub(self.overtime_periods)
    }
}
