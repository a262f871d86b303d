use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::roster::TeamId;
use super::shot::{ContestLevel, ShotType};

/// Atomic play-by-play event. The play log is the single source of truth
/// for every box-score number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Play {
    #[serde(rename = "type")]
    pub play_type: PlayType,
    pub quarter: u8,
    /// Seconds left in the period.
    pub game_clock: f32,
    pub shot_clock: f32,
    /// Shooter, rebounder, stealer, blocker, fouler, player subbed in...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_player: Option<PlayerId>,
    /// Assister, player stolen from or blocked, fouled player, player subbed out...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_player: Option<PlayerId>,
    /// Team of the primary player (or the team the period event refers to).
    pub team_id: TeamId,
    pub points: u8,
    pub home_score: u16,
    pub away_score: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot: Option<ShotInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turnover: Option<TurnoverKind>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlayType {
    JumpBall,
    MadeShot,
    MissedShot,
    OffensiveRebound,
    DefensiveRebound,
    Steal,
    Turnover,
    Block,
    Foul,
    FreeThrowMade,
    FreeThrowMissed,
    Substitution,
    QuarterStart,
    QuarterEnd,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ShotInfo {
    pub shot_type: ShotType,
    /// Feet from the rim.
    pub distance: f32,
    pub contest: ContestLevel,
    pub contested: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TurnoverKind {
    BadPass,
    Stolen,
    ShotClockViolation,
}

impl Play {
    /// A play with no players attached; the builders below fill the rest.
    pub fn new(play_type: PlayType, team_id: TeamId, quarter: u8, game_clock: f32) -> Self {
        Self {
            play_type,
            quarter,
            game_clock,
            shot_clock: 0.0,
            primary_player: None,
            secondary_player: None,
            team_id,
            points: 0,
            home_score: 0,
            away_score: 0,
            shot: None,
            turnover: None,
            description: String::new(),
        }
    }

    pub fn with_shot_clock(mut self, shot_clock: f32) -> Self {
        self.shot_clock = shot_clock;
        self
    }

    pub fn with_primary(mut self, player: PlayerId) -> Self {
        self.primary_player = Some(player);
        self
    }

    pub fn with_secondary(mut self, player: Option<PlayerId>) -> Self {
        self.secondary_player = player;
        self
    }

    pub fn with_points(mut self, points: u8) -> Self {
        self.points = points;
        self
    }

    pub fn with_shot(mut self, shot: ShotInfo) -> Self {
        self.shot = Some(shot);
        self
    }

    pub fn with_turnover(mut self, kind: TurnoverKind) -> Self {
        self.turnover = Some(kind);
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_field_goal_attempt(&self) -> bool {
        matches!(self.play_type, PlayType::MadeShot | PlayType::MissedShot)
    }

    pub fn is_three_attempt(&self) -> bool {
        self.is_field_goal_attempt()
            && self.shot.map(|s| s.shot_type.is_three()).unwrap_or(false)
    }
}

/// Game clock as `M:SS`.
pub fn format_clock(seconds: f32) -> String {
    let total = seconds.max(0.0).ceil() as u32;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let play = Play::new(PlayType::MadeShot, 3, 2, 431.5)
            .with_primary(11)
            .with_secondary(Some(12))
            .with_points(3)
            .with_shot(ShotInfo {
                shot_type: ShotType::ThreePointCorner,
                distance: 22.5,
                contest: ContestLevel::Open,
                contested: false,
            });
        assert!(play.is_field_goal_attempt());
        assert!(play.is_three_attempt());
        assert_eq!(play.primary_player, Some(11));
        assert_eq!(play.points, 3);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(720.0), "12:00");
        assert_eq!(format_clock(59.2), "1:00");
        assert_eq!(format_clock(0.0), "0:00");
    }
}
