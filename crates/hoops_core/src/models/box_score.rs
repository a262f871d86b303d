use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::roster::TeamId;

/// One player's line. Filled by folding the play log, never incremented
/// directly by the possession code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerBoxScore {
    pub player_id: PlayerId,
    pub name: String,
    pub minutes: f32,
    pub points: u16,
    pub fgm: u16,
    pub fga: u16,
    pub tpm: u16,
    pub tpa: u16,
    pub ftm: u16,
    pub fta: u16,
    pub oreb: u16,
    pub dreb: u16,
    pub ast: u16,
    pub stl: u16,
    pub blk: u16,
    pub tov: u16,
    pub pf: u16,
}

impl PlayerBoxScore {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self { player_id, name: name.to_string(), ..Default::default() }
    }

    pub fn rebounds(&self) -> u16 {
        self.oreb + self.dreb
    }

    pub fn fg_pct(&self) -> f32 {
        pct(self.fgm, self.fga)
    }

    pub fn three_pct(&self) -> f32 {
        pct(self.tpm, self.tpa)
    }

    pub fn ft_pct(&self) -> f32 {
        pct(self.ftm, self.fta)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamBoxScore {
    pub team_id: TeamId,
    pub name: String,
    pub points: u16,
    pub fgm: u16,
    pub fga: u16,
    pub tpm: u16,
    pub tpa: u16,
    pub ftm: u16,
    pub fta: u16,
    pub oreb: u16,
    pub dreb: u16,
    pub ast: u16,
    pub stl: u16,
    pub blk: u16,
    pub tov: u16,
    pub pf: u16,
}

impl TeamBoxScore {
    /// Sum of the players' lines.
    pub fn from_players(team_id: TeamId, name: &str, players: &[PlayerBoxScore]) -> Self {
        let mut team = Self { team_id, name: name.to_string(), ..Default::default() };
        for p in players {
            team.points += p.points;
            team.fgm += p.fgm;
            team.fga += p.fga;
            team.tpm += p.tpm;
            team.tpa += p.tpa;
            team.ftm += p.ftm;
            team.fta += p.fta;
            team.oreb += p.oreb;
            team.dreb += p.dreb;
            team.ast += p.ast;
            team.stl += p.stl;
            team.blk += p.blk;
            team.tov += p.tov;
            team.pf += p.pf;
        }
        team
    }

    pub fn rebounds(&self) -> u16 {
        self.oreb + self.dreb
    }

    pub fn fg_pct(&self) -> f32 {
        pct(self.fgm, self.fga)
    }

    pub fn three_pct(&self) -> f32 {
        pct(self.tpm, self.tpa)
    }

    pub fn ft_pct(&self) -> f32 {
        pct(self.ftm, self.fta)
    }

    /// Points implied by the shooting lines.
    pub fn points_from_shooting(&self) -> u16 {
        2 * self.fgm.saturating_sub(self.tpm) + 3 * self.tpm + self.ftm
    }
}

fn pct(made: u16, attempted: u16) -> f32 {
    if attempted == 0 {
        0.0
    } else {
        made as f32 / attempted as f32
    }
}
