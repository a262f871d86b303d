//! Stat Aggregator
//!
//! Folds the play log into per-player lines and sums those into team lines.
//! Nothing else in the engine writes a box-score number.

use log::warn;
use std::collections::HashMap;

use crate::models::box_score::{PlayerBoxScore, TeamBoxScore};
use crate::models::game_result::GameAnomaly;
use crate::models::play::{Play, PlayType};
use crate::models::player::PlayerId;
use crate::models::roster::TeamId;
use crate::models::team::SimTeam;

struct TeamLines {
    team_id: TeamId,
    index: HashMap<PlayerId, usize>,
    lines: Vec<PlayerBoxScore>,
}

impl TeamLines {
    fn new(team: &SimTeam) -> Self {
        Self {
            team_id: team.id,
            index: team.roster.iter().enumerate().map(|(i, p)| (p.id, i)).collect(),
            lines: team.roster.iter().map(|p| PlayerBoxScore::new(p.id, &p.name)).collect(),
        }
    }

    fn line(&mut self, player: Option<PlayerId>) -> Option<&mut PlayerBoxScore> {
        let idx = *self.index.get(&player?)?;
        self.lines.get_mut(idx)
    }
}

/// Box-score lines for both teams, in roster order.
#[derive(Debug, Clone)]
pub struct GameTotals {
    pub home_players: Vec<PlayerBoxScore>,
    pub away_players: Vec<PlayerBoxScore>,
    pub home_box: TeamBoxScore,
    pub away_box: TeamBoxScore,
}

pub struct StatAggregator {
    home: TeamLines,
    away: TeamLines,
}

impl StatAggregator {
    pub fn new(home: &SimTeam, away: &SimTeam) -> Self {
        Self { home: TeamLines::new(home), away: TeamLines::new(away) }
    }

    fn side(&mut self, team_id: TeamId) -> Option<&mut TeamLines> {
        if team_id == self.home.team_id {
            Some(&mut self.home)
        } else if team_id == self.away.team_id {
            Some(&mut self.away)
        } else {
            None
        }
    }

    /// Fold one play. Plays for unknown teams or players are ignored.
    pub fn record(&mut self, play: &Play) {
        let Some(side) = self.side(play.team_id) else {
            return;
        };
        let three = play.is_three_attempt();

        match play.play_type {
            PlayType::MadeShot => {
                if let Some(line) = side.line(play.primary_player) {
                    line.fgm += 1;
                    line.fga += 1;
                    line.points += play.points as u16;
                    if three {
                        line.tpm += 1;
                        line.tpa += 1;
                    }
                }
                if let Some(line) = side.line(play.secondary_player) {
                    line.ast += 1;
                }
            }
            PlayType::MissedShot => {
                if let Some(line) = side.line(play.primary_player) {
                    line.fga += 1;
                    if three {
                        line.tpa += 1;
                    }
                }
            }
            PlayType::FreeThrowMade => {
                if let Some(line) = side.line(play.primary_player) {
                    line.ftm += 1;
                    line.fta += 1;
                    line.points += play.points as u16;
                }
            }
            PlayType::FreeThrowMissed => {
                if let Some(line) = side.line(play.primary_player) {
                    line.fta += 1;
                }
            }
            PlayType::OffensiveRebound => {
                if let Some(line) = side.line(play.primary_player) {
                    line.oreb += 1;
                }
            }
            PlayType::DefensiveRebound => {
                if let Some(line) = side.line(play.primary_player) {
                    line.dreb += 1;
                }
            }
            PlayType::Steal => {
                if let Some(line) = side.line(play.primary_player) {
                    line.stl += 1;
                }
            }
            PlayType::Turnover => {
                if let Some(line) = side.line(play.primary_player) {
                    line.tov += 1;
                }
            }
            PlayType::Block => {
                if let Some(line) = side.line(play.primary_player) {
                    line.blk += 1;
                }
            }
            PlayType::Foul => {
                if let Some(line) = side.line(play.primary_player) {
                    line.pf += 1;
                }
            }
            PlayType::JumpBall
            | PlayType::Substitution
            | PlayType::QuarterStart
            | PlayType::QuarterEnd => {}
        }
    }

    pub fn record_all<'p>(&mut self, plays: impl IntoIterator<Item = &'p Play>) {
        for play in plays {
            self.record(play);
        }
    }

    /// Attach minutes, copy each line onto its player, build team totals
    /// and check them against the final score.
    pub fn finalize(
        mut self,
        home: &mut SimTeam,
        away: &mut SimTeam,
        home_score: u16,
        away_score: u16,
    ) -> (GameTotals, Vec<GameAnomaly>) {
        let mut anomalies = Vec::new();

        let home_box = close_team(&mut self.home, home, home_score, &mut anomalies);
        let away_box = close_team(&mut self.away, away, away_score, &mut anomalies);

        let totals = GameTotals {
            home_players: self.home.lines,
            away_players: self.away.lines,
            home_box,
            away_box,
        };
        (totals, anomalies)
    }
}

fn close_team(
    lines: &mut TeamLines,
    team: &mut SimTeam,
    score: u16,
    anomalies: &mut Vec<GameAnomaly>,
) -> TeamBoxScore {
    for (line, player) in lines.lines.iter_mut().zip(team.roster.iter_mut()) {
        line.minutes = player.minutes_played;
        player.box_score = line.clone();
    }

    let team_box = TeamBoxScore::from_players(team.id, &team.name, &lines.lines);
    if team_box.fga == 0 {
        warn!("{} finished with zero field goal attempts", team.name);
        anomalies.push(GameAnomaly::ZeroFieldGoalAttempts { team_id: team.id });
    }
    if team_box.points != score {
        warn!("{}: box score has {} points, scoreboard {}", team.name, team_box.points, score);
        anomalies.push(GameAnomaly::PointsMismatch { team_id: team.id, box_points: team_box.points, score });
    }
    team_box
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generator::uniform_roster;
    use crate::models::play::ShotInfo;
    use crate::models::shot::{ContestLevel, ShotType};

    fn shot(shot_type: ShotType) -> ShotInfo {
        ShotInfo { shot_type, distance: 20.0, contest: ContestLevel::Light, contested: false }
    }

    #[test]
    fn folds_plays_into_lines() {
        let mut home = SimTeam::from_roster(&uniform_roster(1, "Home", 70)).unwrap();
        let mut away = SimTeam::from_roster(&uniform_roster(2, "Away", 70)).unwrap();
        let (h1, h2) = (home.roster[0].id, home.roster[1].id);
        let a1 = away.roster[0].id;

        let plays = vec![
            Play::new(PlayType::MadeShot, 1, 1, 700.0)
                .with_primary(h1)
                .with_secondary(Some(h2))
                .with_points(3)
                .with_shot(shot(ShotType::ThreePointCorner)),
            Play::new(PlayType::MissedShot, 2, 1, 680.0)
                .with_primary(a1)
                .with_shot(shot(ShotType::MidRangePullUp)),
            Play::new(PlayType::DefensiveRebound, 1, 1, 679.0).with_primary(h2),
            Play::new(PlayType::Foul, 2, 1, 660.0).with_primary(a1).with_secondary(Some(h1)),
            Play::new(PlayType::FreeThrowMade, 1, 1, 660.0).with_primary(h1).with_points(1),
            Play::new(PlayType::FreeThrowMissed, 1, 1, 660.0).with_primary(h1),
        ];

        let mut agg = StatAggregator::new(&home, &away);
        agg.record_all(&plays);
        let (totals, anomalies) = agg.finalize(&mut home, &mut away, 4, 0);

        let shooter = &totals.home_players[0];
        assert_eq!((shooter.fgm, shooter.fga, shooter.tpm, shooter.tpa), (1, 1, 1, 1));
        assert_eq!((shooter.ftm, shooter.fta, shooter.points), (1, 2, 4));
        assert_eq!(totals.home_players[1].ast, 1);
        assert_eq!(totals.home_players[1].dreb, 1);
        assert_eq!(totals.away_players[0].pf, 1);
        assert_eq!(totals.home_box.points, 4);
        assert_eq!(home.roster[0].box_score.points, 4);
        // Away never scored but did shoot.
        assert!(anomalies.is_empty());
    }

    #[test]
    fn flags_zero_attempts_and_mismatch() {
        let mut home = SimTeam::from_roster(&uniform_roster(1, "Home", 70)).unwrap();
        let mut away = SimTeam::from_roster(&uniform_roster(2, "Away", 70)).unwrap();
        let agg = StatAggregator::new(&home, &away);
        let (_, anomalies) = agg.finalize(&mut home, &mut away, 2, 0);
        assert!(anomalies.contains(&GameAnomaly::ZeroFieldGoalAttempts { team_id: 1 }));
        assert!(anomalies.contains(&GameAnomaly::ZeroFieldGoalAttempts { team_id: 2 }));
        assert!(anomalies.contains(&GameAnomaly::PointsMismatch { team_id: 1, box_points: 0, score: 2 }));
    }
}
