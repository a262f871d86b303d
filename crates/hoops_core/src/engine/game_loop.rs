//! Quarter/Game Loop
//!
//! `tip_off → quarter 1..=4 → [overtime]* → final`
//!
//! - Jump balls open quarters 1, 2 and 4 and every overtime period.
//!   Quarter 3 starts with whichever team was due the next possession.
//! - Possession alternates at the end of every possession.
//! - Overtime repeats while the score is tied, up to the configured cap.
//!   Past the cap the game goes to the team with more field goals made,
//!   then to the home team, and the scores stay level.

use log::{debug, trace, warn};
use rand::{Rng, SeedableRng};

use super::config::EngineConfig;
use super::fatigue::{apply_elapsed, recover_between_periods};
use super::possession::{simulate_possession, PossessionContext};
use super::stats::StatAggregator;
use super::substitutions::{run_substitutions, SubstitutionCheck};
use super::GameRng;
use crate::error::{Result, SimError};
use crate::models::game_result::{GameAnomaly, GameResult, QuarterResult};
use crate::models::play::{format_clock, Play, PlayType};
use crate::models::player::PlayerId;
use crate::models::roster::TeamRoster;
use crate::models::team::{SimTeam, LINEUP_SIZE};

const CLOCK_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// One game between two teams. Owns all mutable game state; consumed by
/// [`GameEngine::simulate`].
pub struct GameEngine {
    home: SimTeam,
    away: SimTeam,
    config: EngineConfig,
    seed: u64,
    rng: GameRng,
    home_score: u16,
    away_score: u16,
    quarters: Vec<QuarterResult>,
    lineup_repairs: [u32; 2],
}

impl GameEngine {
    /// Engine for two ready-made teams. Fails if either side cannot field
    /// five players or both sides carry the same team id.
    pub fn new(home: SimTeam, away: SimTeam, seed: u64) -> Result<Self> {
        if home.id == away.id {
            return Err(SimError::SameTeam { id: home.id });
        }
        for team in [&home, &away] {
            if team.roster.is_empty() {
                return Err(SimError::EmptyRoster { team: team.name.clone() });
            }
            if team.roster.len() < LINEUP_SIZE {
                return Err(SimError::InsufficientRoster {
                    team: team.name.clone(),
                    found: team.roster.len(),
                });
            }
        }
        Ok(Self {
            home,
            away,
            config: EngineConfig::default(),
            seed,
            rng: GameRng::seed_from_u64(seed),
            home_score: 0,
            away_score: 0,
            quarters: Vec::new(),
            lineup_repairs: [0, 0],
        })
    }

    /// Validate both rosters and build the engine.
    pub fn from_rosters(home: &TeamRoster, away: &TeamRoster, seed: u64) -> Result<Self> {
        Self::new(SimTeam::from_roster(home)?, SimTeam::from_roster(away)?, seed)
    }

    pub fn with_config(mut self, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Play the whole game.
    pub fn simulate(mut self) -> GameResult {
        debug!("Tip-off: {} vs {} (seed {})", self.home.name, self.away.name, self.seed);
        let home_starters = starter_ids(&self.home);
        let away_starters = starter_ids(&self.away);

        let regulation = self.config.clock.quarters;
        let max_periods = regulation.saturating_add(self.config.clock.max_overtime_periods);
        let mut offense = Side::Home;
        let mut quarter: u8 = 1;

        loop {
            self.play_period(quarter, &mut offense);
            if quarter >= regulation && self.home_score != self.away_score {
                break;
            }
            if quarter >= max_periods {
                break;
            }
            quarter += 1;
        }

        let overtime_periods = quarter.saturating_sub(regulation);
        self.finish(overtime_periods, home_starters, away_starters)
    }

    fn team_mut(&mut self, side: Side) -> &mut SimTeam {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    fn score_of(&self, side: Side) -> u16 {
        match side {
            Side::Home => self.home_score,
            Side::Away => self.away_score,
        }
    }

    fn stamp(&self, mut play: Play) -> Play {
        play.home_score = self.home_score;
        play.away_score = self.away_score;
        play
    }

    fn period_length(&self, quarter: u8) -> f32 {
        if quarter > self.config.clock.quarters {
            self.config.clock.overtime_length
        } else {
            self.config.clock.quarter_length
        }
    }

    /// Centers jump: height + vertical/10 + U(0,10). Returns the side that
    /// gets the ball and the `JumpBall` play.
    fn jump_ball(&mut self, quarter: u8, game_clock: f32) -> (Side, Play) {
        let home_roll = jump_score(&self.home, &mut self.rng);
        let away_roll = jump_score(&self.away, &mut self.rng);
        let home_center = self.home.on_court_player(self.home.center_slot());
        let away_center = self.away.on_court_player(self.away.center_slot());

        let (winner, team_id, won, lost) = if home_roll >= away_roll {
            (Side::Home, self.home.id, home_center, away_center)
        } else {
            (Side::Away, self.away.id, away_center, home_center)
        };
        let play = Play::new(PlayType::JumpBall, team_id, quarter, game_clock)
            .with_shot_clock(self.config.clock.shot_clock)
            .with_primary(won.id)
            .with_secondary(Some(lost.id))
            .describe(format!("Jump ball: {} wins the tip over {}", won.name, lost.name));
        (winner, self.stamp(play))
    }

    /// Run one substitution pass for both teams.
    fn substitutions(&mut self, check: SubstitutionCheck, quarter: u8, clock: f32, plays: &mut Vec<Play>) {
        for side in [Side::Home, Side::Away] {
            let cfg = self.config.substitution.clone();
            let subs = run_substitutions(self.team_mut(side), check, &cfg, quarter, clock);
            for play in subs {
                let play = self.stamp(play);
                plays.push(play);
            }
        }
    }

    fn ensure_lineups(&mut self) {
        let foul_limit = self.config.substitution.foul_limit;
        if self.home.ensure_on_court(foul_limit) {
            self.lineup_repairs[0] += 1;
        }
        if self.away.ensure_on_court(foul_limit) {
            self.lineup_repairs[1] += 1;
        }
    }

    fn play_period(&mut self, quarter: u8, offense: &mut Side) {
        let length = self.period_length(quarter);
        let overtime = quarter > self.config.clock.quarters;
        let mut plays: Vec<Play> = Vec::with_capacity(160);
        let (home_before, away_before) = (self.home_score, self.away_score);

        if quarter > 1 {
            recover_between_periods(&mut self.home, &self.config.fatigue);
            recover_between_periods(&mut self.away, &self.config.fatigue);
        }

        let start = Play::new(PlayType::QuarterStart, self.home.id, quarter, length)
            .with_shot_clock(self.config.clock.shot_clock)
            .describe(period_label(quarter, self.config.clock.quarters, "Start of"));
        plays.push(self.stamp(start));

        if quarter > 1 {
            self.substitutions(SubstitutionCheck::Routine, quarter, length, &mut plays);
        }
        self.ensure_lineups();

        if quarter == 1 || overtime || quarter % 2 == 0 {
            let (winner, tip) = self.jump_ball(quarter, length);
            plays.push(tip);
            *offense = winner;
        }
        debug!(
            "Q{} start {}-{}, {} ball",
            quarter,
            self.home_score,
            self.away_score,
            if *offense == Side::Home { &self.home.name } else { &self.away.name }
        );

        let cfg = self.config.clone();
        let sub_interval = cfg.substitution.check_interval;
        let mut clock = length;
        let mut next_check = length - sub_interval;
        let mut final_minute_checked = false;
        let mut fast_break = false;

        while clock > CLOCK_EPSILON {
            self.ensure_lineups();

            let differential = self.score_of(*offense) as i32 - self.score_of(offense.other()) as i32;
            let ctx = PossessionContext { quarter, game_clock: clock, score_differential: differential, fast_break };
            let result = {
                let (off, def) = match *offense {
                    Side::Home => (&mut self.home, &mut self.away),
                    Side::Away => (&mut self.away, &mut self.home),
                };
                simulate_possession(off, def, &ctx, &cfg, &mut self.rng)
            };

            let offense_id = match *offense {
                Side::Home => self.home.id,
                Side::Away => self.away.id,
            };
            for play in result.plays {
                if play.team_id == offense_id
                    && matches!(play.play_type, PlayType::MadeShot | PlayType::FreeThrowMade)
                {
                    match *offense {
                        Side::Home => self.home_score += play.points as u16,
                        Side::Away => self.away_score += play.points as u16,
                    }
                }
                plays.push(self.stamp(play));
            }
            trace!(
                "Q{} {} team {} {:?} +{} ({}-{})",
                quarter,
                format_clock(clock),
                offense_id,
                result.outcome,
                result.points,
                self.home_score,
                self.away_score
            );

            clock = (clock - result.elapsed).max(0.0);
            apply_elapsed(&mut self.home, result.elapsed, &cfg.fatigue);
            apply_elapsed(&mut self.away, result.elapsed, &cfg.fatigue);

            if clock > CLOCK_EPSILON {
                self.substitutions(SubstitutionCheck::MandatoryOnly, quarter, clock, &mut plays);
                let mut routine = false;
                while clock <= next_check {
                    routine = true;
                    next_check -= sub_interval;
                }
                if !final_minute_checked && clock <= cfg.substitution.final_minute {
                    routine = true;
                    final_minute_checked = true;
                }
                if routine {
                    self.substitutions(SubstitutionCheck::Routine, quarter, clock, &mut plays);
                }
            }

            fast_break = result.next_fast_break;
            *offense = offense.other();
            if result.elapsed <= 0.0 {
                break;
            }
        }

        let end = Play::new(PlayType::QuarterEnd, self.home.id, quarter, 0.0)
            .describe(period_label(quarter, self.config.clock.quarters, "End of"));
        plays.push(self.stamp(end));
        debug!("Q{} end {}-{}", quarter, self.home_score, self.away_score);

        self.quarters.push(QuarterResult {
            quarter,
            plays,
            home_points: self.home_score - home_before,
            away_points: self.away_score - away_before,
        });
    }

    fn finish(mut self, overtime_periods: u8, home_starters: Vec<PlayerId>, away_starters: Vec<PlayerId>) -> GameResult {
        let mut aggregator = StatAggregator::new(&self.home, &self.away);
        for quarter in &self.quarters {
            aggregator.record_all(&quarter.plays);
        }
        let (totals, mut anomalies) =
            aggregator.finalize(&mut self.home, &mut self.away, self.home_score, self.away_score);
        for (team_id, repairs) in [(self.home.id, self.lineup_repairs[0]), (self.away.id, self.lineup_repairs[1])] {
            if repairs > 0 {
                anomalies.push(GameAnomaly::LineupRepaired { team_id, repairs });
            }
        }

        let forced_tiebreak = self.home_score == self.away_score;
        let winner_id = if self.home_score > self.away_score {
            self.home.id
        } else if self.away_score > self.home_score {
            self.away.id
        } else {
            let winner = if totals.away_box.fgm > totals.home_box.fgm { self.away.id } else { self.home.id };
            warn!(
                "{} vs {} still tied {}-{} after {} overtimes, awarding the game to team {}",
                self.home.name, self.away.name, self.home_score, self.away_score, overtime_periods, winner
            );
            winner
        };
        debug!(
            "Final: {} {} - {} {}{}",
            self.home.name,
            self.home_score,
            self.away_score,
            self.away.name,
            if overtime_periods > 0 { format!(" ({}OT)", overtime_periods) } else { String::new() }
        );

        let plays = self.quarters.iter().flat_map(|q| q.plays.iter().cloned()).collect();
        GameResult {
            seed: self.seed,
            home_team_id: self.home.id,
            away_team_id: self.away.id,
            home_score: self.home_score,
            away_score: self.away_score,
            winner_id,
            overtime: overtime_periods > 0,
            overtime_periods,
            forced_tiebreak,
            home_starters,
            away_starters,
            quarters: self.quarters,
            plays,
            home_box: totals.home_box,
            away_box: totals.away_box,
            home_players: totals.home_players,
            away_players: totals.away_players,
            anomalies,
        }
    }
}

fn starter_ids(team: &SimTeam) -> Vec<PlayerId> {
    team.starters.iter().map(|&idx| team.player(idx).id).collect()
}

fn jump_score(team: &SimTeam, rng: &mut GameRng) -> f32 {
    let center = team.on_court_player(team.center_slot());
    center.height as f32 + center.attributes.vertical as f32 / 10.0 + rng.gen_range(0.0..10.0)
}

fn period_label(quarter: u8, regulation: u8, prefix: &str) -> String {
    if quarter > regulation {
        let ot = quarter - regulation;
        if ot == 1 {
            format!("{} overtime", prefix)
        } else {
            format!("{} overtime {}", prefix, ot)
        }
    } else {
        format!("{} quarter {}", prefix, quarter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generator::uniform_roster;

    fn engine(home: u8, away: u8, seed: u64) -> GameEngine {
        GameEngine::from_rosters(&uniform_roster(1, "Home", home), &uniform_roster(2, "Away", away), seed)
            .unwrap()
    }

    #[test]
    fn same_seed_same_game() {
        let a = engine(75, 72, 42).simulate();
        let b = engine(75, 72, 42).simulate();
        assert_eq!(a, b);
        let c = engine(75, 72, 43).simulate();
        assert!(a.plays != c.plays);
    }

    #[test]
    fn regulation_has_four_quarters() {
        let result = engine(80, 70, 7).simulate();
        assert!(result.quarters.len() >= 4);
        assert_eq!(result.quarters.len(), 4 + result.overtime_periods as usize);
        let by_quarter: u16 = result.quarters.iter().map(|q| q.home_points).sum();
        assert_eq!(by_quarter, result.home_score);
        assert_ne!(result.home_score, result.away_score);
    }

    #[test]
    fn regulation_follows_configured_quarters() {
        let mut cfg = EngineConfig::default();
        cfg.clock.quarters = 2;
        cfg.clock.quarter_length = 1200.0;
        let result = engine(78, 72, 12).with_config(cfg).unwrap().simulate();
        assert_eq!(result.regulation_periods(), 2);
        assert_eq!(result.quarters.len(), 2 + result.overtime_periods as usize);
        assert!(result.quarters.iter().skip(2).all(|q| q.quarter > 2));
    }

    #[test]
    fn tips_open_quarters_one_two_and_four() {
        let result = engine(75, 75, 3).simulate();
        let tipped: Vec<u8> = result
            .plays
            .iter()
            .filter(|p| p.play_type == PlayType::JumpBall)
            .map(|p| p.quarter)
            .collect();
        assert!(tipped.starts_with(&[1, 2, 4]));
        assert!(!tipped.contains(&3));
    }

    #[test]
    fn overtime_cap_forces_tiebreak() {
        let mut cfg = EngineConfig::default();
        // Two zero-length overtimes can never break a tie.
        cfg.clock.max_overtime_periods = 2;
        cfg.clock.overtime_length = 0.0001;
        let mut tied = None;
        for seed in 0..400 {
            let eng = engine(70, 70, seed);
            let eng = GameEngine { config: cfg.clone(), ..eng };
            let result = eng.simulate();
            if result.overtime {
                tied = Some(result);
                break;
            }
        }
        let result = tied.expect("some game goes to overtime");
        assert!(result.forced_tiebreak);
        assert_eq!(result.overtime_periods, 2);
        assert_eq!(result.home_score, result.away_score);
        let expected = if result.away_box.fgm > result.home_box.fgm { 2 } else { 1 };
        assert_eq!(result.winner_id, expected);
    }

    #[test]
    fn short_roster_is_rejected() {
        let mut short = uniform_roster(1, "Short", 70);
        short.players.truncate(4);
        let err = GameEngine::from_rosters(&short, &uniform_roster(2, "Full", 70), 1);
        assert!(matches!(err, Err(SimError::InsufficientRoster { found: 4, .. })));
    }

    #[test]
    fn same_team_on_both_sides_is_rejected() {
        let team = uniform_roster(1, "Mirror", 70);
        let err = GameEngine::from_rosters(&team, &team, 1);
        assert!(matches!(err, Err(SimError::SameTeam { id: 1 })));

        let renamed = uniform_roster(1, "Other", 70);
        assert!(matches!(
            GameEngine::from_rosters(&team, &renamed, 1),
            Err(SimError::SameTeam { .. })
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.clock.quarters = 0;
        assert!(engine(70, 70, 1).with_config(cfg).is_err());
    }
}
