//! Possession Simulator
//!
//! One possession is a shot-clock-bounded loop. Each tick burns clock,
//! picks an offense action for the ball handler and resolves it:
//!
//! ```text
//! tick ─► shoot ─────────► make ─────────────────────────► MadeShot
//!   │                      miss ─► block? ─► rebound ─┬──► DefensiveRebound
//!   │                                                 └──► offensive: reset to 14, loop
//!   ├──► pass ─► steal / bad pass ───────────────────────► Turnover
//!   ├──► drive ─► foul ─► free throws ───────────────────► FreeThrows
//!   │           └► layup/dunk (as shoot)
//!   └──► iso / post-up / pick-and-roll ─► maybe hand off, loop
//! shot clock ≤ 0 ─► ShotClockViolation (or EndOfPeriod when the game
//!                    clock is the one that ran out)
//! ```
//!
//! On the last possession of the fourth quarter or an overtime, a team
//! down three only looks for threes and a team down one or two (or level)
//! only for twos.
//!
//! Every loop iteration burns a strictly positive amount of game clock, so
//! a possession always terminates.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::EngineConfig;
use super::debug_flags::possession_debug_enabled;
use super::free_throws::{shoot_free_throws, LineSituation};
use super::probability::{
    choose_drive_finish, choose_endgame_shot, choose_shot_type, determine_contest_level, resolve_shot,
    shot_distance, weighted_choice, ShotContext, ShotNeed,
};
use super::rebounding::resolve_rebound;
use super::GameRng;
use crate::models::attributes::norm;
use crate::models::play::{Play, PlayType, ShotInfo, TurnoverKind};
use crate::models::player::{PlayerId, Position};
use crate::models::shot::{ContestLevel, ShotType};
use crate::models::team::{SimTeam, LINEUP_SIZE};
use crate::models::traits::TraitId;

/// Time an immediate putback or tip-in takes.
const PUTBACK_TICK: (f32, f32) = (0.5, 1.5);
/// Shot/drive boost on the tick after an iso or post-up that kept the ball.
const CREATED_LOOK_BOOST: f32 = 1.6;
const CLOCK_EPSILON: f32 = 1e-3;

/// Situation at the start of a possession.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PossessionContext {
    pub quarter: u8,
    /// Seconds left in the period.
    pub game_clock: f32,
    /// Offense score minus defense score.
    pub score_differential: i32,
    pub fast_break: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PossessionOutcome {
    MadeShot,
    /// Missed shot, defense rebounded.
    DefensiveRebound,
    Turnover(TurnoverKind),
    FreeThrows,
    /// The period clock ran out before anything happened.
    EndOfPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffenseAction {
    Shoot,
    Pass,
    Drive,
    PostUp,
    PickAndRoll,
    Iso,
}

#[derive(Debug, Clone)]
pub struct PossessionResult {
    pub plays: Vec<Play>,
    pub points: u8,
    /// Game clock consumed, seconds.
    pub elapsed: f32,
    pub outcome: PossessionOutcome,
    /// The other team starts its possession on the break.
    pub next_fast_break: bool,
}

enum Step {
    Continue,
    Done(PossessionOutcome),
}

struct Possession<'a> {
    offense: &'a mut SimTeam,
    defense: &'a mut SimTeam,
    ctx: &'a PossessionContext,
    cfg: &'a EngineConfig,
    plays: Vec<Play>,
    points: u8,
    shot_clock: f32,
    clock_left: f32,
    /// Shot clock is switched off: fewer seconds left in the period than on it.
    shot_clock_off: bool,
    /// Lineup slot of the ball handler.
    handler: usize,
    /// Survives offensive rebounds.
    last_passer: Option<PlayerId>,
    passes: u8,
    after_pass: bool,
    created_look: bool,
    first_tick: bool,
    fast_break: bool,
    pending_putback: Option<ShotType>,
    next_fast_break: bool,
}

/// Run one possession for `offense` against `defense`.
///
/// Mutates per-game player state that must be live during the game (fouls,
/// streaks). Everything else is returned as plays.
pub fn simulate_possession(
    offense: &mut SimTeam,
    defense: &mut SimTeam,
    ctx: &PossessionContext,
    cfg: &EngineConfig,
    rng: &mut GameRng,
) -> PossessionResult {
    let start = ctx.game_clock.max(0.0);
    let shot_clock = cfg.clock.shot_clock.min(start);
    let handler = initial_handler(offense, rng);

    let mut possession = Possession {
        offense,
        defense,
        ctx,
        cfg,
        plays: Vec::with_capacity(8),
        points: 0,
        shot_clock,
        clock_left: start,
        shot_clock_off: cfg.clock.shot_clock >= start,
        handler,
        last_passer: None,
        passes: 0,
        after_pass: false,
        created_look: false,
        first_tick: true,
        fast_break: ctx.fast_break,
        pending_putback: None,
        next_fast_break: false,
    };

    let outcome = possession.run(rng);
    if possession_debug_enabled() {
        debug!(
            "[POSSESSION] Q{} {:.1}s team {} -> {:?}, {} pts, {} plays",
            ctx.quarter,
            ctx.game_clock,
            possession.offense.id,
            outcome,
            possession.points,
            possession.plays.len()
        );
    }

    PossessionResult {
        elapsed: (start - possession.clock_left).max(0.0),
        plays: possession.plays,
        points: possession.points,
        outcome,
        next_fast_break: possession.next_fast_break,
    }
}

/// Point guards bring it up most of the time.
fn initial_handler(offense: &SimTeam, rng: &mut GameRng) -> usize {
    let weights: Vec<(usize, f32)> = (0..LINEUP_SIZE)
        .map(|slot| {
            let p = offense.on_court_player(slot);
            let role = match p.position {
                Position::PG => 3.0,
                Position::SG => 1.5,
                Position::SF => 1.0,
                Position::PF => 0.4,
                Position::C => 0.2,
            };
            (slot, role * (0.5 + norm(p.attributes.ball_handling)))
        })
        .collect();
    weighted_choice(&weights, rng).unwrap_or(0)
}

impl<'a> Possession<'a> {
    fn run(&mut self, rng: &mut GameRng) -> PossessionOutcome {
        loop {
            if let Some(shot_type) = self.pending_putback.take() {
                let tick = rng.gen_range(PUTBACK_TICK.0..PUTBACK_TICK.1);
                if let Some(outcome) = self.burn(tick) {
                    return outcome;
                }
                match self.attempt_shot(shot_type, rng) {
                    Step::Done(outcome) => return outcome,
                    Step::Continue => continue,
                }
            }

            let tick = self.draw_tick(rng);
            if self.shot_clock - tick < 1.0
                && self.shot_clock > 1.0
                && rng.gen::<f32>() < self.cfg.possession.late_clock_shot_chance
            {
                // Get something up before the buzzer.
                if let Some(outcome) = self.burn(self.shot_clock - 0.5) {
                    return outcome;
                }
                let shot_type = self.pick_shot_type(rng);
                match self.attempt_shot(shot_type, rng) {
                    Step::Done(outcome) => return outcome,
                    Step::Continue => continue,
                }
            }
            if let Some(outcome) = self.burn(tick) {
                return outcome;
            }

            let action = self.choose_action(rng);
            if possession_debug_enabled() {
                debug!(
                    "[POSSESSION]   shot clock {:.1} handler slot {} passes {} -> {:?}",
                    self.shot_clock, self.handler, self.passes, action
                );
            }
            self.first_tick = false;

            let step = match action {
                OffenseAction::Shoot => {
                    let shot_type = self.pick_shot_type(rng);
                    self.attempt_shot(shot_type, rng)
                }
                OffenseAction::Pass => self.pass(rng),
                OffenseAction::Drive => self.drive(rng),
                OffenseAction::PostUp | OffenseAction::PickAndRoll | OffenseAction::Iso => {
                    self.set_play(action, rng)
                }
            };
            if let Step::Done(outcome) = step {
                return outcome;
            }
            self.fast_break = false;
        }
    }

    fn draw_tick(&self, rng: &mut GameRng) -> f32 {
        let clock = &self.cfg.clock;
        let (lo, hi) = if self.first_tick && self.fast_break {
            (clock.fast_break_tick_min, clock.fast_break_tick_max)
        } else if self.first_tick {
            (clock.first_tick_min, clock.first_tick_max)
        } else {
            (clock.tick_min, clock.tick_max)
        };
        if hi > lo {
            rng.gen_range(lo..hi)
        } else {
            lo
        }
    }

    /// Run both clocks down. Returns the terminal outcome if the shot clock
    /// expired.
    fn burn(&mut self, seconds: f32) -> Option<PossessionOutcome> {
        let seconds = seconds.max(0.0).min(self.shot_clock.max(0.0));
        self.shot_clock -= seconds;
        self.clock_left = (self.clock_left - seconds).max(0.0);
        if self.shot_clock > CLOCK_EPSILON {
            return None;
        }
        self.shot_clock = 0.0;
        if self.shot_clock_off || self.clock_left <= CLOCK_EPSILON {
            self.clock_left = 0.0;
            return Some(PossessionOutcome::EndOfPeriod);
        }
        let handler = self.offense.on_court_player(self.handler);
        let play = self
            .play(PlayType::Turnover, self.offense.id)
            .with_primary(handler.id)
            .with_turnover(TurnoverKind::ShotClockViolation)
            .describe(format!("{} shot clock violation", self.offense.name));
        self.plays.push(play);
        Some(PossessionOutcome::Turnover(TurnoverKind::ShotClockViolation))
    }

    fn play(&self, play_type: PlayType, team_id: u32) -> Play {
        Play::new(play_type, team_id, self.ctx.quarter, self.clock_left).with_shot_clock(self.shot_clock)
    }

    fn choose_action(&self, rng: &mut GameRng) -> OffenseAction {
        let p = &self.cfg.possession;
        let handler = self.offense.on_court_player(self.handler);
        let a = &handler.attributes;

        let mut shoot = p.shoot_weight * (0.6 + 0.8 * norm(a.jump_shooting()));
        let mut pass = p.pass_weight * (0.7 + 0.6 * norm(a.passing));
        let mut drive = p.drive_weight * (0.6 + 0.8 * norm(a.ball_handling));
        let post_role = match handler.position {
            Position::C => 1.6,
            Position::PF => 1.3,
            Position::SF => 0.7,
            Position::PG | Position::SG => 0.3,
        };
        let mut post_up = p.post_up_weight * post_role * (0.5 + norm(a.post_moves));
        let mut pick_and_roll =
            p.pick_and_roll_weight * if handler.position.is_guard() { 1.3 } else { 0.7 };
        let mut iso = p.iso_weight * (0.5 + norm(a.off_dribble));

        if self.fast_break {
            shoot *= 1.5;
            drive *= 2.0;
            pass *= 0.6;
            post_up *= 0.1;
            pick_and_roll *= 0.2;
            iso *= 0.2;
        } else if self.first_tick {
            shoot *= 0.5;
            drive *= 0.7;
        }
        if self.shot_clock <= 5.0 {
            shoot *= 3.0;
            drive *= 1.5;
            pass *= 0.3;
            post_up *= 0.2;
            pick_and_roll *= 0.2;
            iso *= 0.2;
        }
        if self.created_look {
            shoot *= CREATED_LOOK_BOOST;
            drive *= CREATED_LOOK_BOOST;
        }
        shoot *= 1.0 + 0.15 * self.passes as f32;

        let weights = [
            (OffenseAction::Shoot, shoot),
            (OffenseAction::Pass, pass),
            (OffenseAction::Drive, drive),
            (OffenseAction::PostUp, post_up),
            (OffenseAction::PickAndRoll, pick_and_roll),
            (OffenseAction::Iso, iso),
        ];
        weighted_choice(&weights, rng).unwrap_or(OffenseAction::Shoot)
    }

    fn pick_shot_type(&self, rng: &mut GameRng) -> ShotType {
        let shooter = self.offense.on_court_player(self.handler);
        match self.endgame_need() {
            ShotNeed::Any => choose_shot_type(shooter, self.after_pass, self.fast_break, self.shot_clock, rng),
            need => choose_endgame_shot(shooter, self.after_pass, self.shot_clock, need, rng),
        }
    }

    /// Last possession of regulation or overtime with the game within three.
    fn endgame_need(&self) -> ShotNeed {
        if self.ctx.quarter >= self.cfg.clock.quarters && self.shot_clock_off {
            ShotNeed::for_differential(self.ctx.score_differential)
        } else {
            ShotNeed::Any
        }
    }

    /// Any other slot, uniformly.
    fn random_teammate(&self, rng: &mut GameRng) -> usize {
        let pick = rng.gen_range(0..LINEUP_SIZE - 1);
        if pick >= self.handler {
            pick + 1
        } else {
            pick
        }
    }

    fn complete_pass(&mut self, to: usize) {
        self.last_passer = Some(self.offense.on_court_player(self.handler).id);
        self.handler = to;
        self.passes = self.passes.saturating_add(1);
        self.after_pass = true;
        self.created_look = false;
    }

    fn pass(&mut self, rng: &mut GameRng) -> Step {
        let cfg = self.cfg;
        let p = &cfg.possession;
        let receiver = self.random_teammate(rng);
        let passer = self.offense.on_court_player(self.handler);
        let defender = self.defense.on_court_player(receiver);

        let mut steal_chance = p.steal_base + p.steal_scale * norm(defender.attributes.steal);
        if let Some(tier) = defender.trait_tier(TraitId::Pickpocket) {
            steal_chance *= 1.0 + 0.3 * tier.scale();
        }
        if rng.gen::<f32>() < steal_chance {
            let steal = self
                .play(PlayType::Steal, self.defense.id)
                .with_primary(defender.id)
                .with_secondary(Some(passer.id))
                .describe(format!("{} steals the pass from {}", defender.name, passer.name));
            let turnover = self
                .play(PlayType::Turnover, self.offense.id)
                .with_primary(passer.id)
                .with_turnover(TurnoverKind::Stolen)
                .describe(format!("{} turnover (stolen)", passer.name));
            self.plays.push(steal);
            self.plays.push(turnover);
            self.next_fast_break = rng.gen::<f32>() < p.fast_break_after_steal;
            return Step::Done(PossessionOutcome::Turnover(TurnoverKind::Stolen));
        }

        let mut completion = p.pass_completion_base + p.pass_completion_scale * norm(passer.attributes.passing);
        if let Some(tier) = passer.trait_tier(TraitId::FloorGeneral) {
            completion += 0.02 * tier.scale();
        }
        if rng.gen::<f32>() >= completion {
            let turnover = self
                .play(PlayType::Turnover, self.offense.id)
                .with_primary(passer.id)
                .with_turnover(TurnoverKind::BadPass)
                .describe(format!("{} bad pass", passer.name));
            self.plays.push(turnover);
            return Step::Done(PossessionOutcome::Turnover(TurnoverKind::BadPass));
        }

        self.complete_pass(receiver);
        if self.passes >= p.pass_limit && self.shot_clock > p.forced_shot_clock {
            let run_down = self.shot_clock - p.forced_shot_clock;
            if let Some(outcome) = self.burn(run_down) {
                return Step::Done(outcome);
            }
        }
        Step::Continue
    }

    fn drive(&mut self, rng: &mut GameRng) -> Step {
        let p = &self.cfg.possession;
        let driver = self.offense.on_court_player(self.handler);
        let foul_chance = p.drive_foul_base + p.drive_foul_scale * norm(driver.attributes.draw_foul);
        if rng.gen::<f32>() < foul_chance {
            self.shooting_foul(2, "on the drive", rng);
            return Step::Done(PossessionOutcome::FreeThrows);
        }
        let finish = choose_drive_finish(driver, rng);
        self.attempt_shot(finish, rng)
    }

    fn set_play(&mut self, action: OffenseAction, rng: &mut GameRng) -> Step {
        let clock = &self.cfg.clock;
        let extra = if clock.set_play_max > clock.set_play_min {
            rng.gen_range(clock.set_play_min..clock.set_play_max)
        } else {
            clock.set_play_min
        };
        if let Some(outcome) = self.burn(extra) {
            return Step::Done(outcome);
        }

        if rng.gen::<f32>() < self.cfg.possession.set_play_pass_chance {
            let target = match action {
                // Roll man.
                OffenseAction::PickAndRoll => self.find_slot(rng, |pos| pos.is_big()),
                // Kick out.
                OffenseAction::PostUp => self.find_slot(rng, |pos| !pos.is_big()),
                _ => None,
            };
            let to = target.unwrap_or_else(|| self.random_teammate(rng));
            self.complete_pass(to);
        } else {
            self.after_pass = false;
            self.created_look = matches!(action, OffenseAction::Iso | OffenseAction::PostUp);
        }
        Step::Continue
    }

    /// A random teammate slot whose player matches `wanted`.
    fn find_slot(&self, rng: &mut GameRng, wanted: impl Fn(Position) -> bool) -> Option<usize> {
        let slots: Vec<usize> = (0..LINEUP_SIZE)
            .filter(|&slot| slot != self.handler && wanted(self.offense.on_court_player(slot).position))
            .collect();
        if slots.is_empty() {
            None
        } else {
            Some(slots[rng.gen_range(0..slots.len())])
        }
    }

    /// Foul by the handler's matchup, then `attempts` free throws.
    fn shooting_foul(&mut self, attempts: u8, how: &str, rng: &mut GameRng) {
        let shooter_idx = self.offense.on_court[self.handler];
        let fouler_idx = self.defense.on_court[self.handler];
        self.defense.player_mut(fouler_idx).fouls += 1;

        let shooter = self.offense.player(shooter_idx);
        let fouler = self.defense.player(fouler_idx);
        let foul = self
            .play(PlayType::Foul, self.defense.id)
            .with_primary(fouler.id)
            .with_secondary(Some(shooter.id))
            .describe(format!("Shooting foul on {} {}", fouler.name, how));
        self.plays.push(foul);

        let at = LineSituation {
            team_id: self.offense.id,
            quarter: self.ctx.quarter,
            game_clock: self.clock_left,
            shot_clock: self.shot_clock,
        };
        let (plays, points) =
            shoot_free_throws(self.offense.player_mut(shooter_idx), attempts, at, &self.cfg.shot, rng);
        self.plays.extend(plays);
        self.points += points;
    }

    /// Field-goal attempt by the ball handler, including the miss chain.
    fn attempt_shot(&mut self, shot_type: ShotType, rng: &mut GameRng) -> Step {
        let cfg = self.cfg;
        let slot = self.handler;
        let shooter_idx = self.offense.on_court[slot];
        let defender_idx = self.defense.on_court[slot];

        let shooter = self.offense.player(shooter_idx);
        let defender = self.defense.player(defender_idx);
        let contest = determine_contest_level(
            shooter,
            Some(defender),
            shot_type,
            self.fast_break,
            &cfg.shot,
            rng,
        );
        let distance = shot_distance(shot_type, rng);
        let shot_ctx = ShotContext {
            shot_type,
            distance,
            contest,
            shot_clock: self.shot_clock,
            game_clock: self.clock_left,
            quarter: self.ctx.quarter,
            score_differential: self.ctx.score_differential,
            fast_break: self.fast_break,
        };
        let fouled = shot_type.is_jump_shot()
            && contest >= ContestLevel::Heavy
            && rng.gen::<f32>() < cfg.shot.jump_shot_foul_rate;
        let result = resolve_shot(shooter, Some(defender), &shot_ctx, &cfg.shot, rng);

        let info = ShotInfo { shot_type, distance, contest, contested: contest.is_contested() };
        let shooter_id = shooter.id;
        let shooter_name = shooter.name.clone();
        let defender_id = defender.id;
        let defender_name = defender.name.clone();
        let defender_block = defender.attributes.block;

        if result.made {
            self.record_streak(shooter_idx, true);
            let assist = self.last_passer.filter(|&id| id != shooter_id);
            let assist_name = assist
                .and_then(|id| self.offense.index_of(id))
                .map(|idx| format!(" (assist {})", self.offense.player(idx).name))
                .unwrap_or_default();
            let made = self
                .play(PlayType::MadeShot, self.offense.id)
                .with_primary(shooter_id)
                .with_secondary(assist)
                .with_points(result.points)
                .with_shot(info)
                .describe(format!(
                    "{} makes {:.0}-foot {}{}",
                    shooter_name,
                    distance,
                    shot_type.label(),
                    assist_name
                ));
            self.plays.push(made);
            self.points += result.points;

            if fouled && result.points == 2 {
                self.shooting_foul(1, "(and one)", rng);
            }
            return Step::Done(PossessionOutcome::MadeShot);
        }

        if fouled {
            self.shooting_foul(result.points, "on the jumper", rng);
            return Step::Done(PossessionOutcome::FreeThrows);
        }

        self.record_streak(shooter_idx, false);
        let missed = self
            .play(PlayType::MissedShot, self.offense.id)
            .with_primary(shooter_id)
            .with_shot(info)
            .describe(format!("{} misses {:.0}-foot {}", shooter_name, distance, shot_type.label()));
        self.plays.push(missed);

        let p = &cfg.possession;
        let block_chance = if shot_type.is_inside() {
            p.inside_block_base + p.inside_block_scale * norm(defender_block)
        } else {
            p.jumper_block_base + p.jumper_block_scale * norm(defender_block)
        };
        if rng.gen::<f32>() < block_chance {
            let block = self
                .play(PlayType::Block, self.defense.id)
                .with_primary(defender_id)
                .with_secondary(Some(shooter_id))
                .describe(format!("{} blocks {}", defender_name, shooter_name));
            self.plays.push(block);
        }

        self.rebound(rng)
    }

    fn record_streak(&mut self, roster_idx: usize, made: bool) {
        let player = self.offense.player_mut(roster_idx);
        let streakiness = player.attributes.streakiness;
        player.streak.record_shot(made, streakiness);
    }

    fn rebound(&mut self, rng: &mut GameRng) -> Step {
        let board = resolve_rebound(&*self.offense, &*self.defense, rng);
        let cfg = self.cfg;
        let p = &cfg.possession;

        if !board.offensive {
            let rebounder = self.defense.player(board.roster_idx);
            let play = self
                .play(PlayType::DefensiveRebound, self.defense.id)
                .with_primary(rebounder.id)
                .describe(format!("{} defensive rebound", rebounder.name));
            self.plays.push(play);
            self.next_fast_break = rng.gen::<f32>() < p.fast_break_after_rebound;
            return Step::Done(PossessionOutcome::DefensiveRebound);
        }

        let rebounder = self.offense.player(board.roster_idx);
        let is_big = rebounder.position.is_big();
        let play = self
            .play(PlayType::OffensiveRebound, self.offense.id)
            .with_primary(rebounder.id)
            .describe(format!("{} offensive rebound", rebounder.name));
        self.plays.push(play);

        if let Some(slot) = self.offense.on_court.iter().position(|&idx| idx == board.roster_idx) {
            self.handler = slot;
        }
        // Same possession, fresh clock. `last_passer` carries over.
        let reset = cfg.clock.offensive_rebound_reset;
        self.shot_clock = reset.min(self.clock_left);
        self.shot_clock_off = reset >= self.clock_left;
        self.passes = 0;
        self.after_pass = false;
        self.created_look = false;
        self.fast_break = false;

        let putback_chance = if is_big { p.putback_chance_big } else { p.putback_chance_other };
        if rng.gen::<f32>() < putback_chance {
            self.pending_putback = Some(if rng.gen::<f32>() < p.tip_in_share {
                ShotType::TipIn
            } else {
                ShotType::Putback
            });
        }
        Step::Continue
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::models::generator::uniform_roster;
    use proptest::prelude::*;
    use rand::SeedableRng;

    proptest! {
        /// Property: every possession ends, scores 0..=3 and never runs past the period clock
        #[test]
        fn prop_possession_terminates(
            off_rating in 0u8..=99,
            def_rating in 0u8..=99,
            game_clock in 0.0f32..720.0,
            fast_break in any::<bool>(),
            seed in any::<u64>()
        ) {
            let mut off = SimTeam::from_roster(&uniform_roster(1, "O", off_rating)).unwrap();
            let mut def = SimTeam::from_roster(&uniform_roster(2, "D", def_rating)).unwrap();
            let ctx = PossessionContext { quarter: 2, game_clock, score_differential: 0, fast_break };
            let mut rng = GameRng::seed_from_u64(seed);
            let r = simulate_possession(&mut off, &mut def, &ctx, &EngineConfig::default(), &mut rng);
            prop_assert!(r.points <= 3);
            prop_assert!(r.elapsed <= game_clock + 1e-3);
        }
    }
}
