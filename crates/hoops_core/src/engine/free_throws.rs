//! Free throws: independent Bernoulli draws, one play per attempt.

use rand::Rng;

use super::config::ShotConfig;
use super::probability::trait_multiplier;
use super::GameRng;
use crate::models::attributes::norm;
use crate::models::play::{Play, PlayType};
use crate::models::player::SimPlayer;
use crate::models::roster::TeamId;
use crate::models::shot::ShotType;

/// `floor + ft/99 · (base − floor)` with `floor = ratio · base`, times a
/// 0.95..=1.0 fatigue penalty and the shooter's free-throw badges.
pub fn free_throw_probability(shooter: &SimPlayer, cfg: &ShotConfig) -> f32 {
    let base = cfg.free_throw_base;
    let floor = cfg.free_throw_floor_ratio * base;
    let mut p = floor + norm(shooter.attributes.free_throw) * (base - floor);
    p *= 1.0 - 0.05 * (shooter.fatigue.clamp(0.0, 100.0) / 100.0);
    p *= trait_multiplier(shooter, ShotType::FreeThrow);
    p.clamp(cfg.min_probability, cfg.max_probability)
}

/// Where on the clock the trip to the line happens.
#[derive(Debug, Clone, Copy)]
pub struct LineSituation {
    pub team_id: TeamId,
    pub quarter: u8,
    pub game_clock: f32,
    pub shot_clock: f32,
}

/// Shoot `attempts` free throws. Every attempt feeds the shooter's streak.
/// Returns the plays and the points scored.
pub fn shoot_free_throws(
    shooter: &mut SimPlayer,
    attempts: u8,
    at: LineSituation,
    cfg: &ShotConfig,
    rng: &mut GameRng,
) -> (Vec<Play>, u8) {
    let mut plays = Vec::with_capacity(attempts as usize);
    let mut points = 0;

    for n in 1..=attempts {
        let made = rng.gen::<f32>() < free_throw_probability(shooter, cfg);
        shooter.streak.record_shot(made, shooter.attributes.streakiness);

        let (play_type, verb) = if made {
            points += 1;
            (PlayType::FreeThrowMade, "makes")
        } else {
            (PlayType::FreeThrowMissed, "misses")
        };
        plays.push(
            Play::new(play_type, at.team_id, at.quarter, at.game_clock)
                .with_shot_clock(at.shot_clock)
                .with_primary(shooter.id)
                .with_points(if made { 1 } else { 0 })
                .describe(format!("{} {} free throw {} of {}", shooter.name, verb, n, attempts)),
        );
    }

    (plays, points)
}
