//! Shot Probability Model
//!
//! Make probability for one field-goal attempt:
//!
//! ```text
//! p = base(shot_type)
//!   × attribute_factor(shooter rating)
//!   × contest modifier × defender penalty (contested only)
//!   × fatigue × clutch (late & close only) × (1 + variance)
//!   × Π trait multipliers
//!   × (1 + streak modifier)
//! clamp to [min_probability, max_probability]
//! ```
//!
//! Resolution is a single Bernoulli draw at `p`.

use rand::Rng;

use super::config::ShotConfig;
use super::GameRng;
use crate::models::attributes::{norm, PlayerAttributes};
use crate::models::player::{Position, SimPlayer};
use crate::models::shot::{ContestLevel, ShotSkill, ShotType};
use crate::models::traits::TraitId;

/// Clock and score situation a shot is taken in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotContext {
    pub shot_type: ShotType,
    /// Feet from the rim.
    pub distance: f32,
    pub contest: ContestLevel,
    pub shot_clock: f32,
    /// Seconds left in the period.
    pub game_clock: f32,
    pub quarter: u8,
    /// Offense score minus defense score.
    pub score_differential: i32,
    pub fast_break: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOutcome {
    pub made: bool,
    pub probability: f32,
    pub points: u8,
}

/// Base make percentage by shot type, for a shooter rated 99 before any
/// context is applied.
pub fn base_percentage(shot_type: ShotType) -> f32 {
    match shot_type {
        ShotType::Layup => 0.82,
        ShotType::Dunk => 0.95,
        ShotType::Floater => 0.60,
        ShotType::HookShot => 0.64,
        ShotType::PostFade => 0.58,
        ShotType::MidRangePullUp => 0.58,
        ShotType::MidRangeCatchAndShoot => 0.62,
        ShotType::ThreePointCatchAndShoot => 0.52,
        ShotType::ThreePointPullUp => 0.48,
        ShotType::ThreePointCorner => 0.55,
        ShotType::ThreePointStepBack => 0.46,
        ShotType::ThreePointDeep => 0.32,
        ShotType::FreeThrow => 0.88,
        ShotType::AlleyOop => 0.92,
        ShotType::Putback => 0.85,
        ShotType::TipIn => 0.75,
    }
}

/// The shooter rating that drives `shot_type`.
pub fn shooter_rating(attrs: &PlayerAttributes, shot_type: ShotType) -> u8 {
    match shot_type.skill() {
        ShotSkill::Inside => attrs.inside_scoring,
        ShotSkill::MidRange => attrs.mid_range,
        ShotSkill::ThreePoint => attrs.three_point,
        ShotSkill::FreeThrow => attrs.free_throw,
    }
}

/// The defender rating that contests `shot_type`.
pub fn relevant_defense(attrs: &PlayerAttributes, shot_type: ShotType) -> u8 {
    if shot_type.uses_interior_defense() {
        attrs.interior_defense
    } else {
        attrs.perimeter_defense
    }
}

/// `rating/99` by default. A non-zero `attribute_floor` blends toward it:
/// `floor + (1 - floor) * rating/99`.
pub fn attribute_factor(rating: u8, cfg: &ShotConfig) -> f32 {
    cfg.attribute_floor + (1.0 - cfg.attribute_floor) * norm(rating)
}

/// Five fatigue bands, fresh to exhausted.
pub fn fatigue_modifier(fatigue: f32) -> f32 {
    if fatigue < 40.0 {
        1.0
    } else if fatigue < 60.0 {
        0.97
    } else if fatigue < 75.0 {
        0.92
    } else if fatigue < 90.0 {
        0.85
    } else {
        0.75
    }
}

/// Late (≤ 2:00), fourth quarter or overtime, within five points.
pub fn is_clutch(ctx: &ShotContext) -> bool {
    ctx.game_clock <= 120.0 && ctx.quarter >= 4 && ctx.score_differential.abs() <= 5
}

/// 0.85 ..= 1.15 by clutch rating in clutch time, 1.0 otherwise.
pub fn clutch_modifier(clutch: u8, ctx: &ShotContext) -> f32 {
    if is_clutch(ctx) {
        0.85 + 0.30 * norm(clutch)
    } else {
        1.0
    }
}

/// Variance weight `1 - |consistency - 50| / 50`, floored at zero.
pub fn variance_weight(consistency: u8) -> f32 {
    (1.0 - (consistency as f32 - 50.0).abs() / 50.0).max(0.0)
}

/// Product of every equipped trait's multiplier for this shot type.
pub fn trait_multiplier(shooter: &SimPlayer, shot_type: ShotType) -> f32 {
    shooter.traits.iter().map(|t| t.shot_multiplier(shot_type)).product()
}

/// Roll how hard the shot is contested.
///
/// Fast breaks are mostly open or light. Otherwise
/// `100·U + w·(ball_handling − defense)` is bucketed into five bands.
pub fn determine_contest_level(
    shooter: &SimPlayer,
    defender: Option<&SimPlayer>,
    shot_type: ShotType,
    fast_break: bool,
    cfg: &ShotConfig,
    rng: &mut GameRng,
) -> ContestLevel {
    let defender = match defender {
        Some(d) => d,
        None => return ContestLevel::Open,
    };

    if fast_break {
        let roll: f32 = rng.gen();
        return if roll < 0.6 {
            ContestLevel::Open
        } else if roll < 0.9 {
            ContestLevel::Light
        } else {
            ContestLevel::Moderate
        };
    }

    let skill_gap = shooter.attributes.ball_handling as f32
        - relevant_defense(&defender.attributes, shot_type) as f32;
    let roll = 100.0 * rng.gen::<f32>() + cfg.contest_skill_weight * skill_gap;

    if roll > 85.0 {
        ContestLevel::Open
    } else if roll > 65.0 {
        ContestLevel::Light
    } else if roll > 40.0 {
        ContestLevel::Moderate
    } else if roll > 20.0 {
        ContestLevel::Heavy
    } else {
        ContestLevel::Smothered
    }
}

/// Make probability for one attempt, always within the configured clamp.
pub fn calculate_shot_probability(
    shooter: &SimPlayer,
    defender: Option<&SimPlayer>,
    ctx: &ShotContext,
    cfg: &ShotConfig,
    rng: &mut GameRng,
) -> f32 {
    let attrs = &shooter.attributes;
    let mut p = base_percentage(ctx.shot_type);

    p *= attribute_factor(shooter_rating(attrs, ctx.shot_type), cfg);

    p *= ctx.contest.modifier();
    if ctx.contest.is_contested() {
        if let Some(d) = defender {
            let defense = relevant_defense(&d.attributes, ctx.shot_type);
            p *= 1.0 - cfg.contest_defense_penalty * norm(defense);
        }
    }

    p *= fatigue_modifier(shooter.fatigue);
    p *= clutch_modifier(attrs.clutch, ctx);

    let swing = rng.gen_range(-1.0f32..=1.0) * cfg.variance_scale * variance_weight(attrs.consistency);
    p *= 1.0 + swing;

    p *= trait_multiplier(shooter, ctx.shot_type);
    p *= 1.0 + shooter.streak.modifier();

    if p.is_nan() {
        return cfg.min_probability;
    }
    p.clamp(cfg.min_probability, cfg.max_probability)
}

/// Probability, then one Bernoulli draw.
pub fn resolve_shot(
    shooter: &SimPlayer,
    defender: Option<&SimPlayer>,
    ctx: &ShotContext,
    cfg: &ShotConfig,
    rng: &mut GameRng,
) -> ShotOutcome {
    let probability = calculate_shot_probability(shooter, defender, ctx, cfg, rng);
    let made = rng.gen::<f32>() < probability;
    ShotOutcome { made, probability, points: ctx.shot_type.points() }
}

/// Relative shot-type weights for a half-court jumper or finish, by position.
fn position_profile(position: Position) -> [(ShotType, f32); 11] {
    use ShotType::*;
    let w = match position {
        //            lay   dunk  float hook  fade  midPU midCS 3CS   3PU   3cor  3SB
        Position::PG => [0.14, 0.02, 0.10, 0.00, 0.01, 0.12, 0.06, 0.18, 0.15, 0.06, 0.10],
        Position::SG => [0.13, 0.04, 0.07, 0.00, 0.02, 0.11, 0.09, 0.22, 0.12, 0.10, 0.10],
        Position::SF => [0.15, 0.08, 0.05, 0.02, 0.05, 0.10, 0.10, 0.20, 0.08, 0.12, 0.05],
        Position::PF => [0.20, 0.14, 0.04, 0.10, 0.10, 0.06, 0.10, 0.14, 0.02, 0.08, 0.02],
        Position::C => [0.24, 0.22, 0.02, 0.20, 0.10, 0.03, 0.08, 0.08, 0.01, 0.02, 0.00],
    };
    [
        (Layup, w[0]),
        (Dunk, w[1]),
        (Floater, w[2]),
        (HookShot, w[3]),
        (PostFade, w[4]),
        (MidRangePullUp, w[5]),
        (MidRangeCatchAndShoot, w[6]),
        (ThreePointCatchAndShoot, w[7]),
        (ThreePointPullUp, w[8]),
        (ThreePointCorner, w[9]),
        (ThreePointStepBack, w[10]),
    ]
}

/// Pick a shot type from the shooter's position profile, tilted toward the
/// shots the player's ratings favor. Catch-and-shoot looks are likelier
/// right after a pass; deep threes only show up late in the shot clock.
pub fn choose_shot_type(
    shooter: &SimPlayer,
    after_pass: bool,
    fast_break: bool,
    shot_clock: f32,
    rng: &mut GameRng,
) -> ShotType {
    let attrs = &shooter.attributes;

    if fast_break {
        let dunk_share = 0.15 + 0.5 * norm(attrs.dunk) * norm(attrs.vertical);
        let roll: f32 = rng.gen();
        return if roll < 0.70 {
            if rng.gen::<f32>() < dunk_share {
                ShotType::Dunk
            } else {
                ShotType::Layup
            }
        } else if roll < 0.85 {
            ShotType::ThreePointCatchAndShoot
        } else {
            ShotType::MidRangePullUp
        };
    }

    let weighted = half_court_weights(shooter, after_pass, shot_clock);
    weighted_choice(&weighted, rng).unwrap_or(ShotType::Layup)
}

fn half_court_weights(shooter: &SimPlayer, after_pass: bool, shot_clock: f32) -> Vec<(ShotType, f32)> {
    let attrs = &shooter.attributes;
    let mut weighted: Vec<(ShotType, f32)> = position_profile(shooter.position)
        .into_iter()
        .map(|(shot, w)| {
            let skill = 0.5 + norm(shooter_rating(attrs, shot));
            let timing = match shot {
                ShotType::ThreePointCatchAndShoot
                | ShotType::ThreePointCorner
                | ShotType::MidRangeCatchAndShoot
                    if after_pass =>
                {
                    1.6
                }
                ShotType::ThreePointPullUp | ShotType::ThreePointStepBack | ShotType::MidRangePullUp
                    if after_pass =>
                {
                    0.6
                }
                ShotType::Dunk => 0.4 + norm(attrs.dunk),
                _ => 1.0,
            };
            (shot, w * skill * timing)
        })
        .collect();

    if shot_clock <= 4.0 {
        weighted.push((ShotType::ThreePointDeep, 0.10 + 0.10 * norm(attrs.three_point)));
    }
    if after_pass && shooter.position.is_big() {
        let lob = if shooter.has_trait(TraitId::LobThreat) { 0.12 } else { 0.05 };
        weighted.push((ShotType::AlleyOop, lob * (0.5 + norm(attrs.vertical))));
    }
    weighted
}

/// The shot an offense hunts on the last possession of a close game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotNeed {
    Any,
    /// Down three.
    Three,
    /// Down one or two, or level: a two ties or wins.
    Two,
}

impl ShotNeed {
    pub fn for_differential(score_differential: i32) -> Self {
        match score_differential {
            -3 => ShotNeed::Three,
            -2..=0 => ShotNeed::Two,
            _ => ShotNeed::Any,
        }
    }

    pub fn allows(self, shot_type: ShotType) -> bool {
        match self {
            ShotNeed::Any => true,
            ShotNeed::Three => shot_type.is_three(),
            ShotNeed::Two => !shot_type.is_three(),
        }
    }
}

/// Half-court shot choice restricted to what the score calls for.
pub fn choose_endgame_shot(
    shooter: &SimPlayer,
    after_pass: bool,
    shot_clock: f32,
    need: ShotNeed,
    rng: &mut GameRng,
) -> ShotType {
    let weighted: Vec<(ShotType, f32)> = half_court_weights(shooter, after_pass, shot_clock)
        .into_iter()
        .filter(|(shot, _)| need.allows(*shot))
        .collect();
    let fallback = if need == ShotNeed::Three { ShotType::ThreePointPullUp } else { ShotType::Layup };
    weighted_choice(&weighted, rng).unwrap_or(fallback)
}

/// Layup or dunk at the end of a drive.
pub fn choose_drive_finish(driver: &SimPlayer, rng: &mut GameRng) -> ShotType {
    let attrs = &driver.attributes;
    let size = (driver.height as f32 - 72.0).max(0.0) / 12.0;
    let dunk_share = (0.10 + 0.45 * norm(attrs.dunk) * norm(attrs.vertical) + 0.25 * size).min(0.8);
    if rng.gen::<f32>() < dunk_share {
        ShotType::Dunk
    } else {
        ShotType::Layup
    }
}

/// Distance in feet, uniform within the shot type's range.
pub fn shot_distance(shot_type: ShotType, rng: &mut GameRng) -> f32 {
    let (lo, hi) = shot_type.distance_range();
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

/// Weighted draw over `(item, weight)` pairs; `None` when nothing has
/// positive weight.
pub(crate) fn weighted_choice<T: Copy>(items: &[(T, f32)], rng: &mut GameRng) -> Option<T> {
    let total: f32 = items.iter().map(|(_, w)| w.max(0.0)).sum();
    if total.is_nan() || total <= 0.0 {
        return None;
    }
    let mut roll = rng.gen::<f32>() * total;
    for &(item, w) in items {
        let w = w.max(0.0);
        if roll < w {
            return Some(item);
        }
        roll -= w;
    }
    items.iter().rev().find(|(_, w)| *w > 0.0).map(|(item, _)| *item)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::models::attributes::PlayerAttributes;
    use crate::models::roster::PlayerRecord;
    use crate::models::traits::{PlayerTrait, TraitTier};
    use proptest::prelude::*;
    use rand::SeedableRng;

    fn extreme_player(rating: u8, loaded: bool, streak: u8) -> SimPlayer {
        let mut p = SimPlayer::from_record(&PlayerRecord {
            id: 7,
            name: "Extreme".into(),
            position: Position::SF,
            height: 80,
            overall: rating,
            attributes: PlayerAttributes::uniform(rating),
            traits: Vec::new(),
        });
        if loaded {
            p.traits = TraitId::all()
                .iter()
                .map(|&id| PlayerTrait::new(id, TraitTier::HallOfFame))
                .collect();
        }
        for _ in 0..streak {
            p.streak.record_shot(true, 99);
        }
        p
    }

    proptest! {
        /// Property: probability stays inside the clamp for any input
        #[test]
        fn prop_probability_clamped(
            rating in prop_oneof![Just(0u8), Just(99u8), 0u8..=99],
            def_rating in 0u8..=99,
            shot_idx in 0usize..16,
            contest_idx in 0usize..5,
            fatigue in 0.0f32..=100.0,
            game_clock in 0.0f32..720.0,
            quarter in 1u8..=6,
            diff in -30i32..30,
            loaded in any::<bool>(),
            streak in 0u8..8,
            seed in any::<u64>()
        ) {
            let cfg = ShotConfig::default();
            let mut shooter = extreme_player(rating, loaded, streak);
            shooter.fatigue = fatigue;
            let defender = extreme_player(def_rating, false, 0);
            let contest = [
                ContestLevel::Open,
                ContestLevel::Light,
                ContestLevel::Moderate,
                ContestLevel::Heavy,
                ContestLevel::Smothered,
            ][contest_idx];
            let c = ShotContext {
                shot_type: ShotType::ALL[shot_idx],
                distance: 5.0,
                contest,
                shot_clock: 10.0,
                game_clock,
                quarter,
                score_differential: diff,
                fast_break: false,
            };
            let mut rng = GameRng::seed_from_u64(seed);
            let p = calculate_shot_probability(&shooter, Some(&defender), &c, &cfg, &mut rng);
            prop_assert!((0.02..=0.98).contains(&p));
        }
    }
}
