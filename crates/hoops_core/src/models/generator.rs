//! Synthetic rosters for fixtures, demos and benchmarks.

use rand::seq::SliceRandom;
use rand::Rng;

use super::attributes::{PlayerAttributes, MAX_RATING};
use super::player::Position;
use super::roster::{PlayerRecord, TeamId, TeamRoster};
use super::traits::{PlayerTrait, TraitId, TraitTier};

/// Standard 12-man split: 2 PG, 3 SG, 3 SF, 2 PF, 2 C.
pub const ROSTER_POSITIONS: [Position; 12] = [
    Position::PG,
    Position::SG,
    Position::SF,
    Position::PF,
    Position::C,
    Position::PG,
    Position::SG,
    Position::SF,
    Position::PF,
    Position::C,
    Position::SG,
    Position::SF,
];

pub fn typical_height(position: Position) -> u8 {
    match position {
        Position::PG => 74,
        Position::SG => 77,
        Position::SF => 79,
        Position::PF => 81,
        Position::C => 84,
    }
}

fn player_id(team_id: TeamId, n: usize) -> u32 {
    team_id * 100 + n as u32 + 1
}

/// Twelve players, every rating equal to `overall`, no badges.
pub fn uniform_roster(id: TeamId, name: &str, overall: u8) -> TeamRoster {
    let overall = overall.min(MAX_RATING);
    let players = ROSTER_POSITIONS
        .iter()
        .enumerate()
        .map(|(n, &position)| PlayerRecord {
            id: player_id(id, n),
            name: format!("{} {:?}{}", name, position, n + 1),
            position,
            height: typical_height(position),
            overall,
            attributes: PlayerAttributes::uniform(overall),
            traits: Vec::new(),
        })
        .collect();
    TeamRoster { id, name: name.to_string(), players }
}

/// Twelve players around `mean_overall`: starters a little above it, the
/// bench below, each rating jittered, position-flavoured, with a couple of
/// random badges per player.
pub fn random_roster<R: Rng + ?Sized>(
    id: TeamId,
    name: &str,
    mean_overall: u8,
    rng: &mut R,
) -> TeamRoster {
    let players = ROSTER_POSITIONS
        .iter()
        .enumerate()
        .map(|(n, &position)| {
            let tier_offset: i16 = if n < 5 { 4 } else { -4 };
            let overall = jitter(mean_overall as i16 + tier_offset, 3, rng);
            let attributes = random_attributes(position, overall, rng);
            let height = (typical_height(position) as i16 + rng.gen_range(-2..=2)) as u8;

            let badge_count = rng.gen_range(0..=2);
            let traits = TraitId::all()
                .choose_multiple(rng, badge_count)
                .map(|&id| {
                    let tier = *[TraitTier::Bronze, TraitTier::Silver, TraitTier::Gold]
                        .choose(rng)
                        .unwrap_or(&TraitTier::Bronze);
                    PlayerTrait::new(id, tier)
                })
                .collect();

            PlayerRecord {
                id: player_id(id, n),
                name: format!("{} {:?}{}", name, position, n + 1),
                position,
                height,
                overall,
                attributes,
                traits,
            }
        })
        .collect();
    TeamRoster { id, name: name.to_string(), players }
}

fn jitter<R: Rng + ?Sized>(center: i16, spread: i16, rng: &mut R) -> u8 {
    (center + rng.gen_range(-spread..=spread)).clamp(25, MAX_RATING as i16) as u8
}

fn random_attributes<R: Rng + ?Sized>(position: Position, overall: u8, rng: &mut R) -> PlayerAttributes {
    let base = overall as i16;
    // Guards trade size for skill, bigs the other way round.
    let (skill, size) = match position {
        Position::PG => (6, -8),
        Position::SG => (5, -5),
        Position::SF => (0, 0),
        Position::PF => (-5, 5),
        Position::C => (-8, 8),
    };
    let mut a = PlayerAttributes::uniform(overall);
    let mut roll = |offset: i16| jitter(base + offset, 6, rng);

    a.three_point = roll(skill);
    a.mid_range = roll(skill / 2);
    a.free_throw = roll(skill / 2);
    a.close_shot = roll(0);
    a.shot_iq = roll(0);
    a.off_dribble = roll(skill);
    a.catch_and_shoot = roll(skill / 2);
    a.inside_scoring = roll(size / 2);
    a.layup = roll(0);
    a.dunk = roll(size);
    a.post_moves = roll(size);
    a.draw_foul = roll(0);
    a.hands = roll(0);
    a.ball_handling = roll(skill);
    a.passing = roll(skill);
    a.vision = roll(skill);
    a.pass_accuracy = roll(skill / 2);
    a.speed_with_ball = roll(skill);
    a.court_awareness = roll(0);
    a.perimeter_defense = roll(skill / 2);
    a.interior_defense = roll(size);
    a.steal = roll(skill / 2);
    a.block = roll(size);
    a.help_defense = roll(0);
    a.lateral_quickness = roll(skill / 2);
    a.pass_perception = roll(0);
    a.defensive_consistency = roll(0);
    a.offensive_rebound = roll(size);
    a.defensive_rebound = roll(size);
    a.box_out = roll(size);
    a.hustle = roll(0);
    a.speed = roll(skill);
    a.acceleration = roll(skill);
    a.strength = roll(size);
    a.vertical = roll(0);
    a.stamina = roll(0);
    a.durability = roll(0);
    a.basketball_iq = roll(0);
    a.clutch = roll(0);
    a.consistency = roll(0);
    a.work_ethic = roll(0);
    a.aggression = roll(0);
    a.composure = roll(0);
    a.streakiness = jitter(50, 30, rng);
    a
}
