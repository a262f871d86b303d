//! Player ratings.
//!
//! Every rating is an integer in `0..=99`. Ratings never change during a game;
//! all in-game variation (fatigue, streaks) lives on `SimPlayer`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

pub const MAX_RATING: u8 = 99;

/// Full rating sheet, grouped the way scouting reports group them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    // === Shooting (7) ===
    pub three_point: u8,
    pub mid_range: u8,
    pub free_throw: u8,
    pub close_shot: u8,
    pub shot_iq: u8,
    pub off_dribble: u8,
    pub catch_and_shoot: u8,

    // === Finishing (6) ===
    pub inside_scoring: u8,
    pub layup: u8,
    pub dunk: u8,
    pub post_moves: u8,
    pub draw_foul: u8,
    pub hands: u8,

    // === Playmaking (6) ===
    pub ball_handling: u8,
    pub passing: u8,
    pub vision: u8,
    pub pass_accuracy: u8,
    pub speed_with_ball: u8,
    pub court_awareness: u8,

    // === Defense (8) ===
    pub perimeter_defense: u8,
    pub interior_defense: u8,
    pub steal: u8,
    pub block: u8,
    pub help_defense: u8,
    pub lateral_quickness: u8,
    pub pass_perception: u8,
    pub defensive_consistency: u8,

    // === Rebounding (4) ===
    pub offensive_rebound: u8,
    pub defensive_rebound: u8,
    pub box_out: u8,
    pub hustle: u8,

    // === Physical (6) ===
    pub speed: u8,
    pub acceleration: u8,
    pub strength: u8,
    pub vertical: u8,
    pub stamina: u8,
    pub durability: u8,

    // === Mental (7) ===
    pub basketball_iq: u8,
    pub clutch: u8,
    pub consistency: u8,
    pub work_ethic: u8,
    pub aggression: u8,
    pub streakiness: u8,
    pub composure: u8,
}

impl PlayerAttributes {
    /// Every rating set to `value` (clamped to 99). Handy for fixtures and
    /// generated rosters.
    pub fn uniform(value: u8) -> Self {
        let v = value.min(MAX_RATING);
        Self {
            three_point: v,
            mid_range: v,
            free_throw: v,
            close_shot: v,
            shot_iq: v,
            off_dribble: v,
            catch_and_shoot: v,
            inside_scoring: v,
            layup: v,
            dunk: v,
            post_moves: v,
            draw_foul: v,
            hands: v,
            ball_handling: v,
            passing: v,
            vision: v,
            pass_accuracy: v,
            speed_with_ball: v,
            court_awareness: v,
            perimeter_defense: v,
            interior_defense: v,
            steal: v,
            block: v,
            help_defense: v,
            lateral_quickness: v,
            pass_perception: v,
            defensive_consistency: v,
            offensive_rebound: v,
            defensive_rebound: v,
            box_out: v,
            hustle: v,
            speed: v,
            acceleration: v,
            strength: v,
            vertical: v,
            stamina: v,
            durability: v,
            basketball_iq: v,
            clutch: v,
            consistency: v,
            work_ethic: v,
            aggression: v,
            streakiness: v,
            composure: v,
        }
    }

    /// Name/value pairs for every rating, in declaration order.
    pub fn named(&self) -> [(&'static str, u8); 44] {
        [
            ("three_point", self.three_point),
            ("mid_range", self.mid_range),
            ("free_throw", self.free_throw),
            ("close_shot", self.close_shot),
            ("shot_iq", self.shot_iq),
            ("off_dribble", self.off_dribble),
            ("catch_and_shoot", self.catch_and_shoot),
            ("inside_scoring", self.inside_scoring),
            ("layup", self.layup),
            ("dunk", self.dunk),
            ("post_moves", self.post_moves),
            ("draw_foul", self.draw_foul),
            ("hands", self.hands),
            ("ball_handling", self.ball_handling),
            ("passing", self.passing),
            ("vision", self.vision),
            ("pass_accuracy", self.pass_accuracy),
            ("speed_with_ball", self.speed_with_ball),
            ("court_awareness", self.court_awareness),
            ("perimeter_defense", self.perimeter_defense),
            ("interior_defense", self.interior_defense),
            ("steal", self.steal),
            ("block", self.block),
            ("help_defense", self.help_defense),
            ("lateral_quickness", self.lateral_quickness),
            ("pass_perception", self.pass_perception),
            ("defensive_consistency", self.defensive_consistency),
            ("offensive_rebound", self.offensive_rebound),
            ("defensive_rebound", self.defensive_rebound),
            ("box_out", self.box_out),
            ("hustle", self.hustle),
            ("speed", self.speed),
            ("acceleration", self.acceleration),
            ("strength", self.strength),
            ("vertical", self.vertical),
            ("stamina", self.stamina),
            ("durability", self.durability),
            ("basketball_iq", self.basketball_iq),
            ("clutch", self.clutch),
            ("consistency", self.consistency),
            ("work_ethic", self.work_ethic),
            ("aggression", self.aggression),
            ("streakiness", self.streakiness),
            ("composure", self.composure),
        ]
    }

    /// Reject any rating above 99.
    pub fn validate(&self, player: &str) -> Result<()> {
        match self.named().into_iter().find(|(_, value)| *value > MAX_RATING) {
            Some((attribute, value)) => {
                Err(SimError::InvalidAttribute { player: player.to_string(), attribute, value })
            }
            None => Ok(()),
        }
    }

    /// Best pure jump-shooting rating, used when weighing `shoot` actions.
    pub fn jump_shooting(&self) -> u8 {
        self.three_point.max(self.mid_range)
    }
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self::uniform(50)
    }
}

/// Normalize a 0..=99 rating to 0.0..=1.0.
#[inline]
pub fn norm(rating: u8) -> f32 {
    rating.min(MAX_RATING) as f32 / MAX_RATING as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_clamps_to_max_rating() {
        let attrs = PlayerAttributes::uniform(120);
        assert!(attrs.named().iter().all(|(_, v)| *v == MAX_RATING));
        assert!(attrs.validate("clamped").is_ok());
    }

    #[test]
    fn validate_reports_offending_attribute() {
        let mut attrs = PlayerAttributes::uniform(70);
        attrs.vertical = 140;
        match attrs.validate("Jumper") {
            Err(SimError::InvalidAttribute { attribute, value, .. }) => {
                assert_eq!(attribute, "vertical");
                assert_eq!(value, 140);
            }
            other => panic!("expected InvalidAttribute, got {:?}", other),
        }
    }

    #[test]
    fn norm_maps_rating_range() {
        assert_eq!(norm(0), 0.0);
        assert!((norm(99) - 1.0).abs() < f32::EPSILON);
    }
}
