use serde::{Deserialize, Serialize};

/// Shot probability model knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShotConfig {
    /// Share of the base percentage a 0-rated shooter keeps; the rest scales
    /// linearly with rating/99 (default: 0.0, pure rating/99)
    pub attribute_floor: f32,
    /// Max penalty from the contesting defender's rating when contested (default: 0.10)
    pub contest_defense_penalty: f32,
    /// Max relative random swing on a shot (default: 0.08)
    pub variance_scale: f32,
    /// Contest roll weight of ball handling minus defense (default: 0.5)
    pub contest_skill_weight: f32,
    /// Probability clamp (default: 0.02..0.98)
    pub min_probability: f32,
    pub max_probability: f32,
    /// Chance a heavily contested / smothered jump shot draws a shooting foul (default: 0.08)
    pub jump_shot_foul_rate: f32,
    /// Free throw: base percentage and floor share of it (default: 0.88, 0.65)
    pub free_throw_base: f32,
    pub free_throw_floor_ratio: f32,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            attribute_floor: 0.0,
            contest_defense_penalty: 0.10,
            variance_scale: 0.08,
            contest_skill_weight: 0.5,
            min_probability: 0.02,
            max_probability: 0.98,
            jump_shot_foul_rate: 0.08,
            free_throw_base: 0.88,
            free_throw_floor_ratio: 0.65,
        }
    }
}
