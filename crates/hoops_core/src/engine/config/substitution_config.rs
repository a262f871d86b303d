use serde::{Deserialize, Serialize};

/// Rotation rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SubstitutionConfig {
    /// Seconds of game time between routine checks (default: 180)
    pub check_interval: f32,
    /// A check also runs once when the period clock drops below this (default: 60)
    pub final_minute: f32,
    /// Fatigue above which a player may be replaced (default: 70)
    pub soft_fatigue: f32,
    /// Fatigue above which a player must be replaced (default: 90)
    pub mandatory_fatigue: f32,
    /// Fouls at which a player may be replaced (default: 4)
    pub soft_fouls: u8,
    /// Fouls at which a player is out of the game (default: 6)
    pub foul_limit: u8,
    /// Bench players above this fatigue are not eligible (default: 60)
    pub eligible_fatigue: f32,
    /// Replacement score weights
    pub overall_weight: f32,
    pub freshness_weight: f32,
    pub position_fit_weight: f32,
    pub foul_weight: f32,
    /// Soft swaps need replacement score > ratio * incumbent overall (default: 0.8)
    pub soft_swap_ratio: f32,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            check_interval: 180.0,
            final_minute: 60.0,
            soft_fatigue: 70.0,
            mandatory_fatigue: 90.0,
            soft_fouls: 4,
            foul_limit: 6,
            eligible_fatigue: 60.0,
            overall_weight: 0.4,
            freshness_weight: 0.3,
            position_fit_weight: 20.0,
            foul_weight: 5.0,
            soft_swap_ratio: 0.8,
        }
    }
}
