use serde::{Deserialize, Serialize};

/// Period lengths and clock rules, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockConfig {
    /// Regulation quarter length (default: 720)
    pub quarter_length: f32,
    /// Regulation quarters (default: 4)
    pub quarters: u8,
    /// Overtime period length (default: 300)
    pub overtime_length: f32,
    /// Overtime periods before the deterministic tiebreak (default: 10)
    pub max_overtime_periods: u8,
    /// Full shot clock (default: 24)
    pub shot_clock: f32,
    /// Shot clock after an offensive rebound (default: 14)
    pub offensive_rebound_reset: f32,
    /// First tick of a half-court possession: ball brought up (default: 6..10)
    pub first_tick_min: f32,
    pub first_tick_max: f32,
    /// First tick of a fast break (default: 2..4)
    pub fast_break_tick_min: f32,
    pub fast_break_tick_max: f32,
    /// Every later tick (default: 3..6)
    pub tick_min: f32,
    pub tick_max: f32,
    /// Extra time burned by iso / post-up / pick-and-roll sets (default: 1.5..3.5)
    pub set_play_min: f32,
    pub set_play_max: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            quarter_length: 720.0,
            quarters: 4,
            overtime_length: 300.0,
            max_overtime_periods: 10,
            shot_clock: 24.0,
            offensive_rebound_reset: 14.0,
            first_tick_min: 6.0,
            first_tick_max: 10.0,
            fast_break_tick_min: 2.0,
            fast_break_tick_max: 4.0,
            tick_min: 3.0,
            tick_max: 6.0,
            set_play_min: 1.5,
            set_play_max: 3.5,
        }
    }
}
