use serde::{Deserialize, Serialize};

/// Possession state machine knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PossessionConfig {
    // === Action weights (before attribute/context scaling) ===
    pub shoot_weight: f32,
    pub pass_weight: f32,
    pub drive_weight: f32,
    pub post_up_weight: f32,
    pub pick_and_roll_weight: f32,
    pub iso_weight: f32,

    // === Passing ===
    /// Steal chance = base + scale * steal/99 (default: 0.035 + 0.045)
    pub steal_base: f32,
    pub steal_scale: f32,
    /// Completion = base + scale * passing/99 (default: 0.87 + 0.08)
    pub pass_completion_base: f32,
    pub pass_completion_scale: f32,
    /// Passes after which the shot clock is run down (default: 6)
    pub pass_limit: u8,
    /// Shot clock left once the pass limit forces a shot (default: 4)
    pub forced_shot_clock: f32,
    /// Chance the ball handler gets a shot off when the next tick would
    /// run out the shot clock (default: 0.85)
    pub late_clock_shot_chance: f32,

    // === Drives ===
    /// Shooting foul on a drive = base + scale * draw_foul/99 (default: 0.06 + 0.14)
    pub drive_foul_base: f32,
    pub drive_foul_scale: f32,

    // === Set plays ===
    /// Iso / post-up / pick-and-roll hands the ball off (default: 0.35)
    pub set_play_pass_chance: f32,

    // === Blocks (on a miss) ===
    pub inside_block_base: f32,
    pub inside_block_scale: f32,
    pub jumper_block_base: f32,
    pub jumper_block_scale: f32,

    // === Transition ===
    /// Fast break chance after a steal / after a defensive rebound (default: 0.55 / 0.12)
    pub fast_break_after_steal: f32,
    pub fast_break_after_rebound: f32,

    // === Second chances ===
    /// Immediate putback attempt after an offensive rebound, bigs / others (default: 0.45 / 0.25)
    pub putback_chance_big: f32,
    pub putback_chance_other: f32,
    /// Share of immediate second-chance attempts that are tip-ins (default: 0.25)
    pub tip_in_share: f32,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self {
            shoot_weight: 0.20,
            pass_weight: 0.34,
            drive_weight: 0.12,
            post_up_weight: 0.07,
            pick_and_roll_weight: 0.12,
            iso_weight: 0.08,

            steal_base: 0.035,
            steal_scale: 0.045,
            pass_completion_base: 0.87,
            pass_completion_scale: 0.08,
            pass_limit: 6,
            forced_shot_clock: 4.0,
            late_clock_shot_chance: 0.85,

            drive_foul_base: 0.06,
            drive_foul_scale: 0.14,

            set_play_pass_chance: 0.35,

            inside_block_base: 0.03,
            inside_block_scale: 0.12,
            jumper_block_base: 0.01,
            jumper_block_scale: 0.03,

            fast_break_after_steal: 0.55,
            fast_break_after_rebound: 0.12,

            putback_chance_big: 0.45,
            putback_chance_other: 0.25,
            tip_in_share: 0.25,
        }
    }
}
