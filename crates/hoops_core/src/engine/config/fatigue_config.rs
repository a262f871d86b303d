use serde::{Deserialize, Serialize};

/// Fatigue accrual and recovery (fatigue points, 0..=100).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FatigueConfig {
    /// Gain per on-court minute before the stamina factor (default: 5.0)
    pub per_minute: f32,
    /// Recovery per bench minute (default: 8.0)
    pub bench_recovery_per_minute: f32,
    /// Flat recovery for everyone between periods (default: 5.0)
    pub between_periods_recovery: f32,
    /// Accrual factor for players with the motor badge (default: 0.6)
    pub motor_factor: f32,
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            per_minute: 5.0,
            bench_recovery_per_minute: 8.0,
            between_periods_recovery: 5.0,
            motor_factor: 0.6,
        }
    }
}
