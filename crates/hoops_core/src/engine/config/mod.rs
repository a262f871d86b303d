//! # Engine Configuration
//!
//! Every tuning constant the engine reads lives here, grouped by the
//! component that reads it. Groups are `#[serde(default)]`, so a config file
//! only has to name the knobs it changes.
//!
//! ```rust
//! use hoops_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let run_and_gun = EngineConfig::fast_paced();
//! assert!(config.validate().is_ok() && run_and_gun.validate().is_ok());
//! ```

mod clock_config;
mod fatigue_config;
mod possession_config;
mod shot_config;
mod substitution_config;

pub use clock_config::ClockConfig;
pub use fatigue_config::FatigueConfig;
pub use possession_config::PossessionConfig;
pub use shot_config::ShotConfig;
pub use substitution_config::SubstitutionConfig;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SimError};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EngineConfig {
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub shot: ShotConfig,
    #[serde(default)]
    pub possession: PossessionConfig,
    #[serde(default)]
    pub fatigue: FatigueConfig,
    #[serde(default)]
    pub substitution: SubstitutionConfig,
}

impl EngineConfig {
    /// Default tuning.
    pub fn realistic() -> Self {
        Self::default()
    }

    /// Quicker possessions, more transition.
    pub fn fast_paced() -> Self {
        let mut cfg = Self::default();
        cfg.clock.first_tick_min = 5.0;
        cfg.clock.first_tick_max = 8.0;
        cfg.clock.tick_min = 2.5;
        cfg.clock.tick_max = 5.0;
        cfg.possession.fast_break_after_rebound = 0.22;
        cfg.possession.fast_break_after_steal = 0.70;
        cfg.possession.shoot_weight = 0.28;
        cfg
    }

    /// Ratings pulled toward the middle: every shooter keeps a third of the
    /// base percentage, so weak lineups stay competitive.
    pub fn compressed() -> Self {
        let mut cfg = Self::default();
        cfg.shot.attribute_floor = 0.35;
        cfg
    }

    /// Read a YAML (`.yaml`/`.yml`) or JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {}", path.display(), e)))?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        );
        let cfg: Self = if is_yaml {
            serde_yaml::from_str(&text).map_err(|e| SimError::Config(e.to_string()))?
        } else {
            serde_json::from_str(&text).map_err(|e| SimError::Config(e.to_string()))?
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings that would stall or break the game loop.
    pub fn validate(&self) -> Result<()> {
        let c = &self.clock;
        if c.quarters == 0 || c.quarter_length <= 0.0 || c.overtime_length <= 0.0 {
            return Err(SimError::Config("periods must have positive length".into()));
        }
        if c.shot_clock <= 0.0 || c.offensive_rebound_reset <= 0.0 {
            return Err(SimError::Config("shot clock values must be positive".into()));
        }
        if c.tick_min <= 0.0 || c.tick_min > c.tick_max || c.first_tick_min > c.first_tick_max {
            return Err(SimError::Config("tick ranges must be positive and ordered".into()));
        }
        if c.fast_break_tick_min <= 0.0 || c.fast_break_tick_min > c.fast_break_tick_max {
            return Err(SimError::Config("fast break tick range must be positive and ordered".into()));
        }
        if c.set_play_min < 0.0 || c.set_play_min > c.set_play_max {
            return Err(SimError::Config("set play range must be ordered".into()));
        }
        let s = &self.shot;
        if !(0.0..=1.0).contains(&s.min_probability)
            || !(0.0..=1.0).contains(&s.max_probability)
            || s.min_probability > s.max_probability
        {
            return Err(SimError::Config("shot probability clamp must lie in 0..=1".into()));
        }
        if !(0.0..=1.0).contains(&s.attribute_floor) {
            return Err(SimError::Config("attribute floor must lie in 0..=1".into()));
        }
        let p = &self.possession;
        let weights = [
            p.shoot_weight,
            p.pass_weight,
            p.drive_weight,
            p.post_up_weight,
            p.pick_and_roll_weight,
            p.iso_weight,
        ];
        if weights.iter().any(|w| *w < 0.0) || weights.iter().sum::<f32>() <= 0.0 {
            return Err(SimError::Config("action weights must be non-negative and not all zero".into()));
        }
        let sub = &self.substitution;
        if sub.check_interval <= 0.0 || sub.foul_limit == 0 {
            return Err(SimError::Config("substitution interval and foul limit must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(EngineConfig::realistic().validate().is_ok());
        assert!(EngineConfig::fast_paced().validate().is_ok());
        assert!(EngineConfig::compressed().validate().is_ok());
    }

    #[test]
    fn only_the_compressed_preset_has_a_floor() {
        assert_eq!(EngineConfig::default().shot.attribute_floor, 0.0);
        assert_eq!(EngineConfig::fast_paced().shot.attribute_floor, 0.0);
        assert!(EngineConfig::compressed().shot.attribute_floor > 0.0);

        let mut cfg = EngineConfig::default();
        cfg.shot.attribute_floor = 1.5;
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg: EngineConfig = serde_yaml::from_str("clock:\n  quarter_length: 600\n").unwrap();
        assert_eq!(cfg.clock.quarter_length, 600.0);
        assert_eq!(cfg.clock.shot_clock, 24.0);
        assert_eq!(cfg.substitution, SubstitutionConfig::default());
    }

    #[test]
    fn inverted_clamp_is_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.shot.min_probability = 0.9;
        cfg.shot.max_probability = 0.1;
        assert!(matches!(cfg.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn zero_length_quarter_is_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.clock.quarter_length = 0.0;
        assert!(cfg.validate().is_err());
    }
}
