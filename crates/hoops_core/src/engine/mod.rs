pub mod config;
pub mod debug_flags; // Debug output gating (env-based)
pub mod fatigue;
pub mod free_throws;
pub mod game_loop;
pub mod possession;
pub mod probability;
pub mod rebounding;
pub mod stats;
pub mod streak;
pub mod substitutions;

/// Every stochastic call in the engine draws from this generator.
pub type GameRng = rand_chacha::ChaCha8Rng;

pub use config::{ClockConfig, EngineConfig, FatigueConfig, PossessionConfig, ShotConfig, SubstitutionConfig};
pub use game_loop::{GameEngine, Side};
pub use possession::{
    simulate_possession, OffenseAction, PossessionContext, PossessionOutcome, PossessionResult,
};
pub use probability::{calculate_shot_probability, determine_contest_level, ShotContext, ShotNeed, ShotOutcome};
pub use rebounding::{resolve_rebound, Rebound};
pub use stats::{GameTotals, StatAggregator};
pub use streak::{HotColdState, StreakState, StreakTier};
pub use substitutions::{run_substitutions, SubstitutionCheck};
