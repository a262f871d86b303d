//! Hot/Cold Streak Tracker
//!
//! Per-player shooting streak, updated once per shot attempt (free throws
//! included). The ladder is strictly ordered:
//!
//! `IceCold < Cold < Normal < Warm < Hot < OnFire`
//!
//! - Climbing needs N consecutive makes per rung; N depends on the rung and
//!   on the player's streakiness tier.
//! - A miss while `OnFire` always drops straight to `Hot`.
//! - Every other cooling step needs two or more consecutive misses.
//! - Players below 30 streakiness are pinned between `Cold` and `Warm`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HotColdState {
    IceCold,
    Cold,
    #[default]
    Normal,
    Warm,
    Hot,
    OnFire,
}

impl HotColdState {
    /// Additive shooting modifier, applied as `(1 + modifier)`.
    pub fn modifier(self) -> f32 {
        match self {
            HotColdState::IceCold => -0.20,
            HotColdState::Cold => -0.10,
            HotColdState::Normal => 0.0,
            HotColdState::Warm => 0.08,
            HotColdState::Hot => 0.15,
            HotColdState::OnFire => 0.25,
        }
    }

    fn rung(self) -> usize {
        self as usize
    }

    fn from_rung(rung: usize) -> Self {
        match rung {
            0 => HotColdState::IceCold,
            1 => HotColdState::Cold,
            2 => HotColdState::Normal,
            3 => HotColdState::Warm,
            4 => HotColdState::Hot,
            _ => HotColdState::OnFire,
        }
    }
}

/// Streakiness bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTier {
    /// 80+
    VeryStreaky,
    /// 65..80
    Streaky,
    /// 45..65
    Average,
    /// 30..45
    Steady,
    /// below 30
    Immovable,
}

/// Never reached: marks a rung the tier cannot leave in that direction.
const LOCKED: u8 = u8::MAX;

impl StreakTier {
    pub fn from_streakiness(streakiness: u8) -> Self {
        match streakiness {
            80.. => StreakTier::VeryStreaky,
            65..=79 => StreakTier::Streaky,
            45..=64 => StreakTier::Average,
            30..=44 => StreakTier::Steady,
            _ => StreakTier::Immovable,
        }
    }

    /// Consecutive makes needed to climb out of each rung (IceCold..Hot).
    fn climb_thresholds(self) -> [u8; 5] {
        match self {
            StreakTier::VeryStreaky => [1, 1, 2, 2, 2],
            StreakTier::Streaky => [2, 2, 2, 3, 3],
            StreakTier::Average => [2, 2, 3, 3, 4],
            StreakTier::Steady => [2, 3, 4, 4, 5],
            StreakTier::Immovable => [2, 3, 5, LOCKED, LOCKED],
        }
    }

    /// Consecutive misses needed to fall out of each rung (Cold..OnFire).
    /// The `OnFire` entry is ignored: a single miss always breaks it.
    fn fall_thresholds(self) -> [u8; 5] {
        match self {
            StreakTier::VeryStreaky => [2, 2, 2, 2, 1],
            StreakTier::Streaky => [3, 3, 2, 2, 1],
            StreakTier::Average => [4, 3, 3, 2, 1],
            StreakTier::Steady => [5, 4, 3, 3, 1],
            StreakTier::Immovable => [LOCKED, 5, 3, 3, 1],
        }
    }

    fn climb_needed(self, state: HotColdState) -> u8 {
        match state {
            HotColdState::OnFire => LOCKED,
            s => self.climb_thresholds()[s.rung()],
        }
    }

    fn fall_needed(self, state: HotColdState) -> u8 {
        match state {
            HotColdState::IceCold => LOCKED,
            s => self.fall_thresholds()[s.rung() - 1],
        }
    }
}

/// One player's streak bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StreakState {
    pub state: HotColdState,
    pub consecutive_makes: u8,
    pub consecutive_misses: u8,
}

impl StreakState {
    pub fn modifier(&self) -> f32 {
        self.state.modifier()
    }

    /// Fold one shot attempt into the streak.
    pub fn record_shot(&mut self, made: bool, streakiness: u8) {
        let tier = StreakTier::from_streakiness(streakiness);
        if made {
            self.consecutive_misses = 0;
            self.consecutive_makes = self.consecutive_makes.saturating_add(1);
            let needed = tier.climb_needed(self.state);
            if needed != LOCKED && self.consecutive_makes >= needed {
                self.state = HotColdState::from_rung(self.state.rung() + 1);
                self.consecutive_makes = 0;
            }
        } else {
            self.consecutive_makes = 0;
            self.consecutive_misses = self.consecutive_misses.saturating_add(1);
            if self.state == HotColdState::OnFire {
                self.state = HotColdState::Hot;
                self.consecutive_misses = 0;
                return;
            }
            let needed = tier.fall_needed(self.state);
            if needed != LOCKED && self.consecutive_misses >= needed {
                self.state = HotColdState::from_rung(self.state.rung() - 1);
                self.consecutive_misses = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(streakiness: u8, shots: &[bool]) -> StreakState {
        let mut s = StreakState::default();
        for &made in shots {
            s.record_shot(made, streakiness);
        }
        s
    }

    #[test]
    fn starts_normal() {
        let s = StreakState::default();
        assert_eq!(s.state, HotColdState::Normal);
        assert_eq!(s.modifier(), 0.0);
    }

    #[test]
    fn very_streaky_climbs_fast() {
        let s = run(90, &[true; 6]);
        assert_eq!(s.state, HotColdState::OnFire);
    }

    #[test]
    fn on_fire_single_miss_drops_to_hot() {
        let mut s = run(90, &[true; 6]);
        assert_eq!(s.state, HotColdState::OnFire);
        s.record_shot(false, 90);
        assert_eq!(s.state, HotColdState::Hot);
        assert_eq!(s.consecutive_misses, 0);
    }

    #[test]
    fn cooling_needs_two_misses() {
        // Average: Normal -> Warm after 3 makes.
        let mut s = run(55, &[true, true, true]);
        assert_eq!(s.state, HotColdState::Warm);
        s.record_shot(false, 55);
        assert_eq!(s.state, HotColdState::Warm);
        s.record_shot(false, 55);
        assert_eq!(s.state, HotColdState::Normal);
    }

    #[test]
    fn make_resets_miss_counter() {
        let mut s = run(55, &[false, false, false]);
        assert_eq!(s.consecutive_misses, 3);
        s.record_shot(true, 55);
        assert_eq!(s.consecutive_misses, 0);
        assert_eq!(s.consecutive_makes, 1);
    }

    #[test]
    fn immovable_is_capped() {
        let hot = run(10, &[true; 50]);
        assert_eq!(hot.state, HotColdState::Warm);
        let cold = run(10, &[false; 50]);
        assert_eq!(cold.state, HotColdState::Cold);
    }

    #[test]
    fn modifiers_are_ordered() {
        let states = [
            HotColdState::IceCold,
            HotColdState::Cold,
            HotColdState::Normal,
            HotColdState::Warm,
            HotColdState::Hot,
            HotColdState::OnFire,
        ];
        for pair in states.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].modifier() < pair[1].modifier());
        }
    }

    #[test]
    fn tiers_bucket_streakiness() {
        assert_eq!(StreakTier::from_streakiness(80), StreakTier::VeryStreaky);
        assert_eq!(StreakTier::from_streakiness(79), StreakTier::Streaky);
        assert_eq!(StreakTier::from_streakiness(45), StreakTier::Average);
        assert_eq!(StreakTier::from_streakiness(30), StreakTier::Steady);
        assert_eq!(StreakTier::from_streakiness(29), StreakTier::Immovable);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a miss while on fire lands on exactly `Hot`
        #[test]
        fn prop_on_fire_miss_lands_on_hot(
            streakiness in 0u8..=99,
            history in proptest::collection::vec(any::<bool>(), 0..80)
        ) {
            let mut s = StreakState::default();
            for made in history {
                let before = s.state;
                s.record_shot(made, streakiness);
                if before == HotColdState::OnFire && !made {
                    prop_assert_eq!(s.state, HotColdState::Hot);
                }
            }
        }

        /// Property: at most one rung per update
        #[test]
        fn prop_single_step_transitions(
            streakiness in 0u8..=99,
            history in proptest::collection::vec(any::<bool>(), 0..80)
        ) {
            let mut s = StreakState::default();
            for made in history {
                let before = s.state as i32;
                s.record_shot(made, streakiness);
                prop_assert!((s.state as i32 - before).abs() <= 1);
            }
        }

        /// Property: immovable shooters stay between Cold and Warm
        #[test]
        fn prop_immovable_bounded(
            streakiness in 0u8..30,
            history in proptest::collection::vec(any::<bool>(), 0..120)
        ) {
            let mut s = StreakState::default();
            for made in history {
                s.record_shot(made, streakiness);
                prop_assert!(s.state >= HotColdState::Cold && s.state <= HotColdState::Warm);
            }
        }
    }
}
