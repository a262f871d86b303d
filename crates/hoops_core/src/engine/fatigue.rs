//! Fatigue and minutes bookkeeping.
//!
//! Applied by the game loop after every possession with the game clock the
//! possession consumed. Fatigue is clamped to 0..=100.

use super::config::FatigueConfig;
use crate::models::player::SimPlayer;
use crate::models::team::SimTeam;
use crate::models::traits::TraitId;

/// Fatigue gained per on-court minute for this player.
pub fn accrual_rate(player: &SimPlayer, cfg: &FatigueConfig) -> f32 {
    let stamina_factor = 2.0 - player.attributes.stamina as f32 / 100.0;
    let mut rate = cfg.per_minute * stamina_factor;
    if player.has_trait(TraitId::Motor) {
        rate *= cfg.motor_factor;
    }
    rate
}

/// Charge `seconds` of game time to every player on the roster: minutes
/// and fatigue for the five on the floor, recovery for the bench.
pub fn apply_elapsed(team: &mut SimTeam, seconds: f32, cfg: &FatigueConfig) {
    if seconds <= 0.0 {
        return;
    }
    let minutes = seconds / 60.0;
    for player in team.roster.iter_mut() {
        if player.is_on_court {
            player.minutes_played += minutes;
            let gain = accrual_rate(player, cfg) * minutes;
            player.fatigue = (player.fatigue + gain).min(100.0);
        } else {
            player.fatigue = (player.fatigue - cfg.bench_recovery_per_minute * minutes).max(0.0);
        }
    }
}

/// Flat recovery for everyone between periods.
pub fn recover_between_periods(team: &mut SimTeam, cfg: &FatigueConfig) {
    for player in team.roster.iter_mut() {
        player.fatigue = (player.fatigue - cfg.between_periods_recovery).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generator::uniform_roster;
    use crate::models::traits::{PlayerTrait, TraitTier};

    fn team() -> SimTeam {
        SimTeam::from_roster(&uniform_roster(1, "Legs", 70)).unwrap()
    }

    #[test]
    fn starters_tire_and_bench_recovers() {
        let cfg = FatigueConfig::default();
        let mut t = team();
        let bench = t.bench()[0];
        t.roster[bench].fatigue = 30.0;
        apply_elapsed(&mut t, 120.0, &cfg);

        let starter = &t.roster[t.on_court[0]];
        assert!((starter.minutes_played - 2.0).abs() < 1e-4);
        // 5/min * (2 - 0.7) * 2 min
        assert!((starter.fatigue - 13.0).abs() < 1e-3);
        assert!((t.roster[bench].fatigue - 14.0).abs() < 1e-3);
        assert_eq!(t.roster[bench].minutes_played, 0.0);
    }

    #[test]
    fn motor_slows_accrual() {
        let cfg = FatigueConfig::default();
        let mut t = team();
        let plain = accrual_rate(&t.roster[0], &cfg);
        t.roster[0].traits.push(PlayerTrait::new(TraitId::Motor, TraitTier::Bronze));
        let motor = accrual_rate(&t.roster[0], &cfg);
        assert!((motor / plain - cfg.motor_factor).abs() < 1e-4);
    }

    #[test]
    fn fatigue_is_clamped() {
        let cfg = FatigueConfig::default();
        let mut t = team();
        apply_elapsed(&mut t, 60.0 * 60.0, &cfg);
        assert!(t.roster.iter().all(|p| (0.0..=100.0).contains(&p.fatigue)));
        recover_between_periods(&mut t, &cfg);
        assert!(t.roster.iter().all(|p| p.fatigue >= 0.0));
    }
}
