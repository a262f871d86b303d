//! Rebounding Resolver
//!
//! One weighted draw over all ten players on the floor. Offensive weights
//! are scaled down so defensive boards dominate.

use rand::Rng;

use super::GameRng;
use crate::models::player::SimPlayer;
use crate::models::team::{SimTeam, LINEUP_SIZE};
use crate::models::traits::TraitId;

const OFFENSIVE_SCALE: f32 = 0.25;
const GLASS_CLEANER_BONUS: f32 = 1.3;
const COMPRESSION: f32 = 0.92;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rebound {
    /// Roster index within the rebounding team.
    pub roster_idx: usize,
    pub offensive: bool,
}

/// Raw rebounding weight for one candidate.
pub fn rebound_weight(player: &SimPlayer, offensive: bool) -> f32 {
    let a = &player.attributes;
    let board = if offensive { a.offensive_rebound } else { a.defensive_rebound };
    let mut w = 0.3 * board as f32
        + 0.2 * a.vertical as f32
        + 0.2 * a.strength as f32
        + 0.1 * a.basketball_iq as f32;
    w *= player.position.rebound_modifier();
    w *= player.height as f32 / 78.0;
    if player.has_trait(TraitId::GlassCleaner) {
        w *= GLASS_CLEANER_BONUS;
    }
    let mut w = w.max(0.0).powf(COMPRESSION);
    if offensive {
        w *= OFFENSIVE_SCALE;
    }
    w
}

/// Pick the rebounder after a missed shot.
pub fn resolve_rebound(offense: &SimTeam, defense: &SimTeam, rng: &mut GameRng) -> Rebound {
    let mut candidates: Vec<(Rebound, f32)> = Vec::with_capacity(2 * LINEUP_SIZE);
    for &idx in &offense.on_court {
        candidates.push((Rebound { roster_idx: idx, offensive: true }, rebound_weight(offense.player(idx), true)));
    }
    for &idx in &defense.on_court {
        candidates.push((Rebound { roster_idx: idx, offensive: false }, rebound_weight(defense.player(idx), false)));
    }

    let fallback = Rebound { roster_idx: defense.on_court[0], offensive: false };
    let total: f32 = candidates.iter().map(|(_, w)| *w).sum();
    if total.is_nan() || total <= 0.0 {
        return fallback;
    }

    let mut roll = rng.gen::<f32>() * total;
    for (rebound, w) in candidates {
        if roll < w {
            return rebound;
        }
        roll -= w;
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generator::uniform_roster;
    use crate::models::player::Position;
    use rand::SeedableRng;

    fn offensive_rebound_share(offense: &SimTeam, defense: &SimTeam) -> f32 {
        let off: f32 = offense.on_court.iter().map(|&i| rebound_weight(offense.player(i), true)).sum();
        let def: f32 = defense.on_court.iter().map(|&i| rebound_weight(defense.player(i), false)).sum();
        off / (off + def)
    }

    #[test]
    fn centers_outweigh_guards() {
        let team = SimTeam::from_roster(&uniform_roster(1, "Boards", 70)).unwrap();
        let center = team.player(team.on_court[Position::C.slot()]);
        let guard = team.player(team.on_court[Position::PG.slot()]);
        assert!(rebound_weight(center, false) > 2.0 * rebound_weight(guard, false));
    }

    #[test]
    fn defense_wins_most_boards() {
        let offense = SimTeam::from_roster(&uniform_roster(1, "O", 70)).unwrap();
        let defense = SimTeam::from_roster(&uniform_roster(2, "D", 70)).unwrap();
        let share = offensive_rebound_share(&offense, &defense);
        assert!((0.15..0.25).contains(&share), "share {}", share);

        let mut rng = GameRng::seed_from_u64(8);
        let offensive = (0..2000)
            .filter(|_| resolve_rebound(&offense, &defense, &mut rng).offensive)
            .count();
        assert!((250..550).contains(&offensive), "offensive boards {}", offensive);
    }

    #[test]
    fn rebounder_is_on_court() {
        let offense = SimTeam::from_roster(&uniform_roster(1, "O", 60)).unwrap();
        let defense = SimTeam::from_roster(&uniform_roster(2, "D", 80)).unwrap();
        let mut rng = GameRng::seed_from_u64(9);
        for _ in 0..200 {
            let r = resolve_rebound(&offense, &defense, &mut rng);
            let team = if r.offensive { &offense } else { &defense };
            assert!(team.on_court.contains(&r.roster_idx));
        }
    }
}
