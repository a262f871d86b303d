//! Player Substitution Logic
//!
//! - `run_substitutions`: walk the five lineup slots and swap out tired or
//!   foul-troubled players
//! - `replacement_score`: rank bench candidates for a slot
//!
//! Soft candidates (tired, foul trouble) only leave for a clearly better
//! replacement. Mandatory candidates (exhausted, fouled out) leave whenever
//! anyone eligible is available. A fouled-out player is replaced even by a
//! tired one; if the roster is exhausted the player stays on the floor.

use log::{debug, warn};

use super::config::SubstitutionConfig;
use crate::models::play::{Play, PlayType};
use crate::models::player::{Position, SimPlayer};
use crate::models::team::{SimTeam, LINEUP_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstitutionCheck {
    /// Periodic rotation: soft and mandatory candidates.
    Routine,
    /// Between possessions: only players who cannot stay on the floor.
    MandatoryOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Need {
    None,
    Soft,
    Mandatory,
}

fn need_for(player: &SimPlayer, cfg: &SubstitutionConfig) -> Need {
    if player.is_fouled_out(cfg.foul_limit) || player.fatigue > cfg.mandatory_fatigue {
        Need::Mandatory
    } else if player.fatigue > cfg.soft_fatigue || player.fouls >= cfg.soft_fouls {
        Need::Soft
    } else {
        Need::None
    }
}

/// `0.4·overall + 0.3·(100 − fatigue) + 20·fit + 5·(foul_limit − fouls)`
pub fn replacement_score(candidate: &SimPlayer, slot_position: Position, cfg: &SubstitutionConfig) -> f32 {
    let fouls_left = cfg.foul_limit.saturating_sub(candidate.fouls) as f32;
    cfg.overall_weight * candidate.overall as f32
        + cfg.freshness_weight * (100.0 - candidate.fatigue)
        + cfg.position_fit_weight * candidate.position.fit(slot_position)
        + cfg.foul_weight * fouls_left
}

/// Fresh enough and not fouled out.
pub fn is_eligible(candidate: &SimPlayer, cfg: &SubstitutionConfig) -> bool {
    !candidate.is_fouled_out(cfg.foul_limit) && candidate.fatigue <= cfg.eligible_fatigue
}

fn best_replacement(
    team: &SimTeam,
    slot_position: Position,
    cfg: &SubstitutionConfig,
    eligible: impl Fn(&SimPlayer) -> bool,
) -> Option<(usize, f32)> {
    team.off_court()
        .into_iter()
        .filter(|&idx| eligible(team.player(idx)))
        .map(|idx| (idx, replacement_score(team.player(idx), slot_position, cfg)))
        .max_by(|a, b| a.1.total_cmp(&b.1).then(b.0.cmp(&a.0)))
}

/// Run one substitution pass for `team`. Returns one `Substitution` play
/// per swap, stamped with the given clock.
pub fn run_substitutions(
    team: &mut SimTeam,
    check: SubstitutionCheck,
    cfg: &SubstitutionConfig,
    quarter: u8,
    game_clock: f32,
) -> Vec<Play> {
    let mut plays = Vec::new();

    for slot in 0..LINEUP_SIZE {
        let incumbent_idx = team.on_court[slot];
        let incumbent = team.player(incumbent_idx);
        let need = need_for(incumbent, cfg);
        if need == Need::None || (need == Need::Soft && check == SubstitutionCheck::MandatoryOnly) {
            continue;
        }

        let slot_position = Position::LINEUP[slot];
        let mut choice = best_replacement(team, slot_position, cfg, |p| is_eligible(p, cfg));
        if choice.is_none() && incumbent.is_fouled_out(cfg.foul_limit) {
            choice = best_replacement(team, slot_position, cfg, |p| !p.is_fouled_out(cfg.foul_limit));
        }

        let (incoming_idx, score) = match choice {
            Some(c) => c,
            None => {
                if incumbent.is_fouled_out(cfg.foul_limit) {
                    warn!(
                        "{}: no eligible replacement for fouled-out {}, staying on the floor",
                        team.name, incumbent.name
                    );
                }
                continue;
            }
        };
        if need == Need::Soft && score <= cfg.soft_swap_ratio * incumbent.overall as f32 {
            continue;
        }

        let out_id = incumbent.id;
        let out_name = incumbent.name.clone();
        team.substitute(slot, incoming_idx);
        let incoming = team.player(incoming_idx);
        debug!("{} Q{} {:.0}s: {} in for {}", team.name, quarter, game_clock, incoming.name, out_name);
        plays.push(
            Play::new(PlayType::Substitution, team.id, quarter, game_clock)
                .with_primary(incoming.id)
                .with_secondary(Some(out_id))
                .describe(format!("{} replaces {}", incoming.name, out_name)),
        );
    }

    plays
}
