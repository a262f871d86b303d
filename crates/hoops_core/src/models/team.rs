use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::attributes::MAX_RATING;
use super::player::{PlayerId, Position, SimPlayer};
use super::roster::{TeamId, TeamRoster};
use crate::error::{Result, SimError};

pub const LINEUP_SIZE: usize = 5;

/// A team for one game.
///
/// The roster is an owned arena; starters and the on-court lineup are fixed
/// size index arrays into it, in PG..C slot order. `on_court` is mutated by
/// substitutions only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimTeam {
    pub id: TeamId,
    pub name: String,
    pub roster: Vec<SimPlayer>,
    pub starters: [usize; LINEUP_SIZE],
    pub on_court: [usize; LINEUP_SIZE],
}

impl SimTeam {
    /// Validate a roster record and build a fresh game-state team.
    pub fn from_roster(roster: &TeamRoster) -> Result<Self> {
        if roster.players.is_empty() {
            return Err(SimError::EmptyRoster { team: roster.name.clone() });
        }
        if roster.players.len() < LINEUP_SIZE {
            return Err(SimError::InsufficientRoster {
                team: roster.name.clone(),
                found: roster.players.len(),
            });
        }

        let mut seen = HashSet::with_capacity(roster.players.len());
        for record in &roster.players {
            if !seen.insert(record.id) {
                return Err(SimError::DuplicatePlayer {
                    team: roster.name.clone(),
                    player_id: record.id,
                });
            }
            if record.overall > MAX_RATING {
                return Err(SimError::InvalidAttribute {
                    player: record.name.clone(),
                    attribute: "overall",
                    value: record.overall,
                });
            }
            record.attributes.validate(&record.name)?;
        }

        let players: Vec<SimPlayer> = roster.players.iter().map(SimPlayer::from_record).collect();
        let starters = compute_starters(&players);

        let mut team = Self {
            id: roster.id,
            name: roster.name.clone(),
            roster: players,
            starters,
            on_court: starters,
        };
        team.sync_on_court_flags();
        Ok(team)
    }

    /// Roster indices not in the starting five.
    pub fn bench(&self) -> Vec<usize> {
        (0..self.roster.len()).filter(|idx| !self.starters.contains(idx)).collect()
    }

    /// Roster indices currently off the floor.
    pub fn off_court(&self) -> Vec<usize> {
        (0..self.roster.len()).filter(|idx| !self.on_court.contains(idx)).collect()
    }

    pub fn player(&self, idx: usize) -> &SimPlayer {
        &self.roster[idx]
    }

    pub fn player_mut(&mut self, idx: usize) -> &mut SimPlayer {
        &mut self.roster[idx]
    }

    pub fn on_court_player(&self, slot: usize) -> &SimPlayer {
        &self.roster[self.on_court[slot]]
    }

    pub fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.roster.iter().position(|p| p.id == id)
    }

    /// Lineup slot holding the center, or the tallest player on the floor.
    pub fn center_slot(&self) -> usize {
        (0..LINEUP_SIZE)
            .find(|&slot| self.on_court_player(slot).position == Position::C)
            .unwrap_or_else(|| {
                (0..LINEUP_SIZE)
                    .max_by_key(|&slot| self.on_court_player(slot).height)
                    .unwrap_or(LINEUP_SIZE - 1)
            })
    }

    /// Five distinct, in-range indices whose on-court flags agree.
    pub fn is_lineup_valid(&self) -> bool {
        let mut seen = [usize::MAX; LINEUP_SIZE];
        for (i, &idx) in self.on_court.iter().enumerate() {
            if idx >= self.roster.len() || seen[..i].contains(&idx) {
                return false;
            }
            seen[i] = idx;
        }
        let flagged = self.roster.iter().filter(|p| p.is_on_court).count();
        flagged == LINEUP_SIZE && self.on_court.iter().all(|&idx| self.roster[idx].is_on_court)
    }

    /// Re-derive a legal lineup from the starters (then the rest of the
    /// roster) if the current one is broken. Returns true when a repair
    /// happened.
    pub fn ensure_on_court(&mut self, foul_limit: u8) -> bool {
        if self.is_lineup_valid() {
            return false;
        }
        warn!("{}: on-court lineup invalid ({:?}), rebuilding from starters", self.name, self.on_court);

        let mut lineup: Vec<usize> = Vec::with_capacity(LINEUP_SIZE);
        for &idx in &self.starters {
            if idx < self.roster.len()
                && !lineup.contains(&idx)
                && !self.roster[idx].is_fouled_out(foul_limit)
            {
                lineup.push(idx);
            }
        }
        // Fill from the rest of the roster, best first; fouled-out players
        // only when nobody else is left.
        let mut remaining: Vec<usize> =
            (0..self.roster.len()).filter(|idx| !lineup.contains(idx)).collect();
        remaining.sort_by_key(|&idx| {
            let p = &self.roster[idx];
            (p.is_fouled_out(foul_limit), std::cmp::Reverse(p.overall))
        });
        for idx in remaining {
            if lineup.len() == LINEUP_SIZE {
                break;
            }
            lineup.push(idx);
        }

        for (slot, idx) in lineup.into_iter().enumerate() {
            self.on_court[slot] = idx;
        }
        self.sync_on_court_flags();
        true
    }

    /// Swap the player in `slot` for roster index `incoming`.
    pub fn substitute(&mut self, slot: usize, incoming: usize) {
        let outgoing = self.on_court[slot];
        self.roster[outgoing].is_on_court = false;
        self.roster[incoming].is_on_court = true;
        self.on_court[slot] = incoming;
    }

    pub fn sync_on_court_flags(&mut self) {
        for p in self.roster.iter_mut() {
            p.is_on_court = false;
        }
        for &idx in &self.on_court {
            if let Some(p) = self.roster.get_mut(idx) {
                p.is_on_court = true;
            }
        }
    }
}

/// Best available player per position (PG..C), then pad empty slots with the
/// best remaining players regardless of position.
fn compute_starters(players: &[SimPlayer]) -> [usize; LINEUP_SIZE] {
    let mut starters = [usize::MAX; LINEUP_SIZE];
    let mut used = vec![false; players.len()];

    for position in Position::LINEUP {
        let best = players
            .iter()
            .enumerate()
            .filter(|(idx, p)| !used[*idx] && p.position == position)
            .max_by_key(|(idx, p)| (p.overall, std::cmp::Reverse(*idx)))
            .map(|(idx, _)| idx);
        if let Some(idx) = best {
            starters[position.slot()] = idx;
            used[idx] = true;
        }
    }

    for slot in 0..LINEUP_SIZE {
        if starters[slot] != usize::MAX {
            continue;
        }
        let best = players
            .iter()
            .enumerate()
            .filter(|(idx, _)| !used[*idx])
            .max_by_key(|(idx, p)| (p.overall, std::cmp::Reverse(*idx)))
            .map(|(idx, _)| idx);
        if let Some(idx) = best {
            starters[slot] = idx;
            used[idx] = true;
        }
    }

    starters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generator::uniform_roster;

    #[test]
    fn starters_cover_every_position() {
        let team = SimTeam::from_roster(&uniform_roster(1, "Uniform", 75)).unwrap();
        for (slot, &idx) in team.starters.iter().enumerate() {
            assert_eq!(team.roster[idx].position.slot(), slot);
        }
        assert_eq!(team.bench().len(), team.roster.len() - LINEUP_SIZE);
        assert!(team.is_lineup_valid());
    }

    #[test]
    fn starters_pad_missing_positions() {
        let mut roster = uniform_roster(1, "No Centers", 70);
        roster.players.retain(|p| p.position != Position::C);
        let team = SimTeam::from_roster(&roster).unwrap();
        let distinct: HashSet<usize> = team.starters.iter().copied().collect();
        assert_eq!(distinct.len(), LINEUP_SIZE);
        assert!(team.starters.iter().all(|&idx| idx < team.roster.len()));
    }

    #[test]
    fn empty_and_short_rosters_are_rejected() {
        let mut roster = uniform_roster(1, "Ghosts", 70);
        roster.players.truncate(3);
        assert!(matches!(
            SimTeam::from_roster(&roster),
            Err(SimError::InsufficientRoster { found: 3, .. })
        ));
        roster.players.clear();
        assert!(matches!(SimTeam::from_roster(&roster), Err(SimError::EmptyRoster { .. })));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut roster = uniform_roster(1, "Clones", 70);
        roster.players[1].id = roster.players[0].id;
        assert!(matches!(SimTeam::from_roster(&roster), Err(SimError::DuplicatePlayer { .. })));
    }

    #[test]
    fn overall_above_99_is_rejected() {
        let mut roster = uniform_roster(1, "Inflated", 70);
        roster.players[3].overall = 120;
        match SimTeam::from_roster(&roster) {
            Err(SimError::InvalidAttribute { attribute, value, .. }) => {
                assert_eq!(attribute, "overall");
                assert_eq!(value, 120);
            }
            other => panic!("expected InvalidAttribute, got {:?}", other.map(|t| t.id)),
        }
        roster.players[3].overall = 99;
        assert!(SimTeam::from_roster(&roster).is_ok());
    }

    #[test]
    fn broken_lineup_self_heals() {
        let mut team = SimTeam::from_roster(&uniform_roster(1, "Heal", 70)).unwrap();
        team.on_court = [0, 0, 0, 99, 1];
        assert!(!team.is_lineup_valid());
        assert!(team.ensure_on_court(6));
        assert!(team.is_lineup_valid());
        assert_eq!(team.on_court, team.starters);
    }

    #[test]
    fn heal_skips_fouled_out_starters() {
        let mut team = SimTeam::from_roster(&uniform_roster(1, "Fouls", 70)).unwrap();
        let fouled = team.starters[2];
        team.roster[fouled].fouls = 6;
        team.roster[fouled].is_on_court = false;
        assert!(team.ensure_on_court(6));
        assert!(!team.on_court.contains(&fouled));
        assert!(team.is_lineup_valid());
    }
}
