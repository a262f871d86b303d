//! Parallel slate runner.
//!
//! One game per fixture, spread over a rayon pool. Each game owns its own
//! teams and RNG, and its seed depends only on the slate seed and the
//! fixture index, so results do not depend on thread scheduling.

use log::{debug, warn};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, GameEngine};
use crate::error::Result;
use crate::models::game_result::GameResult;
use crate::models::roster::TeamRoster;

/// Number of worker threads for batch runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerPool {
    /// 0 runs on the global rayon pool.
    pub workers: usize,
}

impl WorkerPool {
    pub fn new(workers: usize) -> Self {
        Self { workers }
    }

    /// Run `f` inside this pool.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            return f();
        }
        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => pool.install(f),
            Err(e) => {
                warn!("Could not build a {}-thread pool ({}), using the global pool", self.workers, e);
                f()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    pub home: TeamRoster,
    pub away: TeamRoster,
}

impl Fixture {
    pub fn new(home: TeamRoster, away: TeamRoster) -> Self {
        Self { home, away }
    }
}

#[derive(Debug)]
pub struct SlateOutcome {
    pub index: usize,
    pub seed: u64,
    pub result: Result<GameResult>,
}

/// SplitMix64 finalizer over `slate_seed + index`.
pub fn game_seed(slate_seed: u64, index: usize) -> u64 {
    let mut z = slate_seed.wrapping_add((index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn play_fixture(fixture: &Fixture, seed: u64, config: &EngineConfig) -> Result<GameResult> {
    let engine = GameEngine::from_rosters(&fixture.home, &fixture.away, seed)?.with_config(config.clone())?;
    Ok(engine.simulate())
}

/// Simulate every fixture. Outcomes come back in fixture order; a failing
/// game only fails its own slot.
pub fn simulate_slate(
    fixtures: &[Fixture],
    seed: u64,
    config: &EngineConfig,
    pool: WorkerPool,
) -> Vec<SlateOutcome> {
    debug!("Slate: {} games, seed {}, {} workers", fixtures.len(), seed, pool.workers);
    pool.install(|| {
        fixtures
            .par_iter()
            .enumerate()
            .map(|(index, fixture)| {
                let game_seed = game_seed(seed, index);
                let result = play_fixture(fixture, game_seed, config);
                if let Err(e) = &result {
                    warn!("Fixture {} ({} vs {}) failed: {}", index, fixture.home.name, fixture.away.name, e);
                }
                SlateOutcome { index, seed: game_seed, result }
            })
            .collect()
    })
}

/// Aggregate numbers over a set of finished games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: usize,
    pub failed: usize,
    pub home_wins: usize,
    pub away_wins: usize,
    pub home_win_rate: f64,
    pub away_win_rate: f64,
    pub avg_home_score: f64,
    pub avg_away_score: f64,
    pub avg_total_score: f64,
    pub overtime_games: usize,
    pub overtime_rate: f64,
    pub forced_tiebreaks: usize,
    pub anomalies: usize,
}

impl SeriesSummary {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a GameResult>) -> Self {
        let mut s = Self::default();
        let (mut home_points, mut away_points) = (0u64, 0u64);
        for r in results {
            s.games += 1;
            if r.home_won() {
                s.home_wins += 1;
            } else {
                s.away_wins += 1;
            }
            if r.overtime {
                s.overtime_games += 1;
            }
            if r.forced_tiebreak {
                s.forced_tiebreaks += 1;
            }
            s.anomalies += r.anomalies.len();
            home_points += r.home_score as u64;
            away_points += r.away_score as u64;
        }
        if s.games > 0 {
            let n = s.games as f64;
            s.home_win_rate = s.home_wins as f64 / n;
            s.away_win_rate = s.away_wins as f64 / n;
            s.avg_home_score = home_points as f64 / n;
            s.avg_away_score = away_points as f64 / n;
            s.avg_total_score = (home_points + away_points) as f64 / n;
            s.overtime_rate = s.overtime_games as f64 / n;
        }
        s
    }

    /// Summary of a slate; failed games are counted but not aggregated.
    pub fn from_outcomes(outcomes: &[SlateOutcome]) -> Self {
        let mut s = Self::from_results(outcomes.iter().filter_map(|o| o.result.as_ref().ok()));
        s.failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generator::uniform_roster;

    fn fixtures(n: usize) -> Vec<Fixture> {
        (0..n)
            .map(|_| Fixture::new(uniform_roster(1, "Home", 76), uniform_roster(2, "Away", 72)))
            .collect()
    }

    #[test]
    fn seeds_are_distinct_and_stable() {
        let seeds: Vec<u64> = (0..100).map(|i| game_seed(7, i)).collect();
        let mut dedup = seeds.clone();
        dedup.sort_unstable();
        dedup.dedup();
        assert_eq!(dedup.len(), 100);
        assert_eq!(game_seed(7, 3), seeds[3]);
        assert_ne!(game_seed(7, 3), game_seed(8, 3));
    }

    #[test]
    fn slate_is_independent_of_worker_count() {
        let slate = fixtures(6);
        let cfg = EngineConfig::default();
        let single = simulate_slate(&slate, 99, &cfg, WorkerPool::new(1));
        let many = simulate_slate(&slate, 99, &cfg, WorkerPool::new(4));
        assert_eq!(single.len(), 6);
        for (a, b) in single.iter().zip(&many) {
            assert_eq!(a.index, b.index);
            assert_eq!(a.result.as_ref().unwrap(), b.result.as_ref().unwrap());
        }
    }

    #[test]
    fn one_bad_fixture_does_not_sink_the_slate() {
        let mut slate = fixtures(3);
        slate[1].away.players.truncate(2);
        let outcomes = simulate_slate(&slate, 5, &EngineConfig::default(), WorkerPool::default());
        assert!(outcomes[0].result.is_ok());
        assert!(outcomes[1].result.is_err());
        assert!(outcomes[2].result.is_ok());
        let summary = SeriesSummary::from_outcomes(&outcomes);
        assert_eq!((summary.games, summary.failed), (2, 1));
    }

    #[test]
    fn summary_rates_add_up() {
        let outcomes = simulate_slate(&fixtures(8), 1, &EngineConfig::default(), WorkerPool::default());
        let s = SeriesSummary::from_outcomes(&outcomes);
        assert_eq!(s.home_wins + s.away_wins, 8);
        assert!((s.home_win_rate + s.away_win_rate - 1.0).abs() < 1e-9);
        assert!((s.avg_total_score - s.avg_home_score - s.avg_away_score).abs() < 1e-9);
        assert_eq!(s.anomalies, 0);
    }

    #[test]
    fn empty_summary_is_zeroed() {
        let s = SeriesSummary::from_results(std::iter::empty());
        assert_eq!(s, SeriesSummary::default());
    }
}
