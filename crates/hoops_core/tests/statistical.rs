//! Many-game statistical checks. These run whole slates, so they are the
//! slowest tests in the crate.

use hoops_core::batch::{simulate_slate, Fixture, SeriesSummary, WorkerPool};
use hoops_core::models::generator::uniform_roster;
use hoops_core::EngineConfig;

fn slate(home_overall: u8, away_overall: u8, games: usize) -> Vec<Fixture> {
    (0..games)
        .map(|_| {
            Fixture::new(
                uniform_roster(1, "Home", home_overall),
                uniform_roster(2, "Away", away_overall),
            )
        })
        .collect()
}

#[test]
fn even_matchup_is_fair() {
    let outcomes = simulate_slate(&slate(75, 75, 2000), 2024, &EngineConfig::default(), WorkerPool::default());
    let summary = SeriesSummary::from_outcomes(&outcomes);
    assert_eq!(summary.games, 2000);
    assert!(
        (0.45..=0.55).contains(&summary.home_win_rate),
        "home win rate {}",
        summary.home_win_rate
    );
    assert!(
        (0.02..=0.12).contains(&summary.overtime_rate),
        "overtime rate {}",
        summary.overtime_rate
    );
    assert_eq!(summary.forced_tiebreaks, 0);
    assert_eq!(summary.anomalies, 0);
}

#[test]
fn stronger_team_wins_big_majority() {
    let outcomes = simulate_slate(&slate(85, 65, 100), 85, &EngineConfig::default(), WorkerPool::default());
    let summary = SeriesSummary::from_outcomes(&outcomes);
    assert_eq!(summary.games, 100);
    assert!(summary.home_wins >= 90, "85-rated side won {} of 100", summary.home_wins);
    assert!(
        (185.0..=240.0).contains(&summary.avg_total_score),
        "average combined score {}",
        summary.avg_total_score
    );

    for outcome in &outcomes {
        let result = outcome.result.as_ref().unwrap();
        for p in result.home_players.iter().chain(&result.away_players) {
            if p.minutes > 0.0 {
                assert!(p.fga >= p.fgm);
            }
        }
    }
}

#[test]
fn strength_is_symmetric_home_and_away() {
    let outcomes = simulate_slate(&slate(65, 85, 100), 86, &EngineConfig::default(), WorkerPool::default());
    let summary = SeriesSummary::from_outcomes(&outcomes);
    assert!(summary.away_wins >= 90, "85-rated side won {} of 100", summary.away_wins);
}

#[test]
fn fast_paced_preset_scores_more() {
    let games = slate(75, 75, 100);
    let normal = SeriesSummary::from_outcomes(&simulate_slate(
        &games,
        9,
        &EngineConfig::realistic(),
        WorkerPool::default(),
    ));
    let fast = SeriesSummary::from_outcomes(&simulate_slate(
        &games,
        9,
        &EngineConfig::fast_paced(),
        WorkerPool::default(),
    ));
    assert!(fast.avg_total_score > normal.avg_total_score);
}
