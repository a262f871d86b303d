//! Plain-text rendering of results.

use std::fmt::Write;

use hoops_core::models::play::format_clock;
use hoops_core::models::{PlayerBoxScore, TeamBoxScore};
use hoops_core::{GameResult, PlayType, SeriesSummary};

fn period_name(quarter: u8, regulation: u8) -> String {
    if quarter <= regulation {
        format!("Q{}", quarter)
    } else {
        format!("OT{}", quarter - regulation)
    }
}

/// Final score with a per-period line.
pub fn scoreline(result: &GameResult, home: &str, away: &str) -> String {
    let mut out = String::new();
    let mut header = format!("{:<16}", "");
    let mut home_row = format!("{:<16}", home);
    let mut away_row = format!("{:<16}", away);
    for q in &result.quarters {
        let _ = write!(header, "{:>5}", period_name(q.quarter, result.regulation_periods()));
        let _ = write!(home_row, "{:>5}", q.home_points);
        let _ = write!(away_row, "{:>5}", q.away_points);
    }
    let _ = writeln!(out, "{}{:>7}", header, "T");
    let _ = writeln!(out, "{}{:>7}", home_row, result.home_score);
    let _ = writeln!(out, "{}{:>7}", away_row, result.away_score);

    let winner = if result.home_won() { home } else { away };
    if result.forced_tiebreak {
        let _ = writeln!(out, "Tied after the overtime cap; {} takes the tiebreak", winner);
    } else {
        let _ = writeln!(out, "{} wins by {}", winner, result.margin().unsigned_abs());
    }
    out.push('\n');
    out
}

fn shooting(made: u16, attempted: u16) -> String {
    format!("{}-{}", made, attempted)
}

fn player_row(out: &mut String, p: &PlayerBoxScore) {
    let _ = writeln!(
        out,
        "{:<22}{:>5.1}{:>5}{:>7}{:>7}{:>7}{:>5}{:>5}{:>5}{:>5}{:>5}{:>5}",
        p.name,
        p.minutes,
        p.points,
        shooting(p.fgm, p.fga),
        shooting(p.tpm, p.tpa),
        shooting(p.ftm, p.fta),
        p.rebounds(),
        p.ast,
        p.stl,
        p.blk,
        p.tov,
        p.pf,
    );
}

fn team_section(out: &mut String, team: &TeamBoxScore, players: &[PlayerBoxScore]) {
    let _ = writeln!(out, "{}", team.name);
    let _ = writeln!(
        out,
        "{:<22}{:>5}{:>5}{:>7}{:>7}{:>7}{:>5}{:>5}{:>5}{:>5}{:>5}{:>5}",
        "", "MIN", "PTS", "FG", "3P", "FT", "REB", "AST", "STL", "BLK", "TOV", "PF"
    );
    for p in players.iter().filter(|p| p.minutes > 0.0) {
        player_row(out, p);
    }
    let _ = writeln!(
        out,
        "{:<22}{:>5}{:>5}{:>7}{:>7}{:>7}{:>5}{:>5}{:>5}{:>5}{:>5}{:>5}",
        "Totals",
        "",
        team.points,
        shooting(team.fgm, team.fga),
        shooting(team.tpm, team.tpa),
        shooting(team.ftm, team.fta),
        team.rebounds(),
        team.ast,
        team.stl,
        team.blk,
        team.tov,
        team.pf,
    );
    let _ = writeln!(
        out,
        "FG {:.1}%  3P {:.1}%  FT {:.1}%  OREB {}",
        team.fg_pct() * 100.0,
        team.three_pct() * 100.0,
        team.ft_pct() * 100.0,
        team.oreb,
    );
    out.push('\n');
}

pub fn box_score(result: &GameResult) -> String {
    let mut out = String::new();
    team_section(&mut out, &result.away_box, &result.away_players);
    team_section(&mut out, &result.home_box, &result.home_players);
    out
}

/// One line per play, skipping the period bookkeeping entries.
pub fn play_by_play(result: &GameResult) -> String {
    let mut out = String::new();
    for quarter in &result.quarters {
        let _ = writeln!(out, "--- {} ---", period_name(quarter.quarter, result.regulation_periods()));
        for play in &quarter.plays {
            if matches!(play.play_type, PlayType::QuarterStart | PlayType::QuarterEnd) {
                continue;
            }
            let _ = writeln!(
                out,
                "{:>6}  {:>3}-{:<3}  {}",
                format_clock(play.game_clock),
                play.away_score,
                play.home_score,
                play.description,
            );
        }
    }
    out
}

pub fn series(summary: &SeriesSummary, home: &str, away: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} games", summary.games);
    let _ = writeln!(
        out,
        "{:<16}{:>6} wins ({:.1}%)  avg {:.1}",
        home,
        summary.home_wins,
        summary.home_win_rate * 100.0,
        summary.avg_home_score
    );
    let _ = writeln!(
        out,
        "{:<16}{:>6} wins ({:.1}%)  avg {:.1}",
        away,
        summary.away_wins,
        summary.away_win_rate * 100.0,
        summary.avg_away_score
    );
    let _ = writeln!(out, "Average total: {:.1}", summary.avg_total_score);
    let _ = writeln!(
        out,
        "Overtime: {} ({:.1}%)",
        summary.overtime_games,
        summary.overtime_rate * 100.0
    );
    if summary.forced_tiebreaks > 0 {
        let _ = writeln!(out, "Forced tiebreaks: {}", summary.forced_tiebreaks);
    }
    if summary.anomalies > 0 {
        let _ = writeln!(out, "Anomalies: {}", summary.anomalies);
    }
    if summary.failed > 0 {
        let _ = writeln!(out, "Failed games: {}", summary.failed);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoops_core::models::generator::uniform_roster;
    use hoops_core::GameEngine;

    fn game() -> GameResult {
        let home = uniform_roster(1, "Home", 75);
        let away = uniform_roster(2, "Away", 75);
        GameEngine::from_rosters(&home, &away, 3).unwrap().simulate()
    }

    #[test]
    fn scoreline_shows_every_period_and_the_final() {
        let r = game();
        let text = scoreline(&r, "Home", "Away");
        assert!(text.contains("Q1") && text.contains("Q4"));
        let home_line = text.lines().nth(1).unwrap();
        assert!(home_line.trim_end().ends_with(&r.home_score.to_string()));
    }

    #[test]
    fn box_score_lists_totals_for_both_teams() {
        let r = game();
        let text = box_score(&r);
        assert_eq!(text.matches("Totals").count(), 2);
        assert!(text.contains(&shooting(r.home_box.fgm, r.home_box.fga)));
    }

    #[test]
    fn play_by_play_skips_period_markers() {
        let r = game();
        let text = play_by_play(&r);
        let markers = text.lines().filter(|l| l.starts_with("---")).count();
        assert_eq!(markers, r.quarters.len());
        assert!(text.lines().count() > 100);
    }

    #[test]
    fn overtime_periods_are_named() {
        assert_eq!(period_name(4, 4), "Q4");
        assert_eq!(period_name(6, 4), "OT2");
        assert_eq!(period_name(3, 2), "OT1");
    }
}
