use std::fmt::Write;

use crate::delta_metrics::percentage_of_events;
use crate::event_filter::{EventFilter, shots_on_goal};
use crate::heatmap::{GridSpec, bin_event_locations};
use crate::match_stats::{compute_match_stats, default_stat_table, events_by_minute, events_by_player};
use crate::score::compute_match_score;
use crate::state::{Event, MatchContext, ScoreSummary, match_duration};

/// `"Alpha FC 2 x 1 Omega United"`, with any shootout tally in parentheses
/// after the open-play score, the way the source dashboards print it.
pub fn score_line(score: &ScoreSummary) -> String {
    format!(
        "{} {} x {} {}",
        score.home_team_name,
        side_score(score.home_team_open_play, score.home_team_penalty),
        side_score(score.away_team_open_play, score.away_team_penalty),
        score.away_team_name
    )
}

fn side_score(open_play: u32, penalty: u32) -> String {
    if penalty > 0 {
        format!("{open_play} ({penalty})")
    } else {
        open_play.to_string()
    }
}

/// The four headline metrics of the explore view: filtered count plus its
/// share of the unfiltered baseline.
pub fn metric_lines(filtered: &[Event], baseline: &[Event]) -> Vec<String> {
    let by_type = |events: &[Event], t: &str| EventFilter::new().event_type(t).apply(events);

    let mut rows = Vec::with_capacity(4);
    for (label, f, b) in [
        ("Shots", by_type(filtered, "Shot"), by_type(baseline, "Shot")),
        (
            "Shots on Goal",
            shots_on_goal(filtered, None),
            shots_on_goal(baseline, None),
        ),
        ("Passes", by_type(filtered, "Pass"), by_type(baseline, "Pass")),
        (
            "Fouls Committed",
            by_type(filtered, "Foul Committed"),
            by_type(baseline, "Foul Committed"),
        ),
    ] {
        rows.push(format!(
            "{label}: {} ({} of total)",
            f.len(),
            percentage_of_events(&f, &b)
        ));
    }
    rows
}

/// Zone-share rows for one team's carries, the possession heatmap of the
/// source. One line per grid row, cells as whole percents, or a single
/// "no location data" line when nothing binnable is left.
pub fn heatmap_lines(events: &[Event], team: &str, spec: &GridSpec) -> Vec<String> {
    let carries = EventFilter::new().event_type("Carry").team(team).apply(events);
    let Some(map) = bin_event_locations(&carries, spec) else {
        return vec!["  (no location data)".to_string()];
    };
    map.cells
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|v| format!("{:>3.0}%", v * 100.0)).collect();
            format!("  {}", cells.join(" "))
        })
        .collect()
}

/// Full plain-text report: score header with scorers, the default stat table
/// side by side, delta metrics for the filtered view, and both possession
/// grids. `baseline` is the whole match; `filtered` is whatever view the
/// caller narrowed it to (pass the same slice twice for an unfiltered
/// report).
pub fn render_match_report(ctx: &MatchContext, filtered: &[Event], baseline: &[Event]) -> String {
    let score = compute_match_score(baseline, ctx);
    let stats = compute_match_stats(
        baseline,
        default_stat_table(),
        &[ctx.home_team.as_str(), ctx.away_team.as_str()],
    );

    let mut out = String::new();
    let _ = writeln!(out, "{}", score_line(&score));
    if !score.home_team_player_goals.is_empty() {
        let _ = writeln!(out, "  {}: {}", score.home_team_name, score.home_team_player_goals);
    }
    if !score.away_team_player_goals.is_empty() {
        let _ = writeln!(out, "  {}: {}", score.away_team_name, score.away_team_player_goals);
    }
    let _ = writeln!(out, "  duration: {}'", match_duration(baseline));

    let _ = writeln!(out, "\nMatch stats");
    let home_stats = &stats[&ctx.home_team];
    let away_stats = &stats[&ctx.away_team];
    for ((name, home), (_, away)) in home_stats.iter().zip(away_stats) {
        let _ = writeln!(out, "  {home:>3}  {name:<16} {away:<3}");
    }

    let _ = writeln!(out, "\nFiltered view ({} of {} events)", filtered.len(), baseline.len());
    for line in metric_lines(filtered, baseline) {
        let _ = writeln!(out, "  {line}");
    }

    let passes = EventFilter::new().event_type("Pass").apply(filtered);
    if let Some((minute, team, n)) = events_by_minute(&passes).into_iter().max_by_key(|r| r.2) {
        let _ = writeln!(out, "  busiest passing minute: {minute}' ({team}, {n} passes)");
    }

    let _ = writeln!(out, "\nShots by player");
    for team in [ctx.home_team.as_str(), ctx.away_team.as_str()] {
        let shots = EventFilter::new().event_type("Shot").team(team).apply(filtered);
        let _ = writeln!(out, "  {team}: {}", player_tally_line(&shots));
    }

    for team in [ctx.home_team.as_str(), ctx.away_team.as_str()] {
        let _ = writeln!(out, "\nPossession zones - {team}");
        for line in heatmap_lines(filtered, team, &GridSpec::coarse()) {
            let _ = writeln!(out, "{line}");
        }
    }
    out
}

/// `"P1 x3, P2 x1"` for the busiest players in a pre-filtered view, or a
/// dash when nobody qualifies.
fn player_tally_line(events: &[Event]) -> String {
    let rows = events_by_player(events);
    if rows.is_empty() {
        return "-".to_string();
    }
    rows.iter()
        .take(5)
        .map(|(player, n)| format!("{player} x{n}"))
        .collect::<Vec<_>>()
        .join(", ")
}
