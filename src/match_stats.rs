use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::state::Event;

/// How a stat category counts events. Resolved once when the table is built,
/// not re-inspected per event: either a straight match on the event type, or
/// an OR over several (field, value) pairs — cards and corners are recorded
/// under different fields depending on the event type that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatRule {
    EventType(String),
    FieldEquals(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCategory {
    pub name: String,
    pub rule: StatRule,
}

impl StatCategory {
    pub fn event_type(name: &str, event_type: &str) -> Self {
        Self {
            name: name.to_string(),
            rule: StatRule::EventType(event_type.to_string()),
        }
    }

    pub fn field_equals(name: &str, pairs: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            rule: StatRule::FieldEquals(
                pairs
                    .iter()
                    .map(|(f, v)| (f.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }

    /// Events can satisfy more than one pair of an OR rule in principle;
    /// like the source tallies, each satisfied pair contributes one.
    fn count(&self, events: &[&Event]) -> u64 {
        match &self.rule {
            StatRule::EventType(want) => {
                events.iter().filter(|e| e.event_type == *want).count() as u64
            }
            StatRule::FieldEquals(pairs) => pairs
                .iter()
                .map(|(field, value)| {
                    events
                        .iter()
                        .filter(|e| e.field(field) == Some(value.as_str()))
                        .count() as u64
                })
                .sum(),
        }
    }
}

static DEFAULT_STAT_TABLE: Lazy<Vec<StatCategory>> = Lazy::new(|| {
    vec![
        StatCategory::event_type("Total Shots", "Shot"),
        StatCategory::event_type("Total Passes", "Pass"),
        StatCategory::event_type("Fouls Committed", "Foul Committed"),
        StatCategory::field_equals("Corners", &[("pass_type", "Corner")]),
        StatCategory::field_equals(
            "Yellow Cards",
            &[
                ("foul_committed_card", "Yellow Card"),
                ("bad_behaviour_card", "Yellow Card"),
            ],
        ),
        StatCategory::field_equals(
            "Red Cards",
            &[
                ("foul_committed_card", "Red Card"),
                ("bad_behaviour_card", "Red Card"),
            ],
        ),
    ]
});

pub fn default_stat_table() -> &'static [StatCategory] {
    &DEFAULT_STAT_TABLE
}

/// Per-team counts for every category in the table, in table order. `teams`
/// names the sides to tally (typically the two context teams); a requested
/// team with no events gets an all-zero row rather than being missing, and a
/// rule naming a field this schema lacks contributes zero, never an error.
pub fn compute_match_stats(
    events: &[Event],
    table: &[StatCategory],
    teams: &[&str],
) -> HashMap<String, Vec<(String, u64)>> {
    let mut stats = HashMap::with_capacity(teams.len());
    for team in teams {
        let team_events: Vec<&Event> = events
            .iter()
            .filter(|e| e.team.as_deref() == Some(*team))
            .collect();
        let counts = table
            .iter()
            .map(|cat| (cat.name.clone(), cat.count(&team_events)))
            .collect();
        stats.insert((*team).to_string(), counts);
    }
    stats
}

/// Event count per player, busiest first (ties broken by name so the order
/// is deterministic). Events with no player attached are skipped.
pub fn events_by_player(events: &[Event]) -> Vec<(String, u64)> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for event in events {
        if let Some(player) = event.player.as_deref() {
            *counts.entry(player).or_insert(0) += 1;
        }
    }
    let mut rows: Vec<(String, u64)> = counts
        .into_iter()
        .map(|(p, n)| (p.to_string(), n))
        .collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    rows
}

/// Event count per (minute, team), ordered by minute then team name. Feeds
/// timeline displays; events with no team are skipped.
pub fn events_by_minute(events: &[Event]) -> Vec<(u32, String, u64)> {
    let mut counts: HashMap<(u32, &str), u64> = HashMap::new();
    for event in events {
        if let Some(team) = event.team.as_deref() {
            *counts.entry((event.minute, team)).or_insert(0) += 1;
        }
    }
    let mut rows: Vec<(u32, String, u64)> = counts
        .into_iter()
        .map(|((m, t), n)| (m, t.to_string(), n))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(event_type: &str, team: &str, minute: u32) -> Event {
        Event {
            event_type: event_type.to_string(),
            team: Some(team.to_string()),
            player: None,
            minute,
            location: None,
            end_location: None,
            shot_outcome: None,
            shot_type: None,
            pass_type: None,
            play_pattern: None,
            foul_committed_card: None,
            bad_behaviour_card: None,
        }
    }

    fn sample() -> Vec<Event> {
        let mut events = vec![
            ev("Pass", "Alpha", 1),
            ev("Pass", "Alpha", 2),
            ev("Shot", "Alpha", 10),
            ev("Pass", "Omega", 11),
            ev("Foul Committed", "Omega", 30),
        ];
        // Corner delivered by Alpha.
        let mut corner = ev("Pass", "Alpha", 55);
        corner.pass_type = Some("Corner".to_string());
        events.push(corner);
        // Yellow for the foul, plus a dissent yellow recorded under
        // bad_behaviour for the same team.
        let mut booked = ev("Foul Committed", "Omega", 30);
        booked.foul_committed_card = Some("Yellow Card".to_string());
        events.push(booked);
        let mut dissent = ev("Bad Behaviour", "Omega", 77);
        dissent.bad_behaviour_card = Some("Yellow Card".to_string());
        events.push(dissent);
        events
    }

    #[test]
    fn default_table_counts_match_brute_force() {
        let events = sample();
        let stats = compute_match_stats(&events, default_stat_table(), &["Alpha", "Omega"]);

        let alpha = &stats["Alpha"];
        assert_eq!(alpha[0], ("Total Shots".to_string(), 1));
        assert_eq!(alpha[1], ("Total Passes".to_string(), 3));
        assert_eq!(alpha[2], ("Fouls Committed".to_string(), 0));
        assert_eq!(alpha[3], ("Corners".to_string(), 1));

        let omega = &stats["Omega"];
        assert_eq!(omega[2], ("Fouls Committed".to_string(), 2));
        // One foul yellow + one bad-behaviour yellow, OR'd into one category.
        assert_eq!(omega[4], ("Yellow Cards".to_string(), 2));
        assert_eq!(omega[5], ("Red Cards".to_string(), 0));
    }

    #[test]
    fn requested_team_without_events_gets_zero_row() {
        let events = sample();
        let stats = compute_match_stats(&events, default_stat_table(), &["Alpha", "Ghost FC"]);
        let ghost = &stats["Ghost FC"];
        assert_eq!(ghost.len(), default_stat_table().len());
        assert!(ghost.iter().all(|(_, n)| *n == 0));
    }

    #[test]
    fn unknown_field_counts_zero() {
        let events = sample();
        let table = vec![StatCategory::field_equals(
            "Offsides",
            &[("offside_flag", "True")],
        )];
        let stats = compute_match_stats(&events, &table, &["Alpha"]);
        assert_eq!(stats["Alpha"][0], ("Offsides".to_string(), 0));
    }

    #[test]
    fn output_preserves_table_order() {
        let events = sample();
        let table = vec![
            StatCategory::event_type("Z Last In Name", "Shot"),
            StatCategory::event_type("A First In Name", "Pass"),
        ];
        let stats = compute_match_stats(&events, &table, &["Alpha"]);
        let names: Vec<&str> = stats["Alpha"].iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Z Last In Name", "A First In Name"]);
    }

    #[test]
    fn player_tallies_sorted_desc_then_name() {
        let mut events = sample();
        events[0].player = Some("B".to_string());
        events[1].player = Some("B".to_string());
        events[2].player = Some("A".to_string());
        events[3].player = Some("C".to_string());
        let rows = events_by_player(&events);
        assert_eq!(rows[0], ("B".to_string(), 2));
        assert_eq!(rows[1], ("A".to_string(), 1));
        assert_eq!(rows[2], ("C".to_string(), 1));
    }

    #[test]
    fn minute_tallies_ordered() {
        let events = sample();
        let rows = events_by_minute(&events);
        assert!(rows.windows(2).all(|w| w[0].0 <= w[1].0));
        let at_30: Vec<_> = rows.iter().filter(|r| r.0 == 30).collect();
        assert_eq!(at_30.len(), 1);
        assert_eq!(at_30[0].2, 2);
    }
}
