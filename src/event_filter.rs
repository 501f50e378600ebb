use crate::state::Event;

/// Conjunctive filter over an event sequence. Every predicate that is set
/// must hold for an event to pass; a predicate left unset is a pass-through,
/// not an exclusion. Events missing the field a predicate targets never
/// match it.
///
/// `apply` returns a fresh owned subsequence in the original order and leaves
/// the input untouched — delta metrics compare filtered views against the
/// pre-filter baseline, so the baseline has to survive.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    event_type: Option<String>,
    team: Option<String>,
    player: Option<String>,
    minute_range: Option<(u32, u32)>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    pub fn team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn player(mut self, player: impl Into<String>) -> Self {
        self.player = Some(player.into());
        self
    }

    /// Inclusive on both bounds.
    pub fn minutes(mut self, from: u32, to: u32) -> Self {
        self.minute_range = Some((from, to));
        self
    }

    pub fn matches(&self, event: &Event) -> bool {
        if let Some(want) = &self.event_type {
            if event.event_type != *want {
                return false;
            }
        }
        if let Some(want) = &self.team {
            if event.team.as_deref() != Some(want.as_str()) {
                return false;
            }
        }
        if let Some(want) = &self.player {
            if event.player.as_deref() != Some(want.as_str()) {
                return false;
            }
        }
        if let Some((from, to)) = self.minute_range {
            if event.minute < from || event.minute > to {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

/// Goal events: shots whose outcome is "Goal", optionally narrowed by team
/// and/or shot type. The shot-type narrowing is what separates shootout
/// penalties from open-play goals when the caller wants that split by type
/// rather than by minute.
pub fn goal_events(events: &[Event], team: Option<&str>, shot_type: Option<&str>) -> Vec<Event> {
    events
        .iter()
        .filter(|e| e.event_type == "Shot" && e.shot_outcome.as_deref() == Some("Goal"))
        .filter(|e| team.is_none_or(|t| e.team.as_deref() == Some(t)))
        .filter(|e| shot_type.is_none_or(|s| e.shot_type.as_deref() == Some(s)))
        .cloned()
        .collect()
}

const ON_GOAL_OUTCOMES: [&str; 3] = ["Goal", "Saved", "Saved to Corner"];

/// Shots that tested the keeper, optionally narrowed by team.
pub fn shots_on_goal(events: &[Event], team: Option<&str>) -> Vec<Event> {
    events
        .iter()
        .filter(|e| {
            e.shot_outcome
                .as_deref()
                .is_some_and(|o| ON_GOAL_OUTCOMES.contains(&o))
        })
        .filter(|e| team.is_none_or(|t| e.team.as_deref() == Some(t)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(event_type: &str, team: &str, player: Option<&str>, minute: u32) -> Event {
        Event {
            event_type: event_type.to_string(),
            team: Some(team.to_string()),
            player: player.map(str::to_string),
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
        vec![
            ev("Pass", "Alpha", Some("P1"), 1),
            ev("Shot", "Alpha", Some("P1"), 10),
            ev("Pass", "Omega", Some("P9"), 10),
            ev("Shot", "Omega", Some("P9"), 88),
            ev("Foul Committed", "Alpha", None, 90),
        ]
    }

    #[test]
    fn no_predicates_is_identity() {
        let events = sample();
        let out = EventFilter::new().apply(&events);
        assert_eq!(out, events);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let events = sample();
        let out = EventFilter::new()
            .event_type("Shot")
            .team("Alpha")
            .apply(&events);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].minute, 10);
    }

    #[test]
    fn minute_range_is_inclusive_both_ends() {
        let events = sample();
        let out = EventFilter::new().minutes(10, 88).apply(&events);
        assert_eq!(out.len(), 3);
        assert_eq!(out.first().unwrap().minute, 10);
        assert_eq!(out.last().unwrap().minute, 88);
    }

    #[test]
    fn missing_field_never_matches() {
        let events = sample();
        // The foul has no player, so a player predicate excludes it.
        let out = EventFilter::new().player("P1").apply(&events);
        assert!(out.iter().all(|e| e.player.as_deref() == Some("P1")));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn apply_leaves_input_untouched() {
        let events = sample();
        let before = events.clone();
        let _ = EventFilter::new().event_type("Pass").apply(&events);
        assert_eq!(events, before);
    }

    #[test]
    fn goal_events_narrow_by_team_and_shot_type() {
        let mut events = sample();
        events[1].shot_outcome = Some("Goal".to_string());
        events[1].shot_type = Some("Open Play".to_string());
        events[3].shot_outcome = Some("Goal".to_string());
        events[3].shot_type = Some("Penalty".to_string());

        assert_eq!(goal_events(&events, None, None).len(), 2);
        assert_eq!(goal_events(&events, Some("Alpha"), None).len(), 1);
        assert_eq!(goal_events(&events, None, Some("Penalty")).len(), 1);
        assert_eq!(goal_events(&events, Some("Alpha"), Some("Penalty")).len(), 0);
    }

    #[test]
    fn shots_on_goal_counts_saved_outcomes() {
        let mut events = sample();
        events[1].shot_outcome = Some("Saved".to_string());
        events[3].shot_outcome = Some("Wayward".to_string());
        let out = shots_on_goal(&events, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].team.as_deref(), Some("Alpha"));
    }
}
