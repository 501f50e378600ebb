use serde::{Deserialize, Serialize};

/// One recorded action within a match. The category set is open-ended (the
/// data source keeps adding event types), so `event_type` stays a string
/// rather than a closed enum. Everything that is not guaranteed to be present
/// on every event is `Option`, and "field absent" is a first-class state the
/// filters and counters check explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub player: Option<String>,
    pub minute: u32,
    #[serde(default)]
    pub location: Option<(f64, f64)>,
    #[serde(default)]
    pub end_location: Option<(f64, f64)>,
    #[serde(default)]
    pub shot_outcome: Option<String>,
    #[serde(default)]
    pub shot_type: Option<String>,
    #[serde(default)]
    pub pass_type: Option<String>,
    #[serde(default)]
    pub play_pattern: Option<String>,
    #[serde(default)]
    pub foul_committed_card: Option<String>,
    #[serde(default)]
    pub bad_behaviour_card: Option<String>,
}

impl Event {
    /// Best-effort lookup of a string-valued field by name. Stat categories
    /// reference fields by name (the same rule table is reused across data
    /// vintages with different schemas); a name this schema does not carry is
    /// `None`, which counters treat as a zero contribution.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "type" => Some(self.event_type.as_str()),
            "team" => self.team.as_deref(),
            "player" => self.player.as_deref(),
            "shot_outcome" => self.shot_outcome.as_deref(),
            "shot_type" => self.shot_type.as_deref(),
            "pass_type" => self.pass_type.as_deref(),
            "play_pattern" => self.play_pattern.as_deref(),
            "foul_committed_card" => self.foul_committed_card.as_deref(),
            "bad_behaviour_card" => self.bad_behaviour_card.as_deref(),
            _ => None,
        }
    }
}

/// Which match an analysis call is about. Passed explicitly into each call;
/// the core keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchContext {
    #[serde(default)]
    pub competition_id: Option<u32>,
    #[serde(default)]
    pub season_id: Option<u32>,
    #[serde(default)]
    pub match_id: Option<u64>,
    pub home_team: String,
    pub away_team: String,
}

impl MatchContext {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Self {
        Self {
            competition_id: None,
            season_id: None,
            match_id: None,
            home_team: home_team.into(),
            away_team: away_team.into(),
        }
    }
}

/// Final score with the open-play / shootout split and formatted scorer lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub home_team_name: String,
    pub home_team_open_play: u32,
    pub home_team_penalty: u32,
    pub home_team_player_goals: String,
    pub away_team_name: String,
    pub away_team_open_play: u32,
    pub away_team_penalty: u32,
    pub away_team_player_goals: String,
}

/// Nominal match duration: the highest minute any event carries. May exceed
/// 90/120 for stoppage time; 0 for an empty event set.
pub fn match_duration(events: &[Event]) -> u32 {
    events.iter().map(|e| e.minute).max().unwrap_or(0)
}
