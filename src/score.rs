use crate::event_filter::goal_events;
use crate::state::{Event, MatchContext, ScoreSummary};

/// Minute from which a goal counts as a penalty-shootout goal. Policy:
/// `minute >= SHOOTOUT_MINUTE` is a shootout goal, anything below is an
/// open-play or extra-time goal. The bounds are complementary so a goal at
/// exactly this minute is counted once, on the shootout side.
pub const SHOOTOUT_MINUTE: u32 = 120;

pub fn is_shootout_minute(minute: u32) -> bool {
    minute >= SHOOTOUT_MINUTE
}

/// Final score for the two context teams, split into open-play (regulation
/// plus extra time) and shootout goals, with a formatted scorer list per
/// team. A side with no goal events in the data still comes back with zeros
/// and an empty scorer string; partial match data must degrade, not fail.
pub fn compute_match_score(events: &[Event], ctx: &MatchContext) -> ScoreSummary {
    let goals = goal_events(events, None, None);

    let (home_open, home_pens) = team_goal_split(&goals, &ctx.home_team);
    let (away_open, away_pens) = team_goal_split(&goals, &ctx.away_team);

    ScoreSummary {
        home_team_name: ctx.home_team.clone(),
        home_team_open_play: home_open,
        home_team_penalty: home_pens,
        home_team_player_goals: scorer_list(&goals, &ctx.home_team),
        away_team_name: ctx.away_team.clone(),
        away_team_open_play: away_open,
        away_team_penalty: away_pens,
        away_team_player_goals: scorer_list(&goals, &ctx.away_team),
    }
}

fn team_goal_split(goals: &[Event], team: &str) -> (u32, u32) {
    let mut open_play = 0u32;
    let mut shootout = 0u32;
    for goal in goals {
        if goal.team.as_deref() != Some(team) {
            continue;
        }
        if is_shootout_minute(goal.minute) {
            shootout += 1;
        } else {
            open_play += 1;
        }
    }
    (open_play, shootout)
}

/// `"P1 (10'), P2 (45')"` — ascending by minute (stable, so same-minute goals
/// keep arrival order). Goals with no player recorded still count toward the
/// score but are left out of the list.
fn scorer_list(goals: &[Event], team: &str) -> String {
    let mut team_goals: Vec<&Event> = goals
        .iter()
        .filter(|g| g.team.as_deref() == Some(team))
        .collect();
    team_goals.sort_by_key(|g| g.minute);

    let parts: Vec<String> = team_goals
        .iter()
        .filter_map(|g| {
            g.player
                .as_deref()
                .map(|p| format!("{p} ({}')", g.minute))
        })
        .collect();
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(team: &str, player: Option<&str>, minute: u32) -> Event {
        Event {
            event_type: "Shot".to_string(),
            team: Some(team.to_string()),
            player: player.map(str::to_string),
            minute,
            location: None,
            end_location: None,
            shot_outcome: Some("Goal".to_string()),
            shot_type: None,
            pass_type: None,
            play_pattern: None,
            foul_committed_card: None,
            bad_behaviour_card: None,
        }
    }

    #[test]
    fn two_open_play_goals_one_each() {
        let events = vec![goal("Alpha", Some("P1"), 10), goal("Omega", Some("P9"), 45)];
        let score = compute_match_score(&events, &MatchContext::new("Alpha", "Omega"));
        assert_eq!(score.home_team_open_play, 1);
        assert_eq!(score.away_team_open_play, 1);
        assert_eq!(score.home_team_penalty, 0);
        assert_eq!(score.away_team_penalty, 0);
        assert_eq!(score.home_team_player_goals, "P1 (10')");
        assert_eq!(score.away_team_player_goals, "P9 (45')");
    }

    #[test]
    fn scorers_sorted_by_minute() {
        let events = vec![
            goal("Alpha", Some("Late"), 89),
            goal("Alpha", Some("Early"), 4),
        ];
        let score = compute_match_score(&events, &MatchContext::new("Alpha", "Omega"));
        assert_eq!(score.home_team_player_goals, "Early (4'), Late (89')");
    }

    #[test]
    fn minute_120_is_a_shootout_goal() {
        let events = vec![goal("Alpha", Some("P1"), 119), goal("Alpha", Some("P2"), 120)];
        let score = compute_match_score(&events, &MatchContext::new("Alpha", "Omega"));
        // Boundary policy: >= 120 is shootout, < 120 is open play.
        assert_eq!(score.home_team_open_play, 1);
        assert_eq!(score.home_team_penalty, 1);
    }

    #[test]
    fn absent_side_defaults_to_zero() {
        let events = vec![goal("Alpha", Some("P1"), 30)];
        let score = compute_match_score(&events, &MatchContext::new("Alpha", "Omega"));
        assert_eq!(score.away_team_open_play, 0);
        assert_eq!(score.away_team_penalty, 0);
        assert_eq!(score.away_team_player_goals, "");
    }

    #[test]
    fn anonymous_goal_counts_but_leaves_list() {
        let events = vec![goal("Alpha", None, 12), goal("Alpha", Some("P1"), 70)];
        let score = compute_match_score(&events, &MatchContext::new("Alpha", "Omega"));
        assert_eq!(score.home_team_open_play, 2);
        assert_eq!(score.home_team_player_goals, "P1 (70')");
    }
}
