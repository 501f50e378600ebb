use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::state::Event;

/// Parse a StatsBomb-style events payload into the core data model.
///
/// Accepts both the raw open-data shape (nested objects: `type.name`,
/// `shot.outcome.name`, `pass.type.name`, `foul_committed.card.name`,
/// 3-element shot end locations) and the flattened export shape
/// (`"type": "Shot"`, `"shot_outcome": "Goal"`). Everything is best-effort:
/// an event failing the basic shape checks (no type, no minute) is skipped
/// and the rest of the payload still parses, a malformed location is dropped
/// field-by-field. Only invalid JSON or a non-array top level is an error.
pub fn parse_events_json(raw: &str) -> Result<Vec<Event>> {
    let root: Value = serde_json::from_str(raw.trim()).context("invalid events json")?;
    let Some(rows) = root.as_array() else {
        bail!("events json is not an array");
    };

    let mut events = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(event) = parse_event(row) {
            events.push(event);
        }
    }
    Ok(events)
}

fn parse_event(row: &Value) -> Option<Event> {
    let event_type = pick_string(row, &["type"])?;
    let minute = pick_u32(row, &["minute"])?;

    let location = parse_location(row.get("location"));
    let end_location = if location.is_some() {
        parse_end_location(row)
    } else {
        // Keep the pair both-present or both-absent; a dangling end point is
        // useless to the binning and the arrow maps alike.
        None
    };

    Some(Event {
        event_type,
        team: pick_string(row, &["team"]),
        player: pick_string(row, &["player"]),
        minute,
        location,
        end_location,
        shot_outcome: pick_nested(row, "shot", "outcome").or_else(|| pick_string(row, &["shot_outcome"])),
        shot_type: pick_nested(row, "shot", "type").or_else(|| pick_string(row, &["shot_type"])),
        pass_type: pick_nested(row, "pass", "type").or_else(|| pick_string(row, &["pass_type"])),
        play_pattern: pick_string(row, &["play_pattern"]),
        foul_committed_card: pick_nested(row, "foul_committed", "card")
            .or_else(|| pick_string(row, &["foul_committed_card"])),
        bad_behaviour_card: pick_nested(row, "bad_behaviour", "card")
            .or_else(|| pick_string(row, &["bad_behaviour_card"])),
    })
}

/// End locations live under the sub-object of whichever directional event
/// this is (shot, pass, carry) in the raw shape, or under a flattened
/// `*_end_location` column.
fn parse_end_location(row: &Value) -> Option<(f64, f64)> {
    for group in ["shot", "pass", "carry"] {
        if let Some(sub) = row.get(group) {
            if let Some(pair) = parse_location(sub.get("end_location")) {
                return Some(pair);
            }
        }
        let flat = format!("{group}_end_location");
        if let Some(pair) = parse_location(row.get(flat.as_str())) {
            return Some(pair);
        }
    }
    None
}

/// A location has to start with two finite numbers; shot end locations carry
/// a third (z) component that is ignored. Anything else is treated as absent.
fn parse_location(value: Option<&Value>) -> Option<(f64, f64)> {
    let arr = value?.as_array()?;
    if arr.len() < 2 {
        return None;
    }
    let x = arr[0].as_f64().filter(|v| v.is_finite())?;
    let y = arr[1].as_f64().filter(|v| v.is_finite())?;
    Some((x, y))
}

fn pick_nested(row: &Value, group: &str, key: &str) -> Option<String> {
    pick_string(row.get(group)?, &[key])
}

fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(name) = as_string(v) {
                return Some(name);
            }
        }
    }
    None
}

fn pick_u32(value: &Value, keys: &[&str]) -> Option<u32> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(num) = v.as_u64() {
                return Some(num as u32);
            }
            if let Some(s) = v.as_str() {
                if let Ok(num) = s.trim().parse::<u32>() {
                    return Some(num);
                }
            }
        }
    }
    None
}

fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s).map(str::to_string),
        Value::Object(map) => {
            if let Some(Value::String(name)) = map.get("name") {
                return non_empty(name).map(str::to_string);
            }
            None
        }
        _ => None,
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
