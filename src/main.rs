use std::env;
use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};

use pitchside::event_filter::EventFilter;
use pitchside::report::render_match_report;
use pitchside::state::{Event, MatchContext};
use pitchside::statsbomb::parse_events_json;
use pitchside::synthetic::synthetic_match;

struct Args {
    events_path: Option<String>,
    demo: bool,
    seed: u64,
    home: Option<String>,
    away: Option<String>,
    team: Option<String>,
    event_type: Option<String>,
    player: Option<String>,
    minutes: Option<(u32, u32)>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;

    let (ctx, events) = if args.demo {
        synthetic_match(args.seed)
    } else {
        let path = args
            .events_path
            .as_deref()
            .context("usage: pitchside <events.json> [--home H --away A] [--team T] [--type T] [--player P] [--minutes A-B] | --demo [--seed N]")?;
        let raw = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
        let events = parse_events_json(&raw)?;
        let (home, away) = resolve_teams(&events, args.home.as_deref(), args.away.as_deref())?;
        (MatchContext::new(home, away), events)
    };

    let mut filter = EventFilter::new();
    if let Some(team) = &args.team {
        filter = filter.team(team.clone());
    }
    if let Some(event_type) = &args.event_type {
        filter = filter.event_type(event_type.clone());
    }
    if let Some(player) = &args.player {
        filter = filter.player(player.clone());
    }
    if let Some((from, to)) = args.minutes {
        filter = filter.minutes(from, to);
    }
    let filtered = filter.apply(&events);

    print!("{}", render_match_report(&ctx, &filtered, &events));
    Ok(())
}

/// Home/away default to the first two distinct teams seen in the event
/// stream when not given explicitly.
fn resolve_teams(
    events: &[Event],
    home: Option<&str>,
    away: Option<&str>,
) -> Result<(String, String)> {
    let mut seen: Vec<&str> = Vec::new();
    for event in events {
        if let Some(team) = event.team.as_deref() {
            if !seen.contains(&team) {
                seen.push(team);
            }
            if seen.len() == 2 {
                break;
            }
        }
    }
    let home = home.or_else(|| seen.first().copied());
    let away = away.or_else(|| seen.get(1).copied());
    let home = home.context("no home team given and none found in events")?;
    // A one-sided event file is still reportable; the missing side shows zeros.
    let away = away.unwrap_or("");
    Ok((home.to_string(), away.to_string()))
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        events_path: None,
        demo: false,
        seed: 1,
        home: None,
        away: None,
        team: None,
        event_type: None,
        player: None,
        minutes: None,
    };

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--demo" => args.demo = true,
            "--seed" => args.seed = next_value(&mut argv, "--seed")?.parse()?,
            "--home" => args.home = Some(next_value(&mut argv, "--home")?),
            "--away" => args.away = Some(next_value(&mut argv, "--away")?),
            "--team" => args.team = Some(next_value(&mut argv, "--team")?),
            "--type" => args.event_type = Some(next_value(&mut argv, "--type")?),
            "--player" => args.player = Some(next_value(&mut argv, "--player")?),
            "--minutes" => {
                let raw = next_value(&mut argv, "--minutes")?;
                args.minutes = Some(parse_minute_range(&raw)?);
            }
            other if other.starts_with("--") => bail!("unknown flag {other}"),
            other => {
                if args.events_path.is_some() {
                    bail!("unexpected extra argument {other}");
                }
                args.events_path = Some(other.to_string());
            }
        }
    }
    Ok(args)
}

fn next_value(argv: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    argv.next().with_context(|| format!("{flag} needs a value"))
}

fn parse_minute_range(raw: &str) -> Result<(u32, u32)> {
    let Some((from, to)) = raw.split_once('-') else {
        bail!("--minutes wants FROM-TO, e.g. 0-45");
    };
    let from: u32 = from.trim().parse().context("bad FROM minute")?;
    let to: u32 = to.trim().parse().context("bad TO minute")?;
    if from > to {
        bail!("--minutes range is inverted");
    }
    Ok((from, to))
}
