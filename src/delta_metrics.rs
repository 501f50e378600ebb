use std::fmt;

use crate::state::Event;

/// A filtered count expressed as a share of its baseline, or the explicit
/// sentinel when there is no baseline to compare against. The sentinel keeps
/// the zero-baseline case out of the arithmetic entirely — the caller picks
/// the degraded display, not a hidden division guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Percentage {
    Value(u64),
    NotApplicable,
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Percentage::Value(v) => write!(f, "{v}%"),
            Percentage::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// `round(100 * filtered / baseline)`, with no upper clamp — a filtered set
/// larger than its baseline reads as more than 100%.
pub fn percentage_of_baseline(filtered: usize, baseline: usize) -> Percentage {
    if baseline == 0 {
        return Percentage::NotApplicable;
    }
    let pct = 100.0 * filtered as f64 / baseline as f64;
    Percentage::Value(pct.round() as u64)
}

/// Convenience for the common "filtered events vs pre-filter events" call.
pub fn percentage_of_events(filtered: &[Event], baseline: &[Event]) -> Percentage {
    percentage_of_baseline(filtered.len(), baseline.len())
}
