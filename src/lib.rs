//! Match-event analysis core: filtering, score derivation, configurable
//! team statistics, spatial binning, and filtered-vs-baseline deltas over a
//! flat sequence of timestamped match events. Pure, synchronous, and
//! presentation-free — inputs are plain event records from any origin and
//! outputs are plain structures.

pub mod delta_metrics;
pub mod event_filter;
pub mod heatmap;
pub mod match_stats;
pub mod report;
pub mod score;
pub mod state;
pub mod statsbomb;
pub mod synthetic;
