use crate::state::Event;

/// StatsBomb pitch coordinates: x runs 0..=120 goal to goal, y 0..=80
/// touchline to touchline.
pub const PITCH_LENGTH: f64 = 120.0;
pub const PITCH_WIDTH: f64 = 80.0;

/// Bin resolution for the occupancy grid. The two resolutions the dashboards
/// render with are provided as constructors, but any resolution works — which
/// one to use is the caller's choice, not a constant baked in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub bins_x: usize,
    pub bins_y: usize,
}

impl GridSpec {
    pub fn new(bins_x: usize, bins_y: usize) -> Self {
        Self { bins_x, bins_y }
    }

    /// 6x5 zone grid used for possession heatmaps.
    pub fn coarse() -> Self {
        Self::new(6, 5)
    }

    /// 10x7 grid used for the denser touch maps.
    pub fn fine() -> Self {
        Self::new(10, 7)
    }

    pub fn cell_count(&self) -> usize {
        self.bins_x * self.bins_y
    }
}

/// Normalized occupancy grid over the pitch. `cells` is row-major with
/// `bins_y` rows of `bins_x` columns; row 0 is the y=0 touchline, column 0
/// the x=0 goal line. Values are each cell's share of the grid's own total,
/// so they sum to 1.0 — "where did this activity concentrate", not "what
/// share of the whole match happened here".
#[derive(Debug, Clone, PartialEq)]
pub struct Heatmap {
    pub spec: GridSpec,
    pub cells: Vec<Vec<f64>>,
    pub x_edges: Vec<f64>,
    pub y_edges: Vec<f64>,
    pub samples: usize,
}

impl Heatmap {
    pub fn cell(&self, row: usize, col: usize) -> f64 {
        self.cells[row][col]
    }
}

/// Bin the locations of `events` into a normalized grid. Callers pre-filter
/// by type/team/player with `EventFilter`; this only looks at `location`.
/// Events without a location are dropped. Returns `None` when no location
/// survives — the explicit "insufficient data" marker, so the caller decides
/// how to degrade instead of getting an all-zero grid.
pub fn bin_event_locations(events: &[Event], spec: &GridSpec) -> Option<Heatmap> {
    if spec.bins_x == 0 || spec.bins_y == 0 {
        return None;
    }

    let points: Vec<(f64, f64)> = events
        .iter()
        .filter_map(|e| e.location)
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if points.is_empty() {
        return None;
    }

    let mut raw = vec![vec![0u64; spec.bins_x]; spec.bins_y];
    for (x, y) in &points {
        let col = bin_index(*x, PITCH_LENGTH, spec.bins_x);
        let row = bin_index(*y, PITCH_WIDTH, spec.bins_y);
        raw[row][col] += 1;
    }

    let total = points.len() as f64;
    let cells = raw
        .into_iter()
        .map(|row| row.into_iter().map(|n| n as f64 / total).collect())
        .collect();

    Some(Heatmap {
        spec: *spec,
        cells,
        x_edges: edges(PITCH_LENGTH, spec.bins_x),
        y_edges: edges(PITCH_WIDTH, spec.bins_y),
        samples: points.len(),
    })
}

/// Coordinates off the pitch clamp into the boundary bin; only missing or
/// non-finite locations are discarded.
fn bin_index(value: f64, extent: f64, bins: usize) -> usize {
    let idx = (value / extent * bins as f64).floor();
    (idx.max(0.0) as usize).min(bins - 1)
}

fn edges(extent: f64, bins: usize) -> Vec<f64> {
    let step = extent / bins as f64;
    (0..=bins).map(|i| i as f64 * step).collect()
}
