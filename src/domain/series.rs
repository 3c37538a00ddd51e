// Chart series assembly: gap detection, incremental append, visible window
use crate::domain::reading::{Metric, Reading};
use serde::Serialize;

/// Separation between consecutive readings beyond which the line is broken.
pub const GAP_THRESHOLD_MS: i64 = 4000;

/// Width of the visible chart window, anchored to the latest reading.
pub const WINDOW_MS: i64 = 2 * 60 * 1000;

/// One plotted point. A NaN `value` marks an intentional break in the line;
/// serde_json renders non-finite floats as `null`, which charting front ends
/// treat as "do not interpolate across".
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Point {
    pub time_ms: i64,
    pub value: f64,
}

impl Point {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }

    fn break_at(time_ms: i64) -> Self {
        Self::new(time_ms, f64::NAN)
    }

    pub fn is_break(&self) -> bool {
        self.value.is_nan()
    }
}

/// A time interval with no readings, wide enough to warrant a break.
/// Derived from the reading sequence, never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl Gap {
    /// Whether an instant falls strictly inside this gap. The endpoints
    /// carry readings and are not part of the gap.
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms > self.start_ms && time_ms < self.end_ms
    }
}

/// The fixed-width time range currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleWindow {
    pub min_ms: i64,
    pub max_ms: i64,
}

impl VisibleWindow {
    fn anchored_to(time_ms: i64) -> Self {
        Self {
            min_ms: time_ms - WINDOW_MS,
            max_ms: time_ms,
        }
    }
}

/// Ordered point sequence for one metric, including break markers.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSeries {
    pub metric: Metric,
    pub points: Vec<Point>,
}

/// Outcome of an incremental append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendResult {
    /// Duplicate or out-of-order reading, state untouched.
    Ignored,
    Appended,
    AppendedAfterGap(Gap),
}

/// Assembled per-metric series plus derived gaps and the visible window.
///
/// Owned state, mutated through `seed` and `append` only. Single writer:
/// callers in a multi-threaded context wrap this in an exclusive lock.
#[derive(Debug, Clone, Serialize)]
pub struct ChartState {
    pub series: Vec<MetricSeries>,
    pub gaps: Vec<Gap>,
    pub window: Option<VisibleWindow>,
    #[serde(skip)]
    last_time_ms: Option<i64>,
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartState {
    pub fn new() -> Self {
        let series = Metric::ALL
            .into_iter()
            .map(|metric| MetricSeries {
                metric,
                points: Vec::new(),
            })
            .collect();
        Self {
            series,
            gaps: Vec::new(),
            window: None,
            last_time_ms: None,
        }
    }

    /// Assemble state from a full reading sequence.
    ///
    /// Precondition: `readings` is sorted ascending by timestamp with no
    /// duplicate timestamps; the caller sorts and dedups. An empty slice
    /// yields empty series, no gaps, and no window.
    pub fn assemble(readings: &[Reading]) -> Self {
        let mut state = Self::new();
        for reading in readings {
            if let Some(last) = state.last_time_ms {
                if reading.time_ms - last > GAP_THRESHOLD_MS {
                    state.push_break(last, reading.time_ms);
                }
            }
            state.push_reading(reading);
        }
        state.window = state.last_time_ms.map(VisibleWindow::anchored_to);
        state
    }

    /// Fully replace this state from a reading sequence (a re-seed discards
    /// everything appended since the previous seed).
    pub fn seed(&mut self, readings: &[Reading]) {
        *self = Self::assemble(readings);
    }

    /// Fold one new reading into the assembled state.
    ///
    /// Equivalent to re-running `assemble` over the extended reading list:
    /// readings at or before the last known timestamp are ignored, a
    /// separation beyond `GAP_THRESHOLD_MS` inserts a break point and
    /// records a gap, and the window is re-anchored to the new reading.
    pub fn append(&mut self, reading: &Reading) -> AppendResult {
        let gap = match self.last_time_ms {
            Some(last) if reading.time_ms <= last => return AppendResult::Ignored,
            Some(last) if reading.time_ms - last > GAP_THRESHOLD_MS => {
                Some(self.push_break(last, reading.time_ms))
            }
            _ => None,
        };
        self.push_reading(reading);
        self.window = Some(VisibleWindow::anchored_to(reading.time_ms));
        match gap {
            Some(gap) => AppendResult::AppendedAfterGap(gap),
            None => AppendResult::Appended,
        }
    }

    /// Whether an instant falls inside any recorded gap.
    pub fn in_gap(&self, time_ms: i64) -> bool {
        // Gaps are ordered by start; find the last one starting before t.
        let idx = self.gaps.partition_point(|g| g.start_ms < time_ms);
        idx > 0 && self.gaps[idx - 1].contains(time_ms)
    }

    pub fn points(&self, metric: Metric) -> &[Point] {
        self.series
            .iter()
            .find(|s| s.metric == metric)
            .map(|s| s.points.as_slice())
            .unwrap_or(&[])
    }

    pub fn last_time_ms(&self) -> Option<i64> {
        self.last_time_ms
    }

    fn push_break(&mut self, prev_ms: i64, current_ms: i64) -> Gap {
        let gap = Gap {
            start_ms: prev_ms,
            end_ms: current_ms,
        };
        for series in &mut self.series {
            series.points.push(Point::break_at(prev_ms + 1));
        }
        self.gaps.push(gap);
        gap
    }

    fn push_reading(&mut self, reading: &Reading) {
        for series in &mut self.series {
            series
                .points
                .push(Point::new(reading.time_ms, series.metric.value_of(reading)));
        }
        self.last_time_ms = Some(reading.time_ms);
    }
}
