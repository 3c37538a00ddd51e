// Metric band evaluation against per-metric thresholds
use serde::{Deserialize, Serialize};

/// Qualitative classification of a metric reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Optimal,
    Warning,
    Critical,
}

impl Band {
    pub fn label(self) -> &'static str {
        match self {
            Band::Optimal => "optimal",
            Band::Warning => "warning",
            Band::Critical => "critical",
        }
    }
}

/// Inclusive [lo, hi] ranges for the optimal and warning bands.
/// Anything outside `warn` is critical.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    pub ok: [f64; 2],
    pub warn: [f64; 2],
}

impl Thresholds {
    pub fn new(ok: [f64; 2], warn: [f64; 2]) -> Self {
        Self { ok, warn }
    }
}

/// Classify a value against thresholds. Total over all inputs: NaN fails
/// every comparison and falls through to `Critical`.
pub fn evaluate(value: f64, thresholds: &Thresholds) -> Band {
    if value >= thresholds.ok[0] && value <= thresholds.ok[1] {
        Band::Optimal
    } else if value >= thresholds.warn[0] && value <= thresholds.warn[1] {
        Band::Warning
    } else {
        Band::Critical
    }
}
