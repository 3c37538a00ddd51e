// Dashboard snapshot: metric cards, water level estimate, system status
use crate::domain::metrics::{evaluate, Band, Thresholds};
use crate::domain::reading::{Metric, Reading};
use serde::Serialize;

/// Visual low-water threshold shown by the water level card. The tower has
/// no centimetre sensor; the level is estimated from the `min_water` flag.
pub const WATER_LEVEL_MIN_CM: f64 = 12.0;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricCard {
    pub metric: Metric,
    pub value: f64,
    pub band: Band,
    pub thresholds: Thresholds,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct WaterLevel {
    pub level_cm: f64,
    pub min_cm: f64,
    pub low: bool,
}

impl WaterLevel {
    /// Estimate a displayable level from the boolean low-water flag: a touch
    /// below the threshold when the flag is set, comfortably above otherwise.
    pub fn from_flag(min_water: bool) -> Self {
        let level_cm = if min_water {
            (WATER_LEVEL_MIN_CM - 0.5).max(0.0)
        } else {
            WATER_LEVEL_MIN_CM + 5.0
        };
        Self {
            level_cm,
            min_cm: WATER_LEVEL_MIN_CM,
            low: min_water,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub updated_at_ms: i64,
    pub cards: Vec<MetricCard>,
    pub water: WaterLevel,
    pub system_level: Band,
    pub notes: Vec<String>,
}

impl DashboardSnapshot {
    /// Build a snapshot from the latest reading. System level is the worst
    /// band across all cards; notes name every metric outside its optimal
    /// range plus a low water level.
    pub fn from_reading(reading: &Reading, thresholds_for: impl Fn(Metric) -> Thresholds) -> Self {
        let cards: Vec<MetricCard> = Metric::ALL
            .into_iter()
            .map(|metric| {
                let thresholds = thresholds_for(metric);
                let value = metric.value_of(reading);
                MetricCard {
                    metric,
                    value,
                    band: evaluate(value, &thresholds),
                    thresholds,
                }
            })
            .collect();

        let water = WaterLevel::from_flag(reading.min_water);

        let system_level = cards
            .iter()
            .map(|c| c.band)
            .max()
            .unwrap_or(Band::Optimal);

        let mut notes: Vec<String> = cards
            .iter()
            .filter(|c| c.band != Band::Optimal)
            .map(|c| format!("{} is in the {} band", c.metric.label(), c.band.label()))
            .collect();
        if water.low {
            notes.push("Water level is below the minimum threshold".to_string());
        }

        Self {
            updated_at_ms: reading.time_ms,
            cards,
            water,
            system_level,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::Thresholds;

    fn default_thresholds(metric: Metric) -> Thresholds {
        match metric {
            Metric::Ph => Thresholds::new([5.5, 6.5], [5.0, 7.0]),
            Metric::TemperatureC => Thresholds::new([20.0, 26.0], [18.0, 28.0]),
            Metric::HumidityPct => Thresholds::new([50.0, 70.0], [40.0, 80.0]),
            Metric::LightPct => Thresholds::new([60.0, 90.0], [40.0, 95.0]),
        }
    }

    #[test]
    fn test_all_optimal_snapshot() {
        let r = Reading::new(1000, 6.1, 24.3, 62.0, 78.0, false);
        let snapshot = DashboardSnapshot::from_reading(&r, default_thresholds);

        assert_eq!(snapshot.updated_at_ms, 1000);
        assert_eq!(snapshot.cards.len(), 4);
        assert!(snapshot.cards.iter().all(|c| c.band == Band::Optimal));
        assert_eq!(snapshot.system_level, Band::Optimal);
        assert!(snapshot.notes.is_empty());
        assert!(!snapshot.water.low);
        assert_eq!(snapshot.water.level_cm, WATER_LEVEL_MIN_CM + 5.0);
    }

    #[test]
    fn test_system_level_is_worst_band() {
        // temperature in warning, humidity critical
        let r = Reading::new(1000, 6.1, 27.0, 30.0, 78.0, false);
        let snapshot = DashboardSnapshot::from_reading(&r, default_thresholds);

        assert_eq!(snapshot.system_level, Band::Critical);
        assert_eq!(snapshot.notes.len(), 2);
    }

    #[test]
    fn test_low_water_estimate_and_note() {
        let r = Reading::new(1000, 6.1, 24.3, 62.0, 78.0, true);
        let snapshot = DashboardSnapshot::from_reading(&r, default_thresholds);

        assert!(snapshot.water.low);
        assert_eq!(snapshot.water.level_cm, WATER_LEVEL_MIN_CM - 0.5);
        assert_eq!(snapshot.notes.len(), 1);
    }

    #[test]
    fn test_nan_reading_yields_critical_card() {
        let r = Reading::new(1000, f64::NAN, 24.3, 62.0, 78.0, false);
        let snapshot = DashboardSnapshot::from_reading(&r, default_thresholds);

        assert_eq!(snapshot.cards[0].band, Band::Critical);
        assert_eq!(snapshot.system_level, Band::Critical);
    }
}
