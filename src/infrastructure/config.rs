use crate::domain::metrics::Thresholds;
use crate::domain::reading::Metric;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub api: ApiSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    2000
}

impl ApiConfig {
    /// A zero interval would panic in `tokio::time::interval`.
    fn validate(&self) -> anyhow::Result<()> {
        if self.api.poll_interval_ms == 0 {
            anyhow::bail!("api.poll_interval_ms must be greater than zero");
        }
        Ok(())
    }
}

/// Per-metric band thresholds, matching the crop defaults of the original
/// installation. Any metric may be overridden from `config/ranges`.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct MetricRanges {
    pub ph: Thresholds,
    pub temperature_c: Thresholds,
    pub humidity_pct: Thresholds,
    pub light_pct: Thresholds,
}

impl Default for MetricRanges {
    fn default() -> Self {
        Self {
            ph: Thresholds::new([5.5, 6.5], [5.0, 7.0]),
            temperature_c: Thresholds::new([20.0, 26.0], [18.0, 28.0]),
            humidity_pct: Thresholds::new([50.0, 70.0], [40.0, 80.0]),
            light_pct: Thresholds::new([60.0, 90.0], [40.0, 95.0]),
        }
    }
}

impl MetricRanges {
    pub fn thresholds_for(&self, metric: Metric) -> Thresholds {
        match metric {
            Metric::Ph => self.ph,
            Metric::TemperatureC => self.temperature_c,
            Metric::HumidityPct => self.humidity_pct,
            Metric::LightPct => self.light_pct,
        }
    }
}

pub fn load_api_config() -> anyhow::Result<ApiConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/api"))
        .build()?;

    let api_config: ApiConfig = settings.try_deserialize()?;
    api_config.validate()?;
    Ok(api_config)
}

pub fn load_ranges_config() -> anyhow::Result<MetricRanges> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/ranges").required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::metrics::{evaluate, Band};

    #[test]
    fn test_default_ranges_match_crop_defaults() {
        let ranges = MetricRanges::default();
        assert_eq!(ranges.ph.ok, [5.5, 6.5]);
        assert_eq!(ranges.temperature_c.warn, [18.0, 28.0]);
        assert_eq!(evaluate(6.0, &ranges.ph), Band::Optimal);
        assert_eq!(evaluate(75.0, &ranges.humidity_pct), Band::Warning);
    }

    #[test]
    fn test_thresholds_lookup_per_metric() {
        let ranges = MetricRanges::default();
        assert_eq!(ranges.thresholds_for(Metric::LightPct).ok, [60.0, 90.0]);
    }

    #[test]
    fn test_zero_poll_interval_is_rejected() {
        let api_config = ApiConfig {
            api: ApiSettings {
                base_url: "http://localhost:3000/api".to_string(),
                poll_interval_ms: 0,
            },
        };
        assert!(api_config.validate().is_err());
    }

    #[test]
    fn test_default_poll_interval_is_valid() {
        let api_config = ApiConfig {
            api: ApiSettings {
                base_url: "http://localhost:3000/api".to_string(),
                poll_interval_ms: default_poll_interval_ms(),
            },
        };
        assert!(api_config.validate().is_ok());
    }
}
