// Sensor reading domain model
use serde::Serialize;

/// Full-scale value of the light sensor's analog-to-digital converter.
pub const LIGHT_ADC_MAX: f64 = 1023.0;

/// One sensor reading from the tower, timestamps in Unix milliseconds.
/// Immutable once received; non-finite values are carried through as-is
/// (they evaluate to a critical band and break the plotted line).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Reading {
    pub time_ms: i64,
    pub ph: f64,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub light_pct: f64,
    pub min_water: bool,
}

impl Reading {
    pub fn new(
        time_ms: i64,
        ph: f64,
        temperature_c: f64,
        humidity_pct: f64,
        light_pct: f64,
        min_water: bool,
    ) -> Self {
        Self {
            time_ms,
            ph,
            temperature_c,
            humidity_pct,
            light_pct,
            min_water,
        }
    }
}

/// Rescale a raw light ADC value (0..=1023) to a 0-100 percentage.
/// NaN propagates unchanged.
pub fn light_pct_from_raw(raw: f64) -> f64 {
    (raw / LIGHT_ADC_MAX * 100.0).round().clamp(0.0, 100.0)
}

/// The four charted metrics of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Ph,
    TemperatureC,
    HumidityPct,
    LightPct,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Ph,
        Metric::TemperatureC,
        Metric::HumidityPct,
        Metric::LightPct,
    ];

    pub fn value_of(self, reading: &Reading) -> f64 {
        match self {
            Metric::Ph => reading.ph,
            Metric::TemperatureC => reading.temperature_c,
            Metric::HumidityPct => reading.humidity_pct,
            Metric::LightPct => reading.light_pct,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Ph => "pH",
            Metric::TemperatureC => "Temperature (°C)",
            Metric::HumidityPct => "Humidity (%)",
            Metric::LightPct => "Light (%)",
        }
    }
}
