// REST implementation of the tower-log repository
use crate::application::tower_log_repository::TowerLogRepository;
use crate::domain::reading::{light_pct_from_raw, Reading};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::StatusCode;
use serde::Deserialize;

/// Client for the tower-log REST collaborator.
#[derive(Debug, Clone)]
pub struct RestTowerLogRepository {
    base_url: String,
    client: reqwest::Client,
}

/// Raw row shape returned by the collaborator. `light` is the raw ADC value
/// (0..=1023), `min_water` the low-water-level flag.
#[derive(Debug, Deserialize)]
struct TowerLogRow {
    #[allow(dead_code)]
    id: Option<i64>,
    log_time: Option<String>,
    ph: Option<f64>,
    temperature: Option<f64>,
    humidity: Option<f64>,
    light: Option<f64>,
    min_water: Option<bool>,
}

/// Map a raw row into a domain reading. Rows whose timestamp is missing or
/// fails to parse are dropped; missing sensor fields become NaN and
/// propagate (critical band, broken line) rather than failing the fetch.
fn row_to_reading(row: &TowerLogRow) -> Option<Reading> {
    let time = DateTime::parse_from_rfc3339(row.log_time.as_deref()?).ok()?;
    Some(Reading::new(
        time.timestamp_millis(),
        row.ph.unwrap_or(f64::NAN),
        row.temperature.unwrap_or(f64::NAN),
        row.humidity.unwrap_or(f64::NAN),
        light_pct_from_raw(row.light.unwrap_or(f64::NAN)),
        row.min_water.unwrap_or(false),
    ))
}

impl RestTowerLogRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Option<reqwest::Response>> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(query)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("failed to send request to {}", url))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("tower-log request {} failed with status {}: {}", url, status, body);
        }

        Ok(Some(response))
    }
}

#[async_trait]
impl TowerLogRepository for RestTowerLogRepository {
    async fn list_logs(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<Reading>> {
        let mut query = Vec::new();
        if let Some(from) = from {
            query.push(("from", from.to_rfc3339_opts(SecondsFormat::Millis, true)));
        }
        if let Some(to) = to {
            query.push(("to", to.to_rfc3339_opts(SecondsFormat::Millis, true)));
        }

        let Some(response) = self.get("/tower-log", &query).await? else {
            return Ok(Vec::new());
        };
        let rows = response
            .json::<Vec<TowerLogRow>>()
            .await
            .context("failed to parse tower-log list response")?;

        let total = rows.len();
        let readings: Vec<Reading> = rows.iter().filter_map(row_to_reading).collect();
        if readings.len() < total {
            tracing::warn!(
                "dropped {} tower-log rows with unparseable timestamps",
                total - readings.len()
            );
        }
        Ok(readings)
    }

    async fn latest_log(&self) -> Result<Option<Reading>> {
        let Some(response) = self.get("/tower-log/latest", &[]).await? else {
            return Ok(None);
        };
        let row = response
            .json::<TowerLogRow>()
            .await
            .context("failed to parse latest tower-log response")?;

        let reading = row_to_reading(&row);
        if reading.is_none() {
            tracing::warn!("dropped latest tower-log row with unparseable timestamp");
        }
        Ok(reading)
    }

    async fn get_log(&self, id: i64) -> Result<Option<Reading>> {
        let Some(response) = self.get(&format!("/tower-log/{}", id), &[]).await? else {
            return Ok(None);
        };
        let row = response
            .json::<TowerLogRow>()
            .await
            .with_context(|| format!("failed to parse tower-log row {}", id))?;
        Ok(row_to_reading(&row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(log_time: Option<&str>) -> TowerLogRow {
        TowerLogRow {
            id: Some(1),
            log_time: log_time.map(str::to_string),
            ph: Some(6.1),
            temperature: Some(24.3),
            humidity: Some(62.0),
            light: Some(1023.0),
            min_water: Some(true),
        }
    }

    #[test]
    fn test_row_mapping_rescales_light_and_keeps_flag() {
        let reading = row_to_reading(&row(Some("2026-08-28T12:00:00Z"))).unwrap();
        assert_eq!(reading.light_pct, 100.0);
        assert!(reading.min_water);
        assert_eq!(reading.ph, 6.1);
    }

    #[test]
    fn test_row_mapping_parses_timestamp_to_millis() {
        let reading = row_to_reading(&row(Some("1970-01-01T00:00:07Z"))).unwrap();
        assert_eq!(reading.time_ms, 7000);
    }

    #[test]
    fn test_rows_without_valid_timestamp_are_dropped() {
        assert!(row_to_reading(&row(None)).is_none());
        assert!(row_to_reading(&row(Some("not-a-timestamp"))).is_none());
    }

    #[test]
    fn test_missing_sensor_fields_become_nan() {
        let mut r = row(Some("2026-08-28T12:00:00Z"));
        r.humidity = None;
        r.light = None;
        r.min_water = None;
        let reading = row_to_reading(&r).unwrap();
        assert!(reading.humidity_pct.is_nan());
        assert!(reading.light_pct.is_nan());
        assert!(!reading.min_water);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let repo = RestTowerLogRepository::new("http://localhost:3000/api/".to_string());
        assert_eq!(repo.base_url, "http://localhost:3000/api");
    }

    /// Serve a single known row at /tower-log/7, 404 for everything else.
    async fn spawn_fixture() -> String {
        use axum::extract::Path;
        use axum::response::IntoResponse;
        use axum::routing::get;
        use axum::{Json, Router};

        let router = Router::new().route(
            "/tower-log/:id",
            get(|Path(id): Path<i64>| async move {
                if id == 7 {
                    Json(serde_json::json!({
                        "id": 7,
                        "log_time": "2026-08-28T12:00:00Z",
                        "ph": 6.1,
                        "temperature": 24.3,
                        "humidity": 62.0,
                        "light": 512,
                        "min_water": false,
                    }))
                    .into_response()
                } else {
                    StatusCode::NOT_FOUND.into_response()
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_get_log_maps_row_from_collaborator() {
        let repo = RestTowerLogRepository::new(spawn_fixture().await);
        let reading = repo.get_log(7).await.unwrap().unwrap();
        assert_eq!(reading.ph, 6.1);
        // 512/1023 ≈ 50.05 → 50
        assert_eq!(reading.light_pct, 50.0);
        assert!(!reading.min_water);
    }

    #[tokio::test]
    async fn test_get_log_unknown_id_is_none() {
        let repo = RestTowerLogRepository::new(spawn_fixture().await);
        assert!(repo.get_log(999).await.unwrap().is_none());
    }
}
