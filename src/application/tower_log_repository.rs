// Repository trait over the tower-log REST collaborator
use crate::domain::reading::Reading;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read-side access to the tower-log data source. Record management
/// (POST/PATCH/DELETE) on the collaborator is out of scope; this service
/// only consumes readings.
#[async_trait]
pub trait TowerLogRepository: Send + Sync {
    /// Fetch log rows, optionally bounded by an inclusive time range.
    /// Rows with unparseable timestamps are dropped by the implementation;
    /// the returned readings carry valid timestamps but may contain NaN
    /// sensor values.
    async fn list_logs(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<Reading>>;

    /// Fetch the single most recent log row, if any exists.
    async fn latest_log(&self) -> anyhow::Result<Option<Reading>>;

    /// Fetch one log row by id.
    async fn get_log(&self, id: i64) -> anyhow::Result<Option<Reading>>;
}
