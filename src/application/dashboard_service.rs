// Dashboard service - Use case for building the latest metrics snapshot
use crate::application::tower_log_repository::TowerLogRepository;
use crate::domain::dashboard::DashboardSnapshot;
use crate::infrastructure::config::MetricRanges;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn TowerLogRepository>,
    ranges: MetricRanges,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn TowerLogRepository>, ranges: MetricRanges) -> Self {
        Self { repository, ranges }
    }

    /// Fetch the most recent reading and evaluate it into a dashboard
    /// snapshot. `None` when the collaborator has no data yet.
    pub async fn latest_dashboard(&self) -> anyhow::Result<Option<DashboardSnapshot>> {
        let Some(reading) = self.repository.latest_log().await? else {
            return Ok(None);
        };
        let ranges = self.ranges;
        Ok(Some(DashboardSnapshot::from_reading(&reading, move |m| {
            ranges.thresholds_for(m)
        })))
    }
}
