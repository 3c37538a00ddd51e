// Polling feed - Periodically folds the latest log row into the chart state
use crate::application::chart_service::ChartService;
use crate::application::tower_log_repository::TowerLogRepository;
use std::sync::Arc;
use std::time::Duration;

/// Polls `/tower-log/latest` on a fixed interval and appends new readings.
///
/// Fetch errors are logged and the loop continues on the next tick; retry
/// and backoff beyond the fixed interval belong to the collaborator side.
pub struct PollingFeed {
    repository: Arc<dyn TowerLogRepository>,
    chart_service: Arc<ChartService>,
    interval: Duration,
}

impl PollingFeed {
    pub fn new(
        repository: Arc<dyn TowerLogRepository>,
        chart_service: Arc<ChartService>,
        interval: Duration,
    ) -> Self {
        Self {
            repository,
            chart_service,
            interval,
        }
    }

    pub async fn run(self) {
        tracing::info!("polling feed started, interval {:?}", self.interval);
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            match self.repository.latest_log().await {
                Ok(Some(reading)) => {
                    self.chart_service.append(reading).await;
                }
                Ok(None) => {
                    tracing::debug!("no tower log rows available yet");
                }
                Err(e) => {
                    tracing::warn!("failed to poll latest tower log: {:#}", e);
                }
            }
        }
    }
}
