// Chart service - Owns the assembled series state and the live update feed
use crate::application::tower_log_repository::TowerLogRepository;
use crate::domain::reading::Reading;
use crate::domain::series::{AppendResult, ChartState, Gap, VisibleWindow};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

const LIVE_CHANNEL_CAPACITY: usize = 64;

/// One accepted append, broadcast to live (SSE) subscribers.
#[derive(Debug, Clone, Serialize)]
pub struct LiveUpdate {
    pub reading: Reading,
    pub gap: Option<Gap>,
    pub window: VisibleWindow,
}

/// Holds the assembled chart state behind an exclusive-writer lock.
///
/// Two mutation paths exist: the one-shot historical seed and the
/// incremental append from the polling feed. `main` sequences them
/// (seed completes before the poller starts); a later seed is a full
/// reset that discards prior incremental state.
pub struct ChartService {
    repository: Arc<dyn TowerLogRepository>,
    state: RwLock<ChartState>,
    live_tx: broadcast::Sender<LiveUpdate>,
}

impl ChartService {
    pub fn new(repository: Arc<dyn TowerLogRepository>) -> Self {
        let (live_tx, _) = broadcast::channel(LIVE_CHANNEL_CAPACITY);
        Self {
            repository,
            state: RwLock::new(ChartState::new()),
            live_tx,
        }
    }

    /// Fetch the full history once and replace the state with its assembly.
    pub async fn seed(&self) -> anyhow::Result<()> {
        let readings = self
            .fetch_sorted(None, None)
            .await
            .context("failed to fetch historical tower logs")?;

        tracing::info!("seeding chart state from {} historical readings", readings.len());
        self.state.write().await.seed(&readings);
        Ok(())
    }

    /// Fold one reading into the state. Duplicate or out-of-order readings
    /// from the polling feed are silently ignored; accepted appends are
    /// broadcast to live subscribers.
    pub async fn append(&self, reading: Reading) -> AppendResult {
        let mut state = self.state.write().await;
        let result = state.append(&reading);

        match result {
            AppendResult::Ignored => {}
            AppendResult::Appended | AppendResult::AppendedAfterGap(_) => {
                let gap = match result {
                    AppendResult::AppendedAfterGap(gap) => {
                        tracing::debug!(
                            "gap of {} ms detected before reading at t={}",
                            gap.end_ms - gap.start_ms,
                            reading.time_ms
                        );
                        Some(gap)
                    }
                    _ => None,
                };
                if let Some(window) = state.window {
                    // Send fails only when no subscriber is listening.
                    let _ = self.live_tx.send(LiveUpdate {
                        reading,
                        gap,
                        window,
                    });
                }
            }
        }
        result
    }

    /// Clone of the current assembled state for rendering.
    pub async fn snapshot(&self) -> ChartState {
        self.state.read().await.clone()
    }

    /// Assemble an arbitrary time range ad hoc, without touching live state.
    pub async fn assemble_range(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> anyhow::Result<ChartState> {
        let readings = self.fetch_sorted(from, to).await?;
        Ok(ChartState::assemble(&readings))
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LiveUpdate> {
        self.live_tx.subscribe()
    }

    /// Fetch readings and establish the assembler's precondition: ascending
    /// timestamps with duplicates removed.
    async fn fetch_sorted(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> anyhow::Result<Vec<Reading>> {
        let mut readings = self.repository.list_logs(from, to).await?;
        readings.sort_by_key(|r| r.time_ms);
        readings.dedup_by_key(|r| r.time_ms);
        Ok(readings)
    }
}
