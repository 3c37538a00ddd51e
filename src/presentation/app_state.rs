// Application state for HTTP handlers
use crate::application::chart_service::ChartService;
use crate::application::dashboard_service::DashboardService;
use std::sync::Arc;

pub struct AppState {
    pub dashboard_service: DashboardService,
    pub chart_service: Arc<ChartService>,
}
