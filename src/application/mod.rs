// Application layer - Use cases and state ownership
pub mod chart_service;
pub mod dashboard_service;
pub mod polling_feed;
pub mod tower_log_repository;
