// Domain layer - Core models and pure chart/metric logic
pub mod crop;
pub mod dashboard;
pub mod metrics;
pub mod reading;
pub mod series;
