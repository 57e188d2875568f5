pub mod config;
pub mod database;
pub mod repository;
pub mod service_provider;
pub mod telemetry;
