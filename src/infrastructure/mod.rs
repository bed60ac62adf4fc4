// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod formatting;
pub mod http_transport;
pub mod region_store;
pub mod tokio_sleeper;
