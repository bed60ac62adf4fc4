// Presentation layer - Templates and HTTP handlers
pub mod app_state;
pub mod handlers;
pub mod page;
pub mod templates;
