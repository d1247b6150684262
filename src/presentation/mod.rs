// Presentation layer - HTTP surface and view models
pub mod app_state;
pub mod handlers;
pub mod routes;
pub mod views;
