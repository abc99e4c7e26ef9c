pub mod config;
pub mod errors;
pub mod overlay;
pub mod render;
pub mod routes;
pub mod state;
pub mod telemetry;
