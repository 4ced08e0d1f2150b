// Library exports for testing
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logging;
pub mod routes;
pub mod state;
pub mod store;
