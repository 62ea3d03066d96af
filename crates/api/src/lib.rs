//! Roomcraft API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! middleware, design pipeline) so integration tests and the binary
//! entrypoint can both access them.

pub mod background;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
