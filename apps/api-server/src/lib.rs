//! # Blog API Server
//!
//! Actix-web service exposing CRUD endpoints for blog posts.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{BlogServer, ServerError};
pub use state::AppState;
