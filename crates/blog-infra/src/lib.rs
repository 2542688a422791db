//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `minimal` - No external dependencies, in-memory storage only

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresBlogPostRepository};
