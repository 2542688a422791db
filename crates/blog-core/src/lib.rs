//! # Blog Core
//!
//! The resource model of the blog post API.
//! This crate contains the blog post entity, its API representation and the
//! storage ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
