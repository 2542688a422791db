//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    pub fn new(posts: Arc<dyn BlogPostRepository>) -> Self {
        Self { posts }
    }
}
