use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use crate::error::RepoError;

/// Generic repository trait defining lookup and removal by id.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] when nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, oldest first.
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Persist a new post. The store assigns `id` and `created`.
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Apply `changes` and return the merged post.
    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, RepoError>;
}
