//! In-memory blog post storage - used when no database is configured and in tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// In-memory repository keeping posts in insertion order behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    posts: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == id).cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|post| post.id == id)
            .ok_or(RepoError::NotFound)?;
        posts.remove(index);
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.posts.read().await.clone())
    }

    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = post.into_post(Uuid::new_v4(), Utc::now());
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, RepoError> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(RepoError::NotFound)?;
        changes.apply_to(post);
        Ok(post.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::Author;

    fn new_post(title: &str) -> NewBlogPost {
        NewBlogPost::new(
            title.to_string(),
            Author::new("Jane", "Doe"),
            "Hello".to_string(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_keeps_insertion_order() {
        let repo = InMemoryBlogPostRepository::new();
        let first = repo.create(new_post("A")).await.unwrap();
        let second = repo.create(new_post("B")).await.unwrap();

        assert_ne!(first.id, second.id);
        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|post| post.title)
            .collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[tokio::test]
    async fn test_update_merges_changes() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo.create(new_post("A")).await.unwrap();

        let changes = BlogPostChanges::new(Some("B".into()), None, None).unwrap();
        let updated = repo.update(post.id, changes).await.unwrap();

        assert_eq!(updated.title, "B");
        assert_eq!(updated.content, post.content);
        assert_eq!(updated.created, post.created);
        assert_eq!(repo.find_by_id(post.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_missing_post_is_not_found() {
        let repo = InMemoryBlogPostRepository::new();
        let result = repo.update(Uuid::new_v4(), BlogPostChanges::default()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryBlogPostRepository::new();
        let post = repo.create(new_post("A")).await.unwrap();

        repo.delete(post.id).await.unwrap();
        assert_eq!(repo.find_by_id(post.id).await.unwrap(), None);
        assert!(matches!(
            repo.delete(post.id).await,
            Err(RepoError::NotFound)
        ));
    }
}
