//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbErr, EntityTrait, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostChanges, NewBlogPost};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn list(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .order_by_asc(blog_post::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let post = post.into_post(Uuid::new_v4(), Utc::now());
        tracing::debug!(post_id = %post.id, "Inserting blog post");

        let active_model: blog_post::ActiveModel = post.into();
        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(model.into())
    }

    async fn update(&self, id: Uuid, changes: BlogPostChanges) -> Result<BlogPost, RepoError> {
        if changes.is_empty() {
            let current: Option<BlogPost> = self.find_by_id(id).await?;
            return current.ok_or(RepoError::NotFound);
        }

        let active_model = blog_post::ActiveModel::from_changes(id, changes);
        let model = active_model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
            other => RepoError::Query(other.to_string()),
        })?;

        Ok(model.into())
    }
}
