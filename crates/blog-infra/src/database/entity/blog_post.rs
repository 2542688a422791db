//! Blog post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use blog_core::domain::{Author, BlogPost, BlogPostChanges};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_first_name: Option<String>,
    pub author_last_name: Option<String>,
    pub created: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: Author {
                first_name: model.author_first_name,
                last_name: model.author_last_name,
            },
            created: model.created.into(),
        }
    }
}

/// Conversion from Domain BlogPost to SeaORM ActiveModel, every column set.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author_first_name: Set(post.author.first_name),
            author_last_name: Set(post.author.last_name),
            created: Set(post.created.into()),
        }
    }
}

impl ActiveModel {
    /// Update model touching only the whitelisted columns present in `changes`.
    pub fn from_changes(id: Uuid, changes: BlogPostChanges) -> Self {
        let mut model = Self {
            id: Set(id),
            ..Default::default()
        };
        if let Some(title) = changes.title {
            model.title = Set(title);
        }
        if let Some(author) = changes.author {
            model.author_first_name = Set(author.first_name);
            model.author_last_name = Set(author.last_name);
        }
        if let Some(content) = changes.content {
            model.content = Set(content);
        }
        model
    }
}
