use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Structured author of a blog post. Either part may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
        }
    }

    /// Display name shown to API clients.
    ///
    /// First and last name joined by a single space with the outer edges
    /// trimmed. Missing parts count as empty strings, so an author with
    /// neither part yields `""`.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or_default();
        let last = self.last_name.as_deref().unwrap_or_default();
        format!("{first} {last}").trim().to_string()
    }
}

/// BlogPost entity - a stored blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Derived author name, never stored.
    pub fn author_name(&self) -> String {
        self.author.display_name()
    }

    /// External representation returned to API clients.
    pub fn api_repr(&self) -> BlogPostRepr {
        BlogPostRepr {
            id: self.id.to_string(),
            title: self.title.clone(),
            author: self.author_name(),
            content: self.content.clone(),
            created: self.created,
        }
    }
}

/// The only shape of a blog post ever handed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostRepr {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostRepr {
    fn from(post: BlogPost) -> Self {
        let author = post.author_name();
        Self {
            id: post.id.to_string(),
            title: post.title,
            author,
            content: post.content,
            created: post.created,
        }
    }
}

/// A validated blog post that has not been stored yet.
///
/// The store assigns `id` and `created` when it persists one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub author: Author,
    pub content: String,
}

impl NewBlogPost {
    pub fn new(title: String, author: Author, content: String) -> Result<Self, DomainError> {
        require_text("title", &title)?;
        require_text("content", &content)?;
        Ok(Self {
            title,
            author,
            content,
        })
    }

    /// Materialize the stored entity once the store has picked an id.
    pub fn into_post(self, id: Uuid, created: DateTime<Utc>) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            created,
        }
    }
}

/// Whitelisted partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogPostChanges {
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

impl BlogPostChanges {
    pub fn new(
        title: Option<String>,
        author: Option<Author>,
        content: Option<String>,
    ) -> Result<Self, DomainError> {
        if let Some(title) = &title {
            require_text("title", title)?;
        }
        if let Some(content) = &content {
            require_text("content", content)?;
        }
        Ok(Self {
            title,
            author,
            content,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.content.is_none()
    }

    /// Overwrite the supplied fields on `post`. `id` and `created` are never touched.
    pub fn apply_to(self, post: &mut BlogPost) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.is_empty() {
        return Err(DomainError::Validation(format!("`{field}` must not be empty")));
    }
    Ok(())
}
