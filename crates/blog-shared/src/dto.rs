//! Data Transfer Objects - request/response types for the API.

use blog_core::domain::{Author, BlogPostRepr};
use serde::{Deserialize, Serialize};

/// Body of `POST /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub author: Author,
    pub content: String,
}

/// Body of `PUT /posts/{id}`.
///
/// Keys other than these (for example `created`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<Author>,
    pub content: Option<String>,
}

/// Body of `GET /posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListResponse {
    pub blogposts: Vec<BlogPostRepr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_ignores_created() {
        let req: UpdateBlogPostRequest = serde_json::from_str(
            r#"{"id":"abc","title":"New","created":"1999-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(req.id.as_deref(), Some("abc"));
        assert_eq!(req.title.as_deref(), Some("New"));
        assert!(req.author.is_none());
        assert!(req.content.is_none());
    }

    #[test]
    fn test_create_request_reads_nested_author() {
        let req: CreateBlogPostRequest = serde_json::from_str(
            r#"{"title":"A","author":{"firstName":"Jane","lastName":"Doe"},"content":"Hello"}"#,
        )
        .unwrap();

        assert_eq!(req.author, Author::new("Jane", "Doe"));
    }
}
