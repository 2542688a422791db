//! Blog post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{BlogPostChanges, BlogPostRepr, NewBlogPost};
use blog_shared::dto::{BlogPostListResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Keys that must be present in a create body.
const REQUIRED_FIELDS: [&str; 3] = ["title", "author", "content"];

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    Ok(HttpResponse::Ok().json(BlogPostListResponse {
        blogposts: posts.into_iter().map(BlogPostRepr::from).collect(),
    }))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("blog post {}", id)))?;

    Ok(HttpResponse::Ok().json(post.api_repr()))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();

    // Presence is checked on the raw keys before any typing.
    for field in REQUIRED_FIELDS {
        if body.get(field).is_none() {
            return Err(AppError::BadRequest(format!(
                "Missing `{}` in request body",
                field
            )));
        }
    }

    let req: CreateBlogPostRequest = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    let new_post = NewBlogPost::new(req.title, req.author, req.content)?;
    let post = state.posts.create(new_post).await?;
    tracing::info!(post_id = %post.id, "Blog post created");

    Ok(HttpResponse::Created().json(post.api_repr()))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let path_id = path.into_inner();
    let req = body.into_inner();

    if req.id.as_deref() != Some(path_id.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            path_id,
            req.id.as_deref().unwrap_or("missing")
        )));
    }

    let id = parse_post_id(&path_id)?;
    let changes = BlogPostChanges::new(req.title, req.author, req.content)?;
    let post = state.posts.update(id, changes).await?;
    tracing::info!(post_id = %post.id, "Blog post updated");

    Ok(HttpResponse::Ok().json(post.api_repr()))
}

/// DELETE /posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}

/// Ids are opaque to clients; one that is not a UUID cannot name a stored post.
fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("blog post {}", raw)))
}
