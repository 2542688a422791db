//! HTTP handlers and route configuration.

mod posts;

use actix_web::{HttpResponse, web};
use blog_shared::ErrorResponse;

use crate::middleware::error::AppError;

/// Configure all application routes.
///
/// Anything that does not match a route, including a known path with an
/// unsupported method, answers 404.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            web::resource("/posts")
                .route(web::get().to(posts::list_posts))
                .route(web::post().to(posts::create_post))
                .default_service(web::route().to(not_found)),
        )
        .service(
            web::resource("/posts/{id}")
                .route(web::get().to(posts::get_post))
                .route(web::put().to(posts::update_post))
                .route(web::delete().to(posts::delete_post))
                .default_service(web::route().to(not_found)),
        )
        .default_service(web::route().to(not_found));
}

/// Malformed JSON bodies are client errors.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("Invalid JSON body: {}", err)).into()
    })
}

/// Fallback for unmatched routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found())
}
