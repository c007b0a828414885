//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{AppError, POST_NOT_FOUND};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(err.to_string()).into()
    }))
    // Only post ids are typed path segments; one that does not parse names no post.
    .app_data(
        web::PathConfig::default()
            .error_handler(|_err, _req| AppError::NotFound(POST_NOT_FOUND.to_string()).into()),
    )
    .route("/api/health", web::get().to(health::health_check))
    .service(
        web::scope("/posts")
            // Listing routes come before `/{id}` so they are matched first
            .service(
                web::resource(vec![
                    "/all",
                    "/all/{published_only}",
                    "/all/{published_only}/{date_order}",
                    "/all/{published_only}/{date_order}/{tag}",
                ])
                .route(web::get().to(posts::list_posts)),
            )
            .route("/one/{id}", web::get().to(posts::get_post))
            .service(web::resource("").route(web::post().to(posts::create_post)))
            .service(
                web::resource("/{id}")
                    .route(web::put().to(posts::update_post))
                    .route(web::delete().to(posts::delete_post)),
            ),
    );
}
