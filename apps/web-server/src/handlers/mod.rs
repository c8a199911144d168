//! HTTP handlers and route configuration.

mod api;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(posts::list_posts))
        .route("/create_post", web::post().to(posts::create_post))
        .route("/post/{id}", web::get().to(posts::view_post))
        .route("/add_comment/{id}", web::post().to(posts::add_comment))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .route("/posts", web::get().to(api::list_posts))
                .route("/posts/{id}", web::get().to(api::get_post)),
        );
}
