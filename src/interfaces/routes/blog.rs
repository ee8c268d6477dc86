use actix_web::web;

use crate::handlers::blog;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/blog")
            .service(
                web::resource("/posts")
                    .route(web::get().to(blog::get_blog_posts))
            )
            .service(
                web::resource("/posts/featured")
                    .route(web::get().to(blog::get_featured_blog_posts))
            )
            .service(
                web::resource("/categories")
                    .route(web::get().to(blog::get_blog_categories))
            )
    );
}
