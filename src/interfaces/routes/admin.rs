use actix_web::web;

use crate::handlers::{blog, projects, system};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(system::admin_health_check);
    cfg.service(system::admin_stats);

    cfg.service(
        web::resource("/projects")
            .route(web::post().to(projects::create_project))
    );

    cfg.service(
        web::resource("/blog/posts")
            .route(web::post().to(blog::create_blog_post))
    );
}
