use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::get_projects))
            )
            .service(
                web::resource("/featured")
                    .route(web::get().to(projects::get_featured_projects))
            )
            .service(
                web::resource("/categories")
                    .route(web::get().to(projects::get_project_categories))
            )
            .service(
                web::resource("/technologies")
                    .route(web::get().to(projects::get_project_technologies))
            )
    );
}
