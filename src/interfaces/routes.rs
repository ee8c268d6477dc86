use actix_web::web;

use crate::handlers::home::home;
use crate::middlewares::admin::AdminGuard;

mod admin;
mod blog;
mod contact;
mod projects;

pub fn configure_routes(cfg: &mut web::ServiceConfig, admin_api_key: Option<String>) {
    cfg.service(home);

    cfg.service(
        web::scope("/api")
            .configure(projects::config_routes)
            .configure(blog::config_routes)
            .configure(contact::config_routes)
    );

    cfg.service(
        web::scope("/admin")
            .wrap(AdminGuard::new(admin_api_key))
            .configure(admin::config_routes)
    );
}
