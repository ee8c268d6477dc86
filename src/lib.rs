use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;

pub use domain::{assembly, entities, fallback, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::db;

use repositories::blog::BlogStore;
use repositories::catalog::CatalogStore;
use repositories::null_store::NullStore;
use repositories::sqlx_repo::{SqlxBlogRepo, SqlxCatalogRepo};
use use_cases::blog::BlogHandler;
use use_cases::catalog::CatalogHandler;
use use_cases::contact::ContactRelay;

pub type AppCatalogHandler = CatalogHandler<Arc<dyn CatalogStore>>;
pub type AppBlogHandler = BlogHandler<Arc<dyn BlogStore>>;

pub struct AppState {
    pub catalog: AppCatalogHandler,
    pub blog: AppBlogHandler,
    pub contact: ContactRelay,
}

impl AppState {
    /// Wires the handlers against the real Postgres store, or against the
    /// null-object store when no database is configured. The choice happens
    /// once, here; nothing downstream checks credentials again.
    pub fn new(config: &settings::AppConfig, pool: Option<sqlx::PgPool>) -> Self {
        let (catalog_store, blog_store): (Arc<dyn CatalogStore>, Arc<dyn BlogStore>) = match pool {
            Some(pool) => (
                Arc::new(SqlxCatalogRepo::new(pool.clone())),
                Arc::new(SqlxBlogRepo::new(pool)),
            ),
            None => {
                tracing::warn!(
                    "No database configured; using the null store. Reads return empty, writes fail."
                );
                (Arc::new(NullStore), Arc::new(NullStore))
            }
        };

        AppState {
            catalog: CatalogHandler::new(catalog_store),
            blog: BlogHandler::new(blog_store),
            contact: ContactRelay::new(config.contact_webhook_url.clone()),
        }
    }
}
