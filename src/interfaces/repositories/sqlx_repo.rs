use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxCatalogRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxBlogRepo {
    pub pool: PgPool,
}
