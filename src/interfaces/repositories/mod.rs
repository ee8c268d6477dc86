pub mod blog;
pub mod catalog;
pub mod null_store;
pub mod sqlx_repo;
