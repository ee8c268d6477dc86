use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};

use crate::{
    entities::blog_post::{BlogPost, BlogPostInsert},
    errors::StoreError,
    repositories::sqlx_repo::SqlxBlogRepo,
};

/// Read/write surface over the `blog_posts` collection. Listing reads come
/// back newest first.
#[async_trait]
pub trait BlogStore: Sync + Send {
    async fn fetch_blog_posts(&self, category: Option<&str>) -> Result<Vec<BlogPost>, StoreError>;
    async fn fetch_recent_blog_posts(&self, limit: u32) -> Result<Vec<BlogPost>, StoreError>;
    async fn fetch_blog_categories(&self) -> Result<Vec<String>, StoreError>;
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<i32, StoreError>;
    async fn count_blog_posts(&self) -> Result<i64, StoreError>;
}

#[async_trait]
impl<T: BlogStore + ?Sized> BlogStore for Arc<T> {
    async fn fetch_blog_posts(&self, category: Option<&str>) -> Result<Vec<BlogPost>, StoreError> {
        (**self).fetch_blog_posts(category).await
    }

    async fn fetch_recent_blog_posts(&self, limit: u32) -> Result<Vec<BlogPost>, StoreError> {
        (**self).fetch_recent_blog_posts(limit).await
    }

    async fn fetch_blog_categories(&self) -> Result<Vec<String>, StoreError> {
        (**self).fetch_blog_categories().await
    }

    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<i32, StoreError> {
        (**self).create_blog_post(post).await
    }

    async fn count_blog_posts(&self) -> Result<i64, StoreError> {
        (**self).count_blog_posts().await
    }
}

impl SqlxBlogRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxBlogRepo { pool }
    }
}

const BLOG_COLUMNS: &str = "id, title, description, date, image, category, content, created_at";

#[async_trait]
impl BlogStore for SqlxBlogRepo {
    async fn fetch_blog_posts(&self, category: Option<&str>) -> Result<Vec<BlogPost>, StoreError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM blog_posts", BLOG_COLUMNS));

        if let Some(category) = category {
            builder.push(" WHERE category = ").push_bind(category.to_string());
        }

        builder.push(" ORDER BY created_at DESC NULLS LAST, id");

        let posts = builder
            .build_query_as::<BlogPost>()
            .fetch_all(&self.pool)
            .await?;

        Ok(posts)
    }

    async fn fetch_recent_blog_posts(&self, limit: u32) -> Result<Vec<BlogPost>, StoreError> {
        let posts = sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {} FROM blog_posts ORDER BY created_at DESC NULLS LAST, id LIMIT $1",
            BLOG_COLUMNS
        ))
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn fetch_blog_categories(&self) -> Result<Vec<String>, StoreError> {
        let categories = sqlx::query_scalar::<_, String>("SELECT category FROM blog_posts")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<i32, StoreError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO blog_posts (title, description, date, image, category, content, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&post.title)
        .bind(&post.description)
        .bind(&post.date)
        .bind(&post.image)
        .bind(&post.category)
        .bind(&post.content)
        .bind(post.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn count_blog_posts(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM blog_posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
