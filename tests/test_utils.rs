#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;

use portfolio_content_api::entities::blog_post::{BlogPost, BlogPostInsert};
use portfolio_content_api::entities::project::{ProjectInsert, ProjectRow};
use portfolio_content_api::entities::technology::{ProjectTechnologyRow, TechnologyRow};
use portfolio_content_api::errors::StoreError;

// mockall can't mock async-trait methods whose arguments nest a reference
// inside a generic type (e.g. `Option<&str>`), so the mocks expose sync
// inherent methods and the store traits delegate to them below. The
// expectation API (`expect_*`, `withf`, `returning`) is unchanged.
mock! {
    pub CatalogRepo {
        pub fn fetch_projects<'a>(&self, category: Option<&'a str>) -> Result<Vec<ProjectRow>, StoreError>;
        pub fn fetch_featured_projects(&self) -> Result<Vec<ProjectRow>, StoreError>;
        pub fn fetch_project_links<'a>(
            &self,
            project_ids: Option<&'a [i32]>,
        ) -> Result<Vec<ProjectTechnologyRow>, StoreError>;
        pub fn fetch_technologies(&self) -> Result<Vec<TechnologyRow>, StoreError>;
        pub fn fetch_categories(&self) -> Result<Vec<String>, StoreError>;
        pub fn create_project(
            &self,
            project: &ProjectInsert,
            technologies: &[String],
        ) -> Result<i32, StoreError>;
        pub fn count_projects(&self) -> Result<i64, StoreError>;
    }
}

#[async_trait]
impl portfolio_content_api::repositories::catalog::CatalogStore for MockCatalogRepo {
    async fn fetch_projects(&self, category: Option<&str>) -> Result<Vec<ProjectRow>, StoreError> {
        self.fetch_projects(category)
    }
    async fn fetch_featured_projects(&self) -> Result<Vec<ProjectRow>, StoreError> {
        self.fetch_featured_projects()
    }
    async fn fetch_project_links(
        &self,
        project_ids: Option<&[i32]>,
    ) -> Result<Vec<ProjectTechnologyRow>, StoreError> {
        self.fetch_project_links(project_ids)
    }
    async fn fetch_technologies(&self) -> Result<Vec<TechnologyRow>, StoreError> {
        self.fetch_technologies()
    }
    async fn fetch_categories(&self) -> Result<Vec<String>, StoreError> {
        self.fetch_categories()
    }
    async fn create_project(
        &self,
        project: &ProjectInsert,
        technologies: &[String],
    ) -> Result<i32, StoreError> {
        self.create_project(project, technologies)
    }
    async fn count_projects(&self) -> Result<i64, StoreError> {
        self.count_projects()
    }
}

mock! {
    pub BlogRepo {
        pub fn fetch_blog_posts<'a>(&self, category: Option<&'a str>) -> Result<Vec<BlogPost>, StoreError>;
        pub fn fetch_recent_blog_posts(&self, limit: u32) -> Result<Vec<BlogPost>, StoreError>;
        pub fn fetch_blog_categories(&self) -> Result<Vec<String>, StoreError>;
        pub fn create_blog_post(&self, post: &BlogPostInsert) -> Result<i32, StoreError>;
        pub fn count_blog_posts(&self) -> Result<i64, StoreError>;
    }
}

#[async_trait]
impl portfolio_content_api::repositories::blog::BlogStore for MockBlogRepo {
    async fn fetch_blog_posts(&self, category: Option<&str>) -> Result<Vec<BlogPost>, StoreError> {
        self.fetch_blog_posts(category)
    }
    async fn fetch_recent_blog_posts(&self, limit: u32) -> Result<Vec<BlogPost>, StoreError> {
        self.fetch_recent_blog_posts(limit)
    }
    async fn fetch_blog_categories(&self) -> Result<Vec<String>, StoreError> {
        self.fetch_blog_categories()
    }
    async fn create_blog_post(&self, post: &BlogPostInsert) -> Result<i32, StoreError> {
        self.create_blog_post(post)
    }
    async fn count_blog_posts(&self) -> Result<i64, StoreError> {
        self.count_blog_posts()
    }
}

pub fn instant(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

pub fn project_row(id: i32, title: &str, category: &str, created_at: Option<&str>) -> ProjectRow {
    ProjectRow {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        image: "https://example.com/image.png".to_string(),
        category: category.to_string(),
        featured: false,
        liveurl: None,
        githuburl: None,
        technologies: None,
        created_at: created_at.and_then(instant),
    }
}

pub fn technology(id: i32, name: &str) -> TechnologyRow {
    TechnologyRow { id, name: name.to_string() }
}

pub fn link(project_id: i32, technology_id: i32) -> ProjectTechnologyRow {
    ProjectTechnologyRow { project_id, technology_id }
}

pub fn blog_post(id: i32, title: &str, category: &str, created_at: Option<&str>) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        description: format!("{} description", title),
        date: "May 1, 2025".to_string(),
        image: "https://example.com/cover.png".to_string(),
        category: category.to_string(),
        content: None,
        created_at: created_at.and_then(instant),
    }
}

pub fn store_failure() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}
