use async_trait::async_trait;

use crate::{
    entities::blog_post::{BlogPost, BlogPostInsert},
    entities::project::{ProjectInsert, ProjectRow},
    entities::technology::{ProjectTechnologyRow, TechnologyRow},
    errors::StoreError,
    repositories::{blog::BlogStore, catalog::CatalogStore},
};

/// Null-object store selected at startup when no database URL is configured.
/// Reads succeed with empty result sets (the site renders empty, not
/// broken); writes fail loudly since there is nowhere to put the data.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl NullStore {
    fn write_error() -> StoreError {
        StoreError::Unavailable("no database configured".into())
    }
}

#[async_trait]
impl CatalogStore for NullStore {
    async fn fetch_projects(&self, _category: Option<&str>) -> Result<Vec<ProjectRow>, StoreError> {
        Ok(Vec::new())
    }

    async fn fetch_featured_projects(&self) -> Result<Vec<ProjectRow>, StoreError> {
        Ok(Vec::new())
    }

    async fn fetch_project_links(
        &self,
        _project_ids: Option<&[i32]>,
    ) -> Result<Vec<ProjectTechnologyRow>, StoreError> {
        Ok(Vec::new())
    }

    async fn fetch_technologies(&self) -> Result<Vec<TechnologyRow>, StoreError> {
        Ok(Vec::new())
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }

    async fn create_project(
        &self,
        _project: &ProjectInsert,
        _technologies: &[String],
    ) -> Result<i32, StoreError> {
        Err(Self::write_error())
    }

    async fn count_projects(&self) -> Result<i64, StoreError> {
        Ok(0)
    }
}

#[async_trait]
impl BlogStore for NullStore {
    async fn fetch_blog_posts(&self, _category: Option<&str>) -> Result<Vec<BlogPost>, StoreError> {
        Ok(Vec::new())
    }

    async fn fetch_recent_blog_posts(&self, _limit: u32) -> Result<Vec<BlogPost>, StoreError> {
        Ok(Vec::new())
    }

    async fn fetch_blog_categories(&self) -> Result<Vec<String>, StoreError> {
        Ok(Vec::new())
    }

    async fn create_blog_post(&self, _post: &BlogPostInsert) -> Result<i32, StoreError> {
        Err(Self::write_error())
    }

    async fn count_blog_posts(&self) -> Result<i64, StoreError> {
        Ok(0)
    }
}
