use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};

use crate::{
    entities::project::{ProjectInsert, ProjectRow},
    entities::technology::{ProjectTechnologyRow, TechnologyRow},
    errors::StoreError,
    repositories::sqlx_repo::SqlxCatalogRepo,
};

/// Read/write surface over the `projects`, `technologies` and
/// `project_technologies` collections. Reads return raw rows; all
/// normalization and filtering beyond simple predicates happens in memory in
/// the assembly layer.
#[async_trait]
pub trait CatalogStore: Sync + Send {
    /// Fetch project rows, optionally pushing a category equality predicate
    /// down to the store. The predicate is an optimization only; callers
    /// re-apply it in memory.
    async fn fetch_projects(&self, category: Option<&str>) -> Result<Vec<ProjectRow>, StoreError>;

    /// Featured rows only, newest first.
    async fn fetch_featured_projects(&self) -> Result<Vec<ProjectRow>, StoreError>;

    /// Association rows, optionally restricted to the given project ids.
    async fn fetch_project_links(
        &self,
        project_ids: Option<&[i32]>,
    ) -> Result<Vec<ProjectTechnologyRow>, StoreError>;

    async fn fetch_technologies(&self) -> Result<Vec<TechnologyRow>, StoreError>;

    /// Every `category` value currently present on a project row.
    async fn fetch_categories(&self) -> Result<Vec<String>, StoreError>;

    /// Inserts the project, reuses technologies that already exist by exact
    /// name, inserts the missing ones, and links one association row per
    /// name. All-or-nothing from the caller's point of view.
    async fn create_project(
        &self,
        project: &ProjectInsert,
        technologies: &[String],
    ) -> Result<i32, StoreError>;

    async fn count_projects(&self) -> Result<i64, StoreError>;
}

// Handlers are generic over the store; the Arc impl lets the concrete store
// be chosen once at startup (Postgres vs. null object).
#[async_trait]
impl<T: CatalogStore + ?Sized> CatalogStore for Arc<T> {
    async fn fetch_projects(&self, category: Option<&str>) -> Result<Vec<ProjectRow>, StoreError> {
        (**self).fetch_projects(category).await
    }

    async fn fetch_featured_projects(&self) -> Result<Vec<ProjectRow>, StoreError> {
        (**self).fetch_featured_projects().await
    }

    async fn fetch_project_links(
        &self,
        project_ids: Option<&[i32]>,
    ) -> Result<Vec<ProjectTechnologyRow>, StoreError> {
        (**self).fetch_project_links(project_ids).await
    }

    async fn fetch_technologies(&self) -> Result<Vec<TechnologyRow>, StoreError> {
        (**self).fetch_technologies().await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, StoreError> {
        (**self).fetch_categories().await
    }

    async fn create_project(
        &self,
        project: &ProjectInsert,
        technologies: &[String],
    ) -> Result<i32, StoreError> {
        (**self).create_project(project, technologies).await
    }

    async fn count_projects(&self) -> Result<i64, StoreError> {
        (**self).count_projects().await
    }
}

impl SqlxCatalogRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxCatalogRepo { pool }
    }
}

const PROJECT_COLUMNS: &str =
    "id, title, description, image, category, featured, liveurl, githuburl, technologies, created_at";

#[async_trait]
impl CatalogStore for SqlxCatalogRepo {
    async fn fetch_projects(&self, category: Option<&str>) -> Result<Vec<ProjectRow>, StoreError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM projects", PROJECT_COLUMNS));

        if let Some(category) = category {
            builder.push(" WHERE category = ").push_bind(category.to_string());
        }

        let rows = builder
            .build_query_as::<ProjectRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn fetch_featured_projects(&self) -> Result<Vec<ProjectRow>, StoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(&format!(
            "SELECT {} FROM projects WHERE featured = TRUE ORDER BY created_at DESC NULLS LAST, id",
            PROJECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn fetch_project_links(
        &self,
        project_ids: Option<&[i32]>,
    ) -> Result<Vec<ProjectTechnologyRow>, StoreError> {
        let mut builder =
            QueryBuilder::new("SELECT project_id, technology_id FROM project_technologies");

        if let Some(ids) = project_ids {
            builder.push(" WHERE project_id = ANY(").push_bind(ids.to_vec()).push(")");
        }

        let links = builder
            .build_query_as::<ProjectTechnologyRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok(links)
    }

    async fn fetch_technologies(&self) -> Result<Vec<TechnologyRow>, StoreError> {
        let technologies =
            sqlx::query_as::<_, TechnologyRow>("SELECT id, name FROM technologies")
                .fetch_all(&self.pool)
                .await?;

        Ok(technologies)
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, StoreError> {
        let categories = sqlx::query_scalar::<_, String>("SELECT category FROM projects")
            .fetch_all(&self.pool)
            .await?;

        Ok(categories)
    }

    async fn create_project(
        &self,
        project: &ProjectInsert,
        technologies: &[String],
    ) -> Result<i32, StoreError> {
        // Single transaction so a failed linking step cannot leave a project
        // without its technology rows. Concurrent calls can still insert the
        // same technology name twice; name uniqueness is by convention only.
        let mut tx = self.pool.begin().await?;

        let project_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO projects (
                title, description, image, category, featured,
                liveurl, githuburl, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.category)
        .bind(project.featured)
        .bind(&project.live_url)
        .bind(&project.github_url)
        .bind(project.created_at)
        .fetch_one(&mut *tx)
        .await?;

        let existing = sqlx::query_as::<_, TechnologyRow>(
            "SELECT id, name FROM technologies WHERE name = ANY($1)",
        )
        .bind(technologies.to_vec())
        .fetch_all(&mut *tx)
        .await?;

        for name in technologies {
            let technology_id = match existing.iter().find(|t| &t.name == name) {
                Some(t) => t.id,
                None => {
                    sqlx::query_scalar("INSERT INTO technologies (name) VALUES ($1) RETURNING id")
                        .bind(name)
                        .fetch_one(&mut *tx)
                        .await?
                }
            };

            sqlx::query(
                "INSERT INTO project_technologies (project_id, technology_id) VALUES ($1, $2)",
            )
            .bind(project_id)
            .bind(technology_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(project_id)
    }

    async fn count_projects(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
