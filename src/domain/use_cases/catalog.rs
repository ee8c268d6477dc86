use futures::try_join;

use crate::{
    domain::{assembly, fallback},
    entities::listing::Listing,
    entities::project::{
        NewProjectRequest, Project, ProjectCreatedResponse, ProjectInsert, ProjectQuery, SortKey,
    },
    errors::{AppError, StoreError},
    repositories::catalog::CatalogStore,
};

pub struct CatalogHandler<S>
where
    S: CatalogStore,
{
    pub store: S,
}

impl<S> CatalogHandler<S>
where
    S: CatalogStore,
{
    pub fn new(store: S) -> Self {
        CatalogHandler { store }
    }

    /// Lists projects matching the supplied criteria. A failed store read
    /// never surfaces to the caller; the fixed sample catalog is substituted
    /// and the listing is marked as sample content.
    pub async fn list_projects(&self, query: &ProjectQuery) -> Listing<Project> {
        match self.load_projects(query).await {
            Ok(projects) => Listing::live(projects),
            Err(e) => {
                tracing::error!("Project read failed, serving sample catalog: {}", e);
                Listing::sample(fallback::sample_projects())
            }
        }
    }

    async fn load_projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, StoreError> {
        let category = assembly::active_filter(query.category.as_deref());

        // Dependent reads, awaited in order: rows first, then the join and
        // lookup tables used to resolve technology names.
        let rows = self.store.fetch_projects(category).await?;
        let links = self.store.fetch_project_links(None).await?;
        let technologies = self.store.fetch_technologies().await?;

        let projects = assembly::assemble_projects(rows, &links, &technologies);
        let mut projects = assembly::apply_filters(projects, query);
        assembly::sort_projects(&mut projects, query.sort);

        if let Some(limit) = query.limit {
            projects.truncate(limit);
        }

        Ok(projects)
    }

    /// Featured projects, newest first. Zero featured rows from a healthy
    /// store is a legitimate empty listing, distinct from the sample
    /// fallback used on store failure; callers treat it as a cue to show the
    /// full catalog instead.
    pub async fn list_featured_projects(&self) -> Listing<Project> {
        match self.load_featured_projects().await {
            Ok(projects) => Listing::live(projects),
            Err(e) => {
                tracing::error!("Featured project read failed, serving sample catalog: {}", e);
                Listing::sample(fallback::sample_featured_projects())
            }
        }
    }

    async fn load_featured_projects(&self) -> Result<Vec<Project>, StoreError> {
        let rows = self.store.fetch_featured_projects().await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let links = self.store.fetch_project_links(Some(&ids)).await?;
        let technologies = self.store.fetch_technologies().await?;

        let mut projects = assembly::assemble_projects(rows, &links, &technologies);
        assembly::sort_projects(&mut projects, SortKey::Newest);

        Ok(projects)
    }

    /// Distinct project categories with the "All" sentinel prepended.
    pub async fn list_categories(&self) -> Vec<String> {
        match self.store.fetch_categories().await {
            Ok(categories) => assembly::vocabulary_with_all(categories),
            Err(e) => {
                tracing::error!("Category read failed, serving fallback vocabulary: {}", e);
                fallback::fallback_vocabulary(&fallback::FALLBACK_PROJECT_CATEGORIES)
            }
        }
    }

    /// Technology vocabulary with the "All" sentinel prepended, merging
    /// names from the technologies table with names found in denormalized
    /// text fields. The two reads are independent and issued concurrently.
    pub async fn list_technologies(&self) -> Vec<String> {
        let reads = try_join!(
            self.store.fetch_technologies(),
            self.store.fetch_projects(None),
        );

        match reads {
            Ok((technologies, rows)) => {
                let names = technologies
                    .into_iter()
                    .map(|t| t.name)
                    .chain(rows.into_iter().flat_map(|row| {
                        row.technologies
                            .as_deref()
                            .map(assembly::split_technology_field)
                            .unwrap_or_default()
                    }));
                assembly::vocabulary_with_all(names)
            }
            Err(e) => {
                tracing::error!("Technology read failed, serving fallback vocabulary: {}", e);
                fallback::fallback_vocabulary(&fallback::FALLBACK_PROJECT_TECHNOLOGIES)
            }
        }
    }

    /// Admin write path. Validation and store-write errors both surface to
    /// the caller so the admin form can display them and retry.
    pub async fn create_project(
        &self,
        request: NewProjectRequest,
    ) -> Result<ProjectCreatedResponse, AppError> {
        let insert = ProjectInsert::try_from(request)?;

        let id = self
            .store
            .create_project(&insert, &insert.technologies)
            .await?;

        Ok(ProjectCreatedResponse { id })
    }

    pub async fn count_projects(&self) -> Result<i64, AppError> {
        Ok(self.store.count_projects().await?)
    }
}
