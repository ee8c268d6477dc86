use crate::{
    domain::{assembly, fallback},
    entities::blog_post::{BlogPost, BlogPostCreatedResponse, BlogPostInsert, NewBlogPostRequest},
    entities::listing::Listing,
    errors::AppError,
    repositories::blog::BlogStore,
};

pub struct BlogHandler<S>
where
    S: BlogStore,
{
    pub store: S,
}

impl<S> BlogHandler<S>
where
    S: BlogStore,
{
    pub fn new(store: S) -> Self {
        BlogHandler { store }
    }

    /// Lists posts newest first with an optional exact-category filter.
    /// Sample content is substituted when the store read fails.
    pub async fn list_blog_posts(&self, category: Option<&str>) -> Listing<BlogPost> {
        let category = assembly::active_filter(category);

        match self.store.fetch_blog_posts(category).await {
            Ok(posts) => Listing::live(posts),
            Err(e) => {
                tracing::error!("Blog read failed, serving sample posts: {}", e);
                let posts = match category {
                    Some(c) => fallback::sample_blog_posts()
                        .into_iter()
                        .filter(|p| p.category == c)
                        .collect(),
                    None => fallback::sample_blog_posts(),
                };
                Listing::sample(posts)
            }
        }
    }

    /// Newest `limit` posts regardless of category.
    pub async fn list_featured_blog_posts(&self, limit: u32) -> Listing<BlogPost> {
        match self.store.fetch_recent_blog_posts(limit).await {
            Ok(posts) => Listing::live(posts),
            Err(e) => {
                tracing::error!("Recent blog read failed, serving sample posts: {}", e);
                let mut posts = fallback::sample_blog_posts();
                posts.truncate(limit as usize);
                Listing::sample(posts)
            }
        }
    }

    /// Distinct post categories with the "All" sentinel prepended.
    pub async fn list_blog_categories(&self) -> Vec<String> {
        match self.store.fetch_blog_categories().await {
            Ok(categories) => assembly::vocabulary_with_all(categories),
            Err(e) => {
                tracing::error!("Blog category read failed, serving fallback vocabulary: {}", e);
                fallback::fallback_vocabulary(&fallback::FALLBACK_BLOG_CATEGORIES)
            }
        }
    }

    /// Admin write path; errors surface to the caller.
    pub async fn create_blog_post(
        &self,
        request: NewBlogPostRequest,
    ) -> Result<BlogPostCreatedResponse, AppError> {
        let insert = BlogPostInsert::try_from(request)?;

        let id = self.store.create_blog_post(&insert).await?;

        Ok(BlogPostCreatedResponse { id })
    }

    pub async fn count_blog_posts(&self) -> Result<i64, AppError> {
        Ok(self.store.count_blog_posts().await?)
    }
}
