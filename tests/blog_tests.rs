mod test_utils;

use test_utils::*;

use portfolio_content_api::entities::blog_post::NewBlogPostRequest;
use portfolio_content_api::entities::listing::ContentSource;
use portfolio_content_api::errors::AppError;
use portfolio_content_api::fallback;
use portfolio_content_api::use_cases::blog::BlogHandler;

#[actix_rt::test]
async fn category_filter_is_pushed_down_to_the_store() {
    let mut store = MockBlogRepo::new();
    store
        .expect_fetch_blog_posts()
        .withf(|category| category == &Some("React"))
        .returning(|_| Ok(vec![blog_post(1, "Getting Started with React", "React", None)]));

    let handler = BlogHandler::new(store);
    let listing = handler.list_blog_posts(Some("React")).await;

    assert_eq!(listing.source, ContentSource::Live);
    assert_eq!(listing.items.len(), 1);
}

#[actix_rt::test]
async fn all_sentinel_means_no_category_pushdown() {
    let mut store = MockBlogRepo::new();
    store
        .expect_fetch_blog_posts()
        .withf(|category| category.is_none())
        .returning(|_| Ok(Vec::new()));

    let handler = BlogHandler::new(store);
    let listing = handler.list_blog_posts(Some("All")).await;

    assert_eq!(listing.source, ContentSource::Live);
    assert!(listing.items.is_empty());
}

#[actix_rt::test]
async fn blog_store_failure_serves_sample_posts() {
    let mut store = MockBlogRepo::new();
    store.expect_fetch_blog_posts().returning(|_| Err(store_failure()));

    let handler = BlogHandler::new(store);
    let listing = handler.list_blog_posts(None).await;

    assert!(listing.is_sample());
    assert_eq!(listing.items, fallback::sample_blog_posts());
}

#[actix_rt::test]
async fn blog_fallback_respects_the_requested_category() {
    let mut store = MockBlogRepo::new();
    store.expect_fetch_blog_posts().returning(|_| Err(store_failure()));

    let handler = BlogHandler::new(store);
    let listing = handler.list_blog_posts(Some("React")).await;

    assert!(listing.is_sample());
    assert!(listing.items.iter().all(|p| p.category == "React"));
}

#[actix_rt::test]
async fn featured_posts_pass_limit_to_the_store() {
    let mut store = MockBlogRepo::new();
    store
        .expect_fetch_recent_blog_posts()
        .withf(|limit| *limit == 2)
        .returning(|_| {
            Ok(vec![
                blog_post(2, "Mastering TypeScript", "TypeScript", None),
                blog_post(1, "Getting Started with React", "React", None),
            ])
        });

    let handler = BlogHandler::new(store);
    let listing = handler.list_featured_blog_posts(2).await;

    assert_eq!(listing.items.len(), 2);
}

#[actix_rt::test]
async fn featured_posts_fallback_is_truncated_to_limit() {
    let mut store = MockBlogRepo::new();
    store
        .expect_fetch_recent_blog_posts()
        .returning(|_| Err(store_failure()));

    let handler = BlogHandler::new(store);
    let listing = handler.list_featured_blog_posts(1).await;

    assert!(listing.is_sample());
    assert_eq!(listing.items.len(), 1);
}

#[actix_rt::test]
async fn blog_categories_fall_back_on_failure() {
    let mut store = MockBlogRepo::new();
    store
        .expect_fetch_blog_categories()
        .returning(|| Err(store_failure()));

    let handler = BlogHandler::new(store);
    let categories = handler.list_blog_categories().await;

    assert_eq!(categories, vec!["All", "React", "TypeScript"]);
}

#[test]
fn body_text_falls_back_to_the_description() {
    let bare = blog_post(1, "Getting Started with React", "React", None);
    assert_eq!(bare.body_text(), bare.description);

    let mut full = blog_post(2, "Mastering TypeScript", "TypeScript", None);
    full.content = Some("Long-form article body".to_string());
    assert_eq!(full.body_text(), "Long-form article body");
}

#[actix_rt::test]
async fn create_blog_post_surfaces_store_errors() {
    let mut store = MockBlogRepo::new();
    store
        .expect_create_blog_post()
        .returning(|_| Err(store_failure()));

    let handler = BlogHandler::new(store);
    let result = handler
        .create_blog_post(NewBlogPostRequest {
            title: "New Post".to_string(),
            description: "A fresh article".to_string(),
            date: None,
            image: "https://example.com/cover.png".to_string(),
            category: "React".to_string(),
            content: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
}

#[actix_rt::test]
async fn create_blog_post_rejects_invalid_image_url() {
    let store = MockBlogRepo::new();

    let handler = BlogHandler::new(store);
    let result = handler
        .create_blog_post(NewBlogPostRequest {
            title: "New Post".to_string(),
            description: "A fresh article".to_string(),
            date: None,
            image: "not-a-url".to_string(),
            category: "React".to_string(),
            content: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
