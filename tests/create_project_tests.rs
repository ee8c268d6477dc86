mod test_utils;

use test_utils::*;

use portfolio_content_api::entities::project::NewProjectRequest;
use portfolio_content_api::errors::AppError;
use portfolio_content_api::use_cases::catalog::CatalogHandler;

fn valid_request() -> NewProjectRequest {
    NewProjectRequest {
        title: "Weather App".to_string(),
        description: "An interactive weather dashboard".to_string(),
        image: "https://example.com/weather.png".to_string(),
        category: "Frontend".to_string(),
        technologies: vec!["JavaScript".to_string(), "CSS3".to_string()],
        live_url: Some("https://example-weather.com".to_string()),
        github_url: Some("https://github.com/example/weather".to_string()),
        featured: true,
    }
}

#[actix_rt::test]
async fn create_project_passes_normalized_technology_names_to_the_store() {
    let mut store = MockCatalogRepo::new();
    store
        .expect_create_project()
        .withf(|project, technologies| {
            project.title == "Weather App" && technologies == ["JavaScript", "CSS3"]
        })
        .returning(|_, _| Ok(42));

    let handler = CatalogHandler::new(store);
    let response = handler.create_project(valid_request()).await.unwrap();

    assert_eq!(response.id, 42);
}

#[actix_rt::test]
async fn payload_technologies_are_trimmed_and_deduplicated() {
    let mut request = valid_request();
    request.technologies = vec![
        " React ".to_string(),
        "React".to_string(),
        "Node.js".to_string(),
    ];

    let mut store = MockCatalogRepo::new();
    store
        .expect_create_project()
        .withf(|_, technologies| technologies == ["React", "Node.js"])
        .returning(|_, _| Ok(1));

    let handler = CatalogHandler::new(store);
    assert!(handler.create_project(request).await.is_ok());
}

#[actix_rt::test]
async fn create_project_rejects_invalid_urls() {
    let mut request = valid_request();
    request.image = "ftp://example.com/weather.png".to_string();

    let handler = CatalogHandler::new(MockCatalogRepo::new());
    let result = handler.create_project(request).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn create_project_surfaces_write_failures_to_the_caller() {
    let mut store = MockCatalogRepo::new();
    store
        .expect_create_project()
        .returning(|_, _| Err(store_failure()));

    let handler = CatalogHandler::new(store);
    let result = handler.create_project(valid_request()).await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
}

// Technology names are unique by convention only. Two creations that both
// carry a not-yet-existing name are each allowed to insert it; the write
// path must not silently deduplicate across calls.
#[actix_rt::test]
async fn overlapping_new_technology_names_across_calls_are_allowed() {
    let mut store = MockCatalogRepo::new();
    store
        .expect_create_project()
        .withf(|_, technologies| technologies.contains(&"Svelte".to_string()))
        .times(2)
        .returning(|_, _| Ok(1));

    let handler = CatalogHandler::new(store);

    let mut first = valid_request();
    first.technologies = vec!["Svelte".to_string()];
    let mut second = valid_request();
    second.technologies = vec!["Svelte".to_string()];

    assert!(handler.create_project(first).await.is_ok());
    assert!(handler.create_project(second).await.is_ok());
}
