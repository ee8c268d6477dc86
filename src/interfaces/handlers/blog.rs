use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::blog_post::NewBlogPostRequest, errors::AppError, AppState};

#[instrument(skip(state, query))]
pub async fn get_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let category = query.get("category").map(String::as_str);

    let mut listing = state.blog.list_blog_posts(category).await;

    if let Some(limit) = query.get("limit").and_then(|v| v.parse::<usize>().ok()) {
        listing.items.truncate(limit);
    }

    HttpResponse::Ok().json(listing)
}

#[instrument(skip(state, query))]
pub async fn get_featured_blog_posts(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(4)
        .min(50);

    let listing = state.blog.list_featured_blog_posts(limit).await;

    HttpResponse::Ok().json(listing)
}

#[instrument(skip(state))]
pub async fn get_blog_categories(state: web::Data<AppState>) -> impl Responder {
    let categories = state.blog.list_blog_categories().await;

    HttpResponse::Ok().json(categories)
}

#[instrument(skip(state, data))]
pub async fn create_blog_post(
    state: web::Data<AppState>,
    data: web::Json<NewBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.blog.create_blog_post(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
