use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::project::{NewProjectRequest, ProjectQuery},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, query))]
pub async fn get_projects(
    state: web::Data<AppState>,
    query: web::Query<ProjectQuery>,
) -> impl Responder {
    let listing = state.catalog.list_projects(&query).await;

    HttpResponse::Ok().json(listing)
}

#[instrument(skip(state))]
pub async fn get_featured_projects(state: web::Data<AppState>) -> impl Responder {
    let listing = state.catalog.list_featured_projects().await;

    HttpResponse::Ok().json(listing)
}

#[instrument(skip(state))]
pub async fn get_project_categories(state: web::Data<AppState>) -> impl Responder {
    let categories = state.catalog.list_categories().await;

    HttpResponse::Ok().json(categories)
}

#[instrument(skip(state))]
pub async fn get_project_technologies(state: web::Data<AppState>) -> impl Responder {
    let technologies = state.catalog.list_technologies().await;

    HttpResponse::Ok().json(technologies)
}

#[instrument(skip(state, data))]
pub async fn create_project(
    state: web::Data<AppState>,
    data: web::Json<NewProjectRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.catalog.create_project(data.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}
