use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use humantime::format_duration;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::time::Duration;

use crate::{errors::AppError, AppState};

static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

#[derive(Serialize)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: String,
    version: String,
}

#[get("/health")]
pub async fn admin_health_check(state: web::Data<AppState>) -> impl Responder {
    let now_utc = Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime =
        format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    // A count query doubles as the liveness probe for the store.
    let database = match state.catalog.count_projects().await {
        Ok(_) => "OK",
        Err(_) => "Unavailable",
    };

    HttpResponse::Ok().json(HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        database: database.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct AdminStatsResponse {
    projects: i64,
    blog_posts: i64,
}

#[get("/stats")]
pub async fn admin_stats(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let (projects, blog_posts) = futures::try_join!(
        state.catalog.count_projects(),
        state.blog.count_blog_posts(),
    )?;

    Ok(HttpResponse::Ok().json(AdminStatsResponse { projects, blog_posts }))
}
