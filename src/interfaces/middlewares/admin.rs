use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    http::header, Error, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::errors::AppError;

/// Gate on the /admin scope: a single configured bearer key. User accounts
/// and session handling are delegated to the hosting platform, so this is
/// deliberately just a shared-secret check.
#[derive(Clone)]
pub struct AdminGuard {
    api_key: Option<Rc<String>>,
}

impl AdminGuard {
    pub fn new(api_key: Option<String>) -> Self {
        AdminGuard {
            api_key: api_key.map(Rc::new),
        }
    }
}

impl<S> Transform<S, ServiceRequest> for AdminGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminGuardService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminGuardService {
            service: Rc::new(service),
            api_key: self.api_key.clone(),
        })
    }
}

// Byte-wise fold so a mismatch takes the same time wherever the first
// differing byte sits.
fn keys_match(presented: &str, expected: &str) -> bool {
    let a = presented.as_bytes();
    let b = expected.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

pub struct AdminGuardService<S> {
    service: Rc<S>,
    api_key: Option<Rc<String>>,
}

impl<S> Service<ServiceRequest> for AdminGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let api_key = self.api_key.clone();

        Box::pin(async move {
            let Some(api_key) = api_key else {
                tracing::warn!("Admin request rejected: no admin API key configured");
                let response = HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": "Admin console is not configured"
                }));
                return Ok(req.into_response(response));
            };

            let presented = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .and_then(|h| h.strip_prefix("Bearer "));

            match presented {
                Some(token) if keys_match(token, api_key.as_str()) => service.call(req).await,
                _ => {
                    tracing::warn!("Admin request rejected: missing or invalid bearer key");
                    let response = AppError::UnauthorizedAccess.error_response();
                    Ok(req.into_response(response))
                }
            }
        })
    }
}
