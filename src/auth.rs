use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::domain::auth::AuthenticatedUser;

/// Runtime configuration shared with request handlers.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared secret used to verify bearer tokens.
    pub secret: String,
}

fn unauthorized(detail: &str) -> Error {
    InternalError::from_response(
        detail.to_string(),
        HttpResponse::Unauthorized().json(json!({ "detail": detail })),
    )
    .into()
}

fn authenticate(req: &HttpRequest) -> Result<AuthenticatedUser, Error> {
    let config = req
        .app_data::<web::Data<ServerConfig>>()
        .ok_or_else(|| unauthorized("Authentication is not configured."))?;

    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| unauthorized("Authentication credentials were not provided."))?;

    AuthenticatedUser::from_jwt(token, &config.secret)
        .map_err(|_| unauthorized("Invalid or expired token."))
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req))
    }
}
