use actix_web::web::Bytes;
use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};
use serde_json::json;

use crate::domain::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::parse_json_body;
use crate::services::ServiceError;
use crate::services::snippets as snippet_service;

const NOT_FOUND_DETAIL: &str = "Snippet not found or you do not have permission to access it.";

#[get("/snippets/")]
pub async fn list_snippets(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match snippet_service::list_snippets(repo.get_ref(), &user) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(err) => {
            log::error!("Failed to list snippets: {err}");
            HttpResponse::InternalServerError().json(json!({
                "detail": "An error occurred while fetching snippets.",
                "error": err.to_string(),
            }))
        }
    }
}

#[post("/snippets/")]
pub async fn create_snippet(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: Bytes,
) -> impl Responder {
    let value = match parse_json_body(&body) {
        Ok(value) => value,
        Err(response) => return response,
    };

    match snippet_service::create_snippet(repo.get_ref(), &user, &value) {
        Ok(detail) => HttpResponse::Created().json(detail),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "detail": message }))
        }
        Err(err) => {
            log::error!("Failed to create snippet: {err}");
            HttpResponse::InternalServerError().json(json!({
                "detail": "An error occurred while creating the snippet.",
                "error": err.to_string(),
            }))
        }
    }
}

#[get("/snippets/{snippet_id}/")]
pub async fn get_snippet(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let snippet_id = path.into_inner();

    match snippet_service::get_snippet(repo.get_ref(), &user, snippet_id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "detail": NOT_FOUND_DETAIL }))
        }
        Err(err) => {
            log::error!("Failed to fetch snippet {snippet_id}: {err}");
            HttpResponse::InternalServerError().json(json!({
                "detail": "An error occurred while fetching the snippet.",
                "error": err.to_string(),
            }))
        }
    }
}

fn handle_update(
    repo: &DieselRepository,
    user: &AuthenticatedUser,
    snippet_id: i32,
    body: &Bytes,
    partial: bool,
) -> HttpResponse {
    let value = match parse_json_body(body) {
        Ok(value) => value,
        Err(response) => return response,
    };

    match snippet_service::update_snippet(repo, user, snippet_id, &value, partial) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "detail": message }))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "detail": NOT_FOUND_DETAIL }))
        }
        Err(err) => {
            log::error!("Failed to update snippet {snippet_id}: {err}");
            HttpResponse::InternalServerError().json(json!({
                "detail": "An error occurred while updating the snippet.",
                "error": err.to_string(),
            }))
        }
    }
}

#[put("/snippets/{snippet_id}/")]
pub async fn update_snippet(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: Bytes,
) -> impl Responder {
    handle_update(repo.get_ref(), &user, path.into_inner(), &body, false)
}

#[patch("/snippets/{snippet_id}/")]
pub async fn patch_snippet(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    body: Bytes,
) -> impl Responder {
    handle_update(repo.get_ref(), &user, path.into_inner(), &body, true)
}

#[delete("/snippets/{snippet_id}/")]
pub async fn delete_snippet(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let snippet_id = path.into_inner();

    match snippet_service::remove_snippet(repo.get_ref(), &user, snippet_id) {
        Ok(list) => HttpResponse::Ok().json(list),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(json!({ "detail": NOT_FOUND_DETAIL }))
        }
        Err(err) => {
            log::error!("Failed to delete snippet {snippet_id}: {err}");
            HttpResponse::InternalServerError().json(json!({
                "detail": "An error occurred while deleting the snippet.",
                "error": err.to_string(),
            }))
        }
    }
}
