use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::domain::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::tags as tag_service;

#[get("/tags/")]
pub async fn list_tags(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tag_service::list_tags(repo.get_ref()) {
        Ok(tags) => HttpResponse::Ok().json(tags),
        Err(err) => {
            log::error!("Failed to list tags: {err}");
            HttpResponse::InternalServerError().json(json!({
                "detail": "An error occurred while fetching tags.",
                "error": err.to_string(),
            }))
        }
    }
}

#[get("/tags/{tag_id}/")]
pub async fn get_tag(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let tag_id = path.into_inner();

    match tag_service::get_tag(repo.get_ref(), &user, tag_id) {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(ServiceError::NotFound) => HttpResponse::NotFound()
            .json(json!({ "detail": format!("Tag with id {tag_id} not found.") })),
        Err(err) => {
            log::error!("Failed to fetch tag {tag_id}: {err}");
            HttpResponse::InternalServerError().json(json!({
                "detail": "An error occurred while fetching the tag.",
                "error": err.to_string(),
            }))
        }
    }
}
