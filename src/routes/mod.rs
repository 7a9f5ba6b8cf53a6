use actix_web::HttpResponse;
use actix_web::web::Bytes;
use serde_json::{Value, json};

pub mod snippets;
pub mod tags;

/// Parse a raw request body into JSON.
///
/// An empty body maps to JSON null so the form layer reports it with the
/// empty-request message instead of a parser error.
pub(crate) fn parse_json_body(body: &Bytes) -> Result<Value, HttpResponse> {
    if body.is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(|err| {
        HttpResponse::BadRequest().json(json!({ "detail": format!("Invalid JSON body: {err}") }))
    })
}
