use actix_web::HttpResponse;

pub mod config;
pub mod reservations;
pub mod reviews;

/// Default route for POST-only resources.
pub async fn post_required() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({
        "status": "error",
        "message": "Only POST requests allowed"
    }))
}

/// Default route for GET-only resources.
pub async fn get_required() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(serde_json::json!({
        "status": "error",
        "message": "GET required"
    }))
}
