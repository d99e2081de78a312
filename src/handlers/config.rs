use actix_web::{web, HttpResponse};
use diesel::pg::PgConnection;
use diesel::Connection;
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;

// ── Connection test ──────────────────────────────────────────────────────────

fn default_port() -> String {
    "5432".to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TestConnectionRequest {
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /config/test-connection
///
/// Operator-facing setup probe: attempts a single connection with the
/// submitted credentials and reports the driver's verdict. Unlike the rest of
/// the API this endpoint echoes the driver message, since the caller is the
/// person configuring the database.
#[utoipa::path(
    post,
    path = "/config/test-connection",
    request_body = TestConnectionRequest,
    responses(
        (status = 200, description = "Probe result in the body"),
    ),
    tag = "config"
)]
pub async fn test_connection(
    body: web::Json<TestConnectionRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();

    if body.host.is_empty() || body.database.is_empty() || body.username.is_empty() {
        return Ok(HttpResponse::Ok().json(json!({
            "success": false,
            "message": "Host, database name, and username are required"
        })));
    }

    let url = format!(
        "postgres://{}:{}@{}:{}/{}",
        body.username, body.password, body.host, body.port, body.database
    );

    let outcome = web::block(move || PgConnection::establish(&url))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    match outcome {
        Ok(_) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Connection successful!"
        }))),
        Err(e) => Ok(HttpResponse::Ok().json(json!({
            "success": false,
            "message": e.to_string()
        }))),
    }
}

// ── Bootstrap redirect ───────────────────────────────────────────────────────

/// GET /
///
/// Redirects to the home page when the configured database is reachable,
/// otherwise to the setup page.
pub async fn bootstrap_redirect(pool: web::Data<DbPool>) -> HttpResponse {
    let configured = web::block(move || pool.get().is_ok())
        .await
        .unwrap_or(false);

    let target = if configured { "/home.html" } else { "/setup.html" };
    HttpResponse::Found()
        .append_header(("Location", target))
        .finish()
}
