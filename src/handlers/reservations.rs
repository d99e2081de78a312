use actix_web::{web, HttpRequest, HttpResponse};
use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::json;
use std::str::FromStr;
use utoipa::ToSchema;

use crate::application::reservation_service::ReservationCommitService;
use crate::db::DbPool;
use crate::domain::reservation::ProductSelection;
use crate::errors::AppError;
use crate::infrastructure::reservation_repo::DieselReservationStore;

// ── Request DTOs ─────────────────────────────────────────────────────────────

fn default_total_price() -> String {
    "0".to_string()
}

fn default_selected_products() -> String {
    "[]".to_string()
}

/// Missing fields fall back to values that fail validation further down
/// rather than rejecting the body outright.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommitReservationRequest {
    #[serde(default)]
    pub customer_id: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "150.00"
    #[serde(default = "default_total_price")]
    pub total_price: String,
    /// JSON-encoded array of `{name, quantity, price}` exactly as the menu
    /// page submits it, hence the double encoding.
    #[serde(default = "default_selected_products")]
    pub selected_products: String,
}

#[derive(Debug, Deserialize)]
struct SelectedProduct {
    #[serde(default)]
    name: String,
    #[serde(default)]
    quantity: i32,
    #[serde(default)]
    price: f64,
}

/// The only access-control signal available: a coarse "in-app AJAX call"
/// marker, not real authentication.
fn ensure_ajax(req: &HttpRequest) -> Result<(), AppError> {
    let is_ajax = req
        .headers()
        .get("X-Requested-With")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("XMLHttpRequest"))
        .unwrap_or(false);
    if is_ajax {
        Ok(())
    } else {
        Err(AppError::Unauthorized)
    }
}

fn parse_selections(raw: &str) -> Result<Vec<ProductSelection>, AppError> {
    let products: Vec<SelectedProduct> = serde_json::from_str(raw)
        .map_err(|_| AppError::Validation("Invalid product data".to_string()))?;

    products
        .into_iter()
        .map(|p| {
            let unit_price = BigDecimal::try_from(p.price)
                .map_err(|_| AppError::Validation("Invalid product data".to_string()))?;
            Ok(ProductSelection {
                name: p.name,
                quantity: p.quantity,
                unit_price,
            })
        })
        .collect()
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// POST /reservations/commit
///
/// Replaces the placeholder item of the customer's latest reservation with
/// the submitted product selection, overwrites the payment amount, bumps the
/// customer counter and appends an audit log row, all in one transaction.
#[utoipa::path(
    post,
    path = "/reservations/commit",
    request_body = CommitReservationRequest,
    responses(
        (status = 201, description = "Product selection committed"),
        (status = 400, description = "Missing AJAX marker or invalid input"),
        (status = 404, description = "No reservation for the customer"),
        (status = 500, description = "Database error"),
    ),
    tag = "reservations"
)]
pub async fn commit_reservation(
    pool: web::Data<DbPool>,
    req: HttpRequest,
    body: web::Json<CommitReservationRequest>,
) -> Result<HttpResponse, AppError> {
    ensure_ajax(&req)?;

    let body = body.into_inner();
    let selections = parse_selections(&body.selected_products)?;

    if body.customer_id <= 0 || selections.is_empty() {
        return Err(AppError::Validation("Missing required data".to_string()));
    }

    let total_price = BigDecimal::from_str(&body.total_price)
        .map_err(|_| AppError::Validation("Invalid total price".to_string()))?;

    let confirmation = web::block(move || {
        let service =
            ReservationCommitService::new(DieselReservationStore::new(pool.get_ref().clone()));
        service.commit(body.customer_id, total_price, selections)
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(json!({
        "status": "success",
        "message": "Reservation saved successfully!",
        "reservation_id": confirmation.reservation_id,
        "total_amount": confirmation.total_amount,
        "product_count": confirmation.product_count,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn ajax_header_accepted_case_insensitively() {
        let req = TestRequest::default()
            .insert_header(("X-Requested-With", "xmlhttprequest"))
            .to_http_request();
        assert!(ensure_ajax(&req).is_ok());
    }

    #[test]
    fn missing_ajax_header_rejected() {
        let req = TestRequest::default().to_http_request();
        assert!(matches!(
            ensure_ajax(&req).unwrap_err(),
            AppError::Unauthorized
        ));
    }

    #[test]
    fn wrong_ajax_header_rejected() {
        let req = TestRequest::default()
            .insert_header(("X-Requested-With", "fetch"))
            .to_http_request();
        assert!(ensure_ajax(&req).is_err());
    }

    #[test]
    fn malformed_product_json_is_invalid_product_data() {
        let err = parse_selections("{not json").unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Invalid product data"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn missing_product_fields_default_instead_of_failing() {
        // Mirrors the lenient form handling: absent keys become defaults and
        // the storable filter deals with them later.
        let selections = parse_selections(r#"[{"name":"Lumpia"}]"#).unwrap();
        assert_eq!(selections.len(), 1);
        assert_eq!(selections[0].quantity, 0);
        assert_eq!(selections[0].unit_price, BigDecimal::from(0));
    }

    #[test]
    fn well_formed_products_parse() {
        let selections =
            parse_selections(r#"[{"name":"Chicken Platter","quantity":2,"price":50.0}]"#).unwrap();
        assert_eq!(selections[0].name, "Chicken Platter");
        assert_eq!(selections[0].quantity, 2);
        assert_eq!(selections[0].unit_price, BigDecimal::from(50));
    }
}
