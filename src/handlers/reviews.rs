use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use chrono::{Duration, Utc};
use diesel::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use utoipa::ToSchema;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::order::Order;
use crate::models::order_item::OrderItem;
use crate::models::reservation::Reservation;
use crate::models::reservation_item::ReservationItem;
use crate::schema::{customer_feedback, orders, reservations};

const REVIEW_WINDOW_DAYS: i64 = 90;
const MAX_REVIEWABLE: i64 = 10;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewableOrder {
    pub id: i32,
    pub date: String,
    pub total: String,
    pub status: String,
    pub items: String,
    #[serde(rename = "hasReview")]
    pub has_review: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewableReservation {
    pub id: i32,
    pub date: String,
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub guests: i32,
    pub items: String,
    pub total: String,
    #[serde(rename = "hasReview")]
    pub has_review: bool,
}

/// "2x Chicken Platter, 1x Lumpia"
fn summarize_items<'a>(items: impl Iterator<Item = (i32, &'a str)>) -> String {
    items
        .map(|(quantity, name)| format!("{}x {}", quantity, name))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// GET /customers/{id}/reviewable
///
/// Lists the customer's completed orders and confirmed reservations of the
/// last 90 days, each with an item summary and a flag telling whether
/// feedback was already left.
#[utoipa::path(
    get,
    path = "/customers/{id}/reviewable",
    params(
        ("id" = i32, Path, description = "Customer id"),
    ),
    responses(
        (status = 200, description = "Reviewable orders and reservations"),
        (status = 400, description = "Invalid customer id"),
        (status = 500, description = "Database error"),
    ),
    tag = "reviews"
)]
pub async fn reviewable_items(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner();

    if customer_id <= 0 {
        return Ok(HttpResponse::BadRequest().json(json!({
            "success": false,
            "message": "Invalid customer ID"
        })));
    }

    let (order_views, reservation_views) = web::block(move || {
        let mut conn = pool.get()?;
        let cutoff = Utc::now() - Duration::days(REVIEW_WINDOW_DAYS);

        // Completed orders with their items and review status.
        let recent_orders: Vec<Order> = orders::table
            .filter(orders::customer_id.eq(customer_id))
            .filter(orders::status.eq("Completed"))
            .filter(orders::order_date.ge(cutoff))
            .order(orders::order_date.desc())
            .limit(MAX_REVIEWABLE)
            .select(Order::as_select())
            .load(&mut conn)?;

        let order_items: Vec<OrderItem> = OrderItem::belonging_to(&recent_orders)
            .select(OrderItem::as_select())
            .load(&mut conn)?;
        let items_per_order = order_items.grouped_by(&recent_orders);

        let reviewed_orders: HashSet<i32> = customer_feedback::table
            .filter(customer_feedback::customer_id.eq(customer_id))
            .filter(customer_feedback::order_id.is_not_null())
            .select(customer_feedback::order_id.assume_not_null())
            .load::<i32>(&mut conn)?
            .into_iter()
            .collect();

        let order_views: Vec<ReviewableOrder> = recent_orders
            .into_iter()
            .zip(items_per_order)
            .map(|(order, items)| ReviewableOrder {
                has_review: reviewed_orders.contains(&order.id),
                items: summarize_items(
                    items.iter().map(|i| (i.quantity, i.product_name.as_str())),
                ),
                id: order.id,
                date: order.order_date.to_rfc3339(),
                total: order.total_amount.to_string(),
                status: order.status,
            })
            .collect();

        // Confirmed reservations, totalled from their line items.
        let recent_reservations: Vec<Reservation> = reservations::table
            .filter(reservations::customer_id.eq(customer_id))
            .filter(reservations::status.eq("Confirmed"))
            .filter(reservations::event_date.ge(cutoff))
            .order(reservations::event_date.desc())
            .limit(MAX_REVIEWABLE)
            .select(Reservation::as_select())
            .load(&mut conn)?;

        let reservation_items: Vec<ReservationItem> =
            ReservationItem::belonging_to(&recent_reservations)
                .select(ReservationItem::as_select())
                .load(&mut conn)?;
        let items_per_reservation = reservation_items.grouped_by(&recent_reservations);

        let reviewed_reservations: HashSet<i32> = customer_feedback::table
            .filter(customer_feedback::customer_id.eq(customer_id))
            .filter(customer_feedback::reservation_id.is_not_null())
            .select(customer_feedback::reservation_id.assume_not_null())
            .load::<i32>(&mut conn)?
            .into_iter()
            .collect();

        let reservation_views: Vec<ReviewableReservation> = recent_reservations
            .into_iter()
            .zip(items_per_reservation)
            .map(|(reservation, items)| {
                let total = items
                    .iter()
                    .fold(BigDecimal::from(0), |acc, i| acc + &i.total_price);
                ReviewableReservation {
                    has_review: reviewed_reservations.contains(&reservation.id),
                    items: summarize_items(
                        items.iter().map(|i| (i.quantity, i.product_name.as_str())),
                    ),
                    total: total.to_string(),
                    id: reservation.id,
                    date: reservation.event_date.to_rfc3339(),
                    event_type: reservation.event_type,
                    guests: reservation.number_of_guests,
                }
            })
            .collect();

        Ok::<_, AppError>((order_views, reservation_views))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "orders": order_views,
        "reservations": reservation_views,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarizes_items_in_order() {
        let summary = summarize_items(
            [(2, "Chicken Platter"), (1, "Lumpia")].into_iter(),
        );
        assert_eq!(summary, "2x Chicken Platter, 1x Lumpia");
    }

    #[test]
    fn empty_item_list_summarizes_to_empty_string() {
        let summary = summarize_items(std::iter::empty());
        assert_eq!(summary, "");
    }
}
