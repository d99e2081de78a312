use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::reservation_items;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = reservation_items)]
#[diesel(belongs_to(crate::models::reservation::Reservation))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ReservationItem {
    pub id: i32,
    pub reservation_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = reservation_items)]
pub struct NewReservationItem {
    pub reservation_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub total_price: BigDecimal,
}
