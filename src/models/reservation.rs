use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::reservations;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Reservation {
    pub id: i32,
    pub customer_id: i32,
    pub reservation_date: DateTime<Utc>,
    pub event_date: DateTime<Utc>,
    pub event_type: String,
    pub number_of_guests: i32,
    pub status: String,
}
