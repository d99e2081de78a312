use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::customer_logs;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customer_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerLog {
    pub id: i32,
    pub customer_id: i32,
    pub transaction_type: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customer_logs)]
pub struct NewCustomerLog {
    pub customer_id: i32,
    pub transaction_type: String,
    pub details: String,
}
