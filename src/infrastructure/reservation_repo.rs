use bigdecimal::BigDecimal;
use chrono::Utc;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::CommitError;
use crate::domain::ports::ReservationStore;
use crate::domain::reservation::{ProductSelection, PLACEHOLDER_PRODUCT};
use crate::models::customer_log::NewCustomerLog;
use crate::models::reservation_item::NewReservationItem;
use crate::schema::{customer_logs, customers, reservation_items, reservation_payments, reservations};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for CommitError {
    fn from(e: diesel::result::Error) -> Self {
        CommitError::Persistence(e.to_string())
    }
}

impl From<r2d2::Error> for CommitError {
    fn from(e: r2d2::Error) -> Self {
        CommitError::Persistence(e.to_string())
    }
}

// ── Side-writes ──────────────────────────────────────────────────────────────

/// Bookkeeping statements executed alongside the item inserts. Each is
/// best-effort: a failure is logged and skipped, never propagated, while the
/// lookup and the item inserts remain hard-fail points.
#[derive(Debug, Clone, Copy)]
enum SideWrite {
    PaymentAmount,
    CustomerCounter,
    AuditLog,
}

/// Run `f` inside a savepoint so its failure cannot poison the surrounding
/// transaction, then record the outcome.
fn best_effort<F>(conn: &mut PgConnection, write: SideWrite, reservation_id: i32, f: F)
where
    F: FnOnce(&mut PgConnection) -> QueryResult<usize>,
{
    match conn.transaction::<_, diesel::result::Error, _>(f) {
        Ok(_) => {}
        Err(e) => log::warn!(
            "best-effort {:?} write skipped for reservation {}: {}",
            write,
            reservation_id,
            e
        ),
    }
}

// ── Store ────────────────────────────────────────────────────────────────────

pub struct DieselReservationStore {
    pool: DbPool,
}

impl DieselReservationStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ReservationStore for DieselReservationStore {
    fn commit_products(
        &self,
        customer_id: i32,
        total_price: &BigDecimal,
        products: &[ProductSelection],
    ) -> Result<i32, CommitError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, CommitError, _>(|conn| {
            // 1. Latest reservation for this customer.
            let reservation_id = reservations::table
                .filter(reservations::customer_id.eq(customer_id))
                .order(reservations::reservation_date.desc())
                .select(reservations::id)
                .first::<i32>(conn)
                .optional()?
                .ok_or(CommitError::NotFound)?;

            // 2. Remove the placeholder. A reservation that was already
            //    committed once has none; that is not an error.
            diesel::delete(
                reservation_items::table
                    .filter(reservation_items::reservation_id.eq(reservation_id))
                    .filter(reservation_items::product_name.eq(PLACEHOLDER_PRODUCT)),
            )
            .execute(conn)?;

            // 3. Insert the selected products. Hard-fail: any insert error
            //    rolls the whole transaction back.
            let new_items: Vec<NewReservationItem> = products
                .iter()
                .map(|p| NewReservationItem {
                    reservation_id,
                    product_name: p.name.clone(),
                    quantity: p.quantity,
                    unit_price: p.unit_price.clone(),
                    total_price: p.unit_price.clone() * BigDecimal::from(p.quantity),
                })
                .collect();
            if !new_items.is_empty() {
                diesel::insert_into(reservation_items::table)
                    .values(&new_items)
                    .execute(conn)?;
            }

            // 4. Overwrite the amount paid. No payment row means nothing to
            //    update; this step never creates one.
            best_effort(conn, SideWrite::PaymentAmount, reservation_id, |conn| {
                diesel::update(
                    reservation_payments::table
                        .filter(reservation_payments::reservation_id.eq(reservation_id)),
                )
                .set(reservation_payments::amount_paid.eq(total_price.clone()))
                .execute(conn)
            });

            // 5. Bump the customer's reservation counter.
            best_effort(conn, SideWrite::CustomerCounter, reservation_id, |conn| {
                diesel::update(customers::table.filter(customers::id.eq(customer_id)))
                    .set((
                        customers::reservation_count.eq(customers::reservation_count + 1),
                        customers::last_transaction_date.eq(Some(Utc::now())),
                    ))
                    .execute(conn)
            });

            // 6. Audit trail.
            best_effort(conn, SideWrite::AuditLog, reservation_id, |conn| {
                diesel::insert_into(customer_logs::table)
                    .values(&NewCustomerLog {
                        customer_id,
                        transaction_type: "RESERVATION_COMPLETED".to_string(),
                        details: format!("Products added to reservation #{}", reservation_id),
                    })
                    .execute(conn)
            });

            Ok(reservation_id)
        })
    }
}
