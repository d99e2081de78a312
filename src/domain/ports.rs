use bigdecimal::BigDecimal;

use super::errors::CommitError;
use super::reservation::ProductSelection;

/// Transactional store behind the commit operation.
///
/// `commit_products` locates the customer's latest reservation, swaps the
/// placeholder item for `products`, and performs the bookkeeping side-writes,
/// all inside one transaction. Returns the reservation id.
pub trait ReservationStore: Send + Sync + 'static {
    fn commit_products(
        &self,
        customer_id: i32,
        total_price: &BigDecimal,
        products: &[ProductSelection],
    ) -> Result<i32, CommitError>;
}
