use bigdecimal::BigDecimal;

/// Sentinel line item written at booking time, before the customer has
/// picked any products. Removed when the selection is committed.
pub const PLACEHOLDER_PRODUCT: &str = "Menu Selection Pending";

/// One product chosen on the menu page.
#[derive(Debug, Clone)]
pub struct ProductSelection {
    pub name: String,
    pub quantity: i32,
    pub unit_price: BigDecimal,
}

impl ProductSelection {
    /// Items with a blank name or non-positive quantity are never persisted.
    pub fn is_storable(&self) -> bool {
        !self.name.is_empty() && self.quantity > 0
    }
}

/// Outcome of a successful commit.
///
/// `total_amount` echoes the caller-supplied total and `product_count` is the
/// number of products *submitted*, including any that were filtered out
/// before insertion. Clients rely on both of these exact values.
#[derive(Debug, Clone)]
pub struct CommitConfirmation {
    pub reservation_id: i32,
    pub total_amount: BigDecimal,
    pub product_count: usize,
}
