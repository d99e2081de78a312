use bigdecimal::BigDecimal;

use crate::domain::errors::CommitError;
use crate::domain::ports::ReservationStore;
use crate::domain::reservation::{CommitConfirmation, ProductSelection};

pub struct ReservationCommitService<S> {
    store: S,
}

impl<S: ReservationStore> ReservationCommitService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Finalize the product selection for the customer's latest reservation.
    ///
    /// Validation happens before the store is touched; a validation failure
    /// never opens a transaction. Products failing the storable filter are
    /// dropped silently, but still counted in the confirmation's
    /// `product_count`.
    pub fn commit(
        &self,
        customer_id: i32,
        total_price: BigDecimal,
        selected_products: Vec<ProductSelection>,
    ) -> Result<CommitConfirmation, CommitError> {
        if customer_id <= 0 || selected_products.is_empty() {
            return Err(CommitError::Validation("Missing required data".to_string()));
        }
        if total_price < BigDecimal::from(0) {
            return Err(CommitError::Validation("Invalid total price".to_string()));
        }

        let submitted = selected_products.len();
        let products: Vec<ProductSelection> = selected_products
            .into_iter()
            .filter(ProductSelection::is_storable)
            .collect();

        let reservation_id = self
            .store
            .commit_products(customer_id, &total_price, &products)?;

        Ok(CommitConfirmation {
            reservation_id,
            total_amount: total_price,
            product_count: submitted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::Mutex;

    struct RecordingStore {
        calls: Mutex<Vec<(i32, BigDecimal, Vec<ProductSelection>)>>,
        result: Result<i32, ()>,
    }

    impl RecordingStore {
        fn returning(reservation_id: i32) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result: Ok(reservation_id),
            }
        }

        fn not_found() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                result: Err(()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl ReservationStore for RecordingStore {
        fn commit_products(
            &self,
            customer_id: i32,
            total_price: &BigDecimal,
            products: &[ProductSelection],
        ) -> Result<i32, CommitError> {
            self.calls.lock().unwrap().push((
                customer_id,
                total_price.clone(),
                products.to_vec(),
            ));
            self.result.map_err(|_| CommitError::NotFound)
        }
    }

    fn product(name: &str, quantity: i32, price: &str) -> ProductSelection {
        ProductSelection {
            name: name.to_string(),
            quantity,
            unit_price: BigDecimal::from_str(price).unwrap(),
        }
    }

    fn price(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn non_positive_customer_id_never_reaches_store() {
        let service = ReservationCommitService::new(RecordingStore::returning(7));
        let err = service
            .commit(0, price("10.00"), vec![product("Lumpia", 1, "10.00")])
            .unwrap_err();
        assert!(matches!(err, CommitError::Validation(_)));
        assert_eq!(service.store.call_count(), 0);
    }

    #[test]
    fn empty_product_list_never_reaches_store() {
        let service = ReservationCommitService::new(RecordingStore::returning(7));
        let err = service.commit(42, price("10.00"), vec![]).unwrap_err();
        assert!(matches!(err, CommitError::Validation(_)));
        assert_eq!(service.store.call_count(), 0);
    }

    #[test]
    fn negative_total_price_is_rejected() {
        let service = ReservationCommitService::new(RecordingStore::returning(7));
        let err = service
            .commit(42, price("-1.00"), vec![product("Lumpia", 1, "10.00")])
            .unwrap_err();
        assert!(matches!(err, CommitError::Validation(_)));
        assert_eq!(service.store.call_count(), 0);
    }

    #[test]
    fn unstorable_products_are_filtered_but_still_counted() {
        let service = ReservationCommitService::new(RecordingStore::returning(7));
        let confirmation = service
            .commit(
                42,
                price("150.00"),
                vec![
                    product("Chicken Platter", 2, "50.00"),
                    product("", 3, "10.00"),
                    product("Lumpia", 0, "5.00"),
                ],
            )
            .unwrap();

        assert_eq!(confirmation.reservation_id, 7);
        assert_eq!(confirmation.product_count, 3);

        let calls = service.store.calls.lock().unwrap();
        let (_, _, stored) = &calls[0];
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Chicken Platter");
    }

    #[test]
    fn all_products_filtered_still_commits_placeholder_removal() {
        // The store is still invoked with an empty list so the placeholder
        // deletion and bookkeeping happen.
        let service = ReservationCommitService::new(RecordingStore::returning(7));
        let confirmation = service
            .commit(42, price("0.00"), vec![product("", 1, "1.00")])
            .unwrap();
        assert_eq!(confirmation.product_count, 1);
        assert_eq!(service.store.call_count(), 1);
    }

    #[test]
    fn total_amount_echoes_caller_supplied_price() {
        let service = ReservationCommitService::new(RecordingStore::returning(7));
        let confirmation = service
            .commit(42, price("150.00"), vec![product("Chicken Platter", 2, "50.00")])
            .unwrap();
        // 150.00 even though the single line totals 100.00.
        assert_eq!(confirmation.total_amount, price("150.00"));
    }

    #[test]
    fn store_not_found_propagates() {
        let service = ReservationCommitService::new(RecordingStore::not_found());
        let err = service
            .commit(42, price("10.00"), vec![product("Lumpia", 1, "10.00")])
            .unwrap_err();
        assert!(matches!(err, CommitError::NotFound));
    }
}
