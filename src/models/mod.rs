pub mod customer_log;
pub mod order;
pub mod order_item;
pub mod reservation;
pub mod reservation_item;
