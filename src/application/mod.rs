pub mod reservation_service;
