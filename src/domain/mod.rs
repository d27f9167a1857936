//! Domain model of the Stella web application.
//!
//! - [`store`]: the `Store` aggregate with `StoreId`, `StoreName`, `StoreAddress`
//! - [`consumer`]: the `Consumer` entity with `ConsumerId`

pub mod consumer;
pub mod store;
