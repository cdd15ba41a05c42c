pub mod gateway;
#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use gateway::{StoreError, StoreGateway, ensure_schema};
pub use postgres::PostgresGateway;
