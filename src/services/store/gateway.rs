//! Store gateway interface used by the HTTP handlers.
use async_trait::async_trait;
use thiserror::Error;

use crate::repos::{entry_repo::EntryRow, error::RepoError};

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer errors.
///
/// `Unavailable` means no connection could be obtained. Handlers turn it into
/// the fixed "Database connection failed" response; it never aborts the process.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error(transparent)]
    Query(#[from] RepoError),
}

/// A single short-lived connection to the backing store.
///
/// Implementations release the underlying connection when dropped, so every
/// exit path of a handler gives it back.
#[async_trait]
pub trait GuestbookConnection: Send {
    async fn ensure_schema(&mut self) -> StoreResult<()>;

    /// All entries, newest first.
    async fn list(&mut self) -> StoreResult<Vec<EntryRow>>;

    async fn create(&mut self, name: &str, message: &str) -> StoreResult<EntryRow>;

    /// Returns `true` when a row was removed.
    async fn delete(&mut self, id: i64) -> StoreResult<bool>;
}

/// Opens connections to the backing store. One connection per request, no pooling.
#[async_trait]
pub trait StoreGateway: Send + Sync + 'static {
    // Returns the backend name (for logging).
    fn backend_name(&self) -> &'static str;

    async fn connect(&self) -> StoreResult<Box<dyn GuestbookConnection>>;
}

/// Create the entries table if it is missing.
///
/// Startup must not fail because the store is down, so an unavailable store
/// only produces a warning and the handlers report it later.
pub async fn ensure_schema(gateway: &dyn StoreGateway) {
    let mut conn = match gateway.connect().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!(
                backend = gateway.backend_name(),
                error = %e,
                "store unavailable, skipping schema initialization"
            );
            return;
        }
    };

    match conn.ensure_schema().await {
        Ok(()) => tracing::info!(backend = gateway.backend_name(), "schema ready"),
        Err(e) => tracing::error!(
            backend = gateway.backend_name(),
            error = %e,
            "schema initialization failed"
        ),
    }
}
