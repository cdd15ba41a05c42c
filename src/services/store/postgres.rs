use async_trait::async_trait;
use sqlx::Connection;
use sqlx::postgres::{PgConnectOptions, PgConnection};

use crate::config::DbConfig;
use crate::repos::{entry_repo, entry_repo::EntryRow};
use crate::services::store::gateway::{GuestbookConnection, StoreError, StoreGateway, StoreResult};

/// PostgreSQL-backed gateway.
///
/// Every `connect()` dials a fresh connection; nothing is pooled or shared
/// between requests.
#[derive(Clone, Debug)]
pub struct PostgresGateway {
    options: PgConnectOptions,
}

impl PostgresGateway {
    pub fn new(db: &DbConfig) -> Self {
        Self {
            options: db.connect_options(),
        }
    }
}

#[async_trait]
impl StoreGateway for PostgresGateway {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn connect(&self) -> StoreResult<Box<dyn GuestbookConnection>> {
        let conn = PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "postgres connection failed");
                StoreError::Unavailable(e.to_string())
            })?;

        Ok(Box::new(PgGuestbookConnection { conn: Some(conn) }))
    }
}

/// Owns one `PgConnection`; closes it when dropped.
struct PgGuestbookConnection {
    // Only `None` once `Drop` has taken it.
    conn: Option<PgConnection>,
}

impl PgGuestbookConnection {
    fn inner(&mut self) -> StoreResult<&mut PgConnection> {
        self.conn
            .as_mut()
            .ok_or_else(|| StoreError::Unavailable("connection already closed".into()))
    }
}

#[async_trait]
impl GuestbookConnection for PgGuestbookConnection {
    async fn ensure_schema(&mut self) -> StoreResult<()> {
        entry_repo::ensure_schema(self.inner()?).await?;
        Ok(())
    }

    async fn list(&mut self) -> StoreResult<Vec<EntryRow>> {
        Ok(entry_repo::list(self.inner()?).await?)
    }

    async fn create(&mut self, name: &str, message: &str) -> StoreResult<EntryRow> {
        Ok(entry_repo::create(self.inner()?, name, message).await?)
    }

    async fn delete(&mut self, id: i64) -> StoreResult<bool> {
        Ok(entry_repo::delete(self.inner()?, id).await?)
    }
}

impl Drop for PgGuestbookConnection {
    fn drop(&mut self) {
        let Some(conn) = self.conn.take() else {
            return;
        };

        // Send the protocol Terminate message when a runtime is around;
        // otherwise dropping the socket is enough.
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                if let Err(e) = conn.close().await {
                    tracing::debug!(error = %e, "postgres connection close failed");
                }
            });
        }
    }
}
