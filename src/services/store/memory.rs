//! In-memory gateway for handler tests.
//!
//! Mirrors the PostgreSQL semantics the handlers rely on: ids come from a
//! sequence, `created_at` is stamped on insert, listing is newest first.
//! Also counts open connections so tests can check they are always released.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::repos::entry_repo::EntryRow;
use crate::services::store::gateway::{GuestbookConnection, StoreError, StoreGateway, StoreResult};

#[derive(Debug, Default)]
struct Table {
    schema_ready: bool,
    next_id: i32,
    rows: Vec<EntryRow>,
}

#[derive(Clone, Debug)]
pub struct MemoryGateway {
    available: bool,
    table: Arc<Mutex<Table>>,
    open: Arc<AtomicUsize>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self {
            available: true,
            table: Arc::new(Mutex::new(Table::default())),
            open: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A gateway whose `connect()` always fails.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn open_connections(&self) -> usize {
        self.open.load(Ordering::SeqCst)
    }

    pub fn schema_ready(&self) -> bool {
        self.table.lock().unwrap().schema_ready
    }

    pub fn row_count(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl StoreGateway for MemoryGateway {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn connect(&self) -> StoreResult<Box<dyn GuestbookConnection>> {
        if !self.available {
            return Err(StoreError::Unavailable("connection refused".into()));
        }

        self.open.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(MemoryConnection {
            table: self.table.clone(),
            open: self.open.clone(),
        }))
    }
}

struct MemoryConnection {
    table: Arc<Mutex<Table>>,
    open: Arc<AtomicUsize>,
}

#[async_trait]
impl GuestbookConnection for MemoryConnection {
    async fn ensure_schema(&mut self) -> StoreResult<()> {
        self.table.lock().unwrap().schema_ready = true;
        Ok(())
    }

    async fn list(&mut self) -> StoreResult<Vec<EntryRow>> {
        let mut rows = self.table.lock().unwrap().rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn create(&mut self, name: &str, message: &str) -> StoreResult<EntryRow> {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;
        let row = EntryRow {
            id: table.next_id,
            name: name.to_string(),
            message: message.to_string(),
            created_at: Some(Utc::now().naive_utc()),
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn delete(&mut self, id: i64) -> StoreResult<bool> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|r| i64::from(r.id) != id);
        Ok(table.rows.len() < before)
    }
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        self.open.fetch_sub(1, Ordering::SeqCst);
    }
}
