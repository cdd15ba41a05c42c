/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - store: 接続を開く gateway (プールは持たない)
 *   - instance: /info が返す値 (起動時に解決済み)
 * - Clone 前提で持つ (内部は Arc)
 */
use std::sync::Arc;

use crate::config::InstanceInfo;
use crate::services::store::StoreGateway;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StoreGateway>,
    pub instance: Arc<InstanceInfo>,
}

impl AppState {
    pub fn new(store: Arc<dyn StoreGateway>, instance: InstanceInfo) -> Self {
        Self {
            store,
            instance: Arc::new(instance),
        }
    }
}
