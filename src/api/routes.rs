/*
 * Responsibility
 * - URL 構造を定義 (/health, /info, /users, /users/{user_id})
 * - 未定義の path / method も JSON で返す
 */
use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use crate::api::handlers::{
    fallback::{method_not_allowed, not_found},
    health::health,
    info::info,
    users::{create_user, delete_user, list_users},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/users", get(list_users).post(create_user))
        .route("/users/{user_id}", delete(delete_user))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
