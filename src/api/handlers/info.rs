/*
 * Responsibility
 * - GET /info (どの pod / node が応答したかの確認用)
 * - store には触らない
 */
use axum::{Json, extract::State};

use crate::{api::dto::info::InfoResponse, state::AppState};

pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    Json(InfoResponse::from(state.instance.as_ref()))
}
