/*
 * Responsibility
 * - /users 系 handler (list / create / delete)
 * - validation は store に触る前に済ませる
 * - 接続は handler ごとに開き、スコープを抜けると (エラー経路でも) 解放される
 */
use axum::{
    Json,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::{
    api::dto::users::{CreateEntryRequest, EntryResponse, MSG_REQUIRED, MessageResponse},
    error::AppError,
    state::AppState,
};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let mut conn = state.store.connect().await?;
    let rows = conn.list().await?;

    Ok(Json(rows.into_iter().map(EntryResponse::from).collect()))
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<EntryResponse>), AppError> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::BadRequest(MSG_REQUIRED)
        }
    })?;

    let entry = CreateEntryRequest::parse(&body)
        .and_then(CreateEntryRequest::validate)
        .map_err(AppError::BadRequest)?;

    let mut conn = state.store.connect().await?;
    let row = conn.create(&entry.name, &entry.message).await?;

    Ok((StatusCode::CREATED, Json(EntryResponse::from(row))))
}

pub async fn delete_user(
    State(state): State<AppState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    // A non-integer id does not name any route.
    let Ok(Path(user_id)) = user_id else {
        return Err(AppError::NotFound("Not found"));
    };

    let mut conn = state.store.connect().await?;
    if !conn.delete(user_id).await? {
        return Err(AppError::NotFound("User not found"));
    }

    Ok(Json(MessageResponse {
        message: "User deleted successfully",
    }))
}
