use crate::error::AppError;

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found")
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
