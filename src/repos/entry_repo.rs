/*
 * Responsibility
 * - users テーブル (guestbook entry) 向け SQLx 操作
 * - プールではなく単発の PgConnection を受け取る (1 request = 1 connection)
 * - 1 関数 = 1 statement
 */
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgConnection};

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct EntryRow {
    pub id: i32,
    pub name: String,
    pub message: String,
    // Column is defaulted but nullable.
    pub created_at: Option<NaiveDateTime>,
}

pub async fn ensure_schema(conn: &mut PgConnection) -> RepoResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

pub async fn list(conn: &mut PgConnection) -> RepoResult<Vec<EntryRow>> {
    let rows = sqlx::query_as::<_, EntryRow>(
        r#"
        SELECT id, name, message, created_at
        FROM users
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(rows)
}

pub async fn create(conn: &mut PgConnection, name: &str, message: &str) -> RepoResult<EntryRow> {
    let row = sqlx::query_as::<_, EntryRow>(
        r#"
        INSERT INTO users (name, message)
        VALUES ($1, $2)
        RETURNING id, name, message, created_at
        "#,
    )
    .bind(name)
    .bind(message)
    .fetch_one(&mut *conn)
    .await?;

    Ok(row)
}

// `id` is int4; an int8 parameter still compares, so out-of-range ids just match nothing.
pub async fn delete(conn: &mut PgConnection, id: i64) -> RepoResult<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(&mut *conn)
    .await?;

    Ok(result.rows_affected() > 0)
}
