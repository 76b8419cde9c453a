// SQLite JobStore Implementation

use async_trait::async_trait;
use jobjar_core::domain::JobRecord;
use jobjar_core::error::{AppError, Result};
use jobjar_core::port::JobStore;
use sqlx::SqlitePool;

// Helper to convert sqlx::Error to AppError with structured information
fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // Extract database-specific error code and message
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => {
                        // UNIQUE constraint failed
                        AppError::Store(format!(
                            "Unique constraint violation: {} ({})",
                            db_err.message(),
                            code_str
                        ))
                    }
                    "5" => {
                        // SQLITE_BUSY - database is locked
                        AppError::Store(format!(
                            "Database locked (SQLITE_BUSY): {}",
                            db_err.message()
                        ))
                    }
                    "13" => {
                        // SQLITE_FULL - database or disk is full
                        AppError::Store(format!("Database full: {}", db_err.message()))
                    }
                    _ => AppError::Store(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Store(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::Store("Row not found".to_string()),
        _ => AppError::Store(err.to_string()),
    }
}

pub struct SqliteJobStore {
    pool: SqlitePool,
}

impl SqliteJobStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for SqliteJobStore {
    async fn get(&self, user_id: &str, name: &str) -> Result<Option<JobRecord>> {
        let row = sqlx::query_as::<_, JobRow>(
            "SELECT user_id, name FROM jobs WHERE user_id = ? AND name = ?",
        )
        .bind(user_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(row.map(JobRow::into_record))
    }

    async fn put(&self, record: &JobRecord) -> Result<()> {
        // Upsert: the gateway checks existence first, so a replace here
        // only matters if two turns race; last write wins.
        sqlx::query("INSERT OR REPLACE INTO jobs (user_id, name) VALUES (?, ?)")
            .bind(&record.user_id)
            .bind(&record.name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, user_id: &str, name: &str) -> Result<()> {
        sqlx::query("DELETE FROM jobs WHERE user_id = ? AND name = ?")
            .bind(user_id)
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn list(&self, user_id: &str) -> Result<Vec<JobRecord>> {
        // No explicit ORDER BY: retrieval order is whatever the store
        // returns (composite-PK order for SQLite).
        let rows: Vec<JobRow> = sqlx::query_as("SELECT user_id, name FROM jobs WHERE user_id = ?")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(JobRow::into_record).collect())
    }
}

/// SQLite row representation
#[derive(Debug, sqlx::FromRow)]
struct JobRow {
    user_id: String,
    name: String,
}

impl JobRow {
    fn into_record(self) -> JobRecord {
        JobRecord {
            user_id: self.user_id,
            name: self.name,
        }
    }
}
