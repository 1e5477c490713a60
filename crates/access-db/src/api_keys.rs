//! API key records and access-level lookup.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{Database, DbError, OptionalExt};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    pub id: i64,
    pub key: String,
    pub user_id: i64,
    pub created_at: i64,
}

impl Database {
    pub fn create_api_key(&self, key: &str, user_id: i64) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO api_keys (key, user_id, created_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![key, user_id, Utc::now().timestamp()],
            )?;
            Ok(())
        })
    }

    pub fn get_api_key(&self, key: &str) -> Result<Option<ApiKeyRecord>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, key, user_id, created_at FROM api_keys WHERE key = ?1",
            )?;
            let record = stmt
                .query_row([key], |row| {
                    Ok(ApiKeyRecord {
                        id: row.get(0)?,
                        key: row.get(1)?,
                        user_id: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                })
                .optional()?;
            Ok(record)
        })
    }

    /// Role of the user owning `key`, or `None` when the key is unknown.
    pub fn get_api_key_access_level(&self, key: &str) -> Result<Option<String>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT u.role FROM api_keys k JOIN users u ON u.id = k.user_id WHERE k.key = ?1",
            )?;
            let role = stmt.query_row([key], |row| row.get(0)).optional()?;
            Ok(role)
        })
    }
}
