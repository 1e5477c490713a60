//! Credential record storage.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{Database, DbError, OptionalExt};

/// A stored credential record. The password is kept only as a bcrypt
/// hash; the core never sees plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: i64,
}

impl Database {
    pub fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (email, password_hash, role, created_at) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![email, password_hash, role, Utc::now().timestamp()],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, email, password_hash, role, created_at FROM users WHERE email = ?1",
            )?;
            let user = stmt
                .query_row([email], |row| {
                    Ok(UserRecord {
                        id: row.get(0)?,
                        email: row.get(1)?,
                        password_hash: row.get(2)?,
                        role: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                })
                .optional()?;
            Ok(user)
        })
    }
}
