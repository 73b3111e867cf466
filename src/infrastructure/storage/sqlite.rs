//! SQLite-backed store.
//!
//! SQLite only folds ASCII case, so each row also carries case-folded copies
//! of `name` and `email`, written with the same folding the rest of the crate
//! uses. Substring lookups run `instr` against those columns with the folded
//! query bound as a parameter; no part of the query is ever spliced into SQL,
//! and `%` or `_` have no special meaning.

use crate::core::errors::DirectoryError;
use crate::core::models::user::{NewUser, SearchField, User, UserId};
use crate::core::search::fold_case;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    password TEXT NOT NULL,
    name_folded TEXT NOT NULL,
    email_folded TEXT NOT NULL
)";

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id as UserId,
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}

#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Opens (creating if needed) the database at `url` and ensures the schema.
    ///
    /// The pool holds a single connection that is never recycled, which keeps
    /// `sqlite::memory:` databases alive for the life of the store.
    pub async fn connect(url: &str) -> Result<Self, DirectoryError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;
        sqlx::query(CREATE_USERS_TABLE).execute(&pool).await?;
        info!("SQLite store ready");
        Ok(SqliteStorage { pool })
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn create_user(&self, user: NewUser) -> Result<UserId, DirectoryError> {
        let result = sqlx::query(
            "INSERT INTO users (name, email, password, name_folded, email_folded) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(fold_case(&user.name))
        .bind(fold_case(&user.email))
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid() as UserId)
    }

    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, name, email, password FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<bool, DirectoryError> {
        // SQLite rowids are signed; anything beyond i64::MAX cannot exist.
        let Ok(row_id) = i64::try_from(user_id) else {
            debug!("User id {} is outside the SQLite rowid range", user_id);
            return Ok(false);
        };
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(row_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn find_by_substring(&self, field: SearchField, substring: &str) -> Result<Vec<User>, DirectoryError> {
        let sql = match field {
            SearchField::Name => {
                "SELECT id, name, email, password FROM users WHERE instr(name_folded, ?) > 0 ORDER BY id"
            }
            SearchField::Email => {
                "SELECT id, name, email, password FROM users WHERE instr(email_folded, ?) > 0 ORDER BY id"
            }
        };
        let rows: Vec<UserRow> = sqlx::query_as(sql)
            .bind(fold_case(substring))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }
}
