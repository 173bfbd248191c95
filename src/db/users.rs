//! Account and session queries.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::user::User;
use rusqlite::{OptionalExtension, params};

pub fn find_user(pool: &mut DbPool, email: &str) -> AppResult<Option<User>> {
    let user = pool
        .conn
        .query_row(
            "SELECT email, password, created_at FROM users WHERE email = ?1",
            [email],
            |row| {
                Ok(User {
                    email: row.get(0)?,
                    password: row.get(1)?,
                    created_at: row.get(2)?,
                })
            },
        )
        .optional()?;

    Ok(user)
}

pub fn insert_user(pool: &mut DbPool, user: &User) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO users (email, password, created_at) VALUES (?1, ?2, ?3)",
        params![user.email, user.password, user.created_at],
    )?;
    Ok(())
}

/// Persist the logged-in user (the single session row).
pub fn set_session(pool: &mut DbPool, email: &str) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO session (id, email) VALUES (1, ?1)
         ON CONFLICT(id) DO UPDATE SET email = excluded.email",
        [email],
    )?;
    Ok(())
}

pub fn clear_session(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute("DELETE FROM session WHERE id = 1", [])?;
    Ok(())
}

pub fn current_session(pool: &mut DbPool) -> AppResult<Option<String>> {
    let email = pool
        .conn
        .query_row("SELECT email FROM session WHERE id = 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    Ok(email)
}
