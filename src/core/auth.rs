//! Account and session logic: sign-up, login, logout.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::users::{clear_session, current_session, find_user, insert_user, set_session};
use crate::errors::{AppError, AppResult};
use crate::models::user::User;
use crate::ui::messages::{info, success};
use chrono::Local;

pub struct AuthLogic;

impl AuthLogic {
    /// Create an account. Email must look like an address and be unused.
    pub fn signup(pool: &mut DbPool, email: &str, password: &str) -> AppResult<()> {
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(AppError::InvalidEmail(email.to_string()));
        }

        if password.is_empty() {
            return Err(AppError::InvalidCredentials);
        }

        if find_user(pool, email)?.is_some() {
            return Err(AppError::UserExists(email.to_string()));
        }

        let user = User {
            email: email.to_string(),
            password: password.to_string(),
            created_at: Local::now().to_rfc3339(),
        };

        insert_user(pool, &user)?;
        let _ = ttlog(&pool.conn, "signup", email, "Account created");

        success("Account created successfully!");
        Ok(())
    }

    /// Validate credentials and persist the session on success.
    /// A wrong email and a wrong password are indistinguishable.
    pub fn login(pool: &mut DbPool, email: &str, password: &str) -> AppResult<()> {
        let user = find_user(pool, email)?;

        match user {
            Some(u) if u.password == password => {
                set_session(pool, email)?;
                let _ = ttlog(&pool.conn, "login", email, "Logged in");

                success(format!("Logged in as {}.", email));
                Ok(())
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    pub fn logout(pool: &mut DbPool) -> AppResult<()> {
        match current_session(pool)? {
            Some(email) => {
                clear_session(pool)?;
                let _ = ttlog(&pool.conn, "logout", &email, "Logged out");
                success(format!("Logged out {}.", email));
            }
            None => info("No active session."),
        }
        Ok(())
    }

    /// Entry commands require a logged-in user.
    pub fn require_login(pool: &mut DbPool) -> AppResult<String> {
        current_session(pool)?.ok_or(AppError::NotLoggedIn)
    }
}
