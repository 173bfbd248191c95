//! Idempotent schema migrations. Every helper can run against a brand-new
//! or an already-migrated database; `run_pending_migrations` is the only
//! entry point.

use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `users` table exists.
///
/// Passwords are stored as-is: the original system kept plaintext
/// credentials and that contract is preserved, not hardened.
fn ensure_users_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            email      TEXT PRIMARY KEY,
            password   TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the single-row `session` table exists.
fn ensure_session_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS session (
            id    INTEGER PRIMARY KEY CHECK(id = 1),
            email TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the `entries` table exists with the modern schema.
fn ensure_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            email                TEXT NOT NULL,
            month                TEXT NOT NULL CHECK(month IN (
                'january','february','march','april','may','june',
                'july','august','september','october','november','december')),
            position             INTEGER NOT NULL DEFAULT 0,
            date                 TEXT NOT NULL,
            start_hour           TEXT NOT NULL,
            end_hour             TEXT NOT NULL,
            break_minutes        INTEGER NOT NULL DEFAULT 0,
            wage                 REAL NOT NULL DEFAULT 0,
            public_holiday       INTEGER NOT NULL DEFAULT 0,
            night_shift_increase INTEGER NOT NULL DEFAULT 0,
            night_shift_start    TEXT NOT NULL DEFAULT '20:00',
            night_shift_end      TEXT NOT NULL DEFAULT '06:00',
            hours_worked         REAL NOT NULL DEFAULT 0,
            daily_wage           REAL NOT NULL DEFAULT 0,
            created_at           TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_user_month
            ON entries(email, month, position);
        "#,
    )?;
    Ok(())
}

/// Ensure that the single-row `punch_state` table exists.
fn ensure_punch_state_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS punch_state (
            id               INTEGER PRIMARY KEY CHECK(id = 1),
            email            TEXT NOT NULL,
            started_at       TEXT NOT NULL,
            wage             REAL NOT NULL,
            paused           INTEGER NOT NULL DEFAULT 0,
            pause_started_at TEXT,
            paused_minutes   REAL NOT NULL DEFAULT 0
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check whether `entries` already carries the `position` column.
fn entries_has_position_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('entries')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "position" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Migrate a pre-position `entries` table: add the column and backfill it
/// from insertion order (id) per user and month.
fn migrate_add_position_to_entries(conn: &Connection) -> Result<()> {
    if !table_exists(conn, "entries")? {
        return Ok(());
    }

    if entries_has_position_column(conn)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        BEGIN;

        ALTER TABLE entries ADD COLUMN position INTEGER NOT NULL DEFAULT 0;

        UPDATE entries SET position = (
            SELECT COUNT(*) FROM entries AS prior
            WHERE prior.email = entries.email
              AND prior.month = entries.month
              AND prior.id < entries.id
        );

        COMMIT;
        "#,
    )?;

    Ok(())
}

/// Run all pending migrations, in order.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    ensure_users_table(conn)?;
    ensure_session_table(conn)?;
    ensure_entries_table(conn)?;
    migrate_add_position_to_entries(conn)?;
    ensure_punch_state_table(conn)?;
    Ok(())
}
