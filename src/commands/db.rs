use crate::models::status_check::StatusCheck;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Result};
use std::path::Path;

const DB_SCHEMA_VERSION: i64 = 2;
pub const STATUS_CHECK_LIST_LIMIT: i64 = 1000;

pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;

    let mut version: i64 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version < 1 {
        apply_migration_1(conn)?;
        version = 1;
        conn.pragma_update(None, "user_version", version)?;
    }

    if version < 2 {
        apply_migration_2(conn)?;
        version = 2;
        conn.pragma_update(None, "user_version", version)?;
    }

    if version > DB_SCHEMA_VERSION {
        log::warn!("Database schema v{version} is newer than v{DB_SCHEMA_VERSION}; continuing");
    }

    Ok(())
}

fn apply_migration_1(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS status_checks (
            id TEXT PRIMARY KEY,
            client_name TEXT NOT NULL,
            timestamp TEXT NOT NULL
        );
        ",
    )
}

fn apply_migration_2(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_status_checks_timestamp ON status_checks(timestamp);",
    )
}

pub fn get_db_connection(database_path: &Path) -> Result<Connection> {
    let conn = Connection::open(database_path)?;
    initialize_schema(&conn)?;
    Ok(conn)
}

pub fn insert_status_check(conn: &Connection, check: &StatusCheck) -> Result<()> {
    conn.execute(
        "INSERT INTO status_checks (id, client_name, timestamp) VALUES (?1, ?2, ?3)",
        params![
            &check.id,
            &check.client_name,
            // fixed width so ORDER BY on the text column is chronological
            check.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true),
        ],
    )?;
    Ok(())
}

/// Oldest first. Rows whose timestamp no longer parses are skipped.
pub fn list_status_checks(conn: &Connection) -> Result<Vec<StatusCheck>> {
    let mut stmt = conn.prepare(
        "SELECT id, client_name, timestamp FROM status_checks ORDER BY timestamp ASC LIMIT ?1",
    )?;

    let checks = stmt
        .query_map(params![STATUS_CHECK_LIST_LIMIT], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .filter_map(|r| r.ok())
        .filter_map(|(id, client_name, raw_ts)| match parse_timestamp(&raw_ts) {
            Some(timestamp) => Some(StatusCheck {
                id,
                client_name,
                timestamp,
            }),
            None => {
                log::warn!("Skipping status check {id}: bad timestamp {raw_ts:?}");
                None
            }
        })
        .collect();

    Ok(checks)
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
