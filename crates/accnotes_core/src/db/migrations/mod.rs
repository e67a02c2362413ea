//! Schema bootstrap for the key-value table.
//!
//! # Invariants
//! - The applied schema version is mirrored to `PRAGMA user_version`.
//! - A database stamped with a newer version is never touched.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = include_str!("0001_kv_store.sql");

/// Returns the schema version written by this binary.
pub fn latest_version() -> u32 {
    SCHEMA_VERSION
}

/// Creates the schema when missing and stamps its version.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let db_version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    if db_version > SCHEMA_VERSION {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported: SCHEMA_VERSION,
        });
    }
    if db_version == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;
    Ok(())
}
