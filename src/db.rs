use std::path::Path;

use rusqlite::Connection;

use crate::error::{LoaderError, Result};
use crate::models::EXPECTED_COLUMNS;

/// DDL for the destination table, rendered for a configurable table name.
/// The table is created once if absent and never altered by this tool.
pub fn schema_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (
    id TEXT PRIMARY KEY,
    no INTEGER DEFAULT 0,
    university TEXT,
    ref TEXT,
    month TEXT,
    other_income REAL DEFAULT 0,
    received_date TEXT,
    currency TEXT,
    amount REAL DEFAULT 0,
    invoice_date TEXT,
    notes TEXT
)",
        quote_ident(table)
    )
}

/// Double-quote an SQL identifier, escaping embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection, table: &str) -> Result<()> {
    conn.execute_batch(&schema_sql(table))?;
    Ok(())
}

/// Column names of `table` as the database reports them, empty if the table
/// does not exist.
fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let cols = stmt
        .query_map([table], |row| row.get(0))?
        .collect::<std::result::Result<Vec<String>, _>>()?;
    Ok(cols)
}

/// Fail if the destination table already exists with a different column set
/// (e.g. left over from a prior incompatible run). An absent table is fine;
/// `init_db` creates it.
pub fn verify_schema(conn: &Connection, table: &str) -> Result<()> {
    let cols = table_columns(conn, table)?;
    if cols.is_empty() || cols == EXPECTED_COLUMNS {
        return Ok(());
    }
    Err(LoaderError::Schema {
        table: table.to_string(),
        detail: format!("has columns [{}], expected [{}]", cols.join(", "), EXPECTED_COLUMNS.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> (tempfile::TempDir, Connection) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        (dir, conn)
    }

    #[test]
    fn test_init_db_creates_commission_table() {
        let (_dir, conn) = test_db();
        init_db(&conn, "commission").unwrap();
        let cols = table_columns(&conn, "commission").unwrap();
        assert_eq!(cols, EXPECTED_COLUMNS);
    }

    #[test]
    fn test_init_db_is_idempotent() {
        let (_dir, conn) = test_db();
        init_db(&conn, "commission").unwrap();
        init_db(&conn, "commission").unwrap();
    }

    #[test]
    fn test_verify_schema_passes_on_absent_table() {
        let (_dir, conn) = test_db();
        verify_schema(&conn, "commission").unwrap();
    }

    #[test]
    fn test_verify_schema_rejects_incompatible_table() {
        let (_dir, conn) = test_db();
        conn.execute("CREATE TABLE commission (id TEXT, wrong TEXT)", [])
            .unwrap();
        let err = verify_schema(&conn, "commission").unwrap_err();
        assert!(matches!(err, LoaderError::Schema { .. }));
        assert!(err.to_string().contains("commission"));
    }

    #[test]
    fn test_quote_ident_escapes_quotes() {
        assert_eq!(quote_ident("commission"), "\"commission\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
