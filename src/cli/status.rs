use std::path::PathBuf;

use crate::config::LoadConfig;
use crate::db::{get_connection, quote_ident};
use crate::error::Result;

pub fn run(database: Option<&str>, table: Option<&str>) -> Result<()> {
    let defaults = LoadConfig::default();
    let db_path = database.map(PathBuf::from).unwrap_or(defaults.database);
    let table = table.unwrap_or(&defaults.table);

    println!("Database:  {}", db_path.display());

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `excelflow init` or `excelflow load` first.");
        return Ok(());
    }

    let size = std::fs::metadata(&db_path)?.len();
    println!("DB size:   {size} bytes");

    let conn = get_connection(&db_path)?;
    let exists: bool = conn
        .prepare("SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1")?
        .exists([table])?;
    if exists {
        let rows: i64 = conn.query_row(
            &format!("SELECT count(*) FROM {}", quote_ident(table)),
            [],
            |r| r.get(0),
        )?;
        println!("Table:     {table}");
        println!("Rows:      {rows}");
    } else {
        println!("Table:     {table} (not created yet)");
    }
    Ok(())
}
