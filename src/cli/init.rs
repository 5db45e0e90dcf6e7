use std::path::PathBuf;

use crate::config::LoadConfig;
use crate::db::{get_connection, init_db, verify_schema};
use crate::error::Result;

pub fn run(database: Option<&str>, table: Option<&str>) -> Result<()> {
    let defaults = LoadConfig::default();
    let db_path = database.map(PathBuf::from).unwrap_or(defaults.database);
    let table = table.unwrap_or(&defaults.table);

    let conn = get_connection(&db_path)?;
    verify_schema(&conn, table)?;
    init_db(&conn, table)?;

    println!("Initialized table '{}' in {}", table, db_path.display());
    Ok(())
}
