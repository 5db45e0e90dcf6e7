use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::config::LoadConfig;
use crate::db::get_connection;
use crate::error::Result;
use crate::loader::load_workbook;

pub fn run(
    workbook: Option<&str>,
    database: Option<&str>,
    table: Option<&str>,
    ref_tag: Option<&str>,
    config: Option<&str>,
) -> Result<()> {
    let mut cfg = match config {
        Some(path) => LoadConfig::from_file(Path::new(path))?,
        None => LoadConfig::default(),
    };
    if let Some(w) = workbook {
        cfg.workbook = PathBuf::from(w);
    }
    if let Some(d) = database {
        cfg.database = PathBuf::from(d);
    }
    if let Some(t) = table {
        cfg.table = t.to_string();
    }
    if let Some(r) = ref_tag {
        cfg.ref_tag = r.to_string();
    }

    let mut conn = get_connection(&cfg.database)?;
    let report = load_workbook(&mut conn, &cfg)?;

    let mut summary = Table::new();
    summary.set_header(vec!["Sheet", "Rows"]);
    for sheet in &report.sheets {
        summary.add_row(vec![Cell::new(&sheet.name), Cell::new(sheet.rows)]);
    }
    println!("{summary}");
    println!(
        "{}",
        format!(
            "Appended {} rows from {} sheets into '{}'.",
            report.total_rows(),
            report.sheets.len(),
            cfg.table
        )
        .green()
    );
    Ok(())
}
