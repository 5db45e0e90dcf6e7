use std::collections::HashMap;

use calamine::{Data, Range, Reader};
use rusqlite::types::Value;
use rusqlite::Connection;
use uuid::Uuid;

use crate::config::LoadConfig;
use crate::db::{init_db, quote_ident, verify_schema};
use crate::error::{LoaderError, Result};
use crate::models::EXPECTED_COLUMNS;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Canonicalize a header cell: trim, lowercase, spaces to underscores.
/// Idempotent, so already-normalized names pass through unchanged.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

pub fn excel_serial_to_date(serial: f64) -> String {
    // Excel epoch is 1899-12-30 (accounting for the 1900 leap year bug)
    let base = chrono::NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    let date = base + chrono::Duration::days(serial as i64);
    date.format("%Y-%m-%d").to_string()
}

/// Permissive cell conversion: values pass through to SQLite's type
/// affinity as-is, date-formatted cells become ISO date text, empty and
/// error cells become NULL. No validation.
fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => Value::Text(s.clone()),
        Data::Float(f) => Value::Real(*f),
        Data::Int(i) => Value::Integer(*i),
        Data::Bool(b) => Value::Integer(*b as i64),
        Data::DateTime(dt) => Value::Text(excel_serial_to_date(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::Text(s.clone()),
    }
}

// ---------------------------------------------------------------------------
// ingest
// ---------------------------------------------------------------------------

/// Normalize one sheet and append its rows to the destination table.
///
/// The first row of `range` is the header row. Headers are normalized and
/// matched against the schema columns; `id`, `month`, and `ref` are always
/// synthesized, overwriting any source column of the same name. Schema
/// columns missing from the sheet are null-filled, extra source columns are
/// dropped. Rows append in sheet order with no duplicate checking.
///
/// Returns the number of rows appended.
pub fn ingest(conn: &Connection, cfg: &LoadConfig, sheet_name: &str, range: &Range<Data>) -> Result<usize> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(0);
    };

    // Normalized header name -> source column index. On duplicate
    // normalized names the first occurrence wins.
    let mut columns: HashMap<String, usize> = HashMap::new();
    for (idx, cell) in header.iter().enumerate() {
        let name = normalize_header(&cell.to_string());
        if !name.is_empty() {
            columns.entry(name).or_insert(idx);
        }
    }

    let placeholders: Vec<String> = (1..=EXPECTED_COLUMNS.len()).map(|i| format!("?{i}")).collect();
    let insert_sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_ident(&cfg.table),
        EXPECTED_COLUMNS.join(", "),
        placeholders.join(", "),
    );
    let mut stmt = conn.prepare_cached(&insert_sql)?;

    let mut appended = 0usize;
    for (row_idx, row) in rows.enumerate() {
        let values: Vec<Value> = EXPECTED_COLUMNS
            .iter()
            .map(|&col| match col {
                "id" => Value::Text(Uuid::new_v4().to_string()),
                "month" => Value::Text(sheet_name.to_string()),
                "ref" => Value::Text(cfg.ref_tag.clone()),
                _ => columns
                    .get(col)
                    .and_then(|&idx| row.get(idx))
                    .map(cell_to_value)
                    .unwrap_or(Value::Null),
            })
            .collect();
        stmt.execute(rusqlite::params_from_iter(values))
            .map_err(|e| LoaderError::Sheet {
                sheet: sheet_name.to_string(),
                row: row_idx + 1,
                source: e,
            })?;
        appended += 1;
    }
    Ok(appended)
}

// ---------------------------------------------------------------------------
// load_workbook
// ---------------------------------------------------------------------------

pub struct SheetReport {
    pub name: String,
    pub rows: usize,
}

pub struct LoadReport {
    pub sheets: Vec<SheetReport>,
}

impl LoadReport {
    pub fn total_rows(&self) -> usize {
        self.sheets.iter().map(|s| s.rows).sum()
    }
}

/// Run the whole pipeline: open the workbook, ensure the destination schema,
/// ingest every sheet in workbook order, commit.
///
/// Schema creation and all appends happen in one transaction, so a failure
/// on any sheet rolls the entire run back and the database is unchanged.
pub fn load_workbook(conn: &mut Connection, cfg: &LoadConfig) -> Result<LoadReport> {
    let mut workbook = calamine::open_workbook_auto(&cfg.workbook)?;
    verify_schema(conn, &cfg.table)?;

    let tx = conn.transaction()?;
    init_db(&tx, &cfg.table)?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook.worksheet_range(&name)?;
        let rows = ingest(&tx, cfg, &name, &range)?;
        sheets.push(SheetReport { name, rows });
    }

    tx.commit()?;
    Ok(LoadReport { sheets })
}
