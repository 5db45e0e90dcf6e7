use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Workbook error: {0}")]
    Source(#[from] calamine::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table '{table}' exists with an incompatible schema: {detail}")]
    Schema { table: String, detail: String },

    #[error("Sheet '{sheet}', data row {row}: {source}")]
    Sheet {
        /// Originating sheet name.
        sheet: String,
        /// 1-based data row within the sheet, not counting the header row.
        row: usize,
        source: rusqlite::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
