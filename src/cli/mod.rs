pub mod init;
pub mod load;
pub mod status;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "excelflow", about = "Load multi-sheet Excel commission workbooks into SQLite.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and commission table without loading anything.
    Init {
        /// Path to the SQLite database (default: excel_flow.db)
        #[arg(long)]
        database: Option<String>,
        /// Destination table name (default: commission)
        #[arg(long)]
        table: Option<String>,
    },
    /// Load every sheet of a workbook into the commission table.
    Load {
        /// Path to the Excel workbook (default: COMMISSION 24.xlsx)
        workbook: Option<String>,
        /// Path to the SQLite database (default: excel_flow.db)
        #[arg(long)]
        database: Option<String>,
        /// Destination table name (default: commission)
        #[arg(long)]
        table: Option<String>,
        /// Provenance tag written to every row's ref column (default: RM)
        #[arg(long = "ref-tag")]
        ref_tag: Option<String>,
        /// JSON config file; CLI flags override its values
        #[arg(long)]
        config: Option<String>,
    },
    /// Show the database location and row counts.
    Status {
        /// Path to the SQLite database (default: excel_flow.db)
        #[arg(long)]
        database: Option<String>,
        /// Destination table name (default: commission)
        #[arg(long)]
        table: Option<String>,
    },
}
