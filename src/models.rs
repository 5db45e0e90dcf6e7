/// Destination column names, in table order. Every appended row carries
/// exactly these columns; source columns not in this list are dropped.
pub const EXPECTED_COLUMNS: &[&str] = &[
    "id",
    "no",
    "university",
    "ref",
    "month",
    "other_income",
    "received_date",
    "currency",
    "amount",
    "invoice_date",
    "notes",
];

/// One row of the commission table as read back from the database.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct CommissionRecord {
    pub id: String,
    pub no: Option<i64>,
    pub university: Option<String>,
    pub ref_tag: Option<String>,
    pub month: Option<String>,
    pub other_income: Option<f64>,
    pub received_date: Option<String>,
    pub currency: Option<String>,
    pub amount: Option<f64>,
    pub invoice_date: Option<String>,
    pub notes: Option<String>,
}
