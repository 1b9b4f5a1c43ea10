//! Balance export in the spreadsheet format operators already use
//!
//! ```text
//! RAPPORT COMPTABLE - AGRIPAY
//! --- ETAT DES SOLDES ---
//! Nom;Poste;Dû (F)
//! Koffi;HEVEA;1050
//! ```
//!
//! Semicolon separated, one worker per line in roster order, `\n` line
//! endings, no quoting. The encoded file starts with a UTF-8 byte-order mark
//! so spreadsheet tools pick the right encoding.

use std::io::Write;

use thiserror::Error;

use crate::ledger::RosterRow;
use crate::types::CURRENCY_LABEL;

pub const EXPORT_TITLE: &str = "RAPPORT COMPTABLE - AGRIPAY";
pub const BALANCE_SECTION_MARKER: &str = "--- ETAT DES SOLDES ---";
pub const EXPORT_FILE_NAME: &str = "EXPORT_AGRIPAY.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Export errors
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Render the balance report as text, without the byte-order mark
pub fn balance_report_csv(rows: &[RosterRow<'_>]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    writeln!(buf, "{}", EXPORT_TITLE)?;
    writeln!(buf, "{}", BALANCE_SECTION_MARKER)?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(buf);

    let due_header = format!("Dû ({})", CURRENCY_LABEL);
    wtr.write_record(["Nom", "Poste", due_header.as_str()])?;
    for row in rows {
        let due = row.balance.due.to_string();
        wtr.write_record([
            row.worker.name.as_str(),
            row.worker.category.code(),
            due.as_str(),
        ])?;
    }

    let buf = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(buf)?)
}

/// Encoded export file: UTF-8 byte-order mark followed by the report text
pub fn balance_report_bytes(rows: &[RosterRow<'_>]) -> Result<Vec<u8>, ExportError> {
    let text = balance_report_csv(rows)?;
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(text.as_bytes());
    Ok(bytes)
}
