//! Spreadsheet export of the currently listed cases: seven display
//! columns and a file name embedding the calendar date, written as CSV.

use std::path::Path;

use chrono::{Local, NaiveDate};
use shared::domain::Case;
use thiserror::Error;

/// Column headers of the exported report, in order.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Tên vụ việc",
    "Mã hồ sơ",
    "TGV thực hiện",
    "Tiêu chí thành công",
    "Chất lượng",
    "Ghi chú",
    "Ngày báo cáo",
];

#[derive(Debug, Error)]
pub enum ExportError {
    /// Export with nothing to write is a reported no-op, not a file.
    #[error("no cases to export")]
    EmptyList,
    #[error("failed to write export file: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// `Bao_cao_vu_viec_TGPL_YYYY-MM-DD.csv` for the given calendar date.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("Bao_cao_vu_viec_TGPL_{}.csv", date.format("%Y-%m-%d"))
}

/// Maps a case onto the seven display columns. The submission date is
/// rendered in local time, day first, as the original report does.
pub fn case_row(case: &Case) -> [String; 7] {
    [
        case.case_name.clone(),
        case.file_code.clone(),
        case.legal_aid_provider.clone(),
        case.success_criterion.clone(),
        case.quality.label().to_string(),
        case.notes.clone().unwrap_or_default(),
        case.submission_date
            .with_timezone(&Local)
            .format("%d/%m/%Y")
            .to_string(),
    ]
}

/// Writes the given cases (already filtered by the caller) to `path`.
/// An empty list produces no file at all.
pub fn write_csv(path: &Path, cases: &[&Case]) -> Result<(), ExportError> {
    if cases.is_empty() {
        return Err(ExportError::EmptyList);
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(EXPORT_HEADERS)?;
    for case in cases {
        writer.write_record(case_row(case))?;
    }
    writer.flush()?;
    Ok(())
}
