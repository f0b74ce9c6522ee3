//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを生成してから書き出す（失敗時に中途半端なファイルを残さない）。

use crate::error::{CvHunterError, Result};
use cv_hunter_common::export::excel_core::generate_report_buffer;
use cv_hunter_common::ReportRow;
use std::path::Path;

pub fn generate_report(rows: &[ReportRow], output_path: &Path) -> Result<()> {
    let buffer = generate_report_buffer(rows).map_err(CvHunterError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)
        .map_err(|e| CvHunterError::ExcelGeneration(format!("{}: {}", output_path.display(), e)))?;

    Ok(())
}
