//! Excel生成（共通ライブラリ）
//!
//! レポート行を "Name" / "Keyword" / "CV Name" の3列で書き出す。

use crate::types::{ReportRow, REPORT_COLUMNS};
use rust_xlsxwriter::*;

/// シート名（既存レポートと同じ）
pub const REPORT_SHEET_NAME: &str = "Sheet1";

/// 列幅（文字数）
const COLUMN_WIDTHS: [f64; 3] = [28.0, 20.0, 36.0];

/// レポートExcelをバッファに生成
///
/// # Arguments
/// * `rows` - レポート行（この順で書き出す）
pub fn generate_report_buffer(rows: &[ReportRow]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(REPORT_SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, (title, width)) in REPORT_COLUMNS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet
            .set_column_width(col, width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet
            .write_string_with_format(0, col, *title, &header_format)
            .map_err(|e| format!("ヘッダー書き込みエラー: {}", e))?;
    }

    for (idx, row) in rows.iter().enumerate() {
        let excel_row = idx as u32 + 1;
        for (col, value) in row.cells().iter().enumerate() {
            // 氏名なしは空セル
            if value.is_empty() {
                continue;
            }
            worksheet
                .write_string(excel_row, col as u16, *value)
                .map_err(|e| format!("値書き込みエラー: {}", e))?;
        }
    }

    worksheet
        .set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
