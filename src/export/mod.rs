pub mod excel;

use crate::error::Result;
use chrono::{DateTime, Local};
use cv_hunter_common::ReportRow;
use std::path::{Path, PathBuf};

/// 日時付きのデフォルトファイル名
fn default_file_name(title: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.xlsx", title, now.format("%Y%m%d_%H%M%S"))
}

/// レポートの出力先を決める
///
/// - 未指定: カレントディレクトリに日時付きファイル名
/// - ディレクトリ（または拡張子なし）: その中に日時付きファイル名
/// - ファイル: そのまま
pub fn report_output_path(output: Option<&Path>, title: &str, now: DateTime<Local>) -> PathBuf {
    match output {
        None => PathBuf::from(default_file_name(title, now)),
        Some(path) if path.is_dir() || path.extension().is_none() => {
            path.join(default_file_name(title, now))
        }
        Some(path) => path.to_path_buf(),
    }
}

/// レポートをExcelに出力
///
/// # Returns
/// 書き出したファイルのパス
pub fn export_report(rows: &[ReportRow], output: Option<&Path>, title: &str) -> Result<PathBuf> {
    let output_path = report_output_path(output, title, Local::now());
    println!("- Excelを生成中... ({}行)", rows.len());
    excel::generate_report(rows, &output_path)?;
    println!("✔ Excel出力: {}", output_path.display());
    Ok(output_path)
}
