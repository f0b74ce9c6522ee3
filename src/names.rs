//! 名リスト読み込み
//!
//! 起動時に1度だけ読み込み、セッションに渡す。読み込み失敗は処理全体を中断する。

use crate::config::Config;
use crate::error::{CvHunterError, Result};
use cv_hunter_common::NameList;
use std::path::Path;

/// 名リストファイルを読み込む
pub fn load_name_list(path: &Path) -> Result<NameList> {
    if !path.is_file() {
        return Err(CvHunterError::NameListLoad(format!(
            "ファイルが見つかりません: {}",
            path.display()
        )));
    }

    NameList::from_file(path)
        .map_err(|e| CvHunterError::NameListLoad(format!("{}: {}", path.display(), e)))
}

/// 引数・環境変数・設定から名リストを解決して読み込む
pub fn load_configured_name_list(config: &Config, arg: Option<&Path>, verbose: bool) -> Result<NameList> {
    let path = config.resolve_names_path(arg)?;
    let names = load_name_list(&path)?;
    if verbose {
        println!("  名リスト: {} ({}件)", path.display(), names.len());
    }
    Ok(names)
}
