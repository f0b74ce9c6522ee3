//! CV読み込みモジュール
//!
//! ファイル・フォルダを受け取り、(表示名, テキスト) の組を作る。
//! PDF/Word はテキスト抽出を行わないため、UTF-8として読めないファイルと同様に
//! 空テキストで保持し、検索対象から外す。

use crate::error::{CvHunterError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct DocumentFile {
    pub path: PathBuf,
    pub file_name: String,
    /// 抽出テキスト（読み込み失敗時は空）
    pub text: String,
}

impl DocumentFile {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

const DOCUMENT_EXTENSIONS: &[&str] = &["txt", "text", "md", "pdf", "docx"];

/// テキスト抽出に対応していない拡張子
const BINARY_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// 対象拡張子か（大文字小文字は区別しない）
fn is_document_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    DOCUMENT_EXTENSIONS.contains(&ext.as_str())
}

/// フォルダ直下のCVファイルを列挙
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(CvHunterError::FileNotFound(folder.display().to_string()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .map(|ext| is_document_extension(&ext.to_string_lossy()))
                .unwrap_or(false)
        })
        .collect();

    // ファイル名でソート
    files.sort_by_key(|p| file_name_of(p));

    Ok(files)
}

/// 引数のパス（ファイル/フォルダ）を展開
///
/// 明示されたファイルは拡張子に関係なく対象にする。
pub fn collect_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            files.extend(scan_folder(path)?);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(CvHunterError::FileNotFound(path.display().to_string()));
        }
    }

    Ok(files)
}

fn is_binary_document(path: &Path) -> bool {
    path.extension()
        .map(|ext| {
            let ext = ext.to_string_lossy().to_lowercase();
            BINARY_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// 1ファイル読み込み
pub fn read_document(path: &Path, verbose: bool) -> DocumentFile {
    let text = if is_binary_document(path) {
        if verbose {
            eprintln!("  テキスト抽出非対応（検索対象外）: {}", path.display());
        }
        String::new()
    } else {
        match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                if verbose {
                    eprintln!("  テキスト抽出不可（検索対象外）: {} ({})", path.display(), e);
                }
                String::new()
            }
        }
    };

    DocumentFile {
        path: path.to_path_buf(),
        file_name: file_name_of(path),
        text,
    }
}

/// パス群を読み込む
pub fn load_documents(paths: &[PathBuf], verbose: bool) -> Result<Vec<DocumentFile>> {
    let files = collect_paths(paths)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> "),
    );

    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        let doc = read_document(path, verbose);
        pb.set_message(doc.file_name.clone());
        pb.inc(1);
        documents.push(doc);
    }
    pb.finish_and_clear();

    Ok(documents)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
