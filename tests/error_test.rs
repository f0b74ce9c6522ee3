//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use cv_keyword_hunter::error::CvHunterError;
use cv_keyword_hunter::{names, scanner};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(CvHunterError::FileNotFound(_))));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.unwrap().is_empty());
}

/// 読めないCVは空テキストで保持される（エラーにしない）
#[test]
fn test_undecodable_document_kept_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("cv.docx"), b"PK\x03\x04\xff\xff").unwrap();
    std::fs::write(dir.path().join("cv.txt"), "Java").unwrap();

    let docs = scanner::load_documents(&[dir.path().to_path_buf()], false).unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs[0].is_empty());
    assert_eq!(docs[1].text, "Java");
}

/// 名リストが読めない場合は中断
#[test]
fn test_missing_name_list_is_fatal() {
    let result = names::load_name_list(Path::new("/nonexistent/names.txt"));
    assert!(matches!(result, Err(CvHunterError::NameListLoad(_))));
}

/// 存在しないCVパスはエラー
#[test]
fn test_missing_document_path() {
    let result = scanner::load_documents(&[PathBuf::from("/nonexistent/cv.txt")], false);
    assert!(matches!(result, Err(CvHunterError::FileNotFound(_))));
}

/// CvHunterErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CvHunterError::Config("テスト設定エラー".to_string()),
        CvHunterError::FileNotFound("cv.txt".to_string()),
        CvHunterError::NameListLoad("names.txt".to_string()),
        CvHunterError::NoDocumentsFound("cvs/".to_string()),
        CvHunterError::ExcelGeneration("Excel生成エラー".to_string()),
        CvHunterError::Prompt("入力中断".to_string()),
        CvHunterError::MissingNameList,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 名リスト未設定エラーのメッセージ確認
#[test]
fn test_missing_name_list_message() {
    let display = format!("{}", CvHunterError::MissingNameList);
    assert!(display.contains("cv-hunter config"));
    assert!(display.contains("--names"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CvHunterError = io_err.into();

    assert!(matches!(err, CvHunterError::Io(_)));
    assert!(!err.is_warning());
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let err: CvHunterError = cv_hunter_common::Error::NoKeywords.into();

    assert!(matches!(err, CvHunterError::Common(_)));
    assert!(err.is_warning());
    assert_eq!(format!("{}", err), "Please add at least one keyword");
}

/// 前提条件以外の共通エラーは警告扱いしない
#[test]
fn test_common_io_error_not_warning() {
    let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "names.txt");
    let err: CvHunterError = cv_hunter_common::Error::Io(io_error).into();
    assert!(!err.is_warning());
    assert!(format!("{}", err).contains("names.txt"));
}
