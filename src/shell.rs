//! 対話モード
//!
//! メニューからセッション操作（キーワード追加・CVアップロード・検索・レポート）を呼ぶ。
//! 前提条件エラーは警告を出して続行、I/Oエラーはその操作だけ中断する。

use crate::error::{CvHunterError, Result};
use crate::export;
use crate::scanner;
use cv_hunter_common::{NameList, Session};
use dialoguer::{Input, Select};
use std::path::PathBuf;

/// メニュー項目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellAction {
    AddKeyword,
    ResetKeywords,
    UploadCvs,
    ResetCvs,
    Search,
    GenerateReport,
    Quit,
}

impl ShellAction {
    pub const ALL: [ShellAction; 7] = [
        ShellAction::AddKeyword,
        ShellAction::ResetKeywords,
        ShellAction::UploadCvs,
        ShellAction::ResetCvs,
        ShellAction::Search,
        ShellAction::GenerateReport,
        ShellAction::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShellAction::AddKeyword => "キーワード追加",
            ShellAction::ResetKeywords => "キーワードをリセット",
            ShellAction::UploadCvs => "CVをアップロード",
            ShellAction::ResetCvs => "CVをリセット",
            ShellAction::Search => "検索",
            ShellAction::GenerateReport => "レポート生成",
            ShellAction::Quit => "終了",
        }
    }
}

/// キーワードをまとめて追加（重複・空は警告して無視）
///
/// # Returns
/// 追加できた件数
pub fn add_keywords(session: &mut Session, keywords: &[String]) -> usize {
    let mut added = 0;
    for keyword in keywords {
        match session.add_keyword(keyword) {
            Ok(()) => added += 1,
            Err(e) => println!("⚠ {}", e),
        }
    }
    added
}

/// CVを読み込んでセッションに追加
///
/// # Returns
/// 追加した文書数
pub fn upload(session: &mut Session, paths: &[PathBuf], verbose: bool) -> Result<usize> {
    let documents = scanner::load_documents(paths, verbose)?;
    for doc in &documents {
        println!("CV Uploaded: {}", doc.file_name);
    }
    let empty = documents.iter().filter(|d| d.is_empty()).count();
    if verbose && empty > 0 {
        println!("  テキストなし（検索対象外）: {}件", empty);
    }

    Ok(session.upload_documents(documents.into_iter().map(|d| (d.file_name, d.text))))
}

/// 対話モードを実行
pub fn run_shell(names: NameList, report_title: &str, verbose: bool) -> Result<()> {
    let mut session = Session::with_names(names);
    let labels: Vec<&str> = ShellAction::ALL.iter().map(|a| a.label()).collect();

    println!("名リスト: {}件", session.names().len());

    loop {
        println!("\n{}", session.keywords_display());
        println!("CV: {}件", session.documents().len());

        let selection = Select::new()
            .with_prompt("操作を選択")
            .items(&labels)
            .default(0)
            .interact()
            .map_err(|e| CvHunterError::Prompt(e.to_string()))?;

        let action = ShellAction::ALL[selection];
        if action == ShellAction::Quit {
            break;
        }

        if let Err(e) = run_action(&mut session, action, report_title, verbose) {
            if e.is_warning() {
                println!("⚠ {}", e);
            } else {
                eprintln!("✖ {}", e);
            }
        }
    }

    Ok(())
}

fn run_action(session: &mut Session, action: ShellAction, report_title: &str, verbose: bool) -> Result<()> {
    match action {
        ShellAction::AddKeyword => {
            let keyword = prompt_text("キーワード", false)?;
            session.add_keyword(&keyword)?;
        }
        ShellAction::ResetKeywords => {
            session.reset_keywords();
        }
        ShellAction::UploadCvs => {
            let mut entries = Vec::new();
            loop {
                let entry = prompt_text("CVファイル/フォルダ（1件ずつ、空欄で終了）", true)?;
                let done = entry.is_empty();
                entries.push(entry);
                if done {
                    break;
                }
            }
            let paths = collect_entry_paths(entries);
            if paths.is_empty() {
                return Ok(());
            }
            let count = upload(session, &paths, verbose)?;
            println!("✔ {}件のCVを追加", count);
        }
        ShellAction::ResetCvs => {
            session.reset_documents();
            println!("CVs reset.");
        }
        ShellAction::Search => {
            let listing = session.search()?;
            println!("{}", listing);
            println!("Completed");
        }
        ShellAction::GenerateReport => {
            let rows = session.generate_report()?;
            let output = prompt_text("出力先（空欄でカレント）", true)?;
            let output = (!output.is_empty()).then(|| PathBuf::from(output));
            export::export_report(&rows, output.as_deref(), report_title)?;
            println!("Report successfully saved.");
        }
        ShellAction::Quit => {}
    }

    Ok(())
}

/// 1行1パスの入力を空行まで集める（パス中の空白はそのまま）
fn collect_entry_paths<I>(entries: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    entries
        .into_iter()
        .map(|e| e.trim().to_string())
        .take_while(|e| !e.is_empty())
        .map(PathBuf::from)
        .collect()
}

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    let text: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| CvHunterError::Prompt(e.to_string()))?;
    Ok(text.trim().to_string())
}

/// 1回実行用のセッションを作る（search/report サブコマンド用）
pub fn build_session(
    names: NameList,
    paths: &[PathBuf],
    keywords: &[String],
    verbose: bool,
) -> Result<Session> {
    let mut session = Session::with_names(names);
    add_keywords(&mut session, keywords);
    let count = upload(&mut session, paths, verbose)?;
    if count == 0 {
        let joined = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(CvHunterError::NoDocumentsFound(joined));
    }
    Ok(session)
}
