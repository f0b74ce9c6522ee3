//! 検索・レポートの型定義
//!
//! - KeywordSet: ユーザーが追加したキーワード（重複なし、追加順）
//! - Document: アップロードされたCV
//! - MatchResult: 検索1回分の文書ごとの結果
//! - ReportRow: レポート出力用のフラットな行

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// レポートの列名（既存レポートとの互換のため順序・表記固定）
pub const REPORT_COLUMNS: [&str; 3] = ["Name", "Keyword", "CV Name"];

/// キーワード集合
///
/// 重複判定は正規化前の文字列そのもので行う（大文字小文字も区別）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// キーワードを追加
    pub fn add(&mut self, keyword: &str) -> Result<()> {
        if keyword.is_empty() {
            return Err(Error::EmptyKeyword);
        }
        if self.keywords.iter().any(|k| k == keyword) {
            return Err(Error::DuplicateKeyword(keyword.to_string()));
        }
        self.keywords.push(keyword.to_string());
        Ok(())
    }

    pub fn clear(&mut self) {
        self.keywords.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    /// 表示用文字列（"Added Keywords: a, b" / "Added Keywords: None"）
    pub fn display(&self) -> String {
        if self.keywords.is_empty() {
            "Added Keywords: None".to_string()
        } else {
            format!("Added Keywords: {}", self.keywords.join(", "))
        }
    }
}

/// アップロードされた文書
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// アップロード順のインデックス
    pub id: usize,
    pub display_name: String,
    /// 抽出テキスト（抽出失敗時は空）
    #[serde(default)]
    pub raw_text: String,
}

impl Document {
    pub fn new(id: usize, display_name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            raw_text: raw_text.into(),
        }
    }

    /// テキストが空の文書はマッチング対象外
    pub fn is_searchable(&self) -> bool {
        !self.raw_text.is_empty()
    }
}

/// キーワードごとのヒット数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub count: usize,
}

/// 文書ごとの検索結果
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub document_id: usize,
    pub display_name: String,
    pub total_match_count: usize,
    /// ヒットしたキーワード（count > 0 のみ、キーワード順）
    pub keyword_hits: Vec<KeywordHit>,
    /// 検出された氏名（タイトルケース済み、検出順）
    pub names: Vec<String>,
}

impl MatchResult {
    /// 最初に検出された氏名（なければ空文字）
    pub fn detected_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }

    /// 表示用の詳細行
    pub fn detail_lines(&self) -> Vec<String> {
        let keyword_lines = self
            .keyword_hits
            .iter()
            .map(|hit| format!("'{}' found {} times.", hit.keyword, hit.count));
        let name_lines = self.names.iter().map(|name| format!("Name: {}", name));
        keyword_lines.chain(name_lines).collect()
    }
}

/// レポート行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub name: String,
    pub keyword: String,
    pub document_display_name: String,
}

impl ReportRow {
    /// REPORT_COLUMNS の順に並べたセル値
    pub fn cells(&self) -> [&str; 3] {
        [&self.name, &self.keyword, &self.document_display_name]
    }
}
