//! 氏名検出
//!
//! 既知の名（given name）リストと行頭トークンの完全一致で氏名行を見つける。
//!
//! ## 判定ルール
//! 1. 本文を `\n` で行分割し、各行を trim
//! 2. 行の先頭トークンが名リストに含まれればヒット
//! 3. 次の行が1トークンだけなら「行 + 次の行」を氏名とする（姓の改行対応）
//! 4. それ以外は行全体を氏名とする
//!
//! 出力は正規化済みの行をタイトルケースにしたもの（元の大文字小文字・アクセントは失われる）。

use crate::error::Result;
use crate::normalizer::{normalize, title_case};
use std::collections::HashSet;
use std::path::Path;

/// 既知の名リスト（正規化済み）
#[derive(Debug, Clone, Default)]
pub struct NameList {
    /// 読み込み順の名（表示用）
    names: Vec<String>,
    /// 照合用の正規化済み集合
    normalized: HashSet<String>,
}

impl NameList {
    /// 名の列から構築（空行は無視）
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        let normalized = names.iter().map(|n| normalize(n)).collect();
        Self { names, normalized }
    }

    /// 1行1名のテキストから構築
    pub fn from_lines(content: &str) -> Self {
        Self::new(content.lines())
    }

    /// UTF-8テキストファイルから読み込み
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_lines(&content))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// 正規化済みトークンが既知の名か
    pub fn contains(&self, normalized_token: &str) -> bool {
        self.normalized.contains(normalized_token)
    }

    /// 氏名行を順に検出する（遅延評価）
    ///
    /// `normalized_text` は正規化済みであること。
    pub fn name_lines<'a>(&'a self, normalized_text: &'a str) -> impl Iterator<Item = String> + 'a {
        let lines: Vec<&str> = normalized_text.split('\n').collect();

        (0..lines.len()).filter_map(move |idx| {
            let line = lines[idx].trim();
            let first = line.split_whitespace().next()?;
            if !self.contains(first) {
                return None;
            }

            let next_line = lines.get(idx + 1).map(|l| l.trim()).unwrap_or("");
            let full_name = if !next_line.is_empty() && next_line.split_whitespace().count() == 1 {
                format!("{} {}", line, next_line)
            } else {
                line.to_string()
            };
            Some(title_case(&full_name))
        })
    }

    /// すべての氏名行（一覧表示用、重複除去なし）
    pub fn detect_names(&self, normalized_text: &str) -> Vec<String> {
        self.name_lines(normalized_text).collect()
    }

    /// 最初の氏名（レポート用、最初のヒットで走査終了）
    pub fn first_name(&self, normalized_text: &str) -> Option<String> {
        self.name_lines(normalized_text).next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> NameList {
        NameList::new(list.iter().copied())
    }

    #[test]
    fn test_two_line_join() {
        let list = names(&["ahmet"]);
        let text = normalize("ahmet\nyilmaz\nengineer");
        assert_eq!(list.detect_names(&text), vec!["Ahmet Yilmaz"]);
    }

    #[test]
    fn test_no_join_when_next_line_has_two_tokens() {
        let list = names(&["ahmet"]);
        let text = normalize("ahmet\nengineer manager");
        assert_eq!(list.detect_names(&text), vec!["Ahmet"]);
    }

    #[test]
    fn test_name_line_with_surname_on_same_line() {
        let list = names(&["Ayşe"]);
        let text = normalize("  AYŞE KAYA  \n\nSoftware Developer");
        assert_eq!(list.first_name(&text), Some("Ayse Kaya".to_string()));
    }

    #[test]
    fn test_last_line_hit_has_no_next_line() {
        let list = names(&["mehmet"]);
        let text = normalize("references\nMehmet");
        assert_eq!(list.detect_names(&text), vec!["Mehmet"]);
    }

    #[test]
    fn test_exact_token_match_not_prefix() {
        let list = names(&["ali"]);
        let text = normalize("alice smith\nalinda\nali veli");
        assert_eq!(list.detect_names(&text), vec!["Ali Veli"]);
    }

    #[test]
    fn test_only_first_token_is_checked() {
        let list = names(&["ahmet"]);
        let text = normalize("contact ahmet\nphone");
        assert!(list.detect_names(&text).is_empty());
    }

    #[test]
    fn test_all_hits_are_kept_without_dedup() {
        let list = names(&["ahmet", "zeynep"]);
        let text = normalize("Ahmet\nYılmaz\nreferences:\nZeynep Demir, manager\nphone: 555 1234\nahmet\nyilmaz");
        assert_eq!(
            list.detect_names(&text),
            vec!["Ahmet Yılmaz", "Zeynep Demir, Manager", "Ahmet Yilmaz"]
        );
        assert_eq!(list.first_name(&text), Some("Ahmet Yılmaz".to_string()));
    }

    #[test]
    fn test_crlf_lines() {
        let list = names(&["ahmet"]);
        let text = normalize("Ahmet\r\nYilmaz\r\nEngineer");
        assert_eq!(list.first_name(&text), Some("Ahmet Yilmaz".to_string()));
    }

    #[test]
    fn test_from_lines_skips_blank_and_normalizes() {
        let list = NameList::from_lines("Şükrü\n\n  Özge \n");
        assert_eq!(list.len(), 2);
        assert_eq!(list.names(), &["Şükrü", "Özge"]);
        assert!(list.contains("sukru"));
        assert!(list.contains("ozge"));
    }

    #[test]
    fn test_empty_list_detects_nothing() {
        let list = NameList::default();
        assert!(list.is_empty());
        assert_eq!(list.first_name("ahmet\nyilmaz"), None);
    }
}
