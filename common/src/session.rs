//! 検索セッション
//!
//! キーワード・文書・名リストを保持し、シェルから呼ばれる同期APIを提供する。
//! 前提条件エラー（キーワード重複・キーワード未登録）では状態を変更しない。

use crate::error::{Error, Result};
use crate::keyword::KeywordMatcher;
use crate::names::NameList;
use crate::report::{build_report_rows, format_listing, rank};
use crate::scorer::score_document;
use crate::types::{Document, KeywordSet, MatchResult, ReportRow};

/// セッション状態
#[derive(Debug, Clone, Default)]
pub struct Session {
    keywords: KeywordSet,
    documents: Vec<Document>,
    names: NameList,
}

impl Session {
    /// 空のセッション
    pub fn new() -> Self {
        Self::default()
    }

    /// 名リスト付きで作成
    pub fn with_names(names: NameList) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }

    // ---- キーワード ----

    pub fn add_keyword(&mut self, keyword: &str) -> Result<()> {
        self.keywords.add(keyword)
    }

    pub fn reset_keywords(&mut self) {
        self.keywords.clear();
    }

    pub fn keywords(&self) -> &[String] {
        self.keywords.as_slice()
    }

    pub fn keywords_display(&self) -> String {
        self.keywords.display()
    }

    // ---- 文書 ----

    /// 文書を追加（(表示名, テキスト) の列）
    ///
    /// # Returns
    /// 追加された文書数
    pub fn upload_documents<I, N, T>(&mut self, documents: I) -> usize
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: Into<String>,
    {
        let before = self.documents.len();
        for (display_name, raw_text) in documents {
            let id = self.documents.len();
            self.documents.push(Document::new(id, display_name, raw_text));
        }
        self.documents.len() - before
    }

    pub fn reset_documents(&mut self) {
        self.documents.clear();
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    // ---- 名リスト ----

    pub fn load_names(&mut self, names: NameList) {
        self.names = names;
    }

    pub fn clear_names(&mut self) {
        self.names = NameList::default();
    }

    pub fn names(&self) -> &NameList {
        &self.names
    }

    // ---- 検索・レポート ----

    /// 全体リセット
    pub fn reset(&mut self) {
        self.reset_keywords();
        self.reset_documents();
        self.clear_names();
    }

    fn matcher(&self) -> Result<KeywordMatcher> {
        if self.keywords.is_empty() {
            return Err(Error::NoKeywords);
        }
        KeywordMatcher::new(self.keywords.as_slice())
    }

    /// 検索して件数の降順に並べた結果を返す
    pub fn search_results(&self) -> Result<Vec<MatchResult>> {
        let matcher = self.matcher()?;
        let results = self
            .documents
            .iter()
            .filter_map(|doc| score_document(doc, &matcher, &self.names))
            .collect();
        Ok(rank(results))
    }

    /// 検索して一覧表示用テキストを返す
    pub fn search(&self) -> Result<String> {
        let ranked = self.search_results()?;
        Ok(format_listing(&ranked))
    }

    /// レポート行を生成
    pub fn generate_report(&self) -> Result<Vec<ReportRow>> {
        let matcher = self.matcher()?;
        Ok(build_report_rows(&self.documents, &matcher, &self.names))
    }
}
