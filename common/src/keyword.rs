//! キーワード照合
//!
//! キーワードを正規化・エスケープし、`\b...\b` の単語単位パターンとして
//! 検索1回につき1度だけコンパイルする。部分一致（"cat" と "category"）は数えない。

use crate::error::Result;
use crate::normalizer::normalize;
use regex::Regex;

/// コンパイル済みキーワード
#[derive(Debug, Clone)]
struct KeywordPattern {
    /// ユーザーが入力したままのキーワード（表示用）
    keyword: String,
    regex: Regex,
}

/// キーワード照合器
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    patterns: Vec<KeywordPattern>,
}

impl KeywordMatcher {
    /// キーワード列からパターンを構築
    ///
    /// 空のキーワード列は呼び出し側（Session）で拒否する。
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self> {
        let patterns = keywords
            .iter()
            .map(|k| {
                let keyword = k.as_ref();
                let pattern = format!(r"\b{}\b", regex::escape(&normalize(keyword)));
                Ok(KeywordPattern {
                    keyword: keyword.to_string(),
                    regex: Regex::new(&pattern)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// 表示用キーワード（入力順）
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.keyword.as_str())
    }

    /// `index` 番目のキーワードを検索（出現数, 出現有無）
    ///
    /// `normalized_text` は正規化済みであること。
    pub fn find_keyword(&self, normalized_text: &str, index: usize) -> (usize, bool) {
        match self.patterns.get(index) {
            Some(p) => {
                let count = p.regex.find_iter(normalized_text).count();
                (count, count > 0)
            }
            None => (0, false),
        }
    }

    /// 出現数
    pub fn count(&self, normalized_text: &str, index: usize) -> usize {
        self.find_keyword(normalized_text, index).0
    }

    /// 出現有無（最初の一致で打ち切り）
    pub fn occurs(&self, normalized_text: &str, index: usize) -> bool {
        self.patterns
            .get(index)
            .is_some_and(|p| p.regex.is_match(normalized_text))
    }

    /// いずれかのキーワードが出現するか
    pub fn any_keyword_found(&self, normalized_text: &str) -> bool {
        self.patterns.iter().any(|p| p.regex.is_match(normalized_text))
    }

    /// 各キーワードの (キーワード, 出現数)
    pub fn counts<'a>(&'a self, normalized_text: &'a str) -> impl Iterator<Item = (&'a str, usize)> + 'a {
        self.patterns
            .iter()
            .map(move |p| (p.keyword.as_str(), p.regex.find_iter(normalized_text).count()))
    }

    /// 出現するキーワード（入力順）
    pub fn present_keywords<'a>(&'a self, normalized_text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.patterns
            .iter()
            .filter(move |p| p.regex.is_match(normalized_text))
            .map(|p| p.keyword.as_str())
    }
}
