//! 文書スコアリング
//!
//! 正規化 → キーワード照合 → 氏名検出 を1文書ずつ実行し、MatchResult にまとめる。

use crate::keyword::KeywordMatcher;
use crate::names::NameList;
use crate::normalizer::normalize;
use crate::types::{Document, KeywordHit, MatchResult};

/// 文書をスコアリングする
///
/// # Returns
/// 対象外（テキストが空、またはキーワードが1つも出現しない）なら `None`
pub fn score_document(
    document: &Document,
    matcher: &KeywordMatcher,
    names: &NameList,
) -> Option<MatchResult> {
    if !document.is_searchable() {
        return None;
    }

    let normalized = normalize(&document.raw_text);
    if !matcher.any_keyword_found(&normalized) {
        return None;
    }

    let keyword_hits: Vec<KeywordHit> = matcher
        .counts(&normalized)
        .filter(|(_, count)| *count > 0)
        .map(|(keyword, count)| KeywordHit {
            keyword: keyword.to_string(),
            count,
        })
        .collect();
    let total_match_count = keyword_hits.iter().map(|hit| hit.count).sum();

    let detected = names.detect_names(&normalized);

    // 件数0でも氏名行があれば残す
    if total_match_count == 0 && detected.is_empty() {
        return None;
    }

    Some(MatchResult {
        document_id: document.id,
        display_name: document.display_name.clone(),
        total_match_count,
        keyword_hits,
        names: detected,
    })
}
