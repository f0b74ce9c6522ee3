//! 並べ替えと出力整形
//!
//! - rank: 件数の降順（同数は元の順序を維持）
//! - format_listing: 対話表示用のテキスト
//! - build_report_rows: レポート用のフラットな行（検索結果とは独立に再計算）

use crate::keyword::KeywordMatcher;
use crate::names::NameList;
use crate::normalizer::normalize;
use crate::types::{Document, MatchResult, ReportRow};

/// 一致なしのときの表示
pub const NOT_FOUND: &str = "Not found";

/// 件数の降順に並べ替える（安定ソート）
pub fn rank(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| b.total_match_count.cmp(&a.total_match_count));
    results
}

/// 一覧表示用テキストを生成
pub fn format_listing(ranked: &[MatchResult]) -> String {
    if ranked.is_empty() {
        return NOT_FOUND.to_string();
    }

    let mut out = String::new();
    for result in ranked {
        out.push_str(&format!(
            "{} - {} matches\n",
            result.display_name, result.total_match_count
        ));
        for line in result.detail_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("\n\n");
    }
    out
}

/// レポート行を生成
///
/// 文書ごとに最初の氏名（なければ空文字）と出現キーワードを求め、
/// (氏名, キーワード, 文書名) を1行ずつ出力する。
pub fn build_report_rows(
    documents: &[Document],
    matcher: &KeywordMatcher,
    names: &NameList,
) -> Vec<ReportRow> {
    let mut rows = Vec::new();

    for document in documents.iter().filter(|d| d.is_searchable()) {
        let normalized = normalize(&document.raw_text);
        let name = names.first_name(&normalized).unwrap_or_default();

        rows.extend(matcher.present_keywords(&normalized).map(|keyword| ReportRow {
            name: name.clone(),
            keyword: keyword.to_string(),
            document_display_name: document.display_name.clone(),
        }));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeywordHit;

    fn result(id: usize, count: usize) -> MatchResult {
        MatchResult {
            document_id: id,
            display_name: format!("cv{}.txt", id),
            total_match_count: count,
            keyword_hits: vec![KeywordHit { keyword: "rust".into(), count }],
            names: vec![],
        }
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let ranked = rank(vec![result(0, 3), result(1, 5), result(2, 3)]);
        let ids: Vec<usize> = ranked.iter().map(|r| r.document_id).collect();
        assert_eq!(ids, vec![1, 0, 2]);
    }

    #[test]
    fn test_format_listing_not_found() {
        assert_eq!(format_listing(&[]), "Not found");
    }

    #[test]
    fn test_format_listing_layout() {
        let mut first = result(0, 2);
        first.names.push("Ahmet Yilmaz".into());
        let listing = format_listing(&[first, result(1, 1)]);
        assert_eq!(
            listing,
            "cv0.txt - 2 matches\n'rust' found 2 times.\nName: Ahmet Yilmaz\n\n\n\
             cv1.txt - 1 matches\n'rust' found 1 times.\n\n\n"
        );
    }

    #[test]
    fn test_report_rows_one_per_present_keyword() {
        let matcher = KeywordMatcher::new(&["java", "sql", "rust"]).unwrap();
        let names = NameList::new(["zeynep"]);
        let documents = vec![
            Document::new(0, "zeynep.txt", "Zeynep\nKaya\nJava, SQL, sql"),
            Document::new(1, "empty.pdf", ""),
            Document::new(2, "other.txt", "Python only"),
            Document::new(3, "anon.txt", "rust and java"),
        ];

        let rows = build_report_rows(&documents, &matcher, &names);
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            ReportRow {
                name: "Zeynep Kaya".into(),
                keyword: "java".into(),
                document_display_name: "zeynep.txt".into(),
            }
        );
        assert_eq!(rows[1].keyword, "sql");
        assert_eq!(rows[2].name, "");
        assert_eq!(rows[2].keyword, "java");
        assert_eq!(rows[3].keyword, "rust");
        assert_eq!(rows[3].document_display_name, "anon.txt");
    }

    #[test]
    fn test_report_uses_first_name_only() {
        let matcher = KeywordMatcher::new(&["go"]).unwrap();
        let names = NameList::new(["ali", "veli"]);
        let documents = vec![Document::new(0, "cv.txt", "Veli Demir\nphone 123\nAli\nKaya\ngo")];

        let rows = build_report_rows(&documents, &matcher, &names);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Veli Demir");
    }
}
