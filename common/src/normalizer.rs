//! テキスト正規化
//!
//! キーワード・氏名・本文の比較はすべてこの正規形で行う。
//!
//! ## 処理フロー
//! 1. NFD（正準分解）
//! 2. 非スペーシング結合文字（Mn、アクセント記号）の除去
//! 3. 小文字化（ロケール非依存）

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// 除去対象の結合文字か（Mc/Me は残す）
fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

/// 正規化する
///
/// 句読点・数字・空白はそのまま残る。
pub fn normalize(text: &str) -> String {
    let stripped: String = text.nfd().filter(|c| !is_nonspacing_mark(*c)).collect();
    stripped.to_lowercase()
}

/// 空白区切りの各単語を先頭大文字・残り小文字にする
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 先頭はタイトルケース写像（ǆ→ǅ, ß→Ss）、残りは小文字
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = to_titlecase(first);
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

fn to_titlecase(c: char) -> String {
    let mapped: String = unicode_case_mapping::to_titlecase(c)
        .iter()
        .filter(|&&code| code != 0)
        .filter_map(|&code| char::from_u32(code))
        .collect();
    if mapped.is_empty() {
        // 写像なし
        c.to_string()
    } else {
        mapped
    }
}
