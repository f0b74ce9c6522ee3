//! CV Keyword Hunter Common Library
//!
//! CLIと対話シェルで共有されるマッチングコア

pub mod types;
pub mod error;
pub mod normalizer;
pub mod keyword;
pub mod names;
pub mod scorer;
pub mod report;
pub mod session;
pub mod export;

pub use types::{Document, KeywordHit, KeywordSet, MatchResult, ReportRow, REPORT_COLUMNS};
pub use error::{Error, Result};
pub use normalizer::{normalize, title_case};
pub use keyword::KeywordMatcher;
pub use names::NameList;
pub use scorer::score_document;
pub use report::{build_report_rows, format_listing, rank, NOT_FOUND};
pub use session::Session;
