//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("This keyword has already been added: {0}")]
    DuplicateKeyword(String),

    #[error("Keyword must not be empty")]
    EmptyKeyword,

    #[error("Please add at least one keyword")]
    NoKeywords,
}

impl Error {
    /// 前提条件エラー（警告として扱い、状態は変更されない）か
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::DuplicateKeyword(_) | Error::EmptyKeyword | Error::NoKeywords
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
