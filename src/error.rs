use thiserror::Error;

#[derive(Error, Debug)]
pub enum CvHunterError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("名リストが指定されていません。`cv-hunter config --set-names-path FILE` または --names で指定してください")]
    MissingNameList,

    #[error("名リストの読み込みに失敗: {0}")]
    NameListLoad(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("CVが見つかりません: {0}")]
    NoDocumentsFound(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] cv_hunter_common::Error),
}

impl CvHunterError {
    /// 警告扱いの前提条件エラーか（キーワード重複・未登録）
    pub fn is_warning(&self) -> bool {
        matches!(self, CvHunterError::Common(e) if e.is_precondition())
    }
}

pub type Result<T> = std::result::Result<T, CvHunterError>;
