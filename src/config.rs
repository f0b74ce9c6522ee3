use crate::error::{CvHunterError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 名リストのパスを指定する環境変数
pub const NAMES_ENV_VAR: &str = "CV_HUNTER_NAMES";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 名リスト（1行1名のUTF-8テキスト）
    pub names_path: Option<PathBuf>,
    /// レポートのファイル名（拡張子・日時は自動付与）
    pub report_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CvHunterError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("cv-hunter").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            names_path: None,
            report_title: "cv-report".into(),
        }
    }

    /// 名リストのパスを解決（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_names_path(&self, arg: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = arg {
            return Ok(path.to_path_buf());
        }

        if let Ok(path) = std::env::var(NAMES_ENV_VAR) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        self.names_path.clone().ok_or(CvHunterError::MissingNameList)
    }

    pub fn set_names_path(&mut self, path: PathBuf) -> Result<()> {
        self.names_path = Some(path);
        self.save()
    }

    pub fn set_report_title(&mut self, title: String) -> Result<()> {
        self.report_title = title;
        self.save()
    }
}
