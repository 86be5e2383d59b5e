use crate::error::{FinderError, Result};
use nyc_finder_common::{DATASET_URL, DEFAULT_DEBOUNCE_MS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データセットURLを上書きする環境変数
pub const DATASET_URL_ENV: &str = "NYC_FINDER_DATASET_URL";

const DEFAULT_SHARE_BASE_URL: &str = "https://nyc-finder.app/";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset_url: String,
    /// 共有リンクのベースURL（Web版の公開URL）
    pub share_base_url: String,
    pub debounce_ms: u64,
    /// 保存リストの置き場所（省略時はOSのデータディレクトリ）
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_url: DATASET_URL.into(),
            share_base_url: DEFAULT_SHARE_BASE_URL.into(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;

        // 環境変数を優先
        if let Ok(url) = std::env::var(DATASET_URL_ENV) {
            if !url.trim().is_empty() {
                config.dataset_url = url.trim().to_string();
            }
        }

        Ok(config)
    }

    /// 指定パスから読み込み。ファイルが無ければ既定値
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FinderError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("nyc-finder").join("config.json"))
    }

    /// 保存リストのディレクトリ
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| FinderError::Config("data directory not found".into()))?;
        Ok(base.join("nyc-finder"))
    }

    pub fn set_share_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(FinderError::Config(format!("not an http(s) URL: {}", url)));
        }
        self.share_base_url = url;
        self.save()
    }
}
