//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 新しいリクエストに置き換えられた（エラーではない）
    #[error("Request cancelled")]
    Cancelled,

    #[error("Request failed with {0}")]
    RequestFailed(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Clipboard denied: {0}")]
    ClipboardDenied(String),

    #[error("History update failed: {0}")]
    History(String),
}

impl Error {
    /// キャンセルかどうか（呼び出し側は何もせず破棄する）
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
