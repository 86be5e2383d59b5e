//! 外部環境とのインターフェース
//!
//! ブラウザのURL・クリップボード・検索APIを注入可能なトレイトにして、
//! オーケストレータをブラウザ無しでテストできるようにする。
//! ストレージは `storage::KeyValueStore`。

use crate::cancel::CancellationToken;
use crate::error::Result;
use crate::soda::ParkQuery;
use crate::types::{FilterState, ParkRecord};
use crate::url_state;
use async_trait::async_trait;
use std::cell::{Cell, RefCell};

/// 現在のURLのクエリ部分
pub trait UrlStateStore {
    /// `location.search` 相当（先頭 `?` 付きでも可）
    fn search(&self) -> String;

    /// 履歴を増やさずにクエリを書き換える（`?` なしで渡す）
    fn replace_search(&self, query: &str) -> Result<()>;

    /// 現在の完全なURL
    fn href(&self) -> String;
}

/// クリップボード（書き込みのみ）
#[async_trait(?Send)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// 公園データの取得元
#[async_trait(?Send)]
pub trait ParkSource {
    /// 1回のリクエストで正規化済みレコードを返す（区はコードのまま）
    ///
    /// トークンがキャンセルされたら `Error::Cancelled`。
    async fn fetch_parks(
        &self,
        query: &ParkQuery,
        token: &CancellationToken,
    ) -> Result<Vec<ParkRecord>>;
}

/// メモリ上のURL（CLI・テスト用）
#[derive(Debug, Default)]
pub struct MemoryUrl {
    base: String,
    search: RefCell<String>,
    replace_count: Cell<usize>,
}

impl MemoryUrl {
    /// `base` に付いているクエリ・フラグメントは捨てる
    pub fn new(base: impl Into<String>, search: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: url_state::strip_query(&base).to_string(),
            search: RefCell::new(search.into()),
            replace_count: Cell::new(0),
        }
    }

    /// 書き換え回数
    pub fn replace_count(&self) -> usize {
        self.replace_count.get()
    }
}

impl UrlStateStore for MemoryUrl {
    fn search(&self) -> String {
        self.search.borrow().clone()
    }

    fn replace_search(&self, query: &str) -> Result<()> {
        *self.search.borrow_mut() = format!("?{}", query);
        self.replace_count.set(self.replace_count.get() + 1);
        Ok(())
    }

    fn href(&self) -> String {
        format!("{}{}", self.base, self.search.borrow())
    }
}
