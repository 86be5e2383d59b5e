//! 永続化ヘルパー
//!
//! 状態をキー付きのストレージ枠に結びつける。
//! - 読み込み: 値が無い・壊れている場合は既定値（エラーにしない）
//! - 書き込み: 変更のたびにJSONで保存。失敗は握りつぶしてメモリ上の値を正とする

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// 文字列のキーバリューストア（ブラウザの localStorage 相当）
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア（テスト・一時セッション用）
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 初期値入りで作成
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// 書き込みを失敗させる（容量超過のシミュレーション）
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            return Err(Error::StorageUnavailable("quota exceeded".into()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// ストア枠に結びついた値
#[derive(Debug, Clone)]
pub struct Persisted<T> {
    key: String,
    value: T,
}

impl<T: Serialize + DeserializeOwned> Persisted<T> {
    /// 読み込み。失敗時は `default`
    pub fn load<S: KeyValueStore + ?Sized>(store: &S, key: &str, default: T) -> Self {
        let value = match store.get_item(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("stored value for {key} is unreadable, using default: {e}");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                log::warn!("storage read failed for {key}: {e}");
                default
            }
        };

        Self {
            key: key.to_string(),
            value,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// その場で変更して保存
    pub fn update<S, F>(&mut self, store: &S, f: F)
    where
        S: KeyValueStore + ?Sized,
        F: FnOnce(&mut T),
    {
        f(&mut self.value);
        self.write(store);
    }

    fn write<S: KeyValueStore + ?Sized>(&self, store: &S) {
        let result = serde_json::to_string(&self.value)
            .map_err(Error::from)
            .and_then(|json| store.set_item(&self.key, &json));

        // 保存失敗は無視（メモリ上の値がセッション中は正）
        if let Err(e) = result {
            log::warn!("storage write failed for {}: {e}", self.key);
        }
    }
}
