//! ブラウザのストレージ・URL・クリップボード

use async_trait::async_trait;
use nyc_finder_common::{ClipboardWriter, Error, KeyValueStore, Result, UrlStateStore};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// `window.localStorage`
///
/// プライベートモード等で使えない場合は `StorageUnavailable`。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| Error::StorageUnavailable("localStorage is not available".into()))
    }
}

impl KeyValueStore for LocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| Error::StorageUnavailable(describe(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| Error::StorageUnavailable(describe(e)))
    }
}

/// `window.location` と `history.replaceState`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserUrl;

impl UrlStateStore for BrowserUrl {
    fn search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }

    fn replace_search(&self, query: &str) -> Result<()> {
        let window = web_sys::window().ok_or_else(|| Error::History("no window".into()))?;
        let location = window.location();
        let path = location.pathname().map_err(|e| Error::History(describe(e)))?;
        let hash = location.hash().unwrap_or_default();

        let url = if query.is_empty() {
            format!("{}{}", path, hash)
        } else {
            format!("{}?{}{}", path, query, hash)
        };

        window
            .history()
            .and_then(|h| h.replace_state_with_url(&JsValue::NULL, "", Some(&url)))
            .map_err(|e| Error::History(describe(e)))
    }

    fn href(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }
}

/// `navigator.clipboard.writeText`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClipboard;

#[async_trait(?Send)]
impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let window = web_sys::window()
            .ok_or_else(|| Error::ClipboardDenied("no window".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| Error::ClipboardDenied(describe(e)))
    }
}
