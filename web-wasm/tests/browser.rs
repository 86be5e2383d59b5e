//! ブラウザ上のアダプタのテスト（wasm-pack test --headless --firefox）

use nyc_finder_common::{
    Finder, KeyValueStore, ParkRecord, UrlStateStore, DEFAULT_DEBOUNCE_MS, SAVED_STORAGE_KEY,
};
use nyc_finder_wasm::browser::{BrowserUrl, LocalStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn park(id: &str) -> ParkRecord {
    ParkRecord {
        id: id.to_string(),
        name: "Union Square Park".to_string(),
        borough: "M".to_string(),
        address: "E 14 St".to_string(),
        ..Default::default()
    }
}

#[wasm_bindgen_test]
fn test_local_store_round_trip() {
    let store = LocalStore;
    store.set_item("nyc-finder-test", "[1,2]").expect("保存失敗");
    assert_eq!(
        store.get_item("nyc-finder-test").expect("読込失敗").as_deref(),
        Some("[1,2]")
    );
    assert_eq!(store.get_item("nyc-finder-missing").expect("読込失敗"), None);
}

#[wasm_bindgen_test]
fn test_browser_url_replace_search() {
    let url = BrowserUrl;
    url.replace_search("q=lake&borough=B&sort=name").expect("URL更新失敗");
    assert_eq!(url.search(), "?q=lake&borough=B&sort=name");
    assert!(url.href().contains("?q=lake&borough=B&sort=name"));
}

#[wasm_bindgen_test]
fn test_finder_restores_url_and_saved() {
    BrowserUrl.replace_search("q=pool&borough=Q").expect("URL更新失敗");
    LocalStore
        .set_item(SAVED_STORAGE_KEY, &serde_json::to_string(&vec![park("1")]).expect("JSON化失敗"))
        .expect("保存失敗");

    let (mut finder, ticket) = Finder::start(LocalStore, BrowserUrl, DEFAULT_DEBOUNCE_MS);
    assert_eq!(ticket.query.search_text, "pool");
    assert!(finder.is_saved("1"));
    // 正規化した値でURLを書き戻す
    assert_eq!(BrowserUrl.search(), "?q=pool&borough=Q&sort=relevance");

    finder.toggle_save(park("2"));
    let raw = LocalStore.get_item(SAVED_STORAGE_KEY).expect("読込失敗").expect("未保存");
    assert!(raw.starts_with(r#"[{"id":"2""#));
    finder.shutdown();
}
