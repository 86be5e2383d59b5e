//! URLクエリとフィルタ状態の相互変換
//!
//! `q`（検索語）、`borough`（区コード or `all`）、`sort`（`relevance` / `name`）。
//! 不正な値は既定値に戻す。

use crate::types::{BoroughFilter, FilterState, SortOption};
use url::form_urlencoded;

pub const PARAM_SEARCH: &str = "q";
pub const PARAM_BOROUGH: &str = "borough";
pub const PARAM_SORT: &str = "sort";

/// `location.search` 形式（先頭 `?` は任意）からフィルタを復元
pub fn parse_query(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut search: Option<String> = None;
    let mut borough: Option<String> = None;
    let mut sort: Option<String> = None;

    // 同じキーが複数ある場合は最初の値を使う
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match key.as_ref() {
            PARAM_SEARCH => &mut search,
            PARAM_BOROUGH => &mut borough,
            PARAM_SORT => &mut sort,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    FilterState {
        search_text: search.unwrap_or_default(),
        borough: borough
            .as_deref()
            .map(BoroughFilter::parse)
            .unwrap_or_default(),
        sort: sort.as_deref().map(SortOption::parse).unwrap_or_default(),
    }
}

/// フィルタをクエリ文字列に（`?` なし、順序固定）
pub fn to_query(filters: &FilterState) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(PARAM_SEARCH, &filters.search_text)
        .append_pair(PARAM_BOROUGH, filters.borough.as_param())
        .append_pair(PARAM_SORT, filters.sort.as_param())
        .finish()
}

/// クエリとフラグメントを除いたURL
pub fn strip_query(url: &str) -> &str {
    url.split(&['?', '#'][..]).next().unwrap_or(url)
}

/// 共有用の完全なURL
pub fn share_url(base: &str, filters: &FilterState) -> String {
    format!("{}?{}", strip_query(base), to_query(filters))
}
