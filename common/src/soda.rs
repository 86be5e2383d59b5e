//! Socrata (SODA) クエリ構築
//!
//! NYC Open Data の Parks Properties データセットに対する
//! 1回分の検索リクエストを組み立てる。`$limit` は固定。

use crate::types::{BoroughFilter, SortOption};
use url::form_urlencoded;

/// Parks Properties データセット
pub const DATASET_URL: &str = "https://data.cityofnewyork.us/resource/enfh-gkve.json";

/// 取得するフィールド
pub const SELECT_FIELDS: &str = "objectid,signname,name311,borough,address,location";

/// 1回の検索で取得する最大件数
pub const RESULT_LIMIT: u32 = 50;

/// 1回分の検索条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParkQuery {
    pub search_text: String,
    pub borough: BoroughFilter,
    pub sort: SortOption,
}

impl ParkQuery {
    pub fn new(search_text: impl Into<String>, borough: BoroughFilter, sort: SortOption) -> Self {
        Self {
            search_text: search_text.into(),
            borough,
            sort,
        }
    }

    /// SoQL パラメータ（順序固定）
    ///
    /// # Examples
    /// ```
    /// use nyc_finder_common::{ParkQuery, BoroughFilter, SortOption};
    ///
    /// let query = ParkQuery::new("  prospect ", BoroughFilter::All, SortOption::Relevance);
    /// let params = query.params();
    /// assert!(params.contains(&("$q", "prospect".to_string())));
    /// assert!(params.iter().all(|(k, _)| *k != "$where" && *k != "$order"));
    /// ```
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("$select", SELECT_FIELDS.to_string()),
            ("$limit", RESULT_LIMIT.to_string()),
        ];

        let trimmed = self.search_text.trim();
        if !trimmed.is_empty() {
            params.push(("$q", trimmed.to_string()));
        }

        if let BoroughFilter::Only(borough) = self.borough {
            params.push(("$where", format!("borough='{}'", borough.code())));
        }

        if self.sort == SortOption::Name {
            params.push(("$order", "signname ASC".to_string()));
        }

        params
    }

    /// form-urlencoded のクエリ文字列
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.params() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }

    /// エンドポイントURLにクエリを付与
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.query_string())
    }
}
