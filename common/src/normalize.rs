//! レスポンス正規化
//!
//! データセットの行はフィールドの欠落や型の揺れがあるため、
//! ここで ParkRecord の統一形式に揃える。

use crate::error::Result;
use crate::image::pick_image;
use crate::types::{Borough, ParkRecord, ADDRESS_UNAVAILABLE, UNKNOWN_BOROUGH, UNNAMED_PARK};
use serde_json::Value;
use url::form_urlencoded;

/// 地図検索クエリの末尾
const MAP_LOCALE_SUFFIX: &str = "NYC";

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// 文字列フィールドのみ採用（前後空白除去）。それ以外の型は空文字
pub fn field_value(row: &Value, key: &str) -> String {
    match row.get(key) {
        Some(Value::String(s)) => s.trim().to_string(),
        _ => String::new(),
    }
}

fn first_non_empty(candidates: [String; 2], fallback: &str) -> String {
    candidates
        .into_iter()
        .find(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

/// 空でない要素だけを ", " で連結
pub fn build_map_query(name: &str, address: &str, borough: &str) -> String {
    [name, address, borough, MAP_LOCALE_SUFFIX]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Google Maps 検索リンク
pub fn map_search_url(map_query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(map_query.as_bytes()).collect();
    format!("{}{}", MAPS_SEARCH_URL, encoded)
}

/// 1行を正規化（区はコードのまま）
///
/// `index` はレスポンス内の位置。`objectid` が無い場合のID生成に使う。
pub fn normalize_row(row: &Value, index: usize) -> ParkRecord {
    let name = first_non_empty(
        [field_value(row, "signname"), field_value(row, "name311")],
        UNNAMED_PARK,
    );
    let address = first_non_empty(
        [field_value(row, "address"), field_value(row, "location")],
        ADDRESS_UNAVAILABLE,
    );
    let borough_code = field_value(row, "borough");

    let object_id = field_value(row, "objectid");
    let id = if object_id.is_empty() {
        // 位置ベースなので再取得で順序が変わるとIDも変わる
        format!("{}-{}", name, index)
    } else {
        object_id
    };

    let map_query = build_map_query(&name, &address, &borough_code);
    let borough = if borough_code.is_empty() {
        UNKNOWN_BOROUGH.to_string()
    } else {
        borough_code
    };

    ParkRecord {
        id,
        name,
        borough,
        address,
        map_query,
        image_url: None,
    }
}

/// レスポンス本文（JSON配列）をデコードして正規化
pub fn decode_response(body: &str) -> Result<Vec<ParkRecord>> {
    let rows: Vec<Value> = serde_json::from_str(body)?;
    Ok(normalize_rows(&rows))
}

pub fn normalize_rows(rows: &[Value]) -> Vec<ParkRecord> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| normalize_row(row, index))
        .collect()
}

/// 表示用に変換: 区コード→区名、地図クエリ再構築、画像割り当て
pub fn present(record: ParkRecord) -> ParkRecord {
    let borough = Borough::label_for_code(&record.borough);
    let map_query = build_map_query(&record.name, &record.address, borough);
    let image_url = pick_image(borough, &record.id).to_string();

    ParkRecord {
        borough: borough.to_string(),
        map_query,
        image_url: Some(image_url),
        ..record
    }
}
