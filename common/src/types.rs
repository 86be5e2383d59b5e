//! 検索結果・フィルタの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ParkRecord: 正規化済みの公園レコード
//! - Borough / BoroughFilter / SortOption: 検索条件
//! - FilterState: URLと同期されるフィルタ状態

use serde::{Deserialize, Serialize};

/// 名称が空のときの表示
pub const UNNAMED_PARK: &str = "Unnamed park";
/// 住所が空のときの表示
pub const ADDRESS_UNAVAILABLE: &str = "Address unavailable";
/// 区が空・不明のときの表示
pub const UNKNOWN_BOROUGH: &str = "Unknown borough";

/// ニューヨーク市の5区
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    StatenIsland,
}

impl Borough {
    /// 選択肢の表示順
    pub const ALL: [Borough; 5] = [
        Borough::Manhattan,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::Bronx,
        Borough::StatenIsland,
    ];

    /// データセット上の区コード
    pub fn code(&self) -> &'static str {
        match self {
            Borough::Manhattan => "M",
            Borough::Brooklyn => "B",
            Borough::Queens => "Q",
            Borough::Bronx => "X",
            Borough::StatenIsland => "R",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::Bronx => "Bronx",
            Borough::StatenIsland => "Staten Island",
        }
    }

    /// 区コードから変換（完全一致のみ）
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.code() == code)
    }

    /// 区コードを表示名に変換。未知のコードは UNKNOWN_BOROUGH
    pub fn label_for_code(code: &str) -> &'static str {
        Self::from_code(code.trim())
            .map(|b| b.label())
            .unwrap_or(UNKNOWN_BOROUGH)
    }
}

/// 区フィルタ（"all" または区コード）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoroughFilter {
    #[default]
    All,
    Only(Borough),
}

impl BoroughFilter {
    /// URL・セレクトボックスで使う値
    pub fn as_param(&self) -> &'static str {
        match self {
            BoroughFilter::All => "all",
            BoroughFilter::Only(b) => b.code(),
        }
    }

    /// 不正な値は All にフォールバック
    pub fn parse(value: &str) -> Self {
        Borough::from_code(value)
            .map(BoroughFilter::Only)
            .unwrap_or(BoroughFilter::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoroughFilter::All => "All boroughs",
            BoroughFilter::Only(b) => b.label(),
        }
    }
}

/// 並び順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOption {
    #[default]
    Relevance,
    Name,
}

impl SortOption {
    pub const ALL: [SortOption; 2] = [SortOption::Relevance, SortOption::Name];

    pub fn as_param(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::Name => "name",
        }
    }

    /// "name" 以外はすべて Relevance
    pub fn parse(value: &str) -> Self {
        if value == "name" {
            SortOption::Name
        } else {
            SortOption::Relevance
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::Name => "Name A–Z",
        }
    }
}

/// 検索フィルタ状態（URLクエリと同期）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_text: String,
    pub borough: BoroughFilter,
    pub sort: SortOption,
}

/// 正規化済みの公園レコード
///
/// 保存リストにそのままJSONで永続化される。
/// `image_url` は表示用の派生値で、同一性の判定には使わない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkRecord {
    pub id: String,
    pub name: String,
    pub borough: String,
    pub address: String,
    #[serde(default)]
    pub map_query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
