//! 保存済み（お気に入り）リスト
//!
//! 新しく保存したものが先頭。ID集合は派生値で永続化しない。

use crate::types::ParkRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 保存リストのストレージキー
pub const SAVED_STORAGE_KEY: &str = "nyc-finder-saved";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<ParkRecord>", into = "Vec<ParkRecord>")]
pub struct SavedSet {
    items: Vec<ParkRecord>,
    ids: HashSet<String>,
}

impl SavedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ParkRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// 未保存なら先頭に追加、保存済みなら同じIDをすべて削除。
    /// 追加したら `true`
    pub fn toggle(&mut self, park: ParkRecord) -> bool {
        if self.contains(&park.id) {
            self.remove(&park.id);
            false
        } else {
            self.ids.insert(park.id.clone());
            self.items.insert(0, park);
            true
        }
    }

    /// IDが一致するものをすべて削除。削除件数を返す
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.ids.remove(id);
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.ids.clear();
    }
}

impl From<Vec<ParkRecord>> for SavedSet {
    fn from(items: Vec<ParkRecord>) -> Self {
        let ids = items.iter().map(|p| p.id.clone()).collect();
        Self { items, ids }
    }
}

impl From<SavedSet> for Vec<ParkRecord> {
    fn from(saved: SavedSet) -> Self {
        saved.items
    }
}

impl PartialEq for SavedSet {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park(id: &str) -> ParkRecord {
        ParkRecord {
            id: id.to_string(),
            name: format!("Park {}", id),
            borough: "Queens".to_string(),
            address: "Somewhere".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_prepends() {
        let mut saved = SavedSet::new();
        assert!(saved.toggle(park("1")));
        assert!(saved.toggle(park("2")));

        let ids: Vec<&str> = saved.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert!(saved.contains("1"));
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut saved = SavedSet::from(vec![park("a"), park("b"), park("c")]);
        let original = saved.clone();

        saved.toggle(park("z"));
        saved.toggle(park("z"));
        assert_eq!(saved, original);

        saved.toggle(park("b"));
        assert!(!saved.contains("b"));
        saved.toggle(park("b"));
        let ids: Vec<&str> = saved.items().iter().map(|p| p.id.as_str()).collect();
        // 再保存は先頭に入る
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_remove_all_matching_ids() {
        // 壊れたストレージ由来で重複が入っていても全件消える
        let mut saved = SavedSet::from(vec![park("x"), park("y"), park("x")]);
        assert_eq!(saved.remove("x"), 2);
        assert_eq!(saved.len(), 1);
        assert!(!saved.contains("x"));
        assert_eq!(saved.remove("missing"), 0);
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let saved = SavedSet::from(vec![park("1")]);
        let json = serde_json::to_string(&saved).expect("シリアライズ失敗");
        assert!(json.starts_with('['));

        let restored: SavedSet = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(restored, saved);
        assert!(restored.contains("1"));
    }

    #[test]
    fn test_clear() {
        let mut saved = SavedSet::from(vec![park("1"), park("2")]);
        saved.clear();
        assert!(saved.is_empty());
        assert!(!saved.contains("1"));
    }
}
