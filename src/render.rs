//! ターミナル表示

use nyc_finder_common::{
    map_search_url, ParkRecord, ResultState, SavedSet, EMPTY_RESULTS_MESSAGE, EMPTY_SAVED_MESSAGE,
};

/// 1件分（番号付き）
pub fn format_park(index: usize, park: &ParkRecord, saved: bool) -> String {
    let marker = if saved { "★" } else { " " };
    format!(
        "{:>3}. {} {}\n       {} · {}\n       {}",
        index + 1,
        marker,
        park.name,
        park.borough,
        park.address,
        map_search_url(&park.map_query),
    )
}

/// 結果エリア
pub fn format_results(state: &ResultState, saved: &SavedSet) -> String {
    match state {
        ResultState::Loading => "Loading…".to_string(),
        ResultState::Error(message) => message.clone(),
        ResultState::Empty => EMPTY_RESULTS_MESSAGE.to_string(),
        ResultState::Populated(records) => {
            let mut lines = vec![format!("Results: {} spots", records.len())];
            lines.extend(
                records
                    .iter()
                    .enumerate()
                    .map(|(i, park)| format_park(i, park, saved.contains(&park.id))),
            );
            lines.join("\n")
        }
    }
}

/// 保存パネル
pub fn format_saved(saved: &SavedSet) -> String {
    if saved.is_empty() {
        return format!("Saved (0)\n{}", EMPTY_SAVED_MESSAGE);
    }

    let mut lines = vec![format!("Saved ({})", saved.len())];
    for park in saved.items() {
        lines.push(format!("  [{}] {} · {} · {}", park.id, park.name, park.borough, park.address));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn park(id: &str) -> ParkRecord {
        ParkRecord {
            id: id.to_string(),
            name: "Prospect Park".to_string(),
            borough: "Brooklyn".to_string(),
            address: "Flatbush Ave".to_string(),
            map_query: "Prospect Park, Flatbush Ave, Brooklyn, NYC".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_format_results_states() {
        let saved = SavedSet::new();
        assert_eq!(format_results(&ResultState::Empty, &saved), EMPTY_RESULTS_MESSAGE);
        assert_eq!(
            format_results(&ResultState::Error("boom".into()), &saved),
            "boom"
        );

        let text = format_results(&ResultState::Populated(vec![park("1")]), &saved);
        assert!(text.starts_with("Results: 1 spots"));
        assert!(text.contains("Prospect Park"));
        assert!(text.contains("google.com/maps/search"));
    }

    #[test]
    fn test_saved_marker() {
        let saved = SavedSet::from(vec![park("1")]);
        assert!(format_park(0, &park("1"), saved.contains("1")).contains('★'));
        assert!(format_saved(&saved).contains("[1] Prospect Park"));
        assert!(format_saved(&SavedSet::new()).contains(EMPTY_SAVED_MESSAGE));
    }
}
