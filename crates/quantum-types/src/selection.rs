use serde::{Deserialize, Serialize};

/// Whether a combobox keeps one value or many.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Multiple,
}

/// Value list after picking `value`.
///
/// Single mode replaces the selection; multiple mode toggles `value` in or out
/// and keeps the existing order.
pub fn apply_selection(current: &[String], value: &str, mode: SelectionMode) -> Vec<String> {
    match mode {
        SelectionMode::Single => vec![value.to_string()],
        SelectionMode::Multiple => toggle_value(current, value),
    }
}

pub fn toggle_value(current: &[String], value: &str) -> Vec<String> {
    if current.iter().any(|item| item == value) {
        current.iter().filter(|item| *item != value).cloned().collect()
    } else {
        let mut next = current.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Whether an item whose searchable texts are `texts` survives `query`.
///
/// The texts are joined with commas before a case-insensitive substring test.
pub fn matches_search(texts: &[String], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    texts
        .join(",")
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Union of `existing` and `incoming` without duplicates, first occurrence wins.
pub fn merge_texts(existing: &[String], incoming: &[String]) -> Vec<String> {
    let mut merged = existing.to_vec();
    for text in incoming {
        if !merged.contains(text) {
            merged.push(text.clone());
        }
    }
    merged
}
