use serde::{Deserialize, Serialize};

use crate::entry::ListEntry;

/// The ordered sequence of entries produced by one full pagination run for
/// one profile. Entries appear in API page order (offset ascending) and no
/// de-duplication is performed, so overlapping upstream pages propagate
/// as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListSnapshot {
    pub entries: Vec<ListEntry>,
}

impl ListSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append one page of projected entries, preserving page order.
    pub fn extend_page(&mut self, page: Vec<ListEntry>) {
        self.entries.extend(page);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ListEntry> {
        self.entries.iter()
    }
}

impl IntoIterator for ListSnapshot {
    type Item = ListEntry;
    type IntoIter = std::vec::IntoIter<ListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_bare_array() {
        let mut snapshot = ListSnapshot::new();
        snapshot.extend_page(vec![ListEntry {
            anime_id: Some(1),
            ..ListEntry::default()
        }]);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value, json!([{"anime_id": 1}]));
    }

    #[test]
    fn page_order_is_preserved() {
        let mut snapshot = ListSnapshot::new();
        for id in [3u64, 1, 2] {
            snapshot.extend_page(vec![ListEntry {
                anime_id: Some(id),
                ..ListEntry::default()
            }]);
        }
        let ids: Vec<u64> = snapshot.iter().filter_map(|e| e.anime_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
