use serde::{Deserialize, Serialize};

/// The field names recognized per list item, in serialization order.
///
/// Every other key returned by the list endpoint is dropped during
/// projection, and a key missing from the source item stays absent from the
/// entry instead of being defaulted.
pub const LIST_ENTRY_FIELDS: [&str; 13] = [
    "status",
    "score",
    "num_watched_episodes",
    "anime_title",
    "anime_title_eng",
    "anime_airing_status",
    "anime_id",
    "anime_score_val",
    "anime_popularity",
    "genres",
    "anime_image_path",
    "anime_start_date_string",
    "anime_end_date_string",
];

/// One row of a user's tracked-anime list, projected down to the recognized
/// field set. Deserializing a raw API item through this type IS the
/// projection: unknown keys are ignored and absent keys stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    /// List status code as assigned by the list owner (see [`crate::WatchStatus`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
    /// Score the list owner gave the entry (0 when unrated).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_watched_episodes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_title_eng: Option<String>,
    /// Airing status code (see [`crate::AiringStatus`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_airing_status: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_id: Option<u64>,
    /// Site-wide aggregate score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_score_val: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_popularity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_start_date_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anime_end_date_string: Option<String>,
}

impl ListEntry {
    /// Primary title, falling back to the English title when the primary is
    /// absent.
    pub fn display_title(&self) -> Option<&str> {
        self.anime_title
            .as_deref()
            .or(self.anime_title_eng.as_deref())
    }

    /// True when the source item carried none of the recognized fields.
    pub fn is_empty(&self) -> bool {
        *self == ListEntry::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_entry_json() -> serde_json::Value {
        json!({
            "status": 2,
            "score": 9,
            "num_watched_episodes": 24,
            "anime_title": "Steins;Gate",
            "anime_title_eng": "Steins;Gate",
            "anime_airing_status": 2,
            "anime_id": 9253,
            "anime_score_val": 9.07,
            "anime_popularity": 13,
            "genres": ["Drama", "Sci-Fi", "Suspense"],
            "anime_image_path": "https://cdn.myanimelist.net/images/anime/1935/127974.jpg",
            "anime_start_date_string": "04-06-11",
            "anime_end_date_string": "09-14-11"
        })
    }

    #[test]
    fn projection_keeps_recognized_fields() {
        let entry: ListEntry = serde_json::from_value(full_entry_json()).unwrap();
        assert_eq!(entry.status, Some(2));
        assert_eq!(entry.anime_id, Some(9253));
        assert_eq!(entry.anime_score_val, Some(9.07));
        assert_eq!(
            entry.genres.as_deref(),
            Some(&["Drama".to_string(), "Sci-Fi".to_string(), "Suspense".to_string()][..])
        );
    }

    #[test]
    fn projection_drops_unknown_keys() {
        let raw = json!({
            "status": 1,
            "anime_title": "Frieren",
            "anime_num_episodes": 28,
            "anime_studios": [{"id": 11, "name": "Madhouse"}],
            "tags": "rewatch"
        });
        let entry: ListEntry = serde_json::from_value(raw).unwrap();
        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back, json!({"status": 1, "anime_title": "Frieren"}));
    }

    #[test]
    fn absent_fields_are_omitted_not_defaulted() {
        let entry: ListEntry = serde_json::from_value(json!({"score": 7})).unwrap();
        let back = serde_json::to_value(&entry).unwrap();
        let obj = back.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("score"));
    }

    #[test]
    fn item_without_recognized_fields_becomes_empty_object() {
        let entry: ListEntry =
            serde_json::from_value(json!({"days_string": null, "storage_string": ""})).unwrap();
        assert!(entry.is_empty());
        assert_eq!(serde_json::to_value(&entry).unwrap(), json!({}));
    }

    #[test]
    fn serialized_keys_match_field_constant() {
        let entry: ListEntry = serde_json::from_value(full_entry_json()).unwrap();
        let back = serde_json::to_value(&entry).unwrap();
        let keys: Vec<&str> = back.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        let mut expected = LIST_ENTRY_FIELDS.to_vec();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn display_title_falls_back_to_english() {
        let entry: ListEntry =
            serde_json::from_value(json!({"anime_title_eng": "Attack on Titan"})).unwrap();
        assert_eq!(entry.display_title(), Some("Attack on Titan"));
    }
}
