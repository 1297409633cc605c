use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything learned about a profile over the course of one collect run.
///
/// Created once per run and filled in as each stage succeeds; the `message`
/// field is an informal status signal ("collected 647 entries", "retry
/// budget exhausted", ...) rather than a structured error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_name: Option<String>,
    /// HTTP status observed on the profile page fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

impl ProfileMetadata {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            profile_name: None,
            status_code: None,
            picture_url: None,
            list_url: None,
            message: None,
            fetched_at: Utc::now(),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_metadata_records_only_the_url() {
        let meta = ProfileMetadata::new("https://myanimelist.net/profile/Rawwhite");
        assert_eq!(meta.source_url, "https://myanimelist.net/profile/Rawwhite");
        assert!(meta.profile_name.is_none());
        assert!(meta.status_code.is_none());
        assert!(meta.message.is_none());
    }

    #[test]
    fn message_overwrites_previous_value() {
        let mut meta = ProfileMetadata::new("https://example.com/profile/a");
        meta.set_message("first");
        meta.set_message("second");
        assert_eq!(meta.message.as_deref(), Some("second"));
    }
}
