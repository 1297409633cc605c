use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, info};

use anime_list_config::PathManager;
use anime_list_models::ListSnapshot;

/// Persists one snapshot file per profile under the list data directory.
pub struct SnapshotStore {
    data_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(paths: &PathManager) -> Self {
        Self {
            data_dir: paths.list_data_dir(),
        }
    }

    pub fn snapshot_file(&self, profile_name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", profile_name))
    }

    pub fn exists(&self, profile_name: &str) -> bool {
        self.snapshot_file(profile_name).exists()
    }

    /// Write the snapshot as a 4-space-indented JSON array. An empty
    /// snapshot leaves no file artifact behind (distinct from writing an
    /// empty array) and returns `None`.
    pub fn save(&self, profile_name: &str, snapshot: &ListSnapshot) -> Result<Option<PathBuf>> {
        if snapshot.is_empty() {
            debug!(profile = profile_name, "No entries collected, skipping snapshot write");
            return Ok(None);
        }

        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("failed to create {}", self.data_dir.display()))?;

        let path = self.snapshot_file(profile_name);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        snapshot
            .serialize(&mut serializer)
            .context("failed to serialize snapshot")?;
        std::fs::write(&path, &buf)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;

        info!(profile = profile_name, entries = snapshot.len(), path = %path.display(), "Saved list snapshot");
        Ok(Some(path))
    }

    /// Read a snapshot back. A missing file is a hard failure; the viewer
    /// has no recovery path.
    pub fn load(&self, profile_name: &str) -> Result<ListSnapshot> {
        let path = self.snapshot_file(profile_name);
        if !path.exists() {
            return Err(anyhow!(
                "no list data found for profile '{}' (expected {}); run collect first",
                profile_name,
                path.display()
            ));
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let snapshot: ListSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anime_list_models::ListEntry;

    fn store() -> (tempfile::TempDir, SnapshotStore) {
        let tmp = tempfile::tempdir().unwrap();
        let paths = PathManager::new(tmp.path());
        let store = SnapshotStore::new(&paths);
        (tmp, store)
    }

    fn sample_snapshot() -> ListSnapshot {
        let mut snapshot = ListSnapshot::new();
        snapshot.extend_page(vec![
            ListEntry {
                status: Some(2),
                score: Some(9),
                anime_title: Some("Steins;Gate".to_string()),
                anime_id: Some(9253),
                ..ListEntry::default()
            },
            ListEntry {
                anime_title: Some("Frieren".to_string()),
                genres: Some(vec!["Adventure".to_string(), "Fantasy".to_string()]),
                ..ListEntry::default()
            },
            // An item that carried none of the recognized fields
            ListEntry::default(),
        ]);
        snapshot
    }

    #[test]
    fn round_trip_reproduces_field_subsets_verbatim() {
        let (_tmp, store) = store();
        let snapshot = sample_snapshot();

        let path = store.save("Rawwhite", &snapshot).unwrap().unwrap();
        assert!(path.ends_with("Rawwhite.json"));

        let loaded = store.load("Rawwhite").unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn snapshot_is_written_with_four_space_indent() {
        let (_tmp, store) = store();
        let path = store.save("Rawwhite", &sample_snapshot()).unwrap().unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("[\n    {"));
        assert!(content.contains("\n        \"status\": 2"));
    }

    #[test]
    fn empty_snapshot_leaves_no_file() {
        let (_tmp, store) = store();
        let result = store.save("Rawwhite", &ListSnapshot::new()).unwrap();
        assert!(result.is_none());
        assert!(!store.exists("Rawwhite"));
    }

    #[test]
    fn loading_a_missing_snapshot_is_a_hard_failure() {
        let (_tmp, store) = store();
        let err = store.load("Nobody").unwrap_err();
        assert!(err.to_string().contains("no list data found"));
    }
}
