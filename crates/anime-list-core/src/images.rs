use std::path::PathBuf;

use anyhow::{anyhow, Result};

use anime_list_config::PathManager;

/// Reduce a title to its filesystem-safe key: everything that is not
/// alphanumeric, `_`, or whitespace is removed. "Steins;Gate 0" and
/// "SteinsGate 0" therefore share a key.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Per-title image cache the viewer reads from: JPEGs under the anime
/// images directory, keyed by sanitized title. Lookup fails when the file
/// is absent; there is no download fallback here.
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(paths: &PathManager) -> Self {
        Self {
            dir: paths.anime_images_dir(),
        }
    }

    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(format!("{}.jpg", sanitize_title(title)))
    }

    pub fn lookup(&self, title: &str) -> Result<PathBuf> {
        let path = self.path_for(title);
        if !path.exists() {
            return Err(anyhow!(
                "no image found for title '{}' (expected {})",
                title,
                path.display()
            ));
        }
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_punctuation_only() {
        assert_eq!(sanitize_title("Steins;Gate 0"), "SteinsGate 0");
        assert_eq!(sanitize_title("Re:Zero"), "ReZero");
        assert_eq!(sanitize_title("K-On!"), "KOn");
        assert_eq!(sanitize_title("86"), "86");
        assert_eq!(sanitize_title("plain_title"), "plain_title");
    }

    #[test]
    fn lookup_finds_image_by_sanitized_key() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = PathManager::new(tmp.path());
        paths.ensure_directories().unwrap();
        let store = ImageStore::new(&paths);

        std::fs::write(paths.anime_images_dir().join("SteinsGate 0.jpg"), b"jpeg").unwrap();

        let path = store.lookup("Steins;Gate 0").unwrap();
        assert!(path.ends_with("SteinsGate 0.jpg"));
    }

    #[test]
    fn lookup_fails_when_image_is_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = PathManager::new(tmp.path());
        let store = ImageStore::new(&paths);
        let err = store.lookup("Frieren").unwrap_err();
        assert!(err.to_string().contains("no image found"));
    }
}
