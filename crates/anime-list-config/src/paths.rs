use std::path::{Path, PathBuf};

use anyhow::Result;

/// Get the storage base path from the environment, defaulting to the
/// current directory so collected data lands next to where the tool runs.
pub fn storage_base_path() -> PathBuf {
    std::env::var("ANIMELISTER_BASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolves every on-disk location the collector and viewer touch.
///
/// The layout under the base directory is fixed: list snapshots under
/// `Anime List Data/`, profile pictures under `Images/Profile Images/`, and
/// the viewer's per-title image cache under `Images/Anime Images/`.
#[derive(Debug, Clone)]
pub struct PathManager {
    base_dir: PathBuf,
}

impl PathManager {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn list_data_dir(&self) -> PathBuf {
        self.base_dir.join("Anime List Data")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.base_dir.join("Images")
    }

    pub fn profile_images_dir(&self) -> PathBuf {
        self.images_dir().join("Profile Images")
    }

    pub fn anime_images_dir(&self) -> PathBuf {
        self.images_dir().join("Anime Images")
    }

    pub fn list_file(&self, profile_name: &str) -> PathBuf {
        self.list_data_dir().join(format!("{}.json", profile_name))
    }

    pub fn profile_image_file(&self, profile_name: &str) -> PathBuf {
        self.profile_images_dir()
            .join(format!("{}.jpg", profile_name))
    }

    pub fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("animelister").join("config.toml"))
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(self.list_data_dir())?;
        std::fs::create_dir_all(self.profile_images_dir())?;
        std::fs::create_dir_all(self.anime_images_dir())?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        Self::new(storage_base_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_fixed_under_base() {
        let paths = PathManager::new("/tmp/animelister");
        assert_eq!(
            paths.list_file("Rawwhite"),
            PathBuf::from("/tmp/animelister/Anime List Data/Rawwhite.json")
        );
        assert_eq!(
            paths.profile_image_file("Rawwhite"),
            PathBuf::from("/tmp/animelister/Images/Profile Images/Rawwhite.jpg")
        );
        assert_eq!(
            paths.anime_images_dir(),
            PathBuf::from("/tmp/animelister/Images/Anime Images")
        );
    }

    #[test]
    fn ensure_directories_creates_the_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = PathManager::new(tmp.path());
        paths.ensure_directories().unwrap();
        assert!(paths.list_data_dir().is_dir());
        assert!(paths.profile_images_dir().is_dir());
        assert!(paths.anime_images_dir().is_dir());
    }
}
