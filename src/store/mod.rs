use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::TeamRegistry;

/// Local JSON team-registry files and saved text reports.
pub struct TeamStore {
    dir: PathBuf,
}

impl TeamStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Registry candidates: every `*.json` file in the store directory,
    /// sorted by name for a stable pick list.
    pub fn list_registry_files(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read directory {}", self.dir.display()))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();

        files.sort();
        Ok(files)
    }

    pub fn load_registry(&self, path: &Path) -> Result<TeamRegistry> {
        let registry: TeamRegistry = self.read_json(path)?;
        info!(
            "Loaded {} teams from '{}'",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn save_registry(&self, path: &Path, registry: &TeamRegistry) -> Result<()> {
        self.write_json(path, registry)?;
        info!(
            "Saved {} teams to '{}'",
            registry.len(),
            path.display()
        );
        Ok(())
    }

    pub fn save_report(&self, path: &Path, report: &str) -> Result<()> {
        fs::write(self.resolve(path), report)
            .with_context(|| format!("Could not save file to '{}'", path.display()))?;
        info!("Results saved to '{}'", path.display());
        Ok(())
    }

    // --- Helper Methods ---

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.dir.join(path)
        }
    }

    fn write_json<T: Serialize>(&self, path: &Path, data: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;
        fs::write(self.resolve(path), json)
            .with_context(|| format!("Failed to write '{}'", path.display()))?;
        Ok(())
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let full_path = self.resolve(path);
        let json = fs::read_to_string(&full_path)
            .with_context(|| format!("'{}' not found or unreadable", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("'{}' is empty or corrupted", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Team;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "worlds_ranking_store_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_registry() -> TeamRegistry {
        let mut registry = TeamRegistry::default();
        registry.insert(Team {
            id: 1,
            name: "T1".to_string(),
        });
        registry.insert(Team {
            id: 2,
            name: "Gen.G".to_string(),
        });
        registry
    }

    #[test]
    fn registry_round_trips_through_disk() {
        let dir = scratch_dir("round_trip");
        let store = TeamStore::new(&dir);
        let path = Path::new("teams.json");

        store.save_registry(path, &sample_registry()).unwrap();
        let loaded = store.load_registry(path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert!(loaded.contains_name("t1"));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn listing_only_returns_json_files() {
        let dir = scratch_dir("listing");
        fs::write(dir.join("a.json"), "{}").unwrap();
        fs::write(dir.join("b.json"), "{}").unwrap();
        fs::write(dir.join("notes.txt"), "x").unwrap();

        let store = TeamStore::new(&dir);
        let files = store.list_registry_files().unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn loading_a_missing_registry_is_an_error() {
        let dir = scratch_dir("missing");
        let store = TeamStore::new(&dir);
        assert!(store.load_registry(Path::new("nope.json")).is_err());
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn corrupted_registry_reports_the_file_name() {
        let dir = scratch_dir("corrupt");
        fs::write(dir.join("bad.json"), "not json").unwrap();

        let store = TeamStore::new(&dir);
        let err = store.load_registry(Path::new("bad.json")).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
        fs::remove_dir_all(dir).unwrap();
    }
}
