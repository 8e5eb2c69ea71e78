use super::{id_after, DataStore, ShipTable};
use crate::error::{Result, ShipError};
use crate::model::Ship;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_DATA_FILE: &str = "ships.json";

/// File-backed store: the whole table lives in one JSON document.
///
/// Every operation reloads the document, so separate processes see each
/// other's writes. Writes go to a temp file first and are renamed into place.
pub struct FileStore {
    root: PathBuf,
    file_name: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            file_name: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.root.join(&self.file_name)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShipError::Io)?;
        }
        Ok(())
    }

    fn load(&self) -> Result<ShipTable> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(ShipTable::default());
        }
        let content = fs::read_to_string(&path).map_err(ShipError::Io)?;
        let mut table: ShipTable =
            serde_json::from_str(&content).map_err(ShipError::Serialization)?;

        // Hand-edited files may be out of order or carry a stale counter.
        table.ships.sort_by_key(|s| s.id);
        if let Some(last) = table.ships.last() {
            table.next_id = table.next_id.max(id_after(last.id)?);
        }
        if table.ships.iter().any(|s| !s.is_persisted()) {
            return Err(ShipError::Store(format!(
                "{} contains a ship without an id",
                path.display()
            )));
        }
        Ok(table)
    }

    fn store(&self, table: &ShipTable) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let path = self.data_path();
        let content = serde_json::to_string_pretty(table).map_err(ShipError::Serialization)?;

        let tmp_path = self
            .root
            .join(format!(".{}-{}.tmp", self.file_name, std::process::id()));
        fs::write(&tmp_path, content).map_err(ShipError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ShipError::Io(e));
        }

        debug!(path = %path.display(), ships = table.ships.len(), "wrote ship table");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn find_all(&self) -> Result<Vec<Ship>> {
        Ok(self.load()?.ships)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Ship>> {
        Ok(self.load()?.get(id).cloned())
    }

    fn save(&mut self, ship: Ship) -> Result<Ship> {
        let mut table = self.load()?;
        let saved = table.upsert(ship)?;
        self.store(&table)?;
        Ok(saved)
    }

    fn delete(&mut self, ship: &Ship) -> Result<()> {
        let mut table = self.load()?;
        if !table.remove(ship.id) {
            return Err(ShipError::NotFound(ship.id));
        }
        self.store(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::ship;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data"));
        (dir, store)
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let (_dir, store) = setup();
        assert!(store.find_all().unwrap().is_empty());
        assert!(store.find_by_id(1).unwrap().is_none());
    }

    #[test]
    fn save_persists_across_instances() {
        let (dir, mut store) = setup();
        let saved = store.save(ship("Orion", 3000, 0.5)).unwrap();
        assert_eq!(saved.id, 1);

        let reopened = FileStore::new(dir.path().join("data"));
        let loaded = reopened.find_by_id(1).unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn custom_file_name() {
        let (dir, store) = setup();
        let mut store = store.with_file_name("fleet.json");
        store.save(ship("Orion", 3000, 0.5)).unwrap();
        assert!(dir.path().join("data").join("fleet.json").exists());
    }

    #[test]
    fn delete_removes_and_reports_missing() {
        let (_dir, mut store) = setup();
        let saved = store.save(ship("Orion", 3000, 0.5)).unwrap();
        store.delete(&saved).unwrap();
        assert!(store.find_all().unwrap().is_empty());
        assert!(matches!(store.delete(&saved), Err(ShipError::NotFound(1))));
    }

    #[test]
    fn no_temp_files_left_behind() {
        let (dir, mut store) = setup();
        store.save(ship("Orion", 3000, 0.5)).unwrap();
        for entry in fs::read_dir(dir.path().join("data")).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn unordered_file_is_normalized_on_load() {
        let (dir, mut store) = setup();
        let mut a = ship("A", 3000, 0.5);
        a.id = 5;
        let mut b = ship("B", 3000, 0.5);
        b.id = 2;
        let table = ShipTable {
            next_id: 1,
            ships: vec![a, b],
        };
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(
            store.data_path(),
            serde_json::to_string(&table).unwrap(),
        )
        .unwrap();

        let ids: Vec<u64> = store.find_all().unwrap().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 5]);
        let next = store.save(ship("C", 3000, 0.5)).unwrap();
        assert_eq!(next.id, 6);
    }

    #[test]
    fn failed_rename_cleans_up_temp_file() {
        let (dir, store) = setup();
        // A directory in place of the data file makes the rename fail.
        fs::create_dir_all(store.data_path().join("occupied")).unwrap();

        let table = ShipTable::default();
        assert!(matches!(store.store(&table), Err(ShipError::Io(_))));
        for entry in fs::read_dir(dir.path().join("data")).unwrap() {
            let name = entry.unwrap().file_name().into_string().unwrap();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
    }

    #[test]
    fn max_id_in_file_is_a_store_error() {
        let (dir, store) = setup();
        let mut last = ship("Last", 3000, 0.5);
        last.id = u64::MAX;
        let table = ShipTable {
            next_id: 1,
            ships: vec![last],
        };
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(store.data_path(), serde_json::to_string(&table).unwrap()).unwrap();

        assert!(matches!(store.find_all(), Err(ShipError::Store(_))));
    }

    #[test]
    fn corrupt_file_is_a_serialization_error() {
        let (dir, store) = setup();
        fs::create_dir_all(dir.path().join("data")).unwrap();
        fs::write(store.data_path(), "{ not json").unwrap();
        assert!(matches!(
            store.find_all(),
            Err(ShipError::Serialization(_))
        ));
    }
}
