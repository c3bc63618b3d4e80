// ─────────────────────────────────────────────────────────────────────
// Dam Performance Core — Record Stores
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simulation record stores.
//!
//! Records are kept in creation order; listings return newest first.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use dam_types::{DamError, DamParameters, DamResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::record::{RecordId, SimulationRecord};

/// On-disk document version written by [`JsonFileStore`].
const STORE_FORMAT_VERSION: u32 = 1;

/// CRUD surface over simulation records.
pub trait RecordStore: Send + Sync {
    /// Validate, compute and store a new record for `user_id`.
    fn create(&self, user_id: &str, name: &str, params: DamParameters)
        -> DamResult<SimulationRecord>;

    /// Records owned by `user_id`, newest first.
    fn list_by_user(&self, user_id: &str) -> DamResult<Vec<SimulationRecord>>;

    fn get(&self, id: RecordId) -> DamResult<SimulationRecord>;

    /// Remove a record; only its owner may delete it.
    fn delete(&self, user_id: &str, id: RecordId) -> DamResult<()>;
}

/// Record collection shared by the store implementations.
#[derive(Debug, Clone, Default)]
struct RecordSet {
    records: Vec<SimulationRecord>,
}

impl RecordSet {
    fn list_by_user(&self, user_id: &str) -> Vec<SimulationRecord> {
        self.records
            .iter()
            .rev()
            .filter(|r| r.user_id() == user_id)
            .cloned()
            .collect()
    }

    fn get(&self, id: RecordId) -> DamResult<SimulationRecord> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| DamError::RecordNotFound(id.to_string()))
    }

    /// Position of `id` after checking that `user_id` owns it.
    fn owned_position(&self, user_id: &str, id: RecordId) -> DamResult<usize> {
        let pos = self
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DamError::RecordNotFound(id.to_string()))?;
        if self.records[pos].user_id() != user_id {
            return Err(DamError::NotOwner {
                id: id.to_string(),
                user_id: user_id.to_string(),
            });
        }
        Ok(pos)
    }
}

/// In-process store; safe to share between threads.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<RecordSet>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryStore {
    fn create(
        &self,
        user_id: &str,
        name: &str,
        params: DamParameters,
    ) -> DamResult<SimulationRecord> {
        let record = SimulationRecord::new(user_id, name, params)?;
        self.inner.write().records.push(record.clone());
        tracing::info!("Simulation record created: {} (user {})", record.id(), user_id);
        Ok(record)
    }

    fn list_by_user(&self, user_id: &str) -> DamResult<Vec<SimulationRecord>> {
        Ok(self.inner.read().list_by_user(user_id))
    }

    fn get(&self, id: RecordId) -> DamResult<SimulationRecord> {
        self.inner.read().get(id)
    }

    fn delete(&self, user_id: &str, id: RecordId) -> DamResult<()> {
        let mut set = self.inner.write();
        let pos = set.owned_position(user_id, id)?;
        set.records.remove(pos);
        tracing::info!("Simulation record deleted: {} (user {})", id, user_id);
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    records: Vec<SimulationRecord>,
}

/// Store backed by a single JSON document, rewritten on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: RwLock<RecordSet>,
}

impl JsonFileStore {
    /// Open `path`, starting empty if the file does not exist yet.
    ///
    /// Every loaded record must reproduce its results from its parameters.
    pub fn open(path: impl AsRef<Path>) -> DamResult<Self> {
        let path = path.as_ref().to_path_buf();
        let records = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let doc: StoreDocument = serde_json::from_str(&contents)?;
            if doc.version != STORE_FORMAT_VERSION {
                return Err(DamError::ConfigError(format!(
                    "unsupported record store version {} in {}",
                    doc.version,
                    path.display()
                )));
            }
            let mut seen = HashSet::new();
            for record in &doc.records {
                record.verify()?;
                if !seen.insert(record.id()) {
                    return Err(DamError::InvalidRecord(format!(
                        "duplicate record id {}",
                        record.id()
                    )));
                }
            }
            doc.records
        } else {
            Vec::new()
        };

        tracing::debug!("Opened record store {} ({} records)", path.display(), records.len());
        Ok(JsonFileStore {
            path,
            inner: RwLock::new(RecordSet { records }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write to a sibling temp file, then rename over the target.
    fn persist(&self, set: &RecordSet) -> DamResult<()> {
        let doc = StoreDocument {
            version: STORE_FORMAT_VERSION,
            records: set.records.clone(),
        };
        let json = serde_json::to_string_pretty(&doc)?;
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn create(
        &self,
        user_id: &str,
        name: &str,
        params: DamParameters,
    ) -> DamResult<SimulationRecord> {
        let record = SimulationRecord::new(user_id, name, params)?;
        let mut set = self.inner.write();
        set.records.push(record.clone());
        if let Err(e) = self.persist(&set) {
            set.records.pop();
            return Err(e);
        }
        tracing::info!("Simulation record created: {} (user {})", record.id(), user_id);
        Ok(record)
    }

    fn list_by_user(&self, user_id: &str) -> DamResult<Vec<SimulationRecord>> {
        Ok(self.inner.read().list_by_user(user_id))
    }

    fn get(&self, id: RecordId) -> DamResult<SimulationRecord> {
        self.inner.read().get(id)
    }

    fn delete(&self, user_id: &str, id: RecordId) -> DamResult<()> {
        let mut set = self.inner.write();
        let pos = set.owned_position(user_id, id)?;
        let removed = set.records.remove(pos);
        if let Err(e) = self.persist(&set) {
            set.records.insert(pos, removed);
            return Err(e);
        }
        tracing::info!("Simulation record deleted: {} (user {})", id, user_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params_with_depth(water_depth: f64) -> DamParameters {
        DamParameters {
            water_depth,
            ..DamParameters::default()
        }
    }

    #[test]
    fn test_memory_create_and_get() {
        let store = MemoryStore::new();
        let created = store.create("alice", "Baseline", DamParameters::default()).unwrap();
        let fetched = store.get(created.id()).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_list_newest_first_and_scoped() {
        let store = MemoryStore::new();
        let a1 = store.create("alice", "one", params_with_depth(10.0)).unwrap();
        store.create("bob", "other", params_with_depth(12.0)).unwrap();
        let a2 = store.create("alice", "two", params_with_depth(15.0)).unwrap();

        let listed = store.list_by_user("alice").unwrap();
        let ids: Vec<RecordId> = listed.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![a2.id(), a1.id()]);
        assert!(store.list_by_user("carol").unwrap().is_empty());
    }

    #[test]
    fn test_memory_delete_ownership() {
        let store = MemoryStore::new();
        let record = store.create("alice", "mine", DamParameters::default()).unwrap();

        let err = store.delete("bob", record.id()).unwrap_err();
        assert!(matches!(err, DamError::NotOwner { .. }));
        assert_eq!(store.len(), 1);

        store.delete("alice", record.id()).unwrap();
        assert!(store.is_empty());
        assert!(matches!(
            store.delete("alice", record.id()),
            Err(DamError::RecordNotFound(_))
        ));
    }

    #[test]
    fn test_memory_rejects_invalid_parameters() {
        let store = MemoryStore::new();
        let result = store.create("alice", "bad", params_with_depth(-1.0));
        assert!(matches!(result, Err(DamError::InvalidParameter { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_shared_between_threads() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for j in 0..10 {
                        let depth = 5.0 + (i * 10 + j) as f64;
                        store
                            .create(&format!("user{i}"), "run", params_with_depth(depth))
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(store.len(), 40);
        assert_eq!(store.list_by_user("user2").unwrap().len(), 10);
    }

    #[test]
    fn test_json_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        let created = {
            let store = JsonFileStore::open(&path).unwrap();
            let kept = store.create("alice", "kept", params_with_depth(18.0)).unwrap();
            let dropped = store.create("alice", "dropped", params_with_depth(8.0)).unwrap();
            store.delete("alice", dropped.id()).unwrap();
            kept
        };

        let reopened = JsonFileStore::open(&path).unwrap();
        let listed = reopened.list_by_user("alice").unwrap();
        assert_eq!(listed, vec![created]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.list_by_user("alice").unwrap().is_empty());
    }

    #[test]
    fn test_json_store_rejects_tampered_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        {
            let store = JsonFileStore::open(&path).unwrap();
            store.create("alice", "run", DamParameters::default()).unwrap();
        }

        let mut doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        doc["records"][0]["parameters"]["bottomWidth"] = serde_json::json!(5.0);
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();

        let result = JsonFileStore::open(&path);
        assert!(matches!(result, Err(DamError::RecordMismatch(_))));
    }

    #[test]
    fn test_json_store_rejects_invalid_but_consistent_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");

        // Results match the parameters, but nothing else would pass `create`.
        let params = DamParameters {
            efficiency: 5.0,
            bottom_width: -40.0,
            ..DamParameters::default()
        };
        let doc = serde_json::json!({
            "version": STORE_FORMAT_VERSION,
            "records": [{
                "id": RecordId::new().to_string(),
                "userId": "",
                "name": "   ",
                "createdAt": "2026-01-01T00:00:00Z",
                "parameters": params,
                "results": dam_engineering::compute(&params),
            }]
        });
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(DamError::InvalidRecord(_))
        ));

        // With owner and name filled in, the parameters are still refused.
        let mut doc = doc;
        doc["records"][0]["userId"] = serde_json::json!("alice");
        doc["records"][0]["name"] = serde_json::json!("run");
        std::fs::write(&path, serde_json::to_string(&doc).unwrap()).unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(DamError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_json_store_create_rolls_back_on_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let store = JsonFileStore::open(&path).unwrap();
        let first = store.create("alice", "first", DamParameters::default()).unwrap();

        // A directory in the temp file's place makes every rewrite fail.
        std::fs::create_dir(path.with_extension("json.tmp")).unwrap();

        let result = store.create("alice", "second", params_with_depth(12.0));
        assert!(matches!(result, Err(DamError::Io(_))));
        assert_eq!(store.list_by_user("alice").unwrap(), vec![first.clone()]);

        std::fs::remove_dir(path.with_extension("json.tmp")).unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.list_by_user("alice").unwrap(), vec![first]);
    }

    #[test]
    fn test_json_store_delete_rolls_back_on_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        let store = JsonFileStore::open(&path).unwrap();
        let older = store.create("alice", "older", params_with_depth(10.0)).unwrap();
        let newer = store.create("alice", "newer", params_with_depth(15.0)).unwrap();

        std::fs::create_dir(path.with_extension("json.tmp")).unwrap();

        let result = store.delete("alice", older.id());
        assert!(matches!(result, Err(DamError::Io(_))));
        assert_eq!(
            store.list_by_user("alice").unwrap(),
            vec![newer.clone(), older.clone()]
        );
        assert_eq!(store.get(older.id()).unwrap(), older);
    }

    #[test]
    fn test_json_store_rejects_unknown_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, r#"{"version": 99, "records": []}"#).unwrap();
        assert!(matches!(
            JsonFileStore::open(&path),
            Err(DamError::ConfigError(_))
        ));
    }
}
