//! File-backed league collection.
//!
//! The whole collection is read-modify-written wholesale on each save;
//! with a single logical writer the last write wins, which is the
//! intended policy. Writes are atomic (temp file, sync, rename) so a
//! failed save leaves the previous document intact.

use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::StoreError;
use super::STORE_VERSION;
use crate::league::League;

/// On-disk document: version envelope around the league list.
#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    version: u32,
    leagues: Vec<League>,
}

/// Handle to the stored league collection.
#[derive(Debug, Clone)]
pub struct LeagueStore {
    path: PathBuf,
}

impl LeagueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LeagueStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored league. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<League>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut file = File::open(&self.path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        let doc: StoreDocument =
            serde_json::from_str(&data).map_err(StoreError::Deserialization)?;
        if doc.version > STORE_VERSION {
            return Err(StoreError::VersionMismatch {
                found: doc.version,
                expected: STORE_VERSION,
            });
        }

        log::debug!("Loaded {} leagues from {:?}", doc.leagues.len(), self.path);
        Ok(doc.leagues)
    }

    /// Write the whole collection atomically.
    pub fn save(&self, leagues: &[League]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let doc = StoreDocument { version: STORE_VERSION, leagues: leagues.to_vec() };
        let data = serde_json::to_vec_pretty(&doc).map_err(StoreError::Serialization)?;

        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, &self.path)?;

        log::debug!("Saved {} leagues ({} bytes) to {:?}", leagues.len(), data.len(), self.path);
        Ok(())
    }

    /// Insert or replace one league by id.
    pub fn upsert(&self, league: &League) -> Result<(), StoreError> {
        let mut leagues = self.load()?;
        match leagues.iter_mut().find(|l| l.id == league.id) {
            Some(existing) => *existing = league.clone(),
            None => leagues.push(league.clone()),
        }
        self.save(&leagues)?;

        log::info!("Saved league '{}' ({})", league.name, league.id);
        Ok(())
    }

    /// Delete one league by id. Unknown ids are a no-op.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut leagues = self.load()?;
        let before = leagues.len();
        leagues.retain(|l| l.id != id);
        if leagues.len() != before {
            self.save(&leagues)?;
            log::info!("Deleted league {}", id);
        }
        Ok(())
    }

    /// Look up one league by id.
    pub fn find(&self, id: Uuid) -> Result<Option<League>, StoreError> {
        Ok(self.load()?.into_iter().find(|l| l.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn league(name: &str) -> League {
        League::new(
            name,
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            BTreeMap::new(),
            false,
            None,
        )
        .unwrap()
    }

    fn store(tmp: &TempDir) -> LeagueStore {
        LeagueStore::new(tmp.path().join("leagues.json"))
    }

    #[test]
    fn missing_file_is_an_empty_collection() {
        let tmp = TempDir::new().unwrap();
        assert!(store(&tmp).load().unwrap().is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        let l = league("Liga 1");

        s.save(std::slice::from_ref(&l)).unwrap();
        let loaded = s.load().unwrap();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, l.id);
        assert_eq!(loaded[0].matches, l.matches);
        // Creation timestamp survives the text round trip.
        assert_eq!(loaded[0].created_at, l.created_at);
    }

    #[test]
    fn atomic_save_leaves_no_temp_file() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        s.save(&[league("Liga 1")]).unwrap();

        assert!(s.path().exists());
        assert!(!s.path().with_extension("tmp").exists());
    }

    #[test]
    fn upsert_replaces_by_id() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        let mut l = league("Liga 1");
        s.upsert(&l).unwrap();

        l.name = "Liga renombrada".to_string();
        s.upsert(&l).unwrap();

        let loaded = s.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Liga renombrada");
    }

    #[test]
    fn delete_removes_only_the_target() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        let l1 = league("Liga 1");
        let l2 = league("Liga 2");
        s.upsert(&l1).unwrap();
        s.upsert(&l2).unwrap();

        s.delete(l1.id).unwrap();
        let loaded = s.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, l2.id);

        // Unknown id is a silent no-op.
        s.delete(l1.id).unwrap();
        assert_eq!(s.load().unwrap().len(), 1);
    }

    #[test]
    fn future_version_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        std::fs::write(s.path(), r#"{"version": 99, "leagues": []}"#).unwrap();

        let err = s.load().unwrap_err();
        assert!(matches!(err, StoreError::VersionMismatch { found: 99, .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn corrupted_document_is_a_deserialization_error() {
        let tmp = TempDir::new().unwrap();
        let s = store(&tmp);
        std::fs::write(s.path(), "not json").unwrap();

        assert!(matches!(s.load().unwrap_err(), StoreError::Deserialization(_)));
    }
}
