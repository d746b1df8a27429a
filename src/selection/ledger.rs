use crate::document::DocumentDescriptor;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed key the serialized selection lives under.
pub const STORAGE_KEY: &str = "selected_docs";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("persisted selection is malformed: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to encode selection: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Repository for the persisted selection snapshot. Injected into the
/// selection manager so tests can substitute a recording fake.
pub trait LedgerStore {
    /// `Ok(None)` when no snapshot has ever been saved.
    fn load(&self) -> Result<Option<Vec<DocumentDescriptor>>, LedgerError>;
    fn save(&self, docs: &[DocumentDescriptor]) -> Result<(), LedgerError>;
    /// Deletes the snapshot entirely, not an empty-list write.
    fn clear(&self) -> Result<(), LedgerError>;
}

/// Key-value file ledger. The file holds a string-to-string map and the
/// descriptor list is stored as a JSON-encoded string under [`STORAGE_KEY`],
/// so other keys in the same file are left untouched.
pub struct KvFileLedger {
    path: PathBuf,
    key: String,
}

impl KvFileLedger {
    pub fn new(path: PathBuf) -> Self {
        Self::with_key(path, STORAGE_KEY)
    }

    pub fn with_key(path: PathBuf, key: impl Into<String>) -> Self {
        Self {
            path,
            key: key.into(),
        }
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, LedgerError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw).map_err(LedgerError::Corrupt)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(map).map_err(LedgerError::Encode)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl LedgerStore for KvFileLedger {
    fn load(&self) -> Result<Option<Vec<DocumentDescriptor>>, LedgerError> {
        let map = self.read_map()?;
        match map.get(&self.key) {
            None => Ok(None),
            Some(value) => serde_json::from_str(value)
                .map(Some)
                .map_err(LedgerError::Corrupt),
        }
    }

    fn save(&self, docs: &[DocumentDescriptor]) -> Result<(), LedgerError> {
        let mut map = self.read_map()?;
        let value = serde_json::to_string(docs).map_err(LedgerError::Encode)?;
        map.insert(self.key.clone(), value);
        self.write_map(&map)
    }

    fn clear(&self) -> Result<(), LedgerError> {
        let mut map = self.read_map()?;
        if map.remove(&self.key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn doc(name: &str) -> DocumentDescriptor {
        DocumentDescriptor {
            uri: PathBuf::from(format!("/picked/{name}")),
            name: name.to_string(),
            mime_type: None,
            size: None,
        }
    }

    fn ledger_at(dir: &Path) -> KvFileLedger {
        KvFileLedger::new(dir.join("ledger.json"))
    }

    #[test]
    fn load_without_prior_save_is_none() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let ledger = ledger_at(dir.path());
        assert!(ledger.load().expect("load").is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let ledger = ledger_at(dir.path());

        let docs = vec![doc("a.pdf"), doc("b.png")];
        ledger.save(&docs).expect("save");
        assert_eq!(ledger.load().expect("load"), Some(docs));
    }

    #[test]
    fn clear_removes_only_our_key() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ledger.json");
        let other = KvFileLedger::with_key(path.clone(), "unrelated");
        other.save(&[doc("keep.pdf")]).expect("save other key");

        let ledger = KvFileLedger::new(path);
        ledger.save(&[doc("a.pdf")]).expect("save");
        ledger.clear().expect("clear");

        assert!(ledger.load().expect("load").is_none());
        assert_eq!(other.load().expect("load other"), Some(vec![doc("keep.pdf")]));
    }

    #[test]
    fn clear_without_snapshot_is_ok() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let ledger = ledger_at(dir.path());
        ledger.clear().expect("clear on empty store");
    }

    #[test]
    fn malformed_value_reports_corrupt() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ledger.json");
        fs::write(
            &path,
            format!(r#"{{"{STORAGE_KEY}": "not a descriptor list"}}"#),
        )
        .expect("write fixture");

        let ledger = KvFileLedger::new(path);
        assert!(matches!(ledger.load(), Err(LedgerError::Corrupt(_))));
    }

    #[test]
    fn malformed_file_reports_corrupt() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{{{{").expect("write fixture");

        let ledger = KvFileLedger::new(path);
        assert!(matches!(ledger.load(), Err(LedgerError::Corrupt(_))));
    }
}
