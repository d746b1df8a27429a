use crate::document::DocumentDescriptor;
use crate::selection::ledger::{LedgerError, LedgerStore};
use thiserror::Error;
use tracing::{debug, error};

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("persisted selection is unreadable: {0}")]
    CorruptState(#[source] LedgerError),
    #[error("no document at index {index} (selection holds {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Owns the ordered selection list and mirrors every mutation to the ledger.
/// Persistence failures during mutation are logged and swallowed: the
/// in-memory list has already changed and there is no rollback.
pub struct SelectionManager {
    docs: Vec<DocumentDescriptor>,
    ledger: Box<dyn LedgerStore>,
}

impl SelectionManager {
    pub fn new(ledger: Box<dyn LedgerStore>) -> Self {
        Self {
            docs: Vec::new(),
            ledger,
        }
    }

    /// Replaces the in-memory list with the persisted snapshot. An absent
    /// snapshot leaves the list empty. An unreadable snapshot also leaves the
    /// list empty and reports `CorruptState` so the caller can tell the two
    /// apart.
    pub fn load(&mut self) -> Result<(), SelectionError> {
        match self.ledger.load() {
            Ok(Some(docs)) => {
                debug!(count = docs.len(), "loaded persisted selection");
                self.docs = docs;
                Ok(())
            }
            Ok(None) => {
                self.docs.clear();
                Ok(())
            }
            Err(e) => {
                self.docs.clear();
                Err(SelectionError::CorruptState(e))
            }
        }
    }

    /// Appends in pick order and persists the full resulting list before
    /// returning.
    pub fn append(&mut self, new_docs: Vec<DocumentDescriptor>) {
        self.docs.extend(new_docs);
        self.persist();
    }

    pub fn remove_at(&mut self, index: usize) -> Result<DocumentDescriptor, SelectionError> {
        if index >= self.docs.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.docs.len(),
            });
        }
        let removed = self.docs.remove(index);
        self.persist();
        Ok(removed)
    }

    /// Empties the list and deletes the persisted snapshot. Used after a fully
    /// successful upload batch; the delete is issued even when the list is
    /// already empty.
    pub fn clear_all(&mut self) {
        self.docs.clear();
        if let Err(e) = self.ledger.clear() {
            error!(error = %e, "failed to delete selection ledger");
        }
    }

    pub fn docs(&self) -> &[DocumentDescriptor] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn persist(&self) {
        match self.ledger.save(&self.docs) {
            Ok(()) => debug!(count = self.docs.len(), "selection persisted"),
            Err(e) => {
                error!(error = %e, "failed to persist selection; ledger may lag the in-memory list")
            }
        }
    }
}
