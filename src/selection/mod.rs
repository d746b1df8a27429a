mod ledger;
mod manager;

pub use ledger::{KvFileLedger, LedgerError, LedgerStore, STORAGE_KEY};
pub use manager::{SelectionError, SelectionManager};
