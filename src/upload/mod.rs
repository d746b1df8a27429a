mod orchestrator;
mod remote;
mod types;

pub use orchestrator::{UploadError, UploadOrchestrator, REMOTE_PREFIX};
pub use remote::{HttpRemoteStore, ProgressFn, RemoteStore, TransferError};
pub use types::{FileProgress, TransferProgress};
