use crate::document::DocumentDescriptor;
use crate::upload::remote::{RemoteStore, TransferError};
use crate::upload::types::{FileProgress, TransferProgress};
use futures_util::future::try_join_all;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

/// Remote key prefix every uploaded object lands under.
pub const REMOTE_PREFIX: &str = "myfiles";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no files selected for upload")]
    EmptyBatch,
    #[error("failed to stage {name}: {source}")]
    Stage {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to upload {name}: {source}")]
    Transfer {
        name: String,
        #[source]
        source: TransferError,
    },
}

/// Stages picked files into a private working directory and pushes them to
/// the remote store, all files concurrently, joined all-or-nothing.
pub struct UploadOrchestrator {
    staging_dir: PathBuf,
    remote: Arc<dyn RemoteStore>,
}

impl UploadOrchestrator {
    pub fn new(staging_dir: PathBuf, remote: Arc<dyn RemoteStore>) -> Self {
        Self {
            staging_dir,
            remote,
        }
    }

    /// Uploads the whole batch. Succeeds only if every file stages and
    /// transfers; the first failure ends the join and is returned as-is,
    /// without aggregating the rest and without deleting objects other files
    /// already pushed. On success returns one download reference per
    /// descriptor, in batch order.
    pub async fn upload_batch(
        &self,
        docs: &[DocumentDescriptor],
        progress: UnboundedSender<FileProgress>,
    ) -> Result<Vec<String>, UploadError> {
        if docs.is_empty() {
            return Err(UploadError::EmptyBatch);
        }

        info!(count = docs.len(), "starting upload batch");
        let uploads = docs
            .iter()
            .map(|doc| self.stage_and_transfer(doc, progress.clone()));
        let references = try_join_all(uploads).await?;
        info!(count = references.len(), "upload batch complete");
        Ok(references)
    }

    async fn stage_and_transfer(
        &self,
        doc: &DocumentDescriptor,
        progress: UnboundedSender<FileProgress>,
    ) -> Result<String, UploadError> {
        let staged = self.stage(doc).await?;

        let remote_path = format!("{}/{}", REMOTE_PREFIX, doc.name);
        let name = doc.name.clone();
        let on_progress = Box::new(move |p: TransferProgress| {
            // The receiver may be gone once the UI moves on; progress is
            // best-effort.
            let _ = progress.send(FileProgress {
                name: name.clone(),
                progress: p,
            });
        });

        let reference = self
            .remote
            .put_file(&staged, &remote_path, on_progress)
            .await
            .map_err(|source| UploadError::Transfer {
                name: doc.name.clone(),
                source,
            })?;
        debug!(name = %doc.name, "transfer complete");
        Ok(reference)
    }

    /// Copies the picked file into the staging directory under its own name.
    async fn stage(&self, doc: &DocumentDescriptor) -> Result<PathBuf, UploadError> {
        tokio::fs::create_dir_all(&self.staging_dir)
            .await
            .map_err(|source| UploadError::Stage {
                name: doc.name.clone(),
                source,
            })?;

        let destination = self.staging_dir.join(&doc.name);
        tokio::fs::copy(&doc.uri, &destination)
            .await
            .map_err(|source| UploadError::Stage {
                name: doc.name.clone(),
                source,
            })?;
        debug!(name = %doc.name, "staged");
        Ok(destination)
    }
}
