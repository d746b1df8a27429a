use crate::upload::types::TransferProgress;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Progress observer scoped to a single transfer.
pub type ProgressFn = Box<dyn Fn(TransferProgress) + Send + Sync>;

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("failed to read staged file: {0}")]
    Io(#[from] std::io::Error),
    #[error("transfer request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("remote store rejected upload with status {0}")]
    Rejected(reqwest::StatusCode),
    #[error("failed to parse upload response: {0}")]
    BadResponse(#[source] reqwest::Error),
}

/// Remote object store: push a staged local file under a remote path and
/// resolve a download reference for it.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn put_file(
        &self,
        local: &Path,
        remote_path: &str,
        on_progress: ProgressFn,
    ) -> Result<String, TransferError>;
}

#[derive(Deserialize)]
struct PutResponse {
    download_url: String,
}

/// HTTP-backed remote store. Objects are PUT to `<base_url>/<remote_path>`
/// with a streaming body so progress can be observed while bytes leave the
/// process; the server answers with a JSON body carrying the download URL.
pub struct HttpRemoteStore {
    client: reqwest::Client,
    base_url: String,
}

const CHUNK_SIZE: usize = 64 * 1024;

impl HttpRemoteStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn object_url(&self, remote_path: &str) -> String {
        format!("{}/{}", self.base_url, remote_path)
    }
}

#[async_trait]
impl RemoteStore for HttpRemoteStore {
    async fn put_file(
        &self,
        local: &Path,
        remote_path: &str,
        on_progress: ProgressFn,
    ) -> Result<String, TransferError> {
        let bytes = tokio::fs::read(local).await?;
        let total = bytes.len() as u64;
        on_progress(TransferProgress {
            bytes_transferred: 0,
            total_bytes: total,
        });

        // Chunks are handed to the request body lazily, so each callback fires
        // as the transfer actually consumes that chunk.
        let chunks: Vec<Vec<u8>> = bytes.chunks(CHUNK_SIZE).map(<[u8]>::to_vec).collect();
        let mut sent: u64 = 0;
        let stream = futures_util::stream::iter(chunks.into_iter().map(move |chunk| {
            sent += chunk.len() as u64;
            on_progress(TransferProgress {
                bytes_transferred: sent,
                total_bytes: total,
            });
            Ok::<_, std::io::Error>(chunk)
        }));

        let response = self
            .client
            .put(self.object_url(remote_path))
            .header(reqwest::header::CONTENT_LENGTH, total)
            .body(reqwest::Body::wrap_stream(stream))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransferError::Rejected(status));
        }

        let parsed: PutResponse = response.json().await.map_err(TransferError::BadResponse)?;
        Ok(parsed.download_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_url_joins_base_and_path() {
        let store = HttpRemoteStore::new("https://store.example.com/");
        assert_eq!(
            store.object_url("myfiles/a.pdf"),
            "https://store.example.com/myfiles/a.pdf"
        );
    }

    #[test]
    fn put_response_decodes_download_url() {
        let parsed: PutResponse =
            serde_json::from_str(r#"{"download_url": "https://store.example.com/d/abc"}"#)
                .expect("decode");
        assert_eq!(parsed.download_url, "https://store.example.com/d/abc");
    }
}
