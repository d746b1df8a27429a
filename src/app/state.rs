use crate::upload::{FileProgress, UploadError};
use std::sync::mpsc::Receiver;
use tokio::sync::mpsc::UnboundedReceiver;

/// UI-side view of the running batch. Receivers are handed over when an
/// upload starts and dropped when its outcome arrives.
#[derive(Default)]
pub struct UploadUiState {
    pub is_uploading: bool,
    pub latest_progress: Option<FileProgress>,
    pub progress_receiver: Option<UnboundedReceiver<FileProgress>>,
    pub outcome_receiver: Option<Receiver<Result<Vec<String>, UploadError>>>,
}

impl UploadUiState {
    pub fn clear(&mut self) {
        *self = UploadUiState::default();
    }

    pub fn progress_text(&self) -> Option<String> {
        self.latest_progress.as_ref().map(FileProgress::describe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::TransferProgress;

    #[test]
    fn progress_text_mirrors_latest_event() {
        let mut state = UploadUiState::default();
        assert_eq!(state.progress_text(), None);

        state.latest_progress = Some(FileProgress {
            name: "a.pdf".to_string(),
            progress: TransferProgress {
                bytes_transferred: 10,
                total_bytes: 40,
            },
        });
        assert_eq!(
            state.progress_text().as_deref(),
            Some("10 transferred out of 40")
        );

        state.clear();
        assert_eq!(state.progress_text(), None);
        assert!(!state.is_uploading);
    }
}
