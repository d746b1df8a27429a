mod state;
mod ui;

use crate::config::Config;
use crate::document::DocumentDescriptor;
use crate::selection::{KvFileLedger, SelectionManager};
use crate::upload::{HttpRemoteStore, UploadOrchestrator};
use eframe::{egui, App};
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{info, warn};

pub use state::UploadUiState;

pub struct DocDropApp {
    selection: SelectionManager,
    orchestrator: Arc<UploadOrchestrator>,
    state: UploadUiState,
    preview: Option<DocumentDescriptor>,
}

impl DocDropApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        let ledger = KvFileLedger::new(config.ledger_path());
        let mut selection = SelectionManager::new(Box::new(ledger));
        if let Err(e) = selection.load() {
            // unreadable snapshot: start over with an empty selection
            warn!(error = %e, "discarding persisted selection");
        }

        let remote = Arc::new(HttpRemoteStore::new(config.remote_base_url.clone()));
        let orchestrator = Arc::new(UploadOrchestrator::new(config.staging_dir(), remote));

        Self {
            selection,
            orchestrator,
            state: UploadUiState::default(),
            preview: None,
        }
    }

    /// Opens the native picker. Cancelling the dialog is a silent no-op.
    pub fn pick_documents(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Documents", &["pdf", "docx", "doc"])
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp", "bmp"])
            .pick_files();

        match picked {
            Some(paths) => {
                let docs: Vec<DocumentDescriptor> = paths
                    .iter()
                    .filter_map(|path| DocumentDescriptor::from_path(path))
                    .collect();
                info!(count = docs.len(), "documents picked");
                self.selection.append(docs);
            }
            None => info!("file pick cancelled"),
        }
    }

    pub fn delete_at(&mut self, index: usize) {
        if let Err(e) = self.selection.remove_at(index) {
            warn!(error = %e, "delete ignored");
        }
    }

    pub fn start_upload(&mut self) {
        if self.selection.is_empty() {
            rfd::MessageDialog::new()
                .set_title("Upload")
                .set_description("Please select at least one file")
                .set_level(rfd::MessageLevel::Warning)
                .show();
            return;
        }

        self.state.clear();
        self.state.is_uploading = true;

        let docs = self.selection.docs().to_vec();
        let orchestrator = Arc::clone(&self.orchestrator);
        let (progress_sender, progress_receiver) = tokio_mpsc::unbounded_channel();
        let (outcome_sender, outcome_receiver) = std_mpsc::channel();
        self.state.progress_receiver = Some(progress_receiver);
        self.state.outcome_receiver = Some(outcome_receiver);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("create tokio runtime");
            rt.block_on(async {
                let outcome = orchestrator.upload_batch(&docs, progress_sender).await;
                let _ = outcome_sender.send(outcome);
            });
        });
    }

    /// Drains the worker channels: keeps only the latest progress event and,
    /// once the batch outcome lands, clears the selection on success or
    /// surfaces the error on failure.
    pub fn update_state(&mut self, ctx: &egui::Context) {
        if let Some(receiver) = &mut self.state.progress_receiver {
            let mut latest = None;
            while let Ok(event) = receiver.try_recv() {
                latest = Some(event);
            }
            if let Some(event) = latest {
                self.state.latest_progress = Some(event);
                ctx.request_repaint();
            }
        }

        let outcome = self
            .state
            .outcome_receiver
            .as_ref()
            .and_then(|receiver| receiver.try_recv().ok());
        if let Some(outcome) = outcome {
            self.state.clear();
            match outcome {
                Ok(references) => {
                    info!(count = references.len(), "batch upload succeeded");
                    self.selection.clear_all();
                    self.preview = None;
                    rfd::MessageDialog::new()
                        .set_title("Upload")
                        .set_description("Files uploaded successfully!")
                        .set_level(rfd::MessageLevel::Info)
                        .show();
                }
                Err(e) => {
                    warn!(error = %e, "batch upload failed");
                    rfd::MessageDialog::new()
                        .set_title("Error uploading files")
                        .set_description(&e.to_string())
                        .set_level(rfd::MessageLevel::Error)
                        .show();
                }
            }
            ctx.request_repaint();
        }

        if self.state.is_uploading {
            ctx.request_repaint();
        }
    }
}

impl App for DocDropApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
