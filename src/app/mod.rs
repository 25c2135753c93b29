mod state;
mod ui;

use crate::translate::{Direction, SelectedFile, TranslateError, TranslationClient};
use eframe::{egui, App};
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;

pub use state::{Status, TranslationResult, TranslationState};

pub struct DocxTranslator {
    selected_file: Option<SelectedFile>,
    direction: Direction,
    state: TranslationState,
    client: TranslationClient,
}

impl DocxTranslator {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let client = TranslationClient::from_env();
        tracing::info!("translation endpoint: {}", client.endpoint());
        Self::with_client(client)
    }

    pub fn with_client(client: TranslationClient) -> Self {
        Self {
            selected_file: None,
            direction: Direction::default(),
            state: TranslationState::default(),
            client,
        }
    }

    /// Clicking the upload area opens the native chooser. The dialog filter
    /// is the only gate on this path; picked files are accepted as-is.
    pub fn browse_for_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Word document", &["docx"])
            .pick_file()
        {
            self.select_file(path);
        }
    }

    /// Dropped files must carry the `.docx` extension; anything else is
    /// reported and leaves the current selection untouched.
    pub fn handle_drop(&mut self, path: PathBuf) {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        if !SelectedFile::is_docx(name) {
            tracing::warn!("rejected dropped file: {}", path.display());
            self.state.report_error("Please drop a .docx file.");
            return;
        }
        self.select_file(path);
    }

    fn select_file(&mut self, path: PathBuf) {
        match SelectedFile::from_path(path) {
            Some(file) => {
                tracing::info!("selected {} ({} bytes)", file.name, file.size);
                self.selected_file = Some(file);
                self.state.reset();
            }
            None => self.state.report_error("Invalid file name."),
        }
    }

    pub fn start_translation(&mut self) {
        if self.state.status.is_busy() {
            return;
        }
        let Some(file) = self.selected_file.clone() else {
            self.state.report_error("Please select a file first.");
            return;
        };

        let (sender, receiver) = std_mpsc::channel();
        self.state.begin(receiver);

        let client = self.client.clone();
        let direction = self.direction;
        tracing::info!("translating {} ({})", file.name, direction.wire_value());

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let outcome = rt.block_on(async {
                let content = fs::read(&file.path).map_err(TranslateError::from)?;
                client.translate(&file.name, content, direction).await
            });
            sender.send(outcome).unwrap_or_default();
        });
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        let outcome = self
            .state
            .result_receiver
            .as_ref()
            .and_then(|receiver| receiver.try_recv().ok());
        if let Some(outcome) = outcome {
            self.finish_translation(outcome);
        }
        if self.state.status.is_busy() {
            ctx.request_repaint();
        }
    }

    /// Runs on every outcome; the status always leaves `Busy` here so the
    /// submit control is re-enabled and the spinner hidden.
    fn finish_translation(&mut self, outcome: TranslationResult) {
        self.state.result_receiver = None;
        match outcome {
            Ok(artifact) => {
                tracing::info!(
                    "translated document ready: {} ({})",
                    artifact.file_name(),
                    crate::utils::human_size(artifact.size())
                );
                let dir = self
                    .selected_file
                    .as_ref()
                    .map(SelectedFile::parent_dir)
                    .unwrap_or_else(|| PathBuf::from("."));
                match artifact.save_to(&dir) {
                    Ok(path) => {
                        tracing::info!("saved translated document: {}", path.display());
                        self.state.status = Status::Success(format!(
                            "Translation successful! Saved as {}",
                            path.display()
                        ));
                        self.state.saved_path = Some(path);
                    }
                    Err(e) => {
                        tracing::error!("failed to save translated document: {}", e);
                        self.state
                            .report_error(format!("Failed to save translated document: {}", e));
                    }
                }
            }
            Err(e) => {
                tracing::error!("translation failed: {}", e);
                self.state.report_error(e.to_string());
            }
        }
    }

    pub fn open_saved(&self) {
        if let Some(path) = &self.state.saved_path {
            if let Err(e) = open::that(path) {
                tracing::error!("failed to open {}: {}", path.display(), e);
            }
        }
    }
}

impl App for DocxTranslator {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::DownloadArtifact;
    use std::sync::mpsc::channel;
    use tempfile::tempdir;

    fn controller() -> DocxTranslator {
        DocxTranslator::with_client(TranslationClient::new("http://127.0.0.1:1/unused/"))
    }

    #[test]
    fn submitting_without_a_file_reports_and_sends_nothing() {
        let mut app = controller();
        app.start_translation();

        assert_eq!(
            app.state.status,
            Status::Error("Please select a file first.".to_string())
        );
        assert!(app.state.result_receiver.is_none());
    }

    #[test]
    fn non_docx_drop_is_rejected_without_replacing_the_selection() {
        let dir = tempdir().unwrap();
        let docx = dir.path().join("report.docx");
        std::fs::write(&docx, b"content").unwrap();

        let mut app = controller();
        app.handle_drop(docx);
        app.handle_drop(dir.path().join("notes.txt"));

        assert_eq!(
            app.state.status,
            Status::Error("Please drop a .docx file.".to_string())
        );
        assert_eq!(app.selected_file.as_ref().unwrap().name, "report.docx");
    }

    #[test]
    fn accepting_a_file_resets_the_status() {
        let dir = tempdir().unwrap();
        let docx = dir.path().join("report.docx");
        std::fs::write(&docx, b"content").unwrap();

        let mut app = controller();
        app.state.report_error("stale error");
        app.handle_drop(docx);

        assert_eq!(app.state.status, Status::Idle);
        assert_eq!(app.selected_file.as_ref().unwrap().name, "report.docx");
    }

    #[test]
    fn submission_while_busy_is_a_no_op() {
        let mut app = controller();
        let (_sender, receiver) = channel();
        app.state.begin(receiver);

        app.start_translation();

        // Still the original busy status, not a no-file error.
        assert!(app.state.status.is_busy());
    }

    #[test]
    fn successful_outcome_saves_next_to_the_source() {
        let dir = tempdir().unwrap();
        let docx = dir.path().join("report.docx");
        std::fs::write(&docx, b"original").unwrap();

        let mut app = controller();
        app.handle_drop(docx);
        let (_sender, receiver) = channel();
        app.state.begin(receiver);

        app.finish_translation(Ok(DownloadArtifact::new("report.docx", b"translated".to_vec())));

        let saved = dir.path().join("translated_report.docx");
        assert_eq!(std::fs::read(&saved).unwrap(), b"translated");
        assert_eq!(app.state.saved_path.as_deref(), Some(saved.as_path()));
        assert!(matches!(app.state.status, Status::Success(_)));
        assert!(!app.state.status.is_busy());
    }

    #[test]
    fn failed_outcome_reports_and_reenables_submission() {
        let mut app = controller();
        let (_sender, receiver) = channel();
        app.state.begin(receiver);

        app.finish_translation(Err(TranslateError::Rejected("Unsupported document.".to_string())));

        assert_eq!(
            app.state.status,
            Status::Error("Unsupported document.".to_string())
        );
        assert!(app.state.result_receiver.is_none());
        assert!(app.state.saved_path.is_none());
    }
}
