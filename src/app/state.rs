use crate::translate::{DownloadArtifact, TranslateError};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

pub type TranslationResult = Result<DownloadArtifact, TranslateError>;

/// Exactly one status is active at a time. `Busy` covers the whole lifetime
/// of the single in-flight request; submission is disabled while it holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Busy(String),
    Success(String),
    Error(String),
}

impl Status {
    pub fn is_busy(&self) -> bool {
        matches!(self, Status::Busy(_))
    }
}

#[derive(Default)]
pub struct TranslationState {
    pub status: Status,
    pub saved_path: Option<PathBuf>,
    pub result_receiver: Option<Receiver<TranslationResult>>,
}

impl TranslationState {
    /// Entering the busy phase clears the previous outcome so no stale
    /// download affordance survives into the new attempt.
    pub fn begin(&mut self, receiver: Receiver<TranslationResult>) {
        self.status = Status::Busy("Translating... Please wait.".to_string());
        self.saved_path = None;
        self.result_receiver = Some(receiver);
    }

    /// Back to a resubmittable state; used when a new file is selected.
    pub fn reset(&mut self) {
        self.status = Status::Idle;
        self.saved_path = None;
        self.result_receiver = None;
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.status = Status::Error(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn begin_clears_the_previous_outcome() {
        let mut state = TranslationState::default();
        state.saved_path = Some(PathBuf::from("/tmp/translated_old.docx"));
        state.status = Status::Success("done".to_string());

        let (_sender, receiver) = channel();
        state.begin(receiver);

        assert!(state.status.is_busy());
        assert!(state.saved_path.is_none());
        assert!(state.result_receiver.is_some());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut state = TranslationState::default();
        let (_sender, receiver) = channel();
        state.begin(receiver);

        state.reset();
        assert_eq!(state.status, Status::Idle);
        assert!(state.result_receiver.is_none());
    }

    #[test]
    fn only_the_busy_status_gates_submission() {
        assert!(Status::Busy("working".to_string()).is_busy());
        assert!(!Status::Idle.is_busy());
        assert!(!Status::Error("boom".to_string()).is_busy());
        assert!(!Status::Success("done".to_string()).is_busy());
    }
}
