mod client;
mod types;

pub use client::TranslationClient;
pub use types::{Direction, DownloadArtifact, SelectedFile, TranslateError};
