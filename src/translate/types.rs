use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Translation direction sent to the service in the `direction` form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    ArabicToEnglish,
    EnglishToArabic,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::ArabicToEnglish, Direction::EnglishToArabic];

    pub fn wire_value(&self) -> &'static str {
        match self {
            Direction::ArabicToEnglish => "ar-en",
            Direction::EnglishToArabic => "en-ar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::ArabicToEnglish => "Arabic to English",
            Direction::EnglishToArabic => "English to Arabic",
        }
    }
}

/// The document currently chosen for translation. Replaced when the user
/// picks another file, never cleared.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
    pub size: u64,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        Some(Self { name, path, size })
    }

    /// Extension check applied to dropped files. The file-picker path relies
    /// on the dialog filter instead and performs no check.
    pub fn is_docx(name: &str) -> bool {
        name.ends_with(".docx")
    }

    pub fn parent_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Translated document bytes returned by the service, held only until they
/// are written to disk. `save_to` consumes the artifact so the bytes are
/// released as soon as the file exists.
#[derive(Debug)]
pub struct DownloadArtifact {
    file_name: String,
    content: Vec<u8>,
}

impl DownloadArtifact {
    pub fn new(source_name: &str, content: Vec<u8>) -> Self {
        Self {
            file_name: format!("translated_{}", source_name),
            content,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn save_to(self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

#[derive(Debug, Error)]
pub enum TranslateError {
    /// The service answered with a non-success status; the message comes from
    /// the response's `detail` field when present.
    #[error("{0}")]
    Rejected(String),

    #[error("Failed to send request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read file: {0}")]
    Read(#[from] io::Error),
}
