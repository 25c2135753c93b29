use crate::translate::types::{Direction, DownloadArtifact, TranslateError};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://ar-to-en.onrender.com/translate-document/";

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const GENERIC_ERROR: &str = "An unknown error occurred.";

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Client for the document translation endpoint. One multipart POST per
/// translation; no retries or timeouts.
#[derive(Clone)]
pub struct TranslationClient {
    endpoint: String,
    http: reqwest::Client,
}

impl TranslationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Endpoint from `TRANSLATOR_ENDPOINT` when set, the public service
    /// otherwise. The only configuration the application reads.
    pub fn from_env() -> Self {
        let endpoint =
            std::env::var("TRANSLATOR_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn translate(
        &self,
        file_name: &str,
        content: Vec<u8>,
        direction: Direction,
    ) -> Result<DownloadArtifact, TranslateError> {
        let part = Part::bytes(content)
            .file_name(file_name.to_string())
            .mime_str(DOCX_MIME)?;
        let form = Form::new()
            .part("file", part)
            .text("direction", direction.wire_value());

        let response = self.http.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("translation of {} rejected with status {}", file_name, status);
            return Err(TranslateError::Rejected(error_detail(&body)));
        }

        let bytes = response.bytes().await?;
        tracing::info!("received {} translated bytes for {}", bytes.len(), file_name);
        Ok(DownloadArtifact::new(file_name, bytes.to_vec()))
    }
}

fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .unwrap_or_else(|| GENERIC_ERROR.to_string())
}
