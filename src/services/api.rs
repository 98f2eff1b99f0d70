use crate::config::ApiSettings;
use crate::models::{
    DeleteResponse, ErrorResponse, MatchRequest, MatchResult, ResumeDetail, ResumeSummary,
    UploadRequest, UploadResponse,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use validator::Validate;

/// Errors that can occur when talking to the ResumeRAG backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

impl ApiError {
    /// HTTP status code, when the backend answered with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The five backend operations the client depends on
#[async_trait]
pub trait ResumeApi: Send + Sync {
    /// `GET /resumes`
    async fn list_resumes(&self) -> Result<Vec<ResumeSummary>, ApiError>;

    /// `POST /upload` with multipart field `file`
    async fn upload_resume(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError>;

    /// `DELETE /delete/{filename}`; any non-2xx status is an `ApiError::Status`
    async fn delete_resume(&self, filename: &str) -> Result<DeleteResponse, ApiError>;

    /// `GET /resume/{filename}`
    async fn get_resume(&self, filename: &str) -> Result<ResumeDetail, ApiError>;

    /// `POST /match` with multipart field `description`
    async fn match_job(&self, request: &MatchRequest) -> Result<MatchResult, ApiError>;
}

/// reqwest-backed ResumeRAG API client
pub struct ResumeApiClient {
    base_url: String,
    client: Client,
}

impl ResumeApiClient {
    /// Create a new client; no request timeout is applied unless one is given
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into(),
            client: builder.build()?,
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, ApiError> {
        Self::new(
            settings.base_url.clone(),
            settings.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// URL of a per-resume resource, with the filename percent-encoded as one segment
    fn resource(&self, prefix: &str, filename: &str) -> String {
        self.endpoint(&format!("/{}/{}", prefix, urlencoding::encode(filename)))
    }

    async fn read_file(request: &UploadRequest) -> Result<Vec<u8>, ApiError> {
        tokio::fs::read(&request.path).await.map_err(|source| ApiError::Io {
            path: request.path.clone(),
            source,
        })
    }
}

/// Turn a non-success response into `ApiError::Status`, keeping the backend's detail text
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read body".to_string());
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.detail)
        .unwrap_or(body);

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ApiError> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse {}: {}", what, e)))
}

#[async_trait]
impl ResumeApi for ResumeApiClient {
    async fn list_resumes(&self) -> Result<Vec<ResumeSummary>, ApiError> {
        let url = self.endpoint("/resumes");
        tracing::debug!("Fetching resumes from: {}", url);

        let response = check_status(self.client.get(&url).send().await?).await?;
        let resumes: Vec<ResumeSummary> = decode(response, "resume list").await?;

        tracing::debug!("Fetched {} resumes", resumes.len());
        Ok(resumes)
    }

    async fn upload_resume(&self, request: &UploadRequest) -> Result<UploadResponse, ApiError> {
        request.validate()?;
        let bytes = Self::read_file(request).await?;
        let size = bytes.len();

        let part = Part::bytes(bytes).file_name(request.file_name.clone());
        let form = Form::new().part("file", part);

        let url = self.endpoint("/upload");
        tracing::debug!("Uploading {} ({} bytes) to: {}", request.file_name, size, url);

        let response = check_status(self.client.post(&url).multipart(form).send().await?).await?;

        // The UI never reads the upload body, so an unexpected shape is not an error
        let body = response.text().await?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn delete_resume(&self, filename: &str) -> Result<DeleteResponse, ApiError> {
        let url = self.resource("delete", filename);
        tracing::debug!("Deleting resume at: {}", url);

        let response = check_status(self.client.delete(&url).send().await?).await?;

        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn get_resume(&self, filename: &str) -> Result<ResumeDetail, ApiError> {
        let url = self.resource("resume", filename);
        tracing::debug!("Fetching resume detail from: {}", url);

        let response = check_status(self.client.get(&url).send().await?).await?;
        decode(response, "resume detail").await
    }

    async fn match_job(&self, request: &MatchRequest) -> Result<MatchResult, ApiError> {
        request.validate()?;
        let form = Form::new().text("description", request.description.clone());

        let url = self.endpoint("/match");
        tracing::debug!("Submitting job description ({} chars) to: {}", request.description.len(), url);

        let response = check_status(self.client.post(&url).multipart(form).send().await?).await?;
        let result: MatchResult = decode(response, "match result").await?;

        tracing::debug!(
            "Matched {} resumes against {} job skills",
            result.matches.len(),
            result.job_skills.len()
        );
        Ok(result)
    }
}
