use crate::core::state::{reduce, Action, AppState, RequestKind};
use crate::models::{has_accepted_extension, MatchRequest, ResumeSummary, UploadRequest, UploadResponse};
use crate::services::{ApiError, Prompter, ResumeApi};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};
use validator::Validate;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this resume?";
pub const DELETE_SUCCEEDED: &str = "Resume deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete resume.";
pub const DELETE_ERRORED: &str = "Error deleting resume.";

/// Result of an upload attempt that did not fail
#[derive(Debug, Clone)]
pub enum UploadOutcome {
    /// No file was selected, nothing was sent
    NoFileSelected,
    Uploaded(UploadResponse),
}

/// Result of a delete attempt; every failure has already been shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation, nothing was sent
    Cancelled,
    Deleted,
    /// The backend answered with a non-success status
    Rejected { status: u16 },
    /// The request never got an answer
    Failed(String),
}

/// Result of a view or match request that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response was committed to state
    Applied,
    /// A newer request of the same kind was issued before this one resolved
    Superseded,
    /// Required input was missing, nothing was sent
    Skipped,
}

/// One user session against the ResumeRAG backend
///
/// Owns the client state and sequences each user action as
/// HTTP call -> state transition. Methods take `&self` so independent actions
/// may be awaited concurrently; the state lock is never held across an await.
pub struct ResumeSession<A, P> {
    api: A,
    prompter: P,
    state: Mutex<AppState>,
}

impl<A: ResumeApi, P: Prompter> ResumeSession<A, P> {
    pub fn new(api: A, prompter: P) -> Self {
        Self {
            api,
            prompter,
            state: Mutex::new(AppState::new()),
        }
    }

    /// Create a session and load the resume list once
    pub async fn start(api: A, prompter: P) -> Self {
        let session = Self::new(api, prompter);
        session.refresh().await;
        session
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn dispatch(&self, action: Action) -> bool {
        reduce(&mut self.lock(), action)
    }

    /// Copy of the current state, for rendering
    pub fn snapshot(&self) -> AppState {
        self.lock().clone()
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock())
    }

    pub fn is_loading(&self) -> bool {
        self.lock().is_loading()
    }

    /// The resume list narrowed by the current search query
    pub fn filtered(&self) -> Vec<ResumeSummary> {
        self.lock().filtered().into_iter().cloned().collect()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.dispatch(Action::SetQuery(query.into()));
    }

    pub fn select_file(&self, path: impl Into<PathBuf>) {
        self.dispatch(Action::SelectFile(path.into()));
    }

    pub fn set_job_description(&self, text: impl Into<String>) {
        self.dispatch(Action::SetJobDescription(text.into()));
    }

    pub fn close_detail(&self) {
        self.dispatch(Action::CloseDetail);
    }

    pub fn close_match(&self) {
        self.dispatch(Action::CloseMatch);
    }

    /// Fetch the resume list and replace the in-memory copy
    ///
    /// Failures are logged and leave the list unchanged. Returns true when the
    /// response was committed.
    pub async fn refresh(&self) -> bool {
        let request = {
            let mut state = self.lock();
            reduce(&mut state, Action::LoadingStarted);
            state.issue_request(RequestKind::List)
        };

        let committed = match self.api.list_resumes().await {
            Ok(resumes) => self.dispatch(Action::ResumesLoaded { request, resumes }),
            Err(e) => {
                error!("Failed to fetch resumes: {}", e);
                false
            }
        };

        self.dispatch(Action::LoadingFinished);
        committed
    }

    /// Upload the selected file, then clear the selection and reload the list
    ///
    /// The selection is cleared and the list reloaded whether or not the upload
    /// succeeded; the upload error, if any, is returned afterwards.
    pub async fn upload(&self) -> Result<UploadOutcome, ApiError> {
        let Some(path) = self.with_state(|s| s.selected_file.clone()) else {
            debug!("Upload requested with no file selected");
            return Ok(UploadOutcome::NoFileSelected);
        };

        let request = UploadRequest::from_path(&path);
        if !has_accepted_extension(&request.file_name) {
            warn!("{} is not a PDF, DOC or DOCX file; uploading anyway", request.file_name);
        }

        self.dispatch(Action::LoadingStarted);
        let result = self.api.upload_resume(&request).await;
        self.dispatch(Action::ClearFile);
        self.refresh().await;
        self.dispatch(Action::LoadingFinished);

        match result {
            Ok(response) => {
                info!("Uploaded {}", request.file_name);
                Ok(UploadOutcome::Uploaded(response))
            }
            Err(e) => {
                error!("Failed to upload {}: {}", request.file_name, e);
                Err(e)
            }
        }
    }

    /// Delete a resume after the user confirms
    ///
    /// The list is only reloaded after the backend reports success.
    pub async fn delete(&self, filename: &str) -> DeleteOutcome {
        if !self.prompter.confirm(DELETE_CONFIRMATION).await {
            debug!("Delete of {} cancelled", filename);
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_resume(filename).await {
            Ok(_) => {
                info!("Deleted {}", filename);
                self.prompter.notify(DELETE_SUCCEEDED).await;
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(ApiError::Status { status, message }) => {
                warn!("Backend refused to delete {}: {} {}", filename, status, message);
                self.prompter.notify(DELETE_FAILED).await;
                DeleteOutcome::Rejected { status }
            }
            Err(e) => {
                error!("Error deleting {}: {}", filename, e);
                self.prompter.notify(DELETE_ERRORED).await;
                DeleteOutcome::Failed(e.to_string())
            }
        }
    }

    /// Fetch a resume's full text and show it in the detail modal
    pub async fn view(&self, filename: &str) -> Result<SubmitOutcome, ApiError> {
        let request = self.lock().issue_request(RequestKind::Detail);

        let detail = self.api.get_resume(filename).await.map_err(|e| {
            error!("Failed to fetch resume {}: {}", filename, e);
            e
        })?;

        Ok(if self.dispatch(Action::DetailLoaded { request, detail }) {
            SubmitOutcome::Applied
        } else {
            SubmitOutcome::Superseded
        })
    }

    /// Submit the current job description and show the scores in the match modal
    pub async fn match_job(&self) -> Result<SubmitOutcome, ApiError> {
        let request = MatchRequest::new(self.with_state(|s| s.job_description.clone()));
        if request.is_empty() {
            debug!("Match requested with an empty job description");
            return Ok(SubmitOutcome::Skipped);
        }
        request.validate()?;

        let id = {
            let mut state = self.lock();
            reduce(&mut state, Action::LoadingStarted);
            state.issue_request(RequestKind::Match)
        };

        let result = self.api.match_job(&request).await;
        self.dispatch(Action::LoadingFinished);

        let result = result.map_err(|e| {
            error!("Failed to match job description: {}", e);
            e
        })?;

        Ok(if self.dispatch(Action::MatchLoaded { request: id, result }) {
            SubmitOutcome::Applied
        } else {
            SubmitOutcome::Superseded
        })
    }
}
