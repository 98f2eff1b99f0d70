//! ResumeRAG client - terminal front end for the ResumeRAG matching service
//!
//! The library holds the typed API client, the explicit client state with its
//! reducer, and the session that sequences user actions against the backend.
//! Parsing, skill extraction and scoring all happen server-side.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod views;

// Re-export commonly used types
pub use crate::core::{AppState, ResumeSession, DeleteOutcome, SubmitOutcome, UploadOutcome};
pub use models::{ResumeSummary, ResumeDetail, MatchResult, MatchEntry};
pub use services::{ApiError, ResumeApi, ResumeApiClient, Prompter, AutoConfirm};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let state = AppState::new();
        assert!(state.filtered().is_empty());
    }
}
