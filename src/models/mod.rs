// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{ResumeSummary, ResumeDetail, MatchResult, MatchEntry, ACCEPTED_EXTENSIONS, has_accepted_extension};
pub use requests::{UploadRequest, MatchRequest};
pub use responses::{UploadResponse, DeleteResponse, ErrorResponse};
