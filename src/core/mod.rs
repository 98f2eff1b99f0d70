// Client core exports
pub mod filters;
pub mod session;
pub mod state;

pub use filters::{filter_resumes, matches_query};
pub use session::{DeleteOutcome, ResumeSession, SubmitOutcome, UploadOutcome};
pub use state::{reduce, Action, AppState, RequestId, RequestKind};
