// Service exports
pub mod api;
pub mod prompt;

pub use api::{ApiError, ResumeApi, ResumeApiClient};
pub use prompt::{AutoConfirm, Prompter};
