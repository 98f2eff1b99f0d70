use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

/// File picked for upload, sent as the multipart `file` field
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UploadRequest {
    pub path: PathBuf,
    #[validate(length(min = 1))]
    pub file_name: String,
}

impl UploadRequest {
    /// Build an upload request from a path; the file name is its last component
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, file_name }
    }
}

/// Job description submitted as the multipart `description` field
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[validate(length(min = 1))]
    pub description: String,
}

impl MatchRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_request_file_name() {
        let req = UploadRequest::from_path("/tmp/resumes/Jane Doe.pdf");
        assert_eq!(req.file_name, "Jane Doe.pdf");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_description_rejected() {
        assert!(MatchRequest::new("").validate().is_err());
        assert!(MatchRequest::new("").is_empty());
        assert!(MatchRequest::new("   \n").validate().is_ok());
        assert!(MatchRequest::new("python developer").validate().is_ok());
    }
}
