use serde::{Deserialize, Serialize};

/// List-view projection of a stored resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub name: String,
    pub filename: String,
}

/// Full extracted text of a resume, fetched on demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDetail {
    pub name: String,
    pub content: String,
    /// Keyword skills detected by the backend, if it reports any
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Outcome of matching a job description against every stored resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_skills: Vec<String>,
    pub matches: Vec<MatchEntry>,
}

/// Per-resume match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub filename: String,
    pub matched_skills: Vec<String>,
    /// Percentage of job skills found in the resume (0-100)
    pub match_score: f64,
}

/// Resume extensions offered by the file picker
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Returns true if the file name carries one of the accepted resume extensions
pub fn has_accepted_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_without_skills() {
        let detail: ResumeDetail =
            serde_json::from_str(r#"{"name":"a.pdf","content":"text"}"#).unwrap();
        assert!(detail.skills.is_empty());
    }

    #[test]
    fn test_integer_score_parses() {
        let entry: MatchEntry = serde_json::from_str(
            r#"{"filename":"a.pdf","matched_skills":["Python"],"match_score":80}"#,
        )
        .unwrap();
        assert_eq!(entry.match_score, 80.0);
    }

    #[test]
    fn test_accepted_extensions() {
        assert!(has_accepted_extension("cv.PDF"));
        assert!(has_accepted_extension("resume.final.docx"));
        assert!(!has_accepted_extension("notes.txt"));
        assert!(!has_accepted_extension("README"));
    }
}
