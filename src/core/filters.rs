use crate::models::ResumeSummary;

/// Case-insensitive substring test of a resume name against a search query
///
/// An empty query matches every name.
#[inline]
pub fn matches_query(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Resumes whose name contains the query, ignoring case, in list order
pub fn filter_resumes<'a>(resumes: &'a [ResumeSummary], query: &str) -> Vec<&'a ResumeSummary> {
    let needle = query.to_lowercase();
    resumes
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
