use crate::core::filters::filter_resumes;
use crate::models::{MatchResult, ResumeDetail, ResumeSummary};
use std::path::PathBuf;

/// Kinds of request whose responses write into state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    List,
    Detail,
    Match,
}

/// Identifier handed out when a request is issued; later requests get larger ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// Tracks the most recently issued request of each kind
#[derive(Debug, Clone, Default)]
struct RequestTracker {
    issued: u64,
    list: Option<RequestId>,
    detail: Option<RequestId>,
    matching: Option<RequestId>,
}

impl RequestTracker {
    fn slot(&mut self, kind: RequestKind) -> &mut Option<RequestId> {
        match kind {
            RequestKind::List => &mut self.list,
            RequestKind::Detail => &mut self.detail,
            RequestKind::Match => &mut self.matching,
        }
    }

    fn issue(&mut self, kind: RequestKind) -> RequestId {
        self.issued += 1;
        let id = RequestId(self.issued);
        *self.slot(kind) = Some(id);
        id
    }

    fn is_latest(&mut self, kind: RequestKind, id: RequestId) -> bool {
        *self.slot(kind) == Some(id)
    }
}

/// Every state change the client can make
#[derive(Debug, Clone)]
pub enum Action {
    SelectFile(PathBuf),
    ClearFile,
    SetQuery(String),
    SetJobDescription(String),
    /// A list fetch, upload or match submission began
    LoadingStarted,
    /// A list fetch, upload or match submission resolved, whatever the outcome
    LoadingFinished,
    ResumesLoaded {
        request: RequestId,
        resumes: Vec<ResumeSummary>,
    },
    DetailLoaded {
        request: RequestId,
        detail: ResumeDetail,
    },
    CloseDetail,
    MatchLoaded {
        request: RequestId,
        result: MatchResult,
    },
    CloseMatch,
}

/// In-memory client state
///
/// The resume list always holds the last committed server response; detail and
/// match payloads exist only while their modal is open.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub resumes: Vec<ResumeSummary>,
    pub selected_file: Option<PathBuf>,
    pub query: String,
    pub job_description: String,
    pub detail: Option<ResumeDetail>,
    pub match_result: Option<MatchResult>,
    in_flight: usize,
    requests: RequestTracker,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one list fetch, upload or match submission is unresolved
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn detail_open(&self) -> bool {
        self.detail.is_some()
    }

    pub fn match_open(&self) -> bool {
        self.match_result.is_some()
    }

    /// The resume list as narrowed by the current search query
    pub fn filtered(&self) -> Vec<&ResumeSummary> {
        filter_resumes(&self.resumes, &self.query)
    }

    /// Register a new request of `kind`; any earlier one of that kind becomes stale
    pub fn issue_request(&mut self, kind: RequestKind) -> RequestId {
        self.requests.issue(kind)
    }
}

/// Apply an action to the state
///
/// Returns false when the action was a response superseded by a newer request
/// of the same kind, in which case the state is left untouched.
pub fn reduce(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::SelectFile(path) => state.selected_file = Some(path),
        Action::ClearFile => state.selected_file = None,
        Action::SetQuery(query) => state.query = query,
        Action::SetJobDescription(text) => state.job_description = text,
        Action::LoadingStarted => state.in_flight += 1,
        Action::LoadingFinished => state.in_flight = state.in_flight.saturating_sub(1),
        Action::ResumesLoaded { request, resumes } => {
            if !state.requests.is_latest(RequestKind::List, request) {
                tracing::debug!("Dropping stale resume list from {:?}", request);
                return false;
            }
            state.resumes = resumes;
        }
        Action::DetailLoaded { request, detail } => {
            if !state.requests.is_latest(RequestKind::Detail, request) {
                tracing::debug!("Dropping stale resume detail from {:?}", request);
                return false;
            }
            state.detail = Some(detail);
        }
        Action::CloseDetail => state.detail = None,
        Action::MatchLoaded { request, result } => {
            if !state.requests.is_latest(RequestKind::Match, request) {
                tracing::debug!("Dropping stale match result from {:?}", request);
                return false;
            }
            state.match_result = Some(result);
        }
        Action::CloseMatch => state.match_result = None,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchEntry;

    fn alice() -> ResumeSummary {
        ResumeSummary {
            name: "Alice".to_string(),
            filename: "a.pdf".to_string(),
        }
    }

    fn detail(name: &str) -> ResumeDetail {
        ResumeDetail {
            name: name.to_string(),
            content: format!("{} resume text", name),
            skills: vec![],
        }
    }

    fn match_result() -> MatchResult {
        MatchResult {
            job_skills: vec!["Python".to_string()],
            matches: vec![MatchEntry {
                filename: "a.pdf".to_string(),
                matched_skills: vec!["Python".to_string()],
                match_score: 80.0,
            }],
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = AppState::new();
        assert!(!state.is_loading());
        assert!(!state.detail_open());
        assert!(!state.match_open());
        assert!(state.resumes.is_empty());
    }

    #[test]
    fn test_search_scenario() {
        let mut state = AppState::new();
        let request = state.issue_request(RequestKind::List);
        assert!(reduce(&mut state, Action::ResumesLoaded { request, resumes: vec![alice()] }));

        reduce(&mut state, Action::SetQuery("ali".to_string()));
        assert_eq!(state.filtered(), vec![&alice()]);

        reduce(&mut state, Action::SetQuery("bob".to_string()));
        assert!(state.filtered().is_empty());
    }

    #[test]
    fn test_loading_counts_overlapping_operations() {
        let mut state = AppState::new();
        reduce(&mut state, Action::LoadingStarted);
        reduce(&mut state, Action::LoadingStarted);
        reduce(&mut state, Action::LoadingFinished);
        assert!(state.is_loading());
        reduce(&mut state, Action::LoadingFinished);
        assert!(!state.is_loading());
        reduce(&mut state, Action::LoadingFinished);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_list_is_dropped() {
        let mut state = AppState::new();
        let first = state.issue_request(RequestKind::List);
        let second = state.issue_request(RequestKind::List);

        assert!(reduce(&mut state, Action::ResumesLoaded { request: second, resumes: vec![alice()] }));
        assert!(!reduce(&mut state, Action::ResumesLoaded { request: first, resumes: vec![] }));
        assert_eq!(state.resumes, vec![alice()]);
    }

    #[test]
    fn test_request_kinds_are_independent() {
        let mut state = AppState::new();
        let list = state.issue_request(RequestKind::List);
        let _detail = state.issue_request(RequestKind::Detail);
        assert!(reduce(&mut state, Action::ResumesLoaded { request: list, resumes: vec![alice()] }));
    }

    #[test]
    fn test_stale_detail_is_dropped() {
        let mut state = AppState::new();
        let first = state.issue_request(RequestKind::Detail);
        let second = state.issue_request(RequestKind::Detail);

        assert!(reduce(&mut state, Action::DetailLoaded { request: second, detail: detail("Bob") }));
        assert!(!reduce(&mut state, Action::DetailLoaded { request: first, detail: detail("Alice") }));
        assert_eq!(state.detail.as_ref().map(|d| d.name.as_str()), Some("Bob"));
    }

    #[test]
    fn test_stale_match_is_dropped() {
        let mut state = AppState::new();
        let first = state.issue_request(RequestKind::Match);
        let second = state.issue_request(RequestKind::Match);

        let newer = MatchResult {
            job_skills: vec!["Rust".to_string()],
            matches: vec![],
        };
        assert!(reduce(&mut state, Action::MatchLoaded { request: second, result: newer.clone() }));
        assert!(!reduce(&mut state, Action::MatchLoaded { request: first, result: match_result() }));
        assert_eq!(state.match_result, Some(newer));
    }

    #[test]
    fn test_modals_are_independent() {
        let mut state = AppState::new();
        let d = state.issue_request(RequestKind::Detail);
        let m = state.issue_request(RequestKind::Match);
        reduce(&mut state, Action::DetailLoaded { request: d, detail: detail("Alice") });
        reduce(&mut state, Action::MatchLoaded { request: m, result: match_result() });
        assert!(state.detail_open() && state.match_open());

        reduce(&mut state, Action::CloseMatch);
        assert!(state.detail_open());
        assert!(!state.match_open());

        reduce(&mut state, Action::CloseDetail);
        assert!(!state.detail_open());
    }

    #[test]
    fn test_file_selection() {
        let mut state = AppState::new();
        reduce(&mut state, Action::SelectFile(PathBuf::from("cv.pdf")));
        assert_eq!(state.selected_file, Some(PathBuf::from("cv.pdf")));
        reduce(&mut state, Action::ClearFile);
        assert_eq!(state.selected_file, None);
    }
}
