//! Plain-text rendering of the client state.
//!
//! Each function is pure so the terminal front end and the tests see exactly
//! the same output.

use crate::core::AppState;
use crate::models::{MatchEntry, MatchResult, ResumeDetail, ResumeSummary};
use std::fmt::Write;

pub const LOADING: &str = "Loading...";
pub const NO_RESUMES: &str = "No resumes found.";
pub const NO_JOB_SKILLS: &str = "No specific skills detected";
pub const NO_MATCHED_SKILLS: &str = "None";

/// Score as shown to the user, e.g. `80%` or `66.67%`
pub fn format_score(score: f64) -> String {
    format!("{}%", score)
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

/// The resume cards, or the loading / empty placeholder
pub fn render_list(loading: bool, resumes: &[&ResumeSummary]) -> String {
    if loading {
        return LOADING.to_string();
    }
    if resumes.is_empty() {
        return NO_RESUMES.to_string();
    }

    let mut out = String::new();
    for (i, r) in resumes.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}  [{}]", i + 1, r.name, r.filename);
    }
    out
}

pub fn render_detail(detail: &ResumeDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", detail.name);
    if !detail.skills.is_empty() {
        let _ = writeln!(out, "Skills: {}", detail.skills.join(", "));
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", detail.content);
    out
}

fn render_entry(out: &mut String, entry: &MatchEntry) {
    let _ = writeln!(out, "{}", entry.filename);
    let _ = writeln!(
        out,
        "  Matched Skills: {}",
        join_or(&entry.matched_skills, NO_MATCHED_SKILLS)
    );
    let _ = writeln!(out, "  Match Score: {}", format_score(entry.match_score));
}

pub fn render_match(result: &MatchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Job Match Results ==");
    let _ = writeln!(out, "Job Skills: {}", join_or(&result.job_skills, NO_JOB_SKILLS));
    for entry in &result.matches {
        let _ = writeln!(out);
        render_entry(&mut out, entry);
    }
    out
}

/// Whole screen: the list followed by any open modals
pub fn render(state: &AppState) -> String {
    let mut out = render_list(state.is_loading(), &state.filtered());
    if let Some(detail) = &state.detail {
        out.push('\n');
        out.push_str(&render_detail(detail));
    }
    if let Some(result) = &state.match_result {
        out.push('\n');
        out.push_str(&render_match(result));
    }
    out
}
