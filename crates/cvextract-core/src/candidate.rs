//! Candidate value types
//!
//! [`CandidateInfo`] is the pipeline's output: the fields the heuristic
//! recognizer recovered from one resume document. [`CandidateRecord`] is the
//! longer-lived record the storage collaborator owns; it embeds the
//! recognized fields alongside workflow metadata that is set later by a
//! human, never derived by the pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Default workflow status for a freshly ingested candidate.
pub const INITIAL_STATUS: &str = "CV Review";

/// Structured result of running the recognizer over one resume's text.
///
/// A pure, deterministic function of the extracted text: identical input
/// always yields identical fields. The value has no identity or lifecycle of
/// its own; the caller merges it into a [`CandidateRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInfo {
    /// Best-guess full name, or `None` if no line matched the name rule.
    pub name: Option<String>,
    /// Best-guess email address, verbatim as matched.
    pub email: Option<String>,
    /// Best-guess phone number, verbatim as matched (no canonicalization).
    pub phone: Option<String>,
    /// First 100 characters of the extracted text, always present.
    ///
    /// Fallback hint for manual correction when the automated fields are
    /// missing or wrong; never interpreted as parsed data.
    pub text_prefix: String,
}

impl CandidateInfo {
    /// True if none of the heuristic fields matched.
    #[inline]
    #[must_use = "returns whether all recognized fields are empty"]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none()
    }
}

/// A candidate record as owned by the storage collaborator.
///
/// Everything beyond `name`/`email`/`phone`/`cv_file` is workflow metadata:
/// opaque payload set by a human in the downstream edit workflow, carried
/// here so the storage boundary can be exercised end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Storage-assigned identifier (0 until inserted).
    pub id: u64,
    /// Best-guess full name from the recognizer.
    pub name: Option<String>,
    /// Best-guess email address from the recognizer.
    pub email: Option<String>,
    /// Best-guess phone number from the recognizer.
    pub phone: Option<String>,
    /// Stored filename of the uploaded document blob.
    pub cv_file: String,
    /// Current workflow status.
    pub current_status: String,
    /// Due date for the current status, if one was set.
    pub status_due_date: Option<NaiveDate>,
    /// Person responsible for the current stage.
    pub assignee: Option<String>,
    /// Position the candidate applied for.
    pub position: Option<String>,
    /// Whether the candidate has been notified of the current outcome.
    pub notified: bool,
    /// Stage at which the candidate failed, if any.
    pub fail_stage: Option<String>,
    /// Free-text reason for failure.
    pub failed_reason: Option<String>,
    /// Free-text sourcing notes.
    pub source_notes: Option<String>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last-modified timestamp, maintained by the store on update.
    pub last_updated: DateTime<Utc>,
}

impl CandidateRecord {
    /// Build a new record from the recognizer output and the stored filename.
    ///
    /// Workflow fields start at their defaults (`current_status` =
    /// [`INITIAL_STATUS`], everything else unset); the store assigns the id
    /// on insert.
    #[must_use = "constructs a record from recognized fields"]
    pub fn from_info(info: &CandidateInfo, cv_file: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name: info.name.clone(),
            email: info.email.clone(),
            phone: info.phone.clone(),
            cv_file: cv_file.into(),
            current_status: INITIAL_STATUS.to_string(),
            status_due_date: None,
            assignee: None,
            position: None,
            notified: false,
            fail_stage: None,
            failed_reason: None,
            source_notes: None,
            created: now,
            last_updated: now,
        }
    }
}
