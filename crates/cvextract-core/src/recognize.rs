//! Heuristic field recognition over extracted resume text
//!
//! Pure pattern matching: each field is matched independently against the
//! full text, first match wins, no scoring or disambiguation between
//! multiple candidates. Resume documents are unstructured and highly
//! heterogeneous (templates, fonts, languages); accuracy is explicitly
//! best-effort and correctable by a human in the downstream edit workflow.
//!
//! The name rule is intentionally naive: a capitalized two-or-more-word line
//! anywhere in the document (a section heading, a job title) matches as
//! readily as the candidate's actual name. Middle initials ("Jane A. Doe"),
//! lowercase particles, and non-Latin scripts do not match at all. The
//! `text_prefix` field exists so a reviewer can correct these cases.

use crate::candidate::CandidateInfo;
use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled patterns using std::sync::LazyLock (Rust 1.80+)

/// `local-part@domain.tld` with a two-or-more-letter trailing label.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("regex is compile-time constant")
});

/// Loose international/local phone shape: optional `+` country code,
/// optional parenthesized area code, then a 3+4 digit body. Every optional
/// group may be absent; a bare 7-digit run split 3+4 still matches.
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+\d{1,3}[\s-]?)?(\(?\d{3}\)?[\s-]?)?\d{3}[\s-]?\d{4}")
        .expect("regex is compile-time constant")
});

/// Two or more capitalized tokens separated by a single space or hyphen,
/// anchored at a line start. The separator class is `[\s-]`, so a newline
/// between tokens also counts — matching the behavior the rest of the
/// system was tuned against.
static RE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[A-Z][a-z]+([\s-][A-Z][a-z]+)+")
        .expect("regex is compile-time constant")
});

/// Number of characters of raw text kept as the manual-review prefix.
const TEXT_PREFIX_CHARS: usize = 100;

/// Recognize candidate fields in extracted resume text.
///
/// Never fails: a field with no match is `None`, and `text_prefix` is taken
/// unconditionally. Deterministic and side-effect-free — identical input
/// text always yields an identical [`CandidateInfo`].
///
/// # Examples
///
/// ```
/// use cvextract_core::recognize;
///
/// let info = recognize("John Smith\ncontact: john@example.com");
/// assert_eq!(info.name.as_deref(), Some("John Smith"));
/// assert_eq!(info.email.as_deref(), Some("john@example.com"));
/// assert_eq!(info.phone, None);
/// ```
#[must_use = "returns the recognized candidate fields"]
pub fn recognize(text: &str) -> CandidateInfo {
    CandidateInfo {
        name: first_match(&RE_NAME, text),
        email: first_match(&RE_EMAIL, text),
        phone: first_match(&RE_PHONE, text),
        text_prefix: text.chars().take(TEXT_PREFIX_CHARS).collect(),
    }
}

/// First match of `re` in `text`, verbatim.
#[inline]
fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}
