//! # cvextract-core — Resume Extraction Data Model
//!
//! Core types for the cvextract pipeline: the document format tag, the
//! error taxonomy, the heuristic field recognizer, and the storage
//! collaborator boundaries.
//!
//! The pipeline itself lives in the `cvextract-backend` crate; this crate is
//! deliberately free of I/O apart from the storage traits' contracts.
//!
//! ## Quick Start
//!
//! ```
//! use cvextract_core::recognize;
//!
//! let text = "Mary Watson\nmary@example.com\n(212) 555-0100";
//! let info = recognize(text);
//!
//! assert_eq!(info.name.as_deref(), Some("Mary Watson"));
//! assert_eq!(info.email.as_deref(), Some("mary@example.com"));
//! assert_eq!(info.phone.as_deref(), Some("(212) 555-0100"));
//! ```
//!
//! ## Design
//!
//! - **Heuristic, stateless matching**: the recognizer is a pure function
//!   over an immutable text value; no hidden state, no randomness.
//! - **Tagged format dispatch**: [`DocumentFormat`] is decided once at the
//!   filename boundary, never by sniffing file content.
//! - **True optional fields**: absent matches are `None`, never sentinel
//!   strings; "field not found" is a normal result, not an error.

pub mod candidate;
pub mod error;
pub mod format;
pub mod recognize;
pub mod store;

pub use candidate::{CandidateInfo, CandidateRecord, INITIAL_STATUS};
pub use error::{CvExtractError, Result};
pub use format::DocumentFormat;
pub use recognize::recognize;
pub use store::{BlobStore, CandidateStore, MemoryCandidateStore};
