//! Domain Value Objects
//!
//! Immutable value types shared across the bundling pipeline.

mod config_warning;
mod document_kind;
mod hash;
mod import_origin;
mod marker;
mod shared_patterns;

pub use config_warning::ConfigWarning;
pub use document_kind::DocumentKind;
pub use hash::ContentHash;
pub use import_origin::ImportOrigin;
pub use marker::{framed_marker, MarkerKind, MarkerToken};
pub use shared_patterns::{SharedImportPatterns, DEFAULT_SHARED_MODULE};
