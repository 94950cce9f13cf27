//! Domain Layer
//!
//! The text analysis at the heart of the bundler, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Per-build entities (SourceDocument, ImportStatement, ExtractedContent)
//! - `value_objects/` - Immutable value types (MarkerKind, ImportOrigin, ContentHash)
//! - `services/` - Pipeline stages (MarkerScanner, ContentExtractor, ModuleImportMerger)
//! - `ports/` - Interface definitions for infrastructure and pipeline stages
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Static composition** - Stages sit behind traits and are wired once at start-up
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
