//! Domain Ports
//!
//! Traits the use cases depend on: the filesystem, and the pipeline stages.

pub mod file_system;
pub mod pipeline;

pub use file_system::{FileSystem, FsError, FsResult};
pub use pipeline::{ArtifactAssembler, ImportMerger, MarkerValidator, SectionExtractor};
