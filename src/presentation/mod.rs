//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command and flag definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use lambda_bundler::presentation::factory;
//!
//! let use_case = factory::create_build_use_case(&config.pipeline_settings())?;
//! let result = use_case.execute(&targets, &layout.shared_path());
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, ValidateArgs, WorkspaceArgs};
pub use factory::{create_build_use_case, create_clean_use_case, create_validate_use_case};
