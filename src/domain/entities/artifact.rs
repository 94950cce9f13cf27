//! Deployment artifact entity

use std::path::{Path, PathBuf};

use crate::domain::value_objects::ContentHash;

/// Generated, self-contained source for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentArtifact {
    target_name: String,
    output_path: PathBuf,
    text: String,
}

impl DeploymentArtifact {
    pub fn new(
        target_name: impl Into<String>,
        output_path: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            target_name: target_name.into(),
            output_path: output_path.into(),
            text: text.into(),
        }
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn hash(&self) -> ContentHash {
        ContentHash::from_content(&self.text)
    }
}
