//! Import origin value object

use std::fmt;

use serde::Serialize;

/// Where an imported module comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportOrigin {
    StandardLibrary,
    ThirdParty,
    LocalImport,
    SharedConfig,
    RelativeImport,
}

impl ImportOrigin {
    /// Classification priority; higher wins when one statement binds several modules.
    pub fn priority(&self) -> u8 {
        match self {
            ImportOrigin::SharedConfig => 4,
            ImportOrigin::RelativeImport => 3,
            ImportOrigin::StandardLibrary => 2,
            ImportOrigin::ThirdParty => 1,
            ImportOrigin::LocalImport => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ImportOrigin::StandardLibrary => "standard_library",
            ImportOrigin::ThirdParty => "third_party",
            ImportOrigin::LocalImport => "local_import",
            ImportOrigin::SharedConfig => "shared_config",
            ImportOrigin::RelativeImport => "relative_import",
        }
    }
}

impl fmt::Display for ImportOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
