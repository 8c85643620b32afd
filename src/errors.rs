use std::path::PathBuf;

use crate::config::ConfigError;

/// Which part of an exchange a body belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodySection {
    Request,
    Response,
}

impl std::fmt::Display for BodySection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BodySection::Request => write!(f, "request"),
            BodySection::Response => write!(f, "response"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    #[error("Description {description:?} does not follow the \"<word> Requests\" naming convention")]
    NamingConventionViolation { description: String },

    #[error("Cannot parse {section} body as JSON: {source}")]
    BodyParse {
        section: BodySection,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot reset documentation directory {}: {source}", .path.display())]
    DirectoryReset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write documentation file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
