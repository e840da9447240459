use crate::validation::ValidationIssue;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two AWS INI documents an operation touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Config,
    Credentials,
}

impl Display for DocumentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Config => write!(f, "Config"),
            DocumentKind::Credentials => write!(f, "Credentials"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile '{profile}' not found in the AWS config or credentials file")]
    NotFound { profile: String },
    #[error("Profile '{profile}' already exists, use `config edit` to change it")]
    Duplicate { profile: String },
    #[error("Invalid profile settings: {}", join_issues(.0))]
    Validation(Vec<ValidationIssue>),
    #[error("Unable to read the AWS {document} file")]
    Read {
        document: DocumentKind,
        #[source]
        source: io::Error,
    },
    #[error("Unable to parse the AWS {document} file: {message}")]
    Parse {
        document: DocumentKind,
        message: String,
    },
    #[error("Unable to write the AWS {document} file, nothing was changed")]
    Write {
        document: DocumentKind,
        #[source]
        source: io::Error,
    },
    #[error(
        "The AWS {written} file was updated but writing the AWS {failed} file failed, the two files are now out of sync"
    )]
    InconsistentWrite {
        written: DocumentKind,
        failed: DocumentKind,
        #[source]
        source: io::Error,
    },
    #[error("Unable to update the current profile marker at {}", .path.display())]
    Marker {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to get user directories")]
    MissingHomeDir,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
