use thiserror::Error;

use crate::templates;

/// Errors a user can see while producing or exporting a brief.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BriefError {
    #[error("project name is required")]
    MissingProjectName,

    #[error("requirements are required")]
    MissingRequirements,

    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("no brief has been generated yet")]
    NothingToCopy,
}

impl BriefError {
    /// The notice shown to the user for this error.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::MissingProjectName => templates::MISSING_PROJECT_NAME_NOTICE,
            Self::MissingRequirements => templates::MISSING_REQUIREMENTS_NOTICE,
            Self::ClipboardUnavailable(_) => templates::COPY_FAILED_NOTICE,
            Self::NothingToCopy => templates::NOTHING_TO_COPY_NOTICE,
        }
    }
}
