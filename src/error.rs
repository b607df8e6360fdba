//! Error types.

use thiserror::Error;

use crate::pass::charset::CharClass;

/// Failure to build a password from a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// Requested length is below [`crate::pass::MIN_LENGTH`]. Carries the requested length.
    #[error("Password length must be at least {min} to include all character types.", min = crate::pass::MIN_LENGTH)]
    InvalidLength(usize),

    /// Requested length is above [`crate::pass::MAX_LENGTH`].
    #[error("Password length must be at most {max} characters.", max = crate::pass::MAX_LENGTH)]
    TooLong(usize),

    /// Exclusions left nothing to draw from: either every enabled pool
    /// (`None`) or one mandatory class.
    #[error("{}", empty_pool_message(.0))]
    EmptyPool(Option<CharClass>),
}

fn empty_pool_message(class: &Option<CharClass>) -> String {
    match class {
        None => "Character pools are empty after excluding specified characters.".to_string(),
        Some(class) => {
            format!("No {class} characters remain after excluding specified characters.")
        }
    }
}

/// Failure to read or write the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl SettingsError {
    pub fn io(path: &str, source: std::io::Error) -> Self {
        SettingsError::Io {
            path: path.to_string(),
            source,
        }
    }
}

/// Failure of a non-interactive run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("output failed: {0}")]
    Output(#[from] std::io::Error),

    /// The user declined to continue; nothing to report.
    #[error("aborted")]
    Aborted,
}
