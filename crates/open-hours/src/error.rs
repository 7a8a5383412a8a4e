//! Error types for open-hours operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenHoursError {
    #[error("Invalid time format: '{0}'")]
    InvalidTimeFormat(String),

    #[error("Invalid day range: {0}")]
    InvalidDayRange(String),

    #[error("Cannot parse opening hours for '{business}' in clause '{clause}': {reason}")]
    ScheduleParse {
        business: String,
        clause: String,
        reason: String,
    },

    #[error("Duplicate business name: '{0}'")]
    DuplicateBusiness(String),

    #[error("Schedule source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid query instant: {0}")]
    InvalidQueryInstant(String),
}

impl OpenHoursError {
    /// Attach the business name to a clause-level parse error.
    pub(crate) fn for_business(self, name: &str) -> Self {
        match self {
            OpenHoursError::ScheduleParse { clause, reason, .. } => OpenHoursError::ScheduleParse {
                business: name.to_string(),
                clause,
                reason,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, OpenHoursError>;
