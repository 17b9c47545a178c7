// Error taxonomy for chart building

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    /// A shorthand that does not resolve to a column, or a sort target
    /// outside the allowed channels.
    #[error("InvalidDataReference: {0}")]
    InvalidDataReference(String),

    /// An option depends on a channel that was not supplied.
    #[error("MissingDataReference: {0}")]
    MissingDataReference(String),

    /// Two options that cannot be combined were both supplied.
    #[error("ConflictingArgs: {0}")]
    ConflictingArgs(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Data error: {0}")]
    Data(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl VizError {
    /// True for the structural validation failures raised while checking
    /// options and resolving channels, as opposed to input/output failures.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            VizError::InvalidDataReference(_)
                | VizError::MissingDataReference(_)
                | VizError::ConflictingArgs(_)
                | VizError::InvalidValue(_)
        )
    }
}
