use std::path::PathBuf;

use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] etfsieve_core::ValidationError),

    #[error("price store error in {path}: {message}")]
    Store { path: PathBuf, message: String },

    #[error("no risk-free rate available as of {as_of}; pass --risk-free or add rates.csv")]
    MissingRiskFreeRate { as_of: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::MissingRiskFreeRate { .. } => 3,
            Self::Store { .. } | Self::Csv(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
