//! Error types for the regression engine
//!
//! Failures surfaced by the regression engine and settings loading, along with a
//! `Result` alias.
//!
//! None of these are retried internally; they are precondition violations that the
//! caller is expected to report and recover from.

/// The variable whose variance collapsed to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// The predictor (x)
    AdvertisingSpend,

    /// The response (y)
    Sales,
}
impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variable::AdvertisingSpend => write!(f, "advertising spend"),
            Variable::Sales => write!(f, "sales"),
        }
    }
}

/// Errors that can occur while generating, fitting, or scoring data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Not enough observations to perform the requested operation.
    #[error("Not enough data: at least {required} observations are required, got {actual}")]
    InsufficientData {
        /// Minimum number of observations needed
        required: usize,
        /// Number of observations supplied
        actual: usize,
    },

    /// Every value of a variable is identical, so the slope or R² is undefined.
    ///
    /// For the predictor this means the line could be any slope through the mean;
    /// for sales it means there is no variance left for the model to explain.
    #[error("All {0} values are identical; the result is undefined")]
    InsufficientVariance(Variable),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Metrics were requested for an observation that has not been through `predict`.
    #[error("Observation #{id} has no prediction")]
    MissingPrediction {
        /// Id of the offending observation
        id: usize,
    },

    /// A model was requested before any data was generated.
    #[error("No data has been generated yet")]
    NoDataGenerated,

    /// The settings file could not be parsed.
    #[error("Failed to parse settings: {0}")]
    Config(#[from] toml::de::Error),

    /// A settings or output file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A session snapshot could not be serialized.
    #[error("Failed to serialize: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the regression engine
pub type Result<T> = std::result::Result<T, Error>;
