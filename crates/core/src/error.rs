/// Domain errors raised by the design pipeline and its validators.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the first required field that was absent or empty.
        field: &'static str,
        /// Endpoint-level message listing every required field.
        message: String,
    },

    #[error("Invalid data URL format")]
    InvalidFormat,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Generation(String),
}
