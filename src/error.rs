use thiserror::Error;

pub type MisResult<T> = Result<T, MisError>;

/// Message shown when the uploaded file cannot be read at all.
pub const READ_FAILURE_MESSAGE: &str = "Failed to read the file.";

/// Message shown when the file was read but is not a usable workbook.
pub const WORKBOOK_FAILURE_MESSAGE: &str =
    "Failed to process the file. Please ensure it is a valid Excel file.";

#[derive(Error, Debug)]
pub enum MisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl MisError {
    /// The single message surfaced to the person running the conversion.
    ///
    /// Read and decode failures collapse into two fixed messages; validation
    /// and configuration problems are reported with their own text.
    pub fn user_message(&self) -> String {
        match self {
            MisError::Io(_) => READ_FAILURE_MESSAGE.to_string(),
            MisError::Workbook(_) => WORKBOOK_FAILURE_MESSAGE.to_string(),
            MisError::Validation(msg) | MisError::Config(msg) | MisError::Output(msg) => {
                msg.clone()
            }
            MisError::Yaml(e) => format!("Invalid configuration file: {}", e),
        }
    }
}
