use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuadError {
    /// An equation field is NaN or infinite; such an equation is never solved or printed.
    #[error("Invalid equation: {field} = {value} is not finite")]
    InvalidEquation { field: &'static str, value: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl QuadError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuadError::InvalidEquation { .. } => {
                "Check that every coefficient and expected root is a finite number"
            }
            QuadError::IoError(_) => "Check that the file exists and is readable",
            QuadError::SerializationError(_) => "Retry without --json",
            QuadError::ConfigError { .. } => "Check the TOML syntax of the configuration file",
            QuadError::InvalidConfigValueError { .. } => {
                "Fix the offending value on the command line or in the configuration file"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            QuadError::InvalidEquation { .. } => 2,
            QuadError::ConfigError { .. } | QuadError::InvalidConfigValueError { .. } => 3,
            QuadError::IoError(_) | QuadError::SerializationError(_) => 4,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuadError>;
