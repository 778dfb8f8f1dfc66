use thiserror::Error;

#[derive(Error, Debug)]
pub enum MultiplesError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Input file {path} does not exist")]
    NotFoundError { path: String },

    #[error("Permission denied for file {path}")]
    PermissionError { path: String },

    #[error("Input file {path} is empty")]
    EmptyInputError { path: String },

    #[error("{path} contains non unicode characters")]
    EncodingError { path: String },

    #[error("{path}: {line}: {reason}")]
    FormatError {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("{path}: {line}: line contains non natural values")]
    NotNaturalError { path: String, line: usize },

    #[error("Range error: {message}")]
    RangeError { message: String },
}

pub type Result<T> = std::result::Result<T, MultiplesError>;
