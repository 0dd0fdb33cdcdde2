use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("{operation} failed{}: {message}", status_suffix(.status))]
    Remote {
        operation: String,
        status: Option<u16>,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn remote(operation: &str, status: Option<u16>, message: impl Into<String>) -> Self {
        AppError::Remote {
            operation: operation.to_string(),
            status,
            message: message.into(),
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" ({s})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, AppError>;
