use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Network failure or the 5s request timeout.
    #[error("Backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx status with whatever message the backend attached.
    #[error("Backend returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Signup against an email/username that is already registered.
    #[error("User already exists!")]
    Conflict,

    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response from backend: {0}")]
    Shape(String),
}

impl ApiError {
    /// Message safe to render inline on a page.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(e) if e.is_timeout() => {
                "Request timed out".to_string()
            }
            ApiError::Transport(_) => "Failed to reach the server".to_string(),
            ApiError::Status { message, .. } if !message.is_empty() => {
                message.clone()
            }
            ApiError::Status { status, .. } => format!("API error: {status}"),
            ApiError::Conflict => "User already exists!".to_string(),
            ApiError::Shape(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}
