use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Please login first")]
    NotAuthenticated,
}

impl ClientError {
    /// Text shown to the user in an error banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Http(err) => format!("Error: {}", err),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Validation(message) => message.clone(),
            ClientError::NotAuthenticated => "Please login first".to_string(),
        }
    }
}
