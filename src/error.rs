pub type SoftframeResult<T> = Result<T, SoftframeError>;

/// Message substituted when the encoding library fails without any text.
pub const NO_MESSAGE: &str = "no message given";

#[derive(thiserror::Error, Debug)]
pub enum SoftframeError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("allocation error: {0}")]
    Allocation(String),

    #[error("encoding error: {message}")]
    Encoding { message: String },

    #[error("setup error: {0}")]
    Setup(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SoftframeError {
    pub fn allocation(msg: impl Into<String>) -> Self {
        Self::Allocation(msg.into())
    }

    /// Captures library error text; an empty message becomes the sentinel.
    pub fn encoding(msg: impl Into<String>) -> Self {
        let message = msg.into();
        let message = if message.trim().is_empty() {
            NO_MESSAGE.to_string()
        } else {
            message
        };
        Self::Encoding { message }
    }

    pub fn setup(msg: impl Into<String>) -> Self {
        Self::Setup(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
