use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("Please enter both title and content before adding.")]
    BlankField,

    #[error("window.document is not available")]
    DocumentUnavailable,

    #[error("invalid board config: {0}")]
    InvalidConfig(String),

    #[error("board state has been disposed")]
    Disposed,
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        BoardError::InvalidConfig(err.to_string())
    }
}
