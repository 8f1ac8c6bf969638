use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotedeskError {
    #[error("ticket {0} not found")]
    TicketNotFound(i64),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no route matches path '{0}'")]
    InvalidPath(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, QuotedeskError>;
