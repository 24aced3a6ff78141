use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid spot payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Upstream error: {0}")]
    Upstream(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
