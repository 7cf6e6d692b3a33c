use thiserror::Error;
#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("illegal usage: {0}")]
    IllegalUsage(String),
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
