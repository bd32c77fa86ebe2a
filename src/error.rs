use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")] Config(String),

    #[error("RPC error: {0}")] Rpc(String),

    #[error("HTTP error: {0}")] Http(String),

    #[error("Parse error: {0}")] Parse(String),

    #[error("Wallet error: {0}")] Wallet(String),

    #[error("Serialization error: {0}")] Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")] Io(#[from] std::io::Error),
}

pub type BotResult<T> = Result<T, BotError>;
