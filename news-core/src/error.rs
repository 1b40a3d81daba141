use thiserror::Error;

/// Failure of a single News API call. Callers never see a panic or a raw transport error
/// cross the client boundary; every failure arrives as one of these kinds.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status: {0}")]
    HttpStatus(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Failure to deliver a digest to one subscriber. Per-subscriber and non-fatal: fan-out logs
/// it and continues with the remaining subscribers.
#[derive(Error, Debug)]
#[error("delivery to chat {chat_id} failed: {reason}")]
pub struct DeliveryError {
    pub chat_id: i64,
    pub reason: String,
}

/// Failure of a subscriber store operation. The in-memory store never produces one; the
/// variant exists for durable backends behind the same trait.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("store error: {0}")]
    Store(String),
}

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("delivery error: {0}")]
    Delivery(#[from] DeliveryError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NewsError>;
