use thiserror::Error;

/// Errors that can occur during message bus operations
#[derive(Debug, Error)]
pub enum BusError {
    /// Broker connection failed or was lost
    #[error("Broker connection error: {0}")]
    Connection(String),

    /// Publish request could not be queued or delivered
    #[error("Publish error: {0}")]
    Publish(String),

    /// Subscription request failed
    #[error("Subscribe error: {0}")]
    Subscribe(String),
}

impl From<rumqttc::ClientError> for BusError {
    fn from(e: rumqttc::ClientError) -> Self {
        BusError::Publish(e.to_string())
    }
}

/// Specialized result type for bus operations
pub type BusResult<T> = Result<T, BusError>;
