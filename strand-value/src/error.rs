use std::any::Any;
use std::sync::Arc;

use thiserror::Error;

/// Why an [`Attempt`](crate::Attempt) failed.
#[derive(Debug, Clone, Error)]
pub enum Failure {
    /// The computation panicked. Carries the panic message when it was a
    /// string.
    #[error("computation panicked: {0}")]
    Panicked(String),
    /// The computation returned an error.
    #[error("computation failed: {0}")]
    Error(Arc<dyn std::error::Error + Send + Sync>),
}

impl Failure {
    pub fn from_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Failure::Error(Arc::new(error))
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "<non-string panic payload>".to_string()
        };
        Failure::Panicked(message)
    }
}

pub type Result<T> = std::result::Result<T, Failure>;
