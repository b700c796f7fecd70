use thiserror::Error;

use crate::form::lead::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("no lead webhook configured")]
    NotConfigured,
    #[error("failed to encode lead: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
}
