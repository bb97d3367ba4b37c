//! Request context shared by all handlers.
//!
//! Handlers take one `CommandMetadata` instead of loose correlation and
//! operator arguments, and stamp it onto every audit event they emit.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EventEnvelope;

/// Who asked, through which channel, and under which correlation id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Operator on whose behalf the request runs, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    operator: Option<String>,

    /// Links the audit events of a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Channel the request came from (e.g. "cli", "scheduler").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metadata with a freshly generated correlation id.
    pub fn correlated() -> Self {
        Self::new().with_correlation_id(Uuid::new_v4().to_string())
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Copies the request context onto an outgoing envelope.
    pub fn stamp(&self, mut envelope: EventEnvelope) -> EventEnvelope {
        if let Some(id) = &self.correlation_id {
            envelope = envelope.with_correlation_id(id.clone());
        }
        if let Some(operator) = &self.operator {
            envelope = envelope.with_operator(operator.clone());
        }
        if let Some(source) = &self.source {
            envelope = envelope.with_source(source.clone());
        }
        envelope
    }
}
