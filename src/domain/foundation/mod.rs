//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, numeric helpers, events and error
//! types that form the vocabulary of the decision support domain.

mod command;
mod errors;
mod events;
mod ids;
pub mod score;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{ApprovalId, RegionName};
pub use timestamp::Timestamp;
