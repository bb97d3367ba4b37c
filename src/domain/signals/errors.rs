use thiserror::Error;

use super::{DataType, SourceType};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Reasons a signal record is refused at ingestion.
#[derive(Debug, Clone, Error)]
pub enum IngestionError {
    #[error("Data type {data_type} is not produced by {source_type} sources")]
    UnsupportedDataType {
        source_type: SourceType,
        data_type: DataType,
    },

    #[error("Invalid signal record: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl IngestionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            IngestionError::UnsupportedDataType { .. } => ErrorCode::InvalidFormat,
            IngestionError::Validation(_) => ErrorCode::ValidationFailed,
            IngestionError::Infrastructure(err) => err.code,
        }
    }
}
