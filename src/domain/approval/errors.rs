use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Reasons an approval request is rejected.
#[derive(Debug, Clone, Error)]
pub enum ApprovalError {
    #[error("Region not found: {0}")]
    RegionNotFound(String),

    #[error("Invalid option '{option_id}' for region {region}")]
    InvalidOption { region: String, option_id: String },

    #[error("Invalid approval request: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Infrastructure(#[from] DomainError),
}

impl ApprovalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApprovalError::RegionNotFound(_) => ErrorCode::RegionNotFound,
            ApprovalError::InvalidOption { .. } => ErrorCode::InvalidOption,
            ApprovalError::Validation(_) => ErrorCode::ValidationFailed,
            ApprovalError::Infrastructure(err) => err.code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_variants() {
        assert_eq!(
            ApprovalError::RegionNotFound("Atlantis".into()).code(),
            ErrorCode::RegionNotFound
        );
        let err = ApprovalError::InvalidOption {
            region: "Coastal Zone A".into(),
            option_id: "launch_rockets".into(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidOption);
        assert_eq!(
            err.to_string(),
            "Invalid option 'launch_rockets' for region Coastal Zone A"
        );
    }
}
