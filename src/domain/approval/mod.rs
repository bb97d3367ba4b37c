//! Human approval of a recommended option.

mod errors;
mod record;

pub use errors::ApprovalError;
pub use record::ApprovalRecord;
