//! Human approval handlers.

mod approve_option;

pub use approve_option::{ApproveOptionCommand, ApproveOptionHandler};
