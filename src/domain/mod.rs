//! Domain layer containing the decision support logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, scores, events, errors)
//! - `signals` - Raw signal records and the signal catalog
//! - `fusion` - Per-region reconciliation of raw records
//! - `risk` - Explainable hazard × exposure × vulnerability assessment
//! - `decision` - Response option playbooks
//! - `governance` - Human-in-the-loop policy gate
//! - `pipeline` - Chains the four engines into a decision package
//! - `approval` - Human approval records
//! - `audit` - Audit event vocabulary and summaries

pub mod approval;
pub mod audit;
pub mod decision;
pub mod foundation;
pub mod fusion;
pub mod governance;
pub mod pipeline;
pub mod risk;
pub mod signals;
