//! Flood Sentinel - Human-in-the-loop flood decision support
//!
//! Turns uncertain multi-source signals about a region into an explainable
//! risk assessment, ranked response options and a governance verdict. No
//! option is ever executed; a recorded human approval is the only outcome.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
