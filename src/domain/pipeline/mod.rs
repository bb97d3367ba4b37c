//! Decision pipeline - fusion → risk → options → governance for one region.

mod package;
mod runner;

pub use package::DecisionPackage;
pub use runner::{DecisionPipeline, PipelineOutput};
