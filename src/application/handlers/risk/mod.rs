//! Risk assessment query handlers.

mod assess_regions;

pub use assess_regions::AssessRegionsHandler;
