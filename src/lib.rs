pub mod configuration;
pub mod error;
/// HyperScore calculation
pub mod hyperscore;
pub mod ion;
pub mod scoring_result;
pub mod spectrum;
pub mod tolerance;
// Various utilities
pub mod utils;
