pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod samples;
pub mod traits;
pub use traits::Interpolator;

pub(crate) mod divided;
pub(crate) mod expansion;
pub mod newton;
