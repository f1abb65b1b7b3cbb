//! Statistics derived from a completed sample

mod histogram;
mod summary;

pub use histogram::{Histogram, HistogramBin};
pub use summary::Summary;
