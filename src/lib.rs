//! Averaging of Global25 (G25) genetic coordinate samples.

pub mod app;
pub mod data;
pub mod error;

pub use data::aggregate::{aggregate, average_grouped, average_simple, mean};
pub use data::format::format_g25;
pub use data::group::infer_group;
pub use data::loader::{load_file, load_str};
pub use data::model::{Aggregate, AverageMode, GroupCounts, Sample, DIMS};
pub use error::{G25Error, RecordError, Result};
