//! Small multiples: several bar charts on one unified, comparable scale.

mod entry;
mod merge;
mod pipeline;

pub use entry::SmallMultipleEntry;
pub use merge::merge_labels;
pub use pipeline::{ChartLayout, MultiplesOptions, SmallMultiples};
