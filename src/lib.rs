pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod multiples;
pub mod output;

pub use error::{ChartError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_DATA: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
