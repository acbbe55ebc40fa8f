pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod input;
pub mod source;
pub mod ui;

pub use analyzer::{select_latest_per_line, select_latest_per_line_with, TieBreak};
pub use domain::{compare_precedence, Version};
pub use error::{ReleaseLinesError, Result};
