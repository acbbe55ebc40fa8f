//! Analysis over parsed versions

pub mod line_selector;

pub use line_selector::{select_latest_per_line, select_latest_per_line_with, TieBreak};
