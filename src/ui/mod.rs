//! User-facing output.
//!
//! - `formatter` - report lines and status messages

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_latest_versions, display_status,
    format_latest_versions,
};
