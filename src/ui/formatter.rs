//! Pure formatting functions for report output.
//!
//! Report lines go to stdout; status, warnings and errors go to stderr so the
//! report can be piped on its own.

use crate::boundary::BoundaryWarning;
use crate::domain::{RepoId, Version};
use console::style;

/// Format the report line of one repository.
///
/// # Example
/// ```
/// use release_lines::domain::{RepoId, Version};
/// use release_lines::ui::formatter::format_latest_versions;
///
/// let line = format_latest_versions(
///     &RepoId::new("kubernetes", "kubernetes"),
///     &[Version::new(1, 10, 1), Version::new(1, 9, 6)],
/// );
/// assert_eq!(line, "latest versions of kubernetes/kubernetes: [1.10.1 1.9.6]");
/// ```
pub fn format_latest_versions(repo: &RepoId, versions: &[Version]) -> String {
    let joined = versions
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("latest versions of {}: [{}]", repo, joined)
}

/// Print the report line of one repository to stdout.
pub fn display_latest_versions(repo: &RepoId, versions: &[Version]) {
    println!("{}", format_latest_versions(repo, versions));
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}
