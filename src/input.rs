//! Reader for the repository list.
//!
//! The file is comma separated with a header row:
//!
//! ```text
//! repository,min_version
//! kubernetes/kubernetes,1.8.0
//! prometheus/prometheus,2.2.0
//! ```
//!
//! Cells are split on every comma. A cell may be wrapped in double quotes,
//! but RFC 4180 quoting is not supported: a quoted comma still splits the
//! cell and `""` escapes are kept verbatim. Repository names and versions
//! never contain either.

use crate::domain::{RepoId, RepoRequest, Version};
use crate::error::{ReleaseLinesError, Result};
use std::fs;
use std::path::Path;

/// Read and parse the repository list at `path`
pub fn read_requests<P: AsRef<Path>>(path: P) -> Result<Vec<RepoRequest>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        ReleaseLinesError::input(format!("Cannot read '{}': {}", path.display(), e))
    })?;
    let requests = parse_requests(&content)?;
    tracing::debug!(rows = requests.len(), file = %path.display(), "read repository list");
    Ok(requests)
}

/// Parse repository list content.
///
/// The first line is always treated as a header. Blank lines are ignored and
/// columns past the second are not read.
pub fn parse_requests(content: &str) -> Result<Vec<RepoRequest>> {
    content
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_row(index + 1, line))
        .collect()
}

fn parse_row(line_number: usize, line: &str) -> Result<RepoRequest> {
    let mut cells = line.split(',').map(clean_cell);

    let repo_cell = cells.next().unwrap_or_default();
    let version_cell = cells.next().ok_or_else(|| {
        ReleaseLinesError::input(format!(
            "line {}: missing minimum version column",
            line_number
        ))
    })?;

    let repo = RepoId::parse(repo_cell)
        .map_err(|e| ReleaseLinesError::input(format!("line {}: {}", line_number, e)))?;
    let min_version = Version::from_tag(version_cell)
        .map_err(|e| ReleaseLinesError::input(format!("line {}: {}", line_number, e)))?;

    Ok(RepoRequest::new(repo, min_version))
}

fn clean_cell(cell: &str) -> &str {
    let trimmed = cell.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|c| c.strip_suffix('"'))
        .unwrap_or(trimmed)
}
