//! Main workflow orchestration logic
//!
//! Runs every input row through the same steps: list the repository's
//! release tags, parse them, and select the newest patch of each release line
//! at or above the row's minimum version. Argument parsing and printing stay
//! in main.rs.

use crate::analyzer::{select_latest_per_line_with, TieBreak};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{RepoId, RepoRequest, TagMatcher, Version};
use crate::error::Result;
use crate::source::ReleaseSource;

/// Options for the selection workflow
///
/// Decoupled from the CLI arguments so the workflow can be called
/// programmatically without depending on clap.
#[derive(Debug, Clone)]
pub struct WorkflowOptions {
    /// Patterns used to turn tag names into versions
    pub matcher: TagMatcher,

    /// Tie-break policy within a release line
    pub tie_break: TieBreak,

    /// Drop unparsable tags with a warning instead of failing
    pub skip_invalid_tags: bool,
}

impl WorkflowOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(WorkflowOptions {
            matcher: config.tags.matcher()?,
            tie_break: config.selection.tie_break,
            skip_invalid_tags: config.selection.skip_invalid_tags,
        })
    }
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        WorkflowOptions {
            matcher: TagMatcher::default(),
            tie_break: TieBreak::FirstSeen,
            skip_invalid_tags: false,
        }
    }
}

/// Result for one repository
#[derive(Debug, Clone, PartialEq)]
pub struct RepoReport {
    pub repo: RepoId,

    /// Newest patch of each qualifying release line, newest first
    pub versions: Vec<Version>,

    pub warnings: Vec<BoundaryWarning>,
}

/// Run the workflow over every request, in order, collecting the reports
///
/// Any source or parse failure aborts the whole run.
pub fn run_workflow<S: ReleaseSource + ?Sized>(
    source: &S,
    requests: &[RepoRequest],
    options: &WorkflowOptions,
) -> Result<Vec<RepoReport>> {
    let mut reports = Vec::with_capacity(requests.len());
    run_workflow_with(source, requests, options, |report| reports.push(report))?;
    Ok(reports)
}

/// Run the workflow over every request, handing each report to `on_report`
/// as soon as its repository is done
///
/// Reports delivered before a failure are not taken back.
pub fn run_workflow_with<S, F>(
    source: &S,
    requests: &[RepoRequest],
    options: &WorkflowOptions,
    mut on_report: F,
) -> Result<()>
where
    S: ReleaseSource + ?Sized,
    F: FnMut(RepoReport),
{
    for request in requests {
        on_report(process_request(source, request, options)?);
    }
    Ok(())
}

/// List, parse and select the releases of a single repository
pub fn process_request<S: ReleaseSource + ?Sized>(
    source: &S,
    request: &RepoRequest,
    options: &WorkflowOptions,
) -> Result<RepoReport> {
    let tags = source.list_release_tags(&request.repo)?;
    let mut warnings = Vec::new();

    if tags.is_empty() {
        warnings.push(BoundaryWarning::NoReleases {
            repo: request.repo.to_string(),
        });
    }

    let versions = parse_tags(&request.repo, &tags, options, &mut warnings)?;
    let selected = select_latest_per_line_with(&versions, &request.min_version, options.tie_break);

    if selected.is_empty() {
        if let Some(newest) = versions.iter().max() {
            warnings.push(BoundaryWarning::NothingAboveFloor {
                repo: request.repo.to_string(),
                min_version: request.min_version.to_string(),
                newest: newest.to_string(),
            });
        }
    }

    tracing::debug!(
        repo = %request.repo,
        tags = tags.len(),
        selected = selected.len(),
        "selected release lines"
    );

    Ok(RepoReport {
        repo: request.repo.clone(),
        versions: selected,
        warnings,
    })
}

fn parse_tags(
    repo: &RepoId,
    tags: &[String],
    options: &WorkflowOptions,
    warnings: &mut Vec<BoundaryWarning>,
) -> Result<Vec<Version>> {
    let mut versions = Vec::with_capacity(tags.len());
    for tag in tags {
        match options.matcher.parse_tag(tag) {
            Ok(version) => versions.push(version),
            Err(e) if options.skip_invalid_tags => {
                tracing::warn!(repo = %repo, %tag, "skipping unparsable tag");
                warnings.push(BoundaryWarning::UnparsableTag {
                    repo: repo.to_string(),
                    tag: tag.clone(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(versions)
}
