use crate::domain::{ReleaseLine, Version};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How to settle two versions of one line that share a patch number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Keep whichever version appeared first in the input
    #[default]
    FirstSeen,
    /// Keep the version with the highest semver precedence
    HighestPrecedence,
}

/// Select the newest patch release of every major.minor line at or above `floor`.
///
/// Uses [`TieBreak::FirstSeen`]: within a line a later version only replaces
/// the kept one when its patch number is strictly greater, so `1.6.3` arriving
/// after `1.6.3-alpha.1` does not displace it.
///
/// The result is sorted newest first and holds at most one version per line.
///
/// # Example
/// ```
/// use release_lines::analyzer::select_latest_per_line;
/// use release_lines::domain::Version;
///
/// let versions: Vec<Version> = ["1.8.11", "1.9.6", "1.10.1", "1.9.5", "1.7.14"]
///     .iter()
///     .map(|s| Version::parse(s).unwrap())
///     .collect();
/// let latest = select_latest_per_line(&versions, &Version::new(1, 8, 0));
/// let rendered: Vec<String> = latest.iter().map(|v| v.to_string()).collect();
/// assert_eq!(rendered, ["1.10.1", "1.9.6", "1.8.11"]);
/// ```
pub fn select_latest_per_line(versions: &[Version], floor: &Version) -> Vec<Version> {
    select_latest_per_line_with(versions, floor, TieBreak::FirstSeen)
}

/// [`select_latest_per_line`] with an explicit tie-break policy
pub fn select_latest_per_line_with(
    versions: &[Version],
    floor: &Version,
    tie_break: TieBreak,
) -> Vec<Version> {
    let mut selected: Vec<Version> = Vec::new();
    let mut slots: HashMap<ReleaseLine, usize> = HashMap::new();

    for version in versions.iter().filter(|v| *v >= floor) {
        match slots.get(&version.line()) {
            Some(&index) => {
                if supersedes(version, &selected[index], tie_break) {
                    selected[index] = version.clone();
                }
            }
            None => {
                slots.insert(version.line(), selected.len());
                selected.push(version.clone());
            }
        }
    }

    selected.sort_by(|a, b| b.cmp(a));
    selected
}

fn supersedes(candidate: &Version, kept: &Version, tie_break: TieBreak) -> bool {
    match tie_break {
        TieBreak::FirstSeen => candidate.patch() > kept.patch(),
        TieBreak::HighestPrecedence => candidate > kept,
    }
}
