use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use release_lines::cli::{run_workflow_with, WorkflowOptions};
use release_lines::config::{self, Config};
use release_lines::input;
use release_lines::source::{GithubSource, LocalGitSource, ReleaseSource};
use release_lines::ui;
use release_lines::TieBreak;

/// Environment variable holding the log filter
const LOG_ENV: &str = "RELEASE_LINES_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum SourceKind {
    /// GitHub releases API
    Github,
    /// Local clones under --git-root
    Git,
}

#[derive(clap::Parser)]
#[command(
    name = "release-lines",
    version,
    about = "Report the latest patch release of every major.minor line"
)]
struct Args {
    /// CSV file with a header row, then `owner/repo,min_version` rows
    #[arg(value_name = "CSV_FILE")]
    input: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, value_enum, default_value_t = SourceKind::Github, help = "Where release tags are listed from")]
    source: SourceKind,

    #[arg(long, value_name = "DIR", help = "Root directory of local clones (<DIR>/<owner>/<repo>)")]
    git_root: Option<PathBuf>,

    #[arg(long, value_name = "N", help = "Releases requested per GitHub API page")]
    per_page: Option<u32>,

    #[arg(long, help = "Skip tags that are not semantic versions instead of failing")]
    skip_invalid: bool,

    #[arg(long, value_enum, help = "How to settle equal patch numbers within a line")]
    tie_break: Option<TieBreak>,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .without_time()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: logging was already initialized");
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    apply_overrides(&mut config, &args);

    let requests = input::read_requests(&args.input)?;
    if requests.is_empty() {
        ui::display_status(&format!("No repositories listed in {}", args.input.display()));
        return Ok(());
    }

    let source = build_source(&args, &config)?;
    let options = WorkflowOptions::from_config(&config)?;

    let mut done = 0;
    run_workflow_with(source.as_ref(), &requests, &options, |report| {
        for warning in &report.warnings {
            ui::display_boundary_warning(warning);
        }
        ui::display_latest_versions(&report.repo, &report.versions);
        done += 1;
    })
    .with_context(|| match requests.get(done) {
        Some(request) => format!("Failed to process {}", request.repo),
        None => "Failed to process repositories".to_string(),
    })?;

    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(per_page) = args.per_page {
        config.github.per_page = per_page;
    }
    if let Some(tie_break) = args.tie_break {
        config.selection.tie_break = tie_break;
    }
    if args.skip_invalid {
        config.selection.skip_invalid_tags = true;
    }
}

fn build_source(args: &Args, config: &Config) -> Result<Box<dyn ReleaseSource>> {
    match args.source {
        SourceKind::Github => {
            let source = GithubSource::from_config(&config.github)
                .context("Failed to create GitHub client")?;
            Ok(Box::new(source))
        }
        SourceKind::Git => {
            let Some(root) = args.git_root.as_ref() else {
                bail!("--git-root is required with --source git");
            };
            Ok(Box::new(LocalGitSource::new(root)))
        }
    }
}
