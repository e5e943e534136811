mod help_text;

use crate::sync::VcsFailurePolicy;
use crate::vcs::VcsTool;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Replaces out-of-date mimetype icons with their category template
#[derive(Parser, Debug)]
#[command(
    name = "iconcopier",
    version,
    about,
    long_about = help_text::ROOT_LONG_ABOUT
)]
pub struct Cli {
    /// Change to DIRECTORY before doing anything
    #[arg(short = 'C', value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Directory holding the icons and their templates
    #[arg(long, value_name = "PATH", default_value = "scalable/mimetypes")]
    pub icon_dir: PathBuf,

    /// File collecting the commit message
    #[arg(long, value_name = "PATH", default_value = "commit")]
    pub commit_file: PathBuf,

    /// Tool used to remove and copy icons
    #[arg(long, value_enum, value_name = "TOOL", default_value_t = VcsTool::Svn)]
    pub vcs: VcsTool,

    /// What to do when a remove or copy command fails
    #[arg(long, value_enum, value_name = "POLICY", default_value_t = VcsFailurePolicy::Warn)]
    pub on_vcs_failure: VcsFailurePolicy,

    /// Only report which icons would be replaced; touches neither icons nor the commit file
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug). Takes precedence over RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "log_level")]
    pub verbose: u8,

    /// Set the log level (error, warn, info, debug, trace). Takes precedence over RUST_LOG.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LevelFilter>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The level requested on the command line, if any.
    pub fn requested_level(&self) -> Option<LevelFilter> {
        match (self.log_level, self.verbose) {
            (Some(level), _) => Some(level),
            (None, 0) => None,
            (None, 1) => Some(LevelFilter::INFO),
            (None, _) => Some(LevelFilter::DEBUG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("iconcopier").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.directory, None);
        assert_eq!(cli.icon_dir, PathBuf::from("scalable/mimetypes"));
        assert_eq!(cli.commit_file, PathBuf::from("commit"));
        assert_eq!(cli.vcs, VcsTool::Svn);
        assert_eq!(cli.on_vcs_failure, VcsFailurePolicy::Warn);
        assert!(!cli.dry_run);
        assert_eq!(cli.requested_level(), None);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["-v"]).requested_level(), Some(LevelFilter::INFO));
        assert_eq!(parse(&["-vv"]).requested_level(), Some(LevelFilter::DEBUG));
        assert_eq!(
            parse(&["--log-level", "trace"]).requested_level(),
            Some(LevelFilter::TRACE)
        );
    }

    #[test]
    fn test_value_enums() {
        let cli = parse(&["--vcs", "git", "--on-vcs-failure", "abort"]);
        assert_eq!(cli.vcs, VcsTool::Git);
        assert_eq!(cli.on_vcs_failure, VcsFailurePolicy::Abort);
    }

    #[test]
    fn test_log_level_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["iconcopier", "-v", "--log-level", "info"]);
        assert!(result.is_err());
    }
}
