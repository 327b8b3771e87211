//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::indexing::WalkOptions;
use crate::matching::MatchMode;
use crate::pipeline::SearchOptions;
use crate::ranking::TruncationPolicy;

/// Search a codebase for functions by type signature
#[derive(Parser, Debug)]
#[command(name = "sigsearch")]
#[command(about = "Find functions whose signature resembles a pattern like \"(int, string) -> (bool, error)\"")]
#[command(version)]
pub struct Cli {
    /// Signature pattern, e.g. "(Path) -> (Path, error)"
    #[arg(value_name = "SIGNATURE")]
    pub signature: String,

    /// Directory (or file) to search
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Matching algorithm
    #[arg(short, long = "match", default_value = "default", value_enum, env = "SIGSEARCH_MATCH")]
    pub match_mode: MatchMode,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Extraction worker threads (0 = one per CPU)
    #[arg(short, long, default_value_t = 0, env = "SIGSEARCH_JOBS")]
    pub jobs: usize,

    /// Emit every ranked result instead of cutting off distant matches
    #[arg(long)]
    pub all: bool,

    /// Search hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Do not honor .gitignore / .ignore files
    #[arg(long)]
    pub no_ignore: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Do not draw the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `path:row:column:name (args) -> (rets)`, one per line
    #[default]
    Text,
    /// JSON array of results
    Json,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Library search options for these arguments
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            mode: self.match_mode,
            truncation: if self.all {
                TruncationPolicy::unbounded()
            } else {
                TruncationPolicy::default()
            },
            jobs: self.jobs,
            walk: WalkOptions {
                hidden: self.hidden,
                respect_ignore: !self.no_ignore,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sigsearch", "(int) -> (bool)"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.match_mode, MatchMode::Default);
        assert_eq!(cli.format, OutputFormat::Text);

        let options = cli.to_options();
        assert_eq!(options.truncation, TruncationPolicy::default());
        assert_eq!(options.walk, WalkOptions::default());
    }

    #[test]
    fn test_includes_and_flags() {
        let cli = Cli::try_parse_from([
            "sigsearch",
            "--match",
            "includes",
            "--all",
            "--no-ignore",
            "-j",
            "3",
            "(Path) -> (Path)",
            "src",
        ])
        .unwrap();
        let options = cli.to_options();
        assert_eq!(options.mode, MatchMode::Includes);
        assert_eq!(options.truncation, TruncationPolicy::unbounded());
        assert_eq!(options.jobs, 3);
        assert!(!options.walk.respect_ignore);
        assert_eq!(cli.root, PathBuf::from("src"));
    }

    #[test]
    fn test_signature_is_required() {
        assert!(Cli::try_parse_from(["sigsearch"]).is_err());
    }
}
