use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "twindiff",
    about = "twindiff: line-level text comparison for side-by-side views",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML engine config; command-line flags take precedence
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two files line by line
    Diff(DiffArgs),
    /// Write a unified patch taking LEFT to RIGHT
    Patch(PatchArgs),
    /// Apply a unified patch to a file
    Apply(ApplyArgs),
    /// Write a self-contained HTML comparison report
    Report(ReportArgs),
    /// Guess the language of a file
    Detect(DetectArgs),
}

/// Two input files plus naming and limit overrides.
#[derive(Args)]
pub struct PairArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Label for LEFT in patch and report headers (defaults to its path)
    #[arg(long)]
    pub left_name: Option<String>,
    /// Label for RIGHT in patch and report headers (defaults to its path)
    #[arg(long)]
    pub right_name: Option<String>,
    /// Maximum combined line count
    #[arg(long, conflicts_with = "no_limit")]
    pub max_lines: Option<usize>,
    /// Compare inputs of any size
    #[arg(long)]
    pub no_limit: bool,
}

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub pair: PairArgs,
    /// Collapse and trim whitespace before comparing
    #[arg(short = 'w', long)]
    pub ignore_whitespace: bool,
    /// Compare case-insensitively
    #[arg(short, long)]
    pub ignore_case: bool,
    /// Drop blank lines from both sides
    #[arg(short = 'B', long)]
    pub ignore_blank_lines: bool,
    /// Print only the stats summary
    #[arg(long)]
    pub stat: bool,
}

#[derive(Args)]
pub struct PatchArgs {
    #[command(flatten)]
    pub pair: PairArgs,
    /// Write the patch here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ApplyArgs {
    pub patch: PathBuf,
    pub file: PathBuf,
    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub pair: PairArgs,
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct DetectArgs {
    pub file: PathBuf,
    /// Skip detection and report this language
    #[arg(long)]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["twindiff", "diff", "a.txt", "b.txt"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.pair.left, PathBuf::from("a.txt"));
            assert_eq!(args.pair.right, PathBuf::from("b.txt"));
            assert!(!args.ignore_whitespace && !args.ignore_case && !args.ignore_blank_lines);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_diff_options() {
        let cli = Cli::try_parse_from(["twindiff", "diff", "-w", "-i", "-B", "a", "b"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert!(args.ignore_whitespace);
            assert!(args.ignore_case);
            assert!(args.ignore_blank_lines);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_diff_requires_two_files() {
        assert!(Cli::try_parse_from(["twindiff", "diff", "a"]).is_err());
    }

    #[test]
    fn parse_limit_flags_conflict() {
        let res = Cli::try_parse_from(["twindiff", "diff", "--max-lines", "5", "--no-limit", "a", "b"]);
        assert!(res.is_err());
    }

    #[test]
    fn parse_patch_with_names() {
        let cli = Cli::try_parse_from([
            "twindiff", "patch", "a", "b", "--left-name", "old", "-o", "out.patch",
        ])
        .unwrap();
        if let Command::Patch(args) = cli.command {
            assert_eq!(args.pair.left_name, Some("old".into()));
            assert_eq!(args.pair.right_name, None);
            assert_eq!(args.output, Some(PathBuf::from("out.patch")));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_apply() {
        let cli = Cli::try_parse_from(["twindiff", "apply", "x.patch", "a.txt"]).unwrap();
        if let Command::Apply(args) = cli.command {
            assert_eq!(args.patch, PathBuf::from("x.patch"));
            assert_eq!(args.file, PathBuf::from("a.txt"));
            assert!(args.output.is_none());
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_report_requires_output() {
        assert!(Cli::try_parse_from(["twindiff", "report", "a", "b"]).is_err());
        let cli = Cli::try_parse_from(["twindiff", "report", "a", "b", "-o", "r.html"]).unwrap();
        assert!(matches!(cli.command, Command::Report(_)));
    }

    #[test]
    fn parse_detect_override() {
        let cli = Cli::try_parse_from(["twindiff", "detect", "x", "--language", "rust"]).unwrap();
        if let Command::Detect(args) = cli.command {
            assert_eq!(args.language, Some("rust".into()));
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_globals() {
        let cli = Cli::try_parse_from([
            "twindiff", "--verbose", "--format", "json", "--config", "t.toml", "detect", "x",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert_eq!(cli.config, Some(PathBuf::from("t.toml")));
    }
}
