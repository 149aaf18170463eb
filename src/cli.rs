//! CLI argument parsing module for repoprof

use crate::error::ConfigError;
use clap::Parser;
use regex::Regex;
use std::sync::LazyLock;

static REPO_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/([\w\-]+/[\w\-]+)").unwrap());

/// GitHub repository health profiler
#[derive(Parser, Debug, Clone)]
#[command(name = "repoprof", version, about = "GitHub repository health profiler")]
pub struct CliArgs {
    /// GitHub repository URL (https://github.com/owner/repo)
    pub repo_url: String,

    // General options
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output, no progress display
    #[arg(short, long)]
    pub quiet: bool,

    /// Skip AI summary generation
    #[arg(long)]
    pub no_summary: bool,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CliArgs {
    /// Extract "owner/repo" from the repository URL argument
    pub fn repo_name(&self) -> Result<String, ConfigError> {
        parse_repo_name(&self.repo_url)
    }
}

/// Pull "owner/repo" out of a GitHub repository URL
pub fn parse_repo_name(url: &str) -> Result<String, ConfigError> {
    REPO_URL_RE
        .captures(url)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| ConfigError::invalid_repo_url(url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(["repoprof", "https://github.com/psf/requests"]);
        assert_eq!(args.repo_url, "https://github.com/psf/requests");
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(!args.no_summary);
        assert!(!args.json);
    }

    #[test]
    fn test_flags() {
        let args = CliArgs::parse_from([
            "repoprof",
            "https://github.com/psf/requests",
            "--verbose",
            "--json",
            "--no-summary",
        ]);
        assert!(args.verbose);
        assert!(args.json);
        assert!(args.no_summary);
    }

    #[test]
    fn test_quiet_short_flag() {
        let args = CliArgs::parse_from(["repoprof", "https://github.com/a/b", "-q"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_parse_repo_name() {
        assert_eq!(
            parse_repo_name("https://github.com/psf/requests").unwrap(),
            "psf/requests"
        );
    }

    #[test]
    fn test_parse_repo_name_with_trailing_path() {
        assert_eq!(
            parse_repo_name("https://github.com/psf/requests/tree/main").unwrap(),
            "psf/requests"
        );
    }

    #[test]
    fn test_parse_repo_name_without_scheme() {
        assert_eq!(
            parse_repo_name("github.com/rust-lang/cargo").unwrap(),
            "rust-lang/cargo"
        );
    }

    #[test]
    fn test_parse_repo_name_hyphen_and_underscore() {
        assert_eq!(
            parse_repo_name("https://github.com/my-org/my_repo").unwrap(),
            "my-org/my_repo"
        );
    }

    #[test]
    fn test_parse_repo_name_invalid() {
        assert!(parse_repo_name("https://gitlab.com/owner/repo").is_err());
        assert!(parse_repo_name("not a url").is_err());
        assert!(parse_repo_name("https://github.com/only-owner").is_err());
    }

    #[test]
    fn test_repo_name_from_args() {
        let args = CliArgs::parse_from(["repoprof", "https://github.com/psf/requests"]);
        assert_eq!(args.repo_name().unwrap(), "psf/requests");
    }
}
