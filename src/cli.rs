use clap::Parser;
use pdm_credits::config::CreditsOptions;
use std::path::PathBuf;

/// Generate a credits page for a Python project managed by PDM
#[derive(Parser, Debug)]
#[command(name = "pdm-credits")]
#[command(version)]
#[command(
    about = "Generate a Markdown credits page from pyproject.toml and pdm.lock",
    long_about = None
)]
pub struct Args {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to pdm-credits.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// site-packages directory to read installed metadata from
    /// Can be specified multiple times; earlier directories take precedence
    #[arg(long = "site-packages", value_name = "DIR")]
    pub site_packages: Vec<PathBuf>,

    /// Link to additional credits, rendered at the end of the document
    #[arg(long, value_name = "URL")]
    pub more_credits: Option<String>,

    /// Custom Tera template to render instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// The options given on the command line, before config merging
    pub fn credits_options(&self) -> CreditsOptions {
        CreditsOptions {
            site_packages: self.site_packages.clone(),
            more_credits: self.more_credits.clone(),
            template: self.template.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["pdm-credits"]).unwrap();
        assert!(args.path.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(args.site_packages.is_empty());
        assert!(!args.verbose);
        assert_eq!(args.credits_options(), CreditsOptions::default());
    }

    #[test]
    fn test_parse_all_options() {
        let args = Args::try_parse_from([
            "pdm-credits",
            "-p",
            "project",
            "-o",
            "CREDITS.md",
            "--site-packages",
            "a",
            "--site-packages",
            "b",
            "--more-credits",
            "https://example.org",
            "-t",
            "credits.tera",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.path, Some(PathBuf::from("project")));
        assert_eq!(args.output, Some(PathBuf::from("CREDITS.md")));
        assert!(args.verbose);

        let options = args.credits_options();
        assert_eq!(
            options.site_packages,
            vec![PathBuf::from("a"), PathBuf::from("b")]
        );
        assert_eq!(options.more_credits.as_deref(), Some("https://example.org"));
        assert_eq!(options.template, Some(PathBuf::from("credits.tera")));
    }

    #[test]
    fn test_parse_unknown_flag_fails() {
        assert!(Args::try_parse_from(["pdm-credits", "--format", "json"]).is_err());
    }
}
