use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "folio", bin_name = "folio", version = get_version())]
#[command(
    about = "Browse, filter and export an academic portfolio's posts and publications",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read config.json from this directory instead of the user config dir
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Print listings as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List blog posts (default command)
    #[command(alias = "ls")]
    Posts {
        /// Case-insensitive text to look for in title, excerpt and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Only posts carrying this tag (repeatable, all must match)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Show one blog post
    Post {
        /// The post's slug, e.g. `conda-hell`
        id: String,
    },

    /// List every tag used by the blog
    Tags,

    /// List publications grouped by year
    #[command(alias = "publications")]
    Pubs {
        /// Case-insensitive text to look for in title, authors and venue
        #[arg(short, long)]
        search: Option<String>,

        /// all, journal, conference or preprint
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// Export the matching publications as a BibTeX file
    Export {
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, default_value = "all")]
        category: String,

        /// Directory to write the file into
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        output: PathBuf,

        /// Write the BibTeX to stdout instead of a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Copy one publication's BibTeX entry to the clipboard
    Copy {
        /// Exact title or DOI
        key: String,

        /// Print the entry instead of copying it
        #[arg(long)]
        print: bool,
    },

    /// Refresh publications from a JSON source
    Sync {
        /// Source file (defaults to the configured publications-file)
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (posts-file, publications-file, researcher-id)
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_repeated_tags() {
        let cli = Cli::try_parse_from(["folio", "posts", "-t", "docker", "--tag", "reproducibility"])
            .unwrap();
        match cli.command {
            Some(Commands::Posts { tags, search }) => {
                assert_eq!(tags, vec!["docker", "reproducibility"]);
                assert!(search.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["folio", "pubs", "-c", "journal", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_export_stdout_conflicts_with_output() {
        assert!(Cli::try_parse_from(["folio", "export", "--stdout", "-o", "out"]).is_err());
    }
}
