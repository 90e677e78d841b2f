//! Command-line argument definition and processing.

use clap::Parser;

use crate::config::Settings;
use crate::state::SortKey;

/// hackerstories - search Hacker News stories from the terminal
#[derive(Parser, Debug)]
#[command(name = "hackerstories")]
#[command(version)]
#[command(about = "Search Hacker News stories from the terminal", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print stories for a search term without starting the TUI
    #[arg(short, long)]
    pub search: Option<String>,

    /// Number of pages to fetch in print mode
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Sort key (none, title, author, comments, points)
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    /// Reverse the sort direction
    #[arg(long)]
    pub reverse: bool,

    /// Print stories as a JSON array instead of text lines (print mode)
    #[arg(long)]
    pub json: bool,

    /// Override the API root (default: https://hn.algolia.com/api/v1)
    #[arg(long)]
    pub api_base: Option<String>,
}

/// Parse `--sort`, accepting the same keys and aliases as `settings.conf`.
fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    SortKey::from_config_key(s).ok_or_else(|| {
        let keys: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_config_key()).collect();
        format!("unknown sort key '{s}' (expected one of: {})", keys.join(", "))
    })
}

/// What: Fold command-line overrides into loaded settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
/// - `settings`: Settings loaded from `settings.conf`.
///
/// Details:
/// - `--api-base` replaces the configured API root; blank values are ignored.
/// - `--sort` replaces the initial sort key.
pub fn apply_overrides(args: &Args, settings: &mut Settings) {
    if let Some(base) = args.api_base.as_deref().map(str::trim)
        && !base.is_empty()
    {
        tracing::info!(api_base = %base, "[Config] API root overridden from CLI");
        settings.api_base = base.to_string();
    }
    if let Some(key) = args.sort {
        settings.sort = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Flags parse into the expected fields and defaults.
    ///
    /// Inputs:
    /// - `--search rust --pages 3 --sort score --reverse`.
    ///
    /// Output:
    /// - Search `rust`, three pages, Points, reversed; log level defaults to `info`.
    fn parses_print_mode_flags() {
        let args = Args::parse_from([
            "hackerstories",
            "--search",
            "rust",
            "--pages",
            "3",
            "--sort",
            "score",
            "--reverse",
        ]);
        assert_eq!(args.search.as_deref(), Some("rust"));
        assert_eq!(args.pages, 3);
        assert_eq!(args.sort, Some(SortKey::Points));
        assert!(args.reverse);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    /// What: Invalid sort keys and zero pages are rejected by clap.
    fn rejects_bad_values() {
        assert!(Args::try_parse_from(["hackerstories", "--sort", "karma"]).is_err());
        assert!(Args::try_parse_from(["hackerstories", "--pages", "0"]).is_err());
    }

    #[test]
    /// What: Overrides replace settings only when given.
    ///
    /// Inputs:
    /// - No flags; then `--api-base http://localhost:9000 --sort title`; then a blank base.
    ///
    /// Output:
    /// - Defaults kept, then replaced; blank base ignored.
    fn overrides_apply_when_present() {
        let mut settings = Settings::default();
        apply_overrides(&Args::parse_from(["hackerstories"]), &mut settings);
        assert_eq!(settings, Settings::default());

        let args = Args::parse_from([
            "hackerstories",
            "--api-base",
            "http://localhost:9000",
            "--sort",
            "title",
        ]);
        apply_overrides(&args, &mut settings);
        assert_eq!(settings.api_base, "http://localhost:9000");
        assert_eq!(settings.sort, SortKey::Title);

        apply_overrides(
            &Args::parse_from(["hackerstories", "--api-base", "  "]),
            &mut settings,
        );
        assert_eq!(settings.api_base, "http://localhost:9000");
    }
}
