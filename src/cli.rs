//! CLI - Command line interface for podtui
//!
//! Every dashboard action is scriptable. All output is JSON-parseable with
//! --json, and exit codes are semantic so scripts can branch on them.
//!
//! # Examples
//!
//! ```bash
//! # List shows, filtered and sorted
//! podtui shows --search crime --sort title-asc
//!
//! # Inspect one show
//! podtui info 10716 --json
//!
//! # Favorites survive across runs
//! podtui favorites --toggle 42
//! podtui favorites
//!
//! # Play an episode through mpv
//! podtui play 10716 --season 2 --episode 5
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::models::SortKey;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Show, season, or episode not found
    NotFound = 4,
    /// Audio player failed to start
    PlaybackFailed = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// podtui - terminal dashboard for the Audio Horizon podcast directory
///
/// Run without arguments to launch the interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "podtui",
    version,
    about = "Terminal dashboard for the Audio Horizon podcast directory",
    long_about = "Browse the podcast directory, keep favorites, and play \
                  episodes through mpv.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  podtui                              Launch interactive TUI\n\
                  podtui shows --search crime         Search the catalog\n\
                  podtui info 10716                   Seasons and episodes\n\
                  podtui favorites --toggle 42        Flip a favorite\n\
                  podtui play 10716 -s 2 -e 5         Play an episode"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Commands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List shows from the directory
    #[command(visible_alias = "ls")]
    Shows(ShowsCmd),

    /// Show one show's seasons and episodes
    #[command(visible_alias = "i")]
    Info(InfoCmd),

    /// List favorites, or toggle one
    #[command(visible_alias = "fav")]
    Favorites(FavoritesCmd),

    /// Print the genre code table
    Genres(GenresCmd),

    /// Play an episode through the audio player
    #[command(visible_alias = "p")]
    Play(PlayCmd),
}

/// Arguments for the shows command
#[derive(Args, Debug)]
pub struct ShowsCmd {
    /// Case-insensitive title substring filter
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort order
    #[arg(long, value_enum, default_value = "none")]
    pub sort: SortArg,

    /// Only show favourited shows
    #[arg(long, short = 'f')]
    pub favorites_only: bool,

    /// Maximum number of rows
    #[arg(long, short = 'l', default_value = "50")]
    pub limit: usize,
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoCmd {
    /// Show id
    pub id: u64,
}

/// Arguments for the favorites command
#[derive(Args, Debug)]
pub struct FavoritesCmd {
    /// Toggle this show id instead of listing
    #[arg(long, short = 't')]
    pub toggle: Option<u64>,
}

/// Arguments for the genres command
#[derive(Args, Debug)]
pub struct GenresCmd {}

/// Arguments for the play command
#[derive(Args, Debug)]
pub struct PlayCmd {
    /// Show id
    pub show_id: u64,

    /// Season number
    #[arg(long, short = 's', default_value = "1")]
    pub season: u64,

    /// Episode number within the season
    #[arg(long, short = 'e', default_value = "1")]
    pub episode: u64,

    /// Audio player command override
    #[arg(long)]
    pub player: Option<String>,
}

/// Sort order flag, mirroring the TUI sort cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    None,
    TitleAsc,
    TitleDesc,
    DateAsc,
    DateDesc,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortKey::None,
            SortArg::TitleAsc => SortKey::TitleAsc,
            SortArg::TitleDesc => SortKey::TitleDesc,
            SortArg::DateAsc => SortKey::DateAsc,
            SortArg::DateDesc => SortKey::DateDesc,
        }
    }
}

// =============================================================================
// Output Handling
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// Output writer honoring --json and --quiet
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data as JSON (text-mode callers format themselves)
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print a plain text line (skipped in JSON mode)
    pub fn line(&self, msg: impl std::fmt::Display) {
        if !self.json {
            println!("{}", msg);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet and JSON modes)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["podtui"]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_shows_command_with_flags() {
        let cli = Cli::parse_from([
            "podtui",
            "shows",
            "--search",
            "crime",
            "--sort",
            "title-asc",
            "--favorites-only",
            "--limit",
            "10",
        ]);
        assert!(cli.is_cli_mode());
        if let Some(Command::Shows(cmd)) = cli.command {
            assert_eq!(cmd.search.as_deref(), Some("crime"));
            assert_eq!(cmd.sort, SortArg::TitleAsc);
            assert!(cmd.favorites_only);
            assert_eq!(cmd.limit, 10);
        } else {
            panic!("Expected Shows command");
        }
    }

    #[test]
    fn test_shows_defaults() {
        let cli = Cli::parse_from(["podtui", "shows"]);
        if let Some(Command::Shows(cmd)) = cli.command {
            assert!(cmd.search.is_none());
            assert_eq!(cmd.sort, SortArg::None);
            assert!(!cmd.favorites_only);
            assert_eq!(cmd.limit, 50);
        } else {
            panic!("Expected Shows command");
        }
    }

    #[test]
    fn test_sort_arg_wire_names_match_sort_keys() {
        for (raw, expected) in [
            ("none", SortKey::None),
            ("title-asc", SortKey::TitleAsc),
            ("title-desc", SortKey::TitleDesc),
            ("date-asc", SortKey::DateAsc),
            ("date-desc", SortKey::DateDesc),
        ] {
            let cli = Cli::parse_from(["podtui", "shows", "--sort", raw]);
            let Some(Command::Shows(cmd)) = cli.command else {
                panic!("Expected Shows command");
            };
            assert_eq!(SortKey::from(cmd.sort), expected, "wire name {}", raw);
        }
    }

    #[test]
    fn test_info_command() {
        let cli = Cli::parse_from(["podtui", "info", "10716"]);
        if let Some(Command::Info(cmd)) = cli.command {
            assert_eq!(cmd.id, 10716);
        } else {
            panic!("Expected Info command");
        }
    }

    #[test]
    fn test_favorites_toggle_flag() {
        let cli = Cli::parse_from(["podtui", "favorites", "--toggle", "42"]);
        if let Some(Command::Favorites(cmd)) = cli.command {
            assert_eq!(cmd.toggle, Some(42));
        } else {
            panic!("Expected Favorites command");
        }
    }

    #[test]
    fn test_play_command_defaults_to_first_episode() {
        let cli = Cli::parse_from(["podtui", "play", "7"]);
        if let Some(Command::Play(cmd)) = cli.command {
            assert_eq!(cmd.show_id, 7);
            assert_eq!(cmd.season, 1);
            assert_eq!(cmd.episode, 1);
            assert!(cmd.player.is_none());
        } else {
            panic!("Expected Play command");
        }
    }

    #[test]
    fn test_command_aliases() {
        let cli = Cli::parse_from(["podtui", "ls"]);
        assert!(matches!(cli.command, Some(Command::Shows(_))));

        let cli = Cli::parse_from(["podtui", "fav"]);
        assert!(matches!(cli.command, Some(Command::Favorites(_))));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["podtui", "--json", "--quiet", "shows"]);
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Error), 1);
        assert_eq!(i32::from(ExitCode::InvalidArgs), 2);
        assert_eq!(i32::from(ExitCode::NetworkError), 3);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
        assert_eq!(i32::from(ExitCode::PlaybackFailed), 5);
    }

    #[test]
    fn test_json_output_skips_empty_fields() {
        let ok = JsonOutput::success(vec![1, 2, 3]);
        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"{"data":[1,2,3]}"#);

        let err = JsonOutput::<()>::error_msg("boom", ExitCode::NetworkError);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error":"boom","exit_code":3}"#);
    }
}
