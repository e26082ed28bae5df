use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tl-desk")]
#[command(about = "Desktop-style translation tool for the terminal")]
#[command(version)]
pub struct Args {
    /// File to translate once (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Source language code (ISO 639-1, e.g., en, fr; 'auto' to detect)
    #[arg(short = 'f', long = "from", global = true)]
    pub from: Option<String>,

    /// Target language code (ISO 639-1, e.g., ja, en, zh-CN)
    #[arg(short = 't', long = "to", global = true)]
    pub to: Option<String>,

    /// Provider name (e.g., google, or one from the config file)
    #[arg(short = 'p', long, global = true)]
    pub provider: Option<String>,

    /// Model name (OpenAI-compatible providers)
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Print debug diagnostics
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the interactive translation session
    Session,
    /// List supported language codes
    Languages,
    /// List configured providers
    Providers {
        /// Show details for a specific provider
        provider: Option<String>,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot_options() {
        let args = Args::try_parse_from(["tl-desk", "-f", "en", "-t", "fr", "notes.txt"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(args.from.as_deref(), Some("en"));
        assert_eq!(args.to.as_deref(), Some("fr"));
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_session_with_global_options() {
        let args = Args::try_parse_from(["tl-desk", "session", "--to", "ja", "-p", "local"]).unwrap();
        assert!(matches!(args.command, Some(Command::Session)));
        assert_eq!(args.to.as_deref(), Some("ja"));
        assert_eq!(args.provider.as_deref(), Some("local"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["tl-desk", "-q", "-v"]).is_err());
    }
}
