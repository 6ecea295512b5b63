//! Command-line argument definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kheti_guru::assistant::MatcherProfile;

/// Kheti Guru - localized farming assistant strings and question routing
#[derive(Parser, Debug)]
#[command(name = "kheti-guru")]
#[command(version)]
#[command(about = "Localized farming assistant strings and keyword question routing", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (default: ~/.config/kheti-guru/settings.conf)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a catalog key in the active language
    Translate {
        /// Dot-namespaced key, e.g. dashboard.welcome
        key: String,
        /// Placeholder value as name=value (repeatable)
        #[arg(short, long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,
    },
    /// Show, change or list the interface language
    Language {
        /// Language action
        #[command(subcommand)]
        action: LanguageAction,
    },
    /// Print the topic a question is routed to
    Classify {
        /// Question text
        text: String,
        /// Built-in matcher profile (chat or voice)
        #[arg(long)]
        profile: Option<MatcherProfile>,
    },
    /// Answer a question with the localized canned reply
    Ask {
        /// Question text
        text: String,
        /// Built-in matcher profile (chat or voice)
        #[arg(long)]
        profile: Option<MatcherProfile>,
        /// Print the reply as JSON
        #[arg(long)]
        json: bool,
    },
    /// Report keys a language does not translate yet
    Coverage {
        /// Language code; all languages when omitted
        code: Option<String>,
    },
}

/// `language` subcommands.
#[derive(Subcommand, Debug)]
pub enum LanguageAction {
    /// Print the active language
    Show,
    /// Make a language active and remember it
    Set {
        /// Language code (en, hi, mr, pa, ta, te, gu, bn)
        code: String,
    },
    /// List supported languages
    List,
}
