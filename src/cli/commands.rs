//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand, PartialEq, Eq)]
pub(crate) enum Commands {
    /// Start an interactive conversation (default)
    Chat,
    /// Print a single greeting and exit
    Greet,
    /// Print the closing message for today and exit
    Farewell,
    /// List saved notes
    Notes,
    /// Save a note without starting a conversation
    Save {
        /// Time of day, e.g. 09:00
        time: String,
        /// What to do
        description: String,
        /// Date of the note (YYYYMMDD or YYYY-MM-DD); defaults to tomorrow
        #[arg(long)]
        date: Option<String>,
    },
}
