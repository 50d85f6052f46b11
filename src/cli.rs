//! Command-line interface definition using clap.

use std::fmt;

use clap::{Parser, ValueEnum};

/// Parse a WhatsApp chat export into structured messages.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsift chat.txt
    chatsift 'WhatsApp Chat - Alice.zip' -o messages.json
    chatsift chat.txt --format text --summary
    chatsift chat.txt --keep-notices -v")]
pub struct Args {
    /// Path to a transcript (.txt) or exported archive (.zip)
    pub input: String,

    /// Path to output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Keep system/encryption notices instead of suppressing them
    #[arg(long)]
    pub keep_notices: bool,

    /// Print sender directory and transcript statistics
    #[arg(short, long)]
    pub summary: bool,

    /// Show parser diagnostics (dropped lines, suppressed notices)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// One `[timestamp] sender: text` block per message
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}
