//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// recap - Extractive summaries for meeting transcripts
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a .txt, .docx or .pdf document
    Summarize {
        /// Input document
        input: PathBuf,

        /// Number of sentences in the summary
        #[arg(short, long)]
        sentences: Option<usize>,

        /// Language for sentence splitting and stopwords
        #[arg(short, long)]
        language: Option<String>,

        /// Write the summary to a file (.docx or plain text) instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Create a sample transcript at the .docx input path if it is missing
        #[arg(long)]
        generate_sample: bool,

        /// Print ranked sentences as JSON
        #[arg(long, conflicts_with = "output")]
        json: bool,
    },

    /// Summarize every .docx in a folder
    Batch {
        /// Folder with .docx transcripts
        #[arg(short, long)]
        input_dir: Option<PathBuf>,

        /// Folder receiving the summaries
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Number of sentences in each summary
        #[arg(short, long)]
        sentences: Option<usize>,
    },

    /// Write a sample meeting transcript (.docx)
    Sample {
        /// Destination path
        path: PathBuf,
    },

    /// Show supported formats and active settings
    Doctor {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
