//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Regenerates the README index of a TIL-style notes repository
#[derive(Parser, Debug)]
#[command(name = "tilgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase debug output (-d, -d -d, ...)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the notes tree and rewrite README.md (default)
    Generate {
        /// Root of the notes repository
        #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
        root: PathBuf,
    },

    /// Print the assembled index to stdout without writing anything
    Print {
        /// Root of the notes repository
        #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
        root: PathBuf,
    },

    /// Show the scanned hierarchy as a tree
    Tree {
        /// Root of the notes repository
        #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
        root: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
