use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kdxgen")]
#[command(
    about = "Generate Kindle DX collections from a directory tree of e-books",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a device root and emit the collections mapping
    Generate {
        /// Path to the device root (must contain audible/, documents/,
        /// music/ and system/)
        root: PathBuf,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum number of characters allowed in a collection name
        #[arg(short = 'l', long = "max-name-len")]
        max_name_len: Option<usize>,

        /// Render checksum keys with uppercase hex digits
        #[arg(long)]
        uppercase_hex: bool,
    },
    /// Print configuration values
    PrintConfig,
}
