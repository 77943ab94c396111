use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum CoverCommands {
    /// Show the cover letter
    Show,

    /// Replace the cover letter
    Set {
        /// Cover letter text
        #[arg(conflicts_with = "file")]
        text: Option<String>,

        /// Read the cover letter from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Write the cover letter to stdout for piping into a clipboard tool
    Copy,
}
