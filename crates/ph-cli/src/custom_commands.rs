use clap::Subcommand;

#[derive(Subcommand)]
pub enum CustomCommands {
    /// List custom info entries
    List,

    /// Add a custom info entry
    Add {
        #[arg(long)]
        key: String,

        #[arg(long)]
        value: String,
    },

    /// Remove a custom info entry
    Remove { id: u64 },

    /// Write an entry's value to stdout for piping into a clipboard tool
    Copy { id: u64 },
}
