use crate::{
    cover_commands::CoverCommands, custom_commands::CustomCommands,
    experience_commands::ExperienceCommands, profile_commands::ProfileCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Cover letter operations
    Cover {
        #[command(subcommand)]
        action: CoverCommands,
    },

    /// Custom info operations
    Custom {
        #[command(subcommand)]
        action: CustomCommands,
    },

    /// Work experience operations
    Experience {
        #[command(subcommand)]
        action: ExperienceCommands,
    },
}
