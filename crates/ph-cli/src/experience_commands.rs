use std::path::PathBuf;

use clap::{Args, Subcommand};
use ph_core::{ExperienceDraft, ExperienceField};

#[derive(Subcommand)]
pub enum ExperienceCommands {
    /// List experiences with formatted date ranges
    List,

    /// Show one experience
    Show { id: u64 },

    /// Add an experience (title, company and from are required)
    Add {
        #[command(flatten)]
        fields: ExperienceFields,
    },

    /// Edit an experience; omitted fields keep their current value
    Edit {
        id: u64,

        #[command(flatten)]
        fields: ExperienceFields,
    },

    /// Delete an experience
    Delete {
        id: u64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Discard local changes and restore the original experience list
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Write all experiences to a JSON file
    Export {
        /// Output path (defaults to experiences.json in the download directory)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ExperienceFields {
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// Start month, YYYY-MM
    #[arg(long)]
    pub from: Option<String>,

    /// End month, YYYY-MM; empty means present
    #[arg(long)]
    pub to: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

impl ExperienceFields {
    /// Overwrite the draft fields that were given on the command line
    pub fn apply(&self, draft: &mut ExperienceDraft) {
        for (field, value) in [
            (ExperienceField::Title, &self.title),
            (ExperienceField::Company, &self.company),
            (ExperienceField::Location, &self.location),
            (ExperienceField::From, &self.from),
            (ExperienceField::To, &self.to),
            (ExperienceField::Description, &self.description),
        ] {
            if let Some(value) = value {
                draft.set(field, value.as_str());
            }
        }
    }
}
