use clap::Subcommand;
use ph_core::ProfileField;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the stored profile
    Show,

    /// Update one or more profile fields
    Update {
        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        linkedin_url: Option<String>,

        #[arg(long)]
        github_url: Option<String>,

        #[arg(long)]
        portfolio_url: Option<String>,
    },

    /// Set a single field by name (e.g. email, github-url)
    Set { field: ProfileField, value: String },

    /// Write a field's value to stdout for piping into a clipboard tool
    Copy { field: ProfileField },
}

impl ProfileCommands {
    /// Field changes requested by `update`, in form order
    pub(crate) fn updates(&self) -> Vec<(ProfileField, String)> {
        let Self::Update {
            full_name,
            email,
            phone,
            linkedin_url,
            github_url,
            portfolio_url,
        } = self
        else {
            return Vec::new();
        };

        [
            (ProfileField::FullName, full_name),
            (ProfileField::Email, email),
            (ProfileField::Phone, phone),
            (ProfileField::LinkedinUrl, linkedin_url),
            (ProfileField::GithubUrl, github_url),
            (ProfileField::PortfolioUrl, portfolio_url),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }
}
