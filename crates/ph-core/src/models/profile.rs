use crate::ProfileField;

use serde::{Deserialize, Serialize};

/// The single personal profile record held by the record store.
///
/// Every field defaults to empty text so a partially populated record from
/// the store still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub portfolio_url: String,
    pub cover_letter: String,
}

impl Profile {
    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Email => &self.email,
            ProfileField::Phone => &self.phone,
            ProfileField::LinkedinUrl => &self.linkedin_url,
            ProfileField::GithubUrl => &self.github_url,
            ProfileField::PortfolioUrl => &self.portfolio_url,
            ProfileField::CoverLetter => &self.cover_letter,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Email => &mut self.email,
            ProfileField::Phone => &mut self.phone,
            ProfileField::LinkedinUrl => &mut self.linkedin_url,
            ProfileField::GithubUrl => &mut self.github_url,
            ProfileField::PortfolioUrl => &mut self.portfolio_url,
            ProfileField::CoverLetter => &mut self.cover_letter,
        };
        *slot = value.into();
    }
}
