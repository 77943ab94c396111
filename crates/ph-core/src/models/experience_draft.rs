use crate::{CoreError, CoreErrorResult, Experience, ExperienceField, PRESENT};

/// Unvalidated experience input held while adding or editing.
///
/// Defaults for `location`, `to` and `description` are applied when the draft
/// is committed through [`Experience::from_draft`], not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: String,
    pub to: String,
    pub description: String,
}

impl ExperienceDraft {
    /// Check required fields in order: title, company, from.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        for field in ExperienceField::REQUIRED {
            if self.get(field).trim().is_empty() {
                return Err(CoreError::validation(field));
            }
        }
        Ok(())
    }

    pub fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Title => &self.title,
            ExperienceField::Company => &self.company,
            ExperienceField::Location => &self.location,
            ExperienceField::From => &self.from,
            ExperienceField::To => &self.to,
            ExperienceField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: ExperienceField, value: impl Into<String>) {
        let slot = match field {
            ExperienceField::Title => &mut self.title,
            ExperienceField::Company => &mut self.company,
            ExperienceField::Location => &mut self.location,
            ExperienceField::From => &mut self.from,
            ExperienceField::To => &mut self.to,
            ExperienceField::Description => &mut self.description,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl From<&Experience> for ExperienceDraft {
    /// A stored "Present" end date becomes an empty, editable end date.
    fn from(experience: &Experience) -> Self {
        Self {
            title: experience.title.clone(),
            company: experience.company.clone(),
            location: experience.location.clone(),
            from: experience.from.clone(),
            to: if experience.to == PRESENT {
                String::new()
            } else {
                experience.to.clone()
            },
            description: experience.description.clone(),
        }
    }
}
