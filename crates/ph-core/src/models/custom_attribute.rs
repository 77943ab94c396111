use serde::{Deserialize, Serialize};

/// A free-form key/value pair stored alongside the profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttribute {
    pub id: u64,
    pub key: String,
    pub value: String,
}

/// Pending input for a new custom attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomAttributeDraft {
    pub key: String,
    pub value: String,
}

impl CustomAttributeDraft {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Both key and value carry non-whitespace text
    pub fn is_complete(&self) -> bool {
        !self.key.trim().is_empty() && !self.value.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.key.clear();
        self.value.clear();
    }

    pub fn to_attribute(&self, id: u64) -> CustomAttribute {
        CustomAttribute {
            id,
            key: self.key.trim().to_string(),
            value: self.value.trim().to_string(),
        }
    }
}
