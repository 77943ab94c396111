/// The record store call an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    FetchProfile,
    ReplaceProfile,
    ListCustomAttributes,
    CreateCustomAttribute,
    DeleteCustomAttribute,
    FetchSeed,
}

impl StoreOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FetchProfile => "fetch profile",
            Self::ReplaceProfile => "replace profile",
            Self::ListCustomAttributes => "list custom attributes",
            Self::CreateCustomAttribute => "create custom attribute",
            Self::DeleteCustomAttribute => "delete custom attribute",
            Self::FetchSeed => "fetch seed",
        }
    }
}

impl std::fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
