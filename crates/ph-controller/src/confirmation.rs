/// Proof that the user confirmed a destructive action.
///
/// Deleting an experience and resetting to the seed both require one, so the
/// confirmation step cannot be skipped by accident. A declined prompt yields
/// no token and the action is never attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmed(());

impl Confirmed {
    pub fn from_user_answer(accepted: bool) -> Option<Self> {
        accepted.then_some(Self(()))
    }

    /// For callers that confirmed out of band, e.g. a `--yes` flag.
    pub fn assume_yes() -> Self {
        Self(())
    }
}
