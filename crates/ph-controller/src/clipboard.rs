use crate::{ControllerResult, NoticeBoard};

use log::debug;

/// Destination for copied profile values
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> ControllerResult<()>;
}

/// Copy `text` and report the outcome on `notices` under `label`.
pub fn copy_to_clipboard(
    clipboard: &dyn Clipboard,
    notices: &mut NoticeBoard,
    text: &str,
    label: &str,
) -> ControllerResult<()> {
    debug!("Copying {label} ({} chars)", text.chars().count());

    match clipboard.write_text(text) {
        Ok(()) => {
            notices.copied(format!("{label} copied to clipboard!"));
            Ok(())
        }
        Err(e) => {
            notices.error(format!("Failed to copy {label}"));
            Err(e)
        }
    }
}
