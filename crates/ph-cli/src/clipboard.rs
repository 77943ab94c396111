use std::io::Write;

use ph_controller::{Clipboard, ControllerError, ControllerResult};

/// Writes copied values to stdout so they can be piped into `pbcopy`,
/// `xclip -selection clipboard` or `clip.exe`.
#[derive(Debug, Default)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&self, text: &str) -> ControllerResult<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| ControllerError::clipboard(e.to_string()))
    }
}
