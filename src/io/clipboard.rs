use anyhow::{anyhow, Result};
use copypasta::{ClipboardContext, ClipboardProvider};

use crate::modes::ClipboardWriter;

/// The clipboard of the desktop session.
///
/// A new context is created for every write since the session clipboard
/// may come and go while ffilter is running.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_clipboard(&mut self, text: &str) -> Result<()> {
        let mut ctx =
            ClipboardContext::new().map_err(|err| anyhow!("couldn't reach the clipboard: {err}"))?;
        ctx.set_contents(text.to_owned())
            .map_err(|err| anyhow!("couldn't write the clipboard: {err}"))?;
        // For some reason, it's not writen if you don't read it back...
        let _ = ctx.get_contents();
        Ok(())
    }
}
