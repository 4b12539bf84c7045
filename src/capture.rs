use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use std::io::{self, Write};

/// Terminal mouse and focus reporting, enabled for as long as this value
/// lives.
///
/// These reports are how the date picker notices presses and focus changes
/// outside of itself.  Reporting is switched off again when the value is
/// dropped, including while unwinding from a panic.
#[derive(Debug)]
pub(crate) struct InteractionCapture<W: Write> {
    out: W,
}

impl<W: Write> InteractionCapture<W> {
    pub(crate) fn acquire(mut out: W) -> io::Result<Self> {
        execute!(out, EnableMouseCapture, EnableFocusChange)?;
        log::debug!("Enabled mouse capture and focus reporting");
        Ok(InteractionCapture { out })
    }
}

impl<W: Write> Drop for InteractionCapture<W> {
    fn drop(&mut self) {
        match execute!(self.out, DisableFocusChange, DisableMouseCapture) {
            Ok(()) => log::debug!("Disabled mouse capture and focus reporting"),
            Err(e) => log::warn!("Failed to disable mouse capture: {e}"),
        }
    }
}
