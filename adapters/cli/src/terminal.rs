use std::io::Write;

use anyhow::{Context, Result};
use bridge_crossing_rendering::{frame_text, Frame, RenderingBackend};

/// Rendering backend that prints frames as plain text lines.
#[derive(Debug)]
pub(crate) struct TerminalBackend<W> {
    out: W,
}

impl<W: Write> TerminalBackend<W> {
    /// Creates a backend writing to `out`.
    pub(crate) fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> RenderingBackend for TerminalBackend<W> {
    fn present(&mut self, frame: &Frame<'_>) -> Result<()> {
        writeln!(self.out, "{}", frame_text(frame)).context("failed to write to terminal")?;
        self.out.flush().context("failed to flush terminal")
    }
}
