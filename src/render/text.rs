//! Plain-text renderer for consoles and files.

use std::io::Write;

use crate::core::error::Result;

use super::{snapshot_line, summary_line, Renderable, Renderer};

/// Writes a summary line followed by one indented line per snapshot.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    show_history: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_history: true,
        }
    }

    /// Only print the current values.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.show_history = false;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, source: &dyn Renderable) -> Result<()> {
        writeln!(self.out, "{}", summary_line(source))?;
        if self.show_history {
            if let Some(history) = source.history() {
                for (index, snapshot) in history.iter().enumerate() {
                    writeln!(self.out, "  {}", snapshot_line(index, snapshot))?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
