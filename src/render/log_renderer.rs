//! Renderer that writes through the `log` facade.

use log::{info, log_enabled, Level};

use crate::core::error::Result;

use super::{snapshot_line, summary_line, Renderable, Renderer};

/// Emits one `info` record for the summary and one per snapshot.
#[derive(Clone, Debug, Default)]
pub struct LogRenderer {
    /// Prefix for every record, e.g. a player or session name.
    pub context: Option<String>,
}

impl LogRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_context(context: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
        }
    }

    fn prefix(&self) -> String {
        self.context
            .as_ref()
            .map(|c| format!("[{}] ", c))
            .unwrap_or_default()
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, source: &dyn Renderable) -> Result<()> {
        if !log_enabled!(Level::Info) {
            return Ok(());
        }
        let prefix = self.prefix();
        info!("{}{}", prefix, summary_line(source));
        if let Some(history) = source.history() {
            for (index, snapshot) in history.iter().enumerate() {
                info!("{}{}", prefix, snapshot_line(index, snapshot));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::RngHandle;
    use crate::dice::Dice;

    #[test]
    fn test_prefix() {
        assert_eq!(LogRenderer::new().prefix(), "");
        assert_eq!(LogRenderer::with_context("player 1").prefix(), "[player 1] ");
    }

    #[test]
    fn test_render_without_logger_succeeds() {
        let mut dice = Dice::with_rng(6, 2, RngHandle::seeded(3)).unwrap();
        dice.roll_all();
        assert!(LogRenderer::new().render(&dice).is_ok());
    }
}
