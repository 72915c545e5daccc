//! Presentation of dice, kept apart from the dice themselves.
//!
//! Dice types only provide data through `Renderable`; formatting lives in
//! `Renderer` implementations chosen by the caller.
//!
//! ```
//! use dice_engine::core::RngHandle;
//! use dice_engine::dice::Dice;
//! use dice_engine::render::{Renderer, TextRenderer};
//!
//! let mut dice = Dice::with_rng(6, 3, RngHandle::fixed(vec![1, 5, 3])).unwrap();
//! dice.roll_all();
//!
//! let mut renderer = TextRenderer::new(Vec::new());
//! renderer.render(&dice).unwrap();
//! let text = String::from_utf8(renderer.into_inner()).unwrap();
//! assert!(text.starts_with("3d6, [1, 5, 3]"));
//! ```

mod log_renderer;
mod text;

pub use log_renderer::LogRenderer;
pub use text::TextRenderer;

use crate::core::error::Result;
use crate::dice::{Dice, Die, RollHistory, Snapshot};

/// Read-only data a renderer needs.
pub trait Renderable {
    /// Die name in dice notation, e.g. `d6`.
    fn label(&self) -> String;

    /// Current face of every die, in order.
    fn current_values(&self) -> Vec<Option<u32>>;

    /// Past roll-all snapshots, if the source keeps any.
    fn history(&self) -> Option<&RollHistory> {
        None
    }
}

impl Renderable for Dice {
    fn label(&self) -> String {
        self.name()
    }

    fn current_values(&self) -> Vec<Option<u32>> {
        self.values()
    }

    fn history(&self) -> Option<&RollHistory> {
        Some(self.roll_history())
    }
}

impl Renderable for Die {
    fn label(&self) -> String {
        self.name()
    }

    fn current_values(&self) -> Vec<Option<u32>> {
        vec![self.rolled()]
    }
}

/// Something that presents a `Renderable`.
pub trait Renderer {
    fn render(&mut self, source: &dyn Renderable) -> Result<()>;
}

/// `"<n><label>, [v1, v2, ...]"`, with `-` for unrolled dice.
#[must_use]
pub fn summary_line(source: &dyn Renderable) -> String {
    let values = source.current_values();
    let faces: Vec<String> = values
        .iter()
        .map(|v| v.map_or_else(|| "-".to_string(), |face| face.to_string()))
        .collect();
    format!("{}{}, [{}]", values.len(), source.label(), faces.join(", "))
}

/// `"#<index>: [v1, v2, ...] = <total>"`.
#[must_use]
pub fn snapshot_line(index: usize, snapshot: &Snapshot) -> String {
    let faces: Vec<String> = snapshot.values().iter().map(u32::to_string).collect();
    format!("#{}: [{}] = {}", index, faces.join(", "), snapshot.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::RngHandle;

    #[test]
    fn test_summary_line_unrolled() {
        let dice = Dice::with_rng(8, 2, RngHandle::seeded(0)).unwrap();
        assert_eq!(summary_line(&dice), "2d8, [-, -]");
    }

    #[test]
    fn test_summary_line_die() {
        let mut die = Die::with_rng(20, RngHandle::fixed(vec![17])).unwrap();
        die.roll();
        assert_eq!(summary_line(&die), "1d20, [17]");
        assert!(die.history().is_none());
    }

    #[test]
    fn test_snapshot_line() {
        assert_eq!(snapshot_line(0, &Snapshot::new([2, 6, 6, 4])), "#0: [2, 6, 6, 4] = 18");
    }
}
