//! Undo history over the geometry model

use tracing::debug;
use crate::tlc_engine::geometry::Geometry;

/// Geometry as it was just before one edit
#[derive(Debug, Clone, PartialEq)]
pub struct UndoFrame {
    pub geometry: Geometry,
}

/// Unbounded LIFO of snapshots. There is no redo.
#[derive(Debug, Default)]
pub struct UndoHistory {
    frames: Vec<UndoFrame>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, frame: UndoFrame) {
        self.frames.push(frame);
        debug!(depth = self.frames.len(), "Undo frame pushed");
    }

    /// Swaps the newest snapshot into `geometry`. Returns `false`, leaving `geometry`
    /// alone, when the history is empty.
    pub fn undo(&mut self, geometry: &mut Geometry) -> bool {
        match self.frames.pop() {
            Some(frame) => {
                *geometry = frame.geometry;
                debug!(depth = self.frames.len(), "Undo applied");
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
