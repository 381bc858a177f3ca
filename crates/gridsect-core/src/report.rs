use crate::geom::Vec2;
use crate::polygon::Section;
use serde::{Deserialize, Serialize};

/// Result of one sectioning pass.
///
/// `revision` echoes the line set revision the report was computed from;
/// the caller compares it against the current revision to detect staleness.
/// `unclaimed_corners` lists grid corners that ended up a vertex of no
/// section; nonempty means the configuration is degenerate (lines not yet
/// spanning the grid, or a tolerance-starved corner in the two-line case).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionReport {
    pub revision: u64,
    pub sections: Vec<Section>,
    pub unclaimed_corners: Vec<Vec2>,
}

impl SectionReport {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Resolve a click to the section that contains it. Points on a
    /// dividing line or on the grid boundary resolve to `None`.
    pub fn hit(&self, p: Vec2) -> Option<usize> {
        self.sections.iter().position(|s| s.contains(p))
    }
}
