use crate::geom::{GridRect, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("axis bounds must satisfy min < max (got {min}..{max})")]
    InvalidAxis { min: f64, max: f64 },
    #[error("line set declares {expected} line(s) but carries {actual}")]
    LineCountMismatch { expected: usize, actual: usize },
    #[error("line {index} is still being drawn")]
    BuildingLine { index: usize },
}

/// A line segment whose infinite extension gets clipped to the grid.
/// `building` marks an endpoint still being dragged; such a line is not a
/// committed sectioning input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Vec2,
    pub to: Vec2,
    #[serde(default)]
    pub building: bool,
}

impl Line {
    pub const fn new(from: Vec2, to: Vec2) -> Self {
        Self {
            from,
            to,
            building: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCount {
    One,
    Two,
}

impl LineCount {
    pub fn as_usize(self) -> usize {
        match self {
            LineCount::One => 1,
            LineCount::Two => 2,
        }
    }
}

/// The committed line configuration of a solution-set question.
///
/// `revision` advances on every mutation; a `SectionReport` computed from an
/// older revision is stale and must be recomputed by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSet {
    pub count: LineCount,
    pub lines: Vec<Line>,
    #[serde(default)]
    revision: u64,
}

impl LineSet {
    pub fn new(count: LineCount, lines: Vec<Line>) -> Self {
        Self {
            count,
            lines,
            revision: 0,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Switch between one- and two-line mode. Surplus lines are dropped,
    /// and any previously computed sections become stale.
    pub fn set_count(&mut self, count: LineCount) {
        if self.count != count {
            self.count = count;
            self.lines.truncate(count.as_usize());
            self.revision += 1;
        }
    }

    /// Replace or append the line at `index` (clamped to the declared
    /// count). Any previously computed sections become stale.
    pub fn set_line(&mut self, index: usize, line: Line) {
        if index >= self.count.as_usize() {
            return;
        }
        if index < self.lines.len() {
            self.lines[index] = line;
        } else {
            self.lines.push(line);
        }
        self.revision += 1;
    }

    /// The lines that are valid sectioning input: exactly `count` of them,
    /// none mid-drag. `None` means sectioning is not yet possible.
    pub fn committed(&self) -> Option<&[Line]> {
        let lines = self.lines.get(..self.count.as_usize())?;
        if lines.iter().any(|l| l.building) {
            return None;
        }
        Some(lines)
    }
}

/// Input unit for tooling and persistence: the grid bounds plus the line
/// configuration drawn on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub grid: GridRect,
    pub line_set: LineSet,
}

impl Scene {
    /// Check the preconditions the engine itself assumes. Call this on
    /// untrusted input before computing sections.
    pub fn validate(&self) -> Result<(), ModelError> {
        for axis in [self.grid.domain, self.grid.range] {
            if !axis.is_valid() {
                return Err(ModelError::InvalidAxis {
                    min: axis.min,
                    max: axis.max,
                });
            }
        }
        let expected = self.line_set.count.as_usize();
        if self.line_set.lines.len() != expected {
            return Err(ModelError::LineCountMismatch {
                expected,
                actual: self.line_set.lines.len(),
            });
        }
        if let Some(index) = self.line_set.lines.iter().position(|l| l.building) {
            return Err(ModelError::BuildingLine { index });
        }
        Ok(())
    }
}
