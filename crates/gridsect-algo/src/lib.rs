use gridsect_core::geom::GridRect;
use gridsect_core::model::{LineCount, LineSet};
use gridsect_core::report::SectionReport;

pub mod clip;
pub mod one_line;
pub mod two_line;

/// Partition the grid with the committed lines of `line_set`.
///
/// This is the single entry point the authoring layer calls, on
/// draw-finished and bounds-changed events (never mid-drag). Missing or
/// still-building lines yield an empty report rather than an error; the
/// caller treats "no sections" as "selection not yet possible".
pub fn compute_sections(line_set: &LineSet, rect: &GridRect) -> SectionReport {
    let sections = match line_set.committed() {
        Some(lines) => match line_set.count {
            LineCount::One => {
                let boundary = clip::clip_line_to_rect(&lines[0], rect);
                one_line::section_one_line(&boundary, rect)
            }
            LineCount::Two => two_line::section_two_lines(&lines[0], &lines[1], rect),
        },
        None => Vec::new(),
    };

    let unclaimed_corners = rect
        .corners()
        .iter()
        .copied()
        .filter(|c| !sections.iter().any(|s| s.has_vertex(*c)))
        .collect();

    SectionReport {
        revision: line_set.revision(),
        sections,
        unclaimed_corners,
    }
}
