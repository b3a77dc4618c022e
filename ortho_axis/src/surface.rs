// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The painting abstraction the draw pass talks to.
//!
//! Layout never draws; drawing never measures. [`DrawSurface`] is the draw
//! half of that split: an immediate-mode sink for the axis line, tick marks,
//! and label text. Text *measurement* goes through
//! [`ortho_text::TextMeasurer`] instead, so layout stays independent of any
//! renderer.

extern crate alloc;

use kurbo::{Line, Point};
use peniko::Brush;
use peniko::color::palette::css;

use ortho_text::FontFamily;

/// A paint + width pair for stroked lines (axis lines and ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Horizontal text anchoring relative to the text origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// The origin is at the start of the text.
    Start,
    /// The origin is at the center of the text.
    Middle,
    /// The origin is at the end of the text.
    End,
}

/// Vertical text baseline relative to the text origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The usual Latin baseline.
    Alphabetic,
    /// Vertically centered on the origin.
    Middle,
    /// The top of the text hangs from the origin.
    Hanging,
    /// The bottom of the text sits above the origin.
    Ideographic,
}

/// Styling for a single drawn label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Fill paint.
    pub fill: Brush,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Font family.
    pub font_family: FontFamily,
    /// Horizontal anchoring.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
}

/// An immediate-mode painting sink for axis drawing.
///
/// Implementations interpret coordinates in the same scene space the axis
/// was laid out in. The axis only ever emits straight lines and single-line
/// text.
pub trait DrawSurface {
    /// Strokes a straight line segment.
    fn draw_line(&mut self, line: Line, stroke: &StrokeStyle);

    /// Draws a single line of text anchored at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, style: &LabelStyle);
}

/// A recording surface used by drawing tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub(crate) lines: alloc::vec::Vec<Line>,
    pub(crate) texts: alloc::vec::Vec<(Point, alloc::string::String)>,
}

#[cfg(test)]
impl DrawSurface for RecordingSurface {
    fn draw_line(&mut self, line: Line, _stroke: &StrokeStyle) {
        self.lines.push(line);
    }

    fn draw_text(&mut self, origin: Point, text: &str, _style: &LabelStyle) {
        self.texts.push((origin, alloc::string::String::from(text)));
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn recording_surface_collects_primitives() {
        let mut surface = RecordingSurface::default();
        surface.draw_line(Line::new((0.0, 0.0), (1.0, 0.0)), &StrokeStyle::default());
        surface.draw_text(
            Point::new(2.0, 3.0),
            "10",
            &LabelStyle {
                fill: Brush::Solid(css::BLACK),
                font_size: 10.0,
                font_family: FontFamily::SansSerif,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Hanging,
            },
        );
        assert_eq!(surface.lines.len(), 1);
        assert_eq!(surface.texts[0].1, "10");
    }
}
