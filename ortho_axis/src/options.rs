// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis drawing options.

use peniko::Brush;
use peniko::color::palette::css;

/// Numeric notation for tick labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelNotation {
    /// Plain decimal notation.
    #[default]
    Standard,
    /// Exponent notation (`1e4`).
    Scientific,
}

/// Drawing parameters for one axis.
///
/// Options are replaced wholesale through `ChartAxis::set_options`, which
/// classifies the change as layout-affecting (font size, precision, tick
/// geometry, visibility) or paint-only (colors).
#[derive(Clone, Debug, PartialEq)]
pub struct AxisOptions {
    /// Whether the axis is drawn at all.
    pub visible: bool,
    /// Whether tick labels are drawn.
    pub labels_visible: bool,
    /// Paint for the axis line and tick marks.
    pub axis_color: Brush,
    /// Fill paint for tick labels.
    pub label_color: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Maximum fractional digits for tick labels.
    pub precision: usize,
    /// Tick label notation.
    pub notation: LabelNotation,
    /// Length of a labeled tick mark.
    pub tick_length: f64,
    /// Length of the short tick drawn for a label that was thinned out.
    pub short_tick_length: f64,
    /// Padding between the tick end and the tick label.
    pub label_gap: f64,
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            visible: true,
            labels_visible: true,
            axis_color: Brush::Solid(css::BLACK),
            label_color: Brush::Solid(css::BLACK),
            label_font_size: 10.0,
            precision: 2,
            notation: LabelNotation::Standard,
            tick_length: 5.0,
            short_tick_length: 3.0,
            label_gap: 4.0,
        }
    }
}

impl AxisOptions {
    /// Creates the default option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows or hides the whole axis.
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Shows or hides tick labels.
    #[must_use]
    pub fn with_labels_visible(mut self, labels_visible: bool) -> Self {
        self.labels_visible = labels_visible;
        self
    }

    /// Sets the axis line and tick paint.
    #[must_use]
    pub fn with_axis_color(mut self, brush: impl Into<Brush>) -> Self {
        self.axis_color = brush.into();
        self
    }

    /// Sets the label fill paint.
    #[must_use]
    pub fn with_label_color(mut self, brush: impl Into<Brush>) -> Self {
        self.label_color = brush.into();
        self
    }

    /// Sets the label font size.
    #[must_use]
    pub fn with_label_font_size(mut self, label_font_size: f64) -> Self {
        self.label_font_size = label_font_size;
        self
    }

    /// Sets the maximum fractional digits for tick labels.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the tick label notation.
    #[must_use]
    pub fn with_notation(mut self, notation: LabelNotation) -> Self {
        self.notation = notation;
        self
    }

    /// Sets the labeled tick length.
    #[must_use]
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    /// Sets the short (unlabeled) tick length.
    #[must_use]
    pub fn with_short_tick_length(mut self, short_tick_length: f64) -> Self {
        self.short_tick_length = short_tick_length;
        self
    }

    /// Sets the tick-to-label padding.
    #[must_use]
    pub fn with_label_gap(mut self, label_gap: f64) -> Self {
        self.label_gap = label_gap;
        self
    }

    /// Whether replacing `self` with `other` changes layout geometry, as
    /// opposed to paint only.
    #[must_use]
    pub fn layout_differs(&self, other: &Self) -> bool {
        self.visible != other.visible
            || self.labels_visible != other.labels_visible
            || self.label_font_size != other.label_font_size
            || self.precision != other.precision
            || self.notation != other.notation
            || self.tick_length != other.tick_length
            || self.short_tick_length != other.short_tick_length
            || self.label_gap != other.label_gap
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn color_changes_are_paint_only() {
        let base = AxisOptions::default();
        let recolored = base.clone().with_axis_color(css::DARK_GRAY);
        assert!(!base.layout_differs(&recolored));
        assert_ne!(base, recolored);
    }

    #[test]
    fn font_and_tick_changes_affect_layout() {
        let base = AxisOptions::default();
        assert!(base.layout_differs(&base.clone().with_label_font_size(14.0)));
        assert!(base.layout_differs(&base.clone().with_precision(0)));
        assert!(base.layout_differs(&base.clone().with_tick_length(8.0)));
        assert!(base.layout_differs(&base.clone().with_labels_visible(false)));
    }
}
