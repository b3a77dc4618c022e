// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis layout engine.
//!
//! A [`ChartAxis`] computes tick values and pixel placements for one
//! orthogonal axis of a chart, within a chart rectangle the container hands
//! it. Layout and drawing are deliberately split: [`ChartAxis::layout`] does
//! the expensive work (label generation, text measurement, scale
//! publication) and caches everything; [`ChartAxis::draw`] and the position
//! accessors only read that cache. The container decides when to re-run
//! layout by draining [`ChartAxis::take_notifications`].
//!
//! When best-fit is enabled the axis generates its own label model from a
//! value range, picking a "nice" interval (1/2/5 times a power of ten, or
//! decade boundaries in logarithmic mode) that fits the available pixel run.
//! When more labels are generated than fit, overlapping labels are thinned
//! to an evenly spaced subset; tick marks are always kept for every label.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Line, Point, Rect};

use ortho_text::{TextMeasurer, TextStyle};

use crate::event::Notifications;
use crate::format::format_label;
use crate::model::AxisLabelModel;
use crate::options::AxisOptions;
use crate::scale::{PixelScale, ValueScale, next_nice_step, nice_step};
use crate::surface::{DrawSurface, LabelStyle, StrokeStyle, TextAnchor, TextBaseline};

/// Fewest labels a best-fit layout will aim for.
const MIN_LABEL_COUNT: usize = 2;
/// Most labels a best-fit layout will generate.
const MAX_LABEL_COUNT: usize = 10;

/// Where the axis sits on the chart. Fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisLocation {
    /// A vertical axis on the left of the chart.
    Left,
    /// A horizontal axis above the chart.
    Top,
    /// A vertical axis on the right of the chart.
    Right,
    /// A horizontal axis below the chart.
    Bottom,
}

impl AxisLocation {
    /// Whether the axis runs vertically (Left/Right).
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Pan offsets supplied by a scrollable chart's contents space.
///
/// Offsets are subtracted from pixel positions along the axis direction,
/// panning the contents toward the origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentsSpace {
    /// Horizontal pan offset in pixels.
    pub x_offset: f64,
    /// Vertical pan offset in pixels.
    pub y_offset: f64,
}

/// Borrowed collaborator references for one layout pass.
///
/// The chart container owns every axis; relations between them are passed
/// explicitly per call instead of being stored, so no axis ever outlives or
/// mutates a peer. All peer access is read-only.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutContext<'a> {
    /// The axis at this axis's minimum-value end (e.g. the left axis for a
    /// bottom axis). Its space requirement insets the pixel run.
    pub at_min: Option<&'a ChartAxis>,
    /// The axis at the maximum-value end.
    pub at_max: Option<&'a ChartAxis>,
    /// The parallel axis across the chart; read to align tick counts.
    pub across: Option<&'a ChartAxis>,
    /// Pan offsets from the chart's contents space.
    pub contents: Option<&'a ContentsSpace>,
}

/// Cached per-label layout state.
#[derive(Clone, Debug, PartialEq)]
struct LabelEntry {
    pixel: f64,
    label_visible: bool,
    width: f64,
    text: String,
}

/// The layout engine for one orthogonal chart axis.
///
/// Construction fixes the location. The scale, label model, and options are
/// owned for the axis's lifetime; neighbor and contents-space references are
/// borrowed per layout pass through [`LayoutContext`].
#[derive(Debug)]
pub struct ChartAxis {
    location: AxisLocation,
    scale: PixelScale,
    model: AxisLabelModel,
    options: AxisOptions,
    best_fit: bool,
    data_available: bool,
    range: (f64, f64),
    extra_min_padding: bool,
    extra_max_padding: bool,
    space_too_small: bool,
    requested_scale: ValueScale,
    area: Rect,
    bounds: Rect,
    entries: Vec<LabelEntry>,
    step: f64,
    font_height: f64,
    max_label_width: f64,
    laid_out: bool,
    pending: Notifications,
}

impl ChartAxis {
    /// Creates an axis for the given chart location.
    #[must_use]
    pub fn new(location: AxisLocation) -> Self {
        Self {
            location,
            scale: PixelScale::new(),
            model: AxisLabelModel::new(),
            options: AxisOptions::default(),
            best_fit: false,
            data_available: false,
            range: (0.0, 0.0),
            extra_min_padding: false,
            extra_max_padding: false,
            space_too_small: false,
            requested_scale: ValueScale::Linear,
            area: Rect::ZERO,
            bounds: Rect::ZERO,
            entries: Vec::new(),
            step: 0.0,
            font_height: 0.0,
            max_label_width: 0.0,
            laid_out: false,
            pending: Notifications::none(),
        }
    }

    /// Returns the axis location.
    #[must_use]
    pub fn location(&self) -> AxisLocation {
        self.location
    }

    /// Returns the label model.
    #[must_use]
    pub fn model(&self) -> &AxisLabelModel {
        &self.model
    }

    /// Returns the label model for mutation.
    ///
    /// Any mutation invalidates the cached layout, so this unconditionally
    /// raises `layout_needed`.
    pub fn model_mut(&mut self) -> &mut AxisLabelModel {
        self.pending.layout_needed = true;
        &mut self.model
    }

    /// Replaces the label model, returning the previous one to the caller.
    pub fn set_model(&mut self, model: AxisLabelModel) -> AxisLabelModel {
        self.pending.layout_needed = true;
        core::mem::replace(&mut self.model, model)
    }

    /// Whether labels are generated from the best-fit range during layout.
    #[must_use]
    pub fn is_best_fit(&self) -> bool {
        self.best_fit
    }

    /// Enables or disables best-fit label generation.
    pub fn set_best_fit(&mut self, on: bool) {
        if self.best_fit != on {
            self.best_fit = on;
            self.pending.layout_needed = true;
        }
    }

    /// Whether data is available for a degenerate best-fit range.
    #[must_use]
    pub fn is_data_available(&self) -> bool {
        self.data_available
    }

    /// Sets whether data is available.
    ///
    /// This only matters when the best-fit range is a single point: with
    /// data available the axis emits one tick at the value (a flat series
    /// still deserves a mark); without it the axis centers a default span
    /// around the value.
    pub fn set_data_available(&mut self, available: bool) {
        if self.data_available != available {
            self.data_available = available;
            self.pending.layout_needed = true;
        }
    }

    /// Returns the best-fit value range as set.
    #[must_use]
    pub fn best_fit_range(&self) -> (f64, f64) {
        self.range
    }

    /// Sets the value range used to generate labels in best-fit mode.
    ///
    /// `min > max` is treated as a degenerate single-point range at `min`.
    /// The layout-needed notification is raised either way.
    pub fn set_best_fit_range(&mut self, min: f64, max: f64) {
        self.range = (min, max);
        self.pending.layout_needed = true;
    }

    /// Returns the effective scale type.
    #[must_use]
    pub fn scale_type(&self) -> ValueScale {
        self.scale.scale_type()
    }

    /// Requests a scale type.
    ///
    /// Logarithmic is only honored while the axis value range is strictly
    /// positive; otherwise the axis stays linear. The request is remembered,
    /// so a later range change back into positive territory restores the
    /// logarithmic scale on the next layout.
    pub fn set_scale_type(&mut self, scale: ValueScale) {
        self.requested_scale = scale;
        let effective = if scale == ValueScale::Logarithmic && !self.log_allowed() {
            ValueScale::Linear
        } else {
            scale
        };
        self.scale.set_scale_type(effective);
        self.pending.layout_needed = true;
    }

    /// Whether extra padding is applied at the minimum end.
    #[must_use]
    pub fn is_min_extra_padded(&self) -> bool {
        self.extra_min_padding
    }

    /// Enables one extra interval below the minimum when the minimum lands
    /// exactly on an interval multiple. Best-fit layouts only.
    pub fn set_extra_min_padding(&mut self, on: bool) {
        if self.extra_min_padding != on {
            self.extra_min_padding = on;
            self.pending.layout_needed = true;
        }
    }

    /// Whether extra padding is applied at the maximum end.
    #[must_use]
    pub fn is_max_extra_padded(&self) -> bool {
        self.extra_max_padding
    }

    /// Enables one extra interval above the maximum when the maximum lands
    /// exactly on an interval multiple. Best-fit layouts only.
    pub fn set_extra_max_padding(&mut self, on: bool) {
        if self.extra_max_padding != on {
            self.extra_max_padding = on;
            self.pending.layout_needed = true;
        }
    }

    /// Whether the last layout found the space too small for a usable axis.
    #[must_use]
    pub fn is_space_too_small(&self) -> bool {
        self.space_too_small
    }

    /// Overrides the space-too-small state.
    ///
    /// The chart container may force this (e.g. while collapsed); the next
    /// layout pass recomputes it.
    pub fn set_space_too_small(&mut self, too_small: bool) {
        if self.space_too_small != too_small {
            self.space_too_small = too_small;
            self.pending.repaint_needed = true;
        }
    }

    /// Returns the drawing options.
    #[must_use]
    pub fn options(&self) -> &AxisOptions {
        &self.options
    }

    /// Replaces the drawing options.
    ///
    /// Layout-affecting changes (font size, precision, tick geometry,
    /// visibility) raise `layout_needed` and refresh the cached font
    /// metrics; paint-only changes raise `repaint_needed`.
    pub fn set_options(&mut self, options: AxisOptions, measurer: &dyn TextMeasurer) {
        if self.options == options {
            return;
        }
        if self.options.layout_differs(&options) {
            self.pending.layout_needed = true;
            self.options = options;
            self.update_font_height(measurer);
            // Widths are stale; the next layout re-measures every label.
            for entry in &mut self.entries {
                entry.width = 0.0;
            }
        } else {
            self.options = options;
            self.pending.repaint_needed = true;
        }
    }

    /// Drops the generated labels and cached layout, raising
    /// `layout_needed`.
    pub fn reset(&mut self) {
        self.model.clear();
        self.entries.clear();
        self.step = 0.0;
        self.max_label_width = 0.0;
        self.space_too_small = false;
        self.laid_out = false;
        self.pending.layout_needed = true;
    }

    /// Returns and clears the pending notification record.
    pub fn take_notifications(&mut self) -> Notifications {
        self.pending.take()
    }

    /// Lays the axis out within the chart rectangle `area`.
    ///
    /// This must run before [`ChartAxis::draw`] or any position query. The
    /// pass generates labels (best-fit mode), measures them, publishes the
    /// pixel/value scale, and caches per-label placement and visibility.
    /// `pixel_scale_changed` is raised only when the published mapping
    /// actually moved, so repeated identical layouts stay quiet.
    pub fn layout(&mut self, area: Rect, measurer: &dyn TextMeasurer, ctx: &LayoutContext<'_>) {
        let old_scale = self.scale;
        self.area = area;
        self.update_font_height(measurer);

        // Re-check the scale type: the range may have changed since it was
        // requested.
        let effective = if self.requested_scale == ValueScale::Logarithmic && self.log_allowed() {
            ValueScale::Logarithmic
        } else {
            ValueScale::Linear
        };

        let (run_start, run_end) = self.pixel_run(area, measurer, ctx);
        let run_len = (run_end - run_start).abs();
        self.space_too_small = run_len <= 0.0;

        if self.best_fit {
            self.generate_best_fit(run_len, effective, measurer, ctx);
        } else {
            self.step = 0.0;
        }

        if let (Some(first), Some(last)) = (self.model.first(), self.model.last()) {
            self.scale.set_value_range(first, last);
        }
        // The value range is current now, so a legal logarithmic request
        // sticks even when the previous range would have rejected it.
        self.scale.set_scale_type(effective);
        self.scale.set_pixel_range(run_start, run_end);

        self.rebuild_entries(measurer);
        self.apply_visibility(run_len);
        self.bounds = self.strip_bounds(area);
        self.laid_out = true;

        if self.scale != old_scale {
            self.pending.pixel_scale_changed = true;
        }
        self.pending.layout_needed = false;
    }

    /// Second layout pass for Left/Right axes.
    ///
    /// Called after every axis in the chart has been laid out once. The
    /// neighboring horizontal axes now know their final space requirements,
    /// so the vertical axis re-derives its end insets and reserved width and
    /// recomputes cached pixel positions. Label values are not regenerated.
    pub fn adjust_layout(&mut self, measurer: &dyn TextMeasurer, ctx: &LayoutContext<'_>) {
        if !self.location.is_vertical() || !self.laid_out {
            return;
        }
        let old_scale = self.scale;

        let (run_start, run_end) = self.pixel_run(self.area, measurer, ctx);
        self.scale.set_pixel_range(run_start, run_end);
        if self.scale.is_valid() {
            let values: Vec<f64> = self.model.labels().to_vec();
            for (entry, value) in self.entries.iter_mut().zip(values) {
                entry.pixel = self.scale.pixel_for(value);
            }
        }
        self.apply_visibility((run_end - run_start).abs());

        // Grow the strip if a horizontal neighbor's corner label needs more
        // end-cap room than the labels alone would reserve.
        let mut thickness = self.thickness();
        if let Some(neighbor) = ctx.at_min {
            thickness = thickness.max(neighbor.end_label_extent());
        }
        if let Some(neighbor) = ctx.at_max {
            thickness = thickness.max(neighbor.end_label_extent());
        }
        self.bounds = match self.location {
            AxisLocation::Left => {
                Rect::new(self.area.x0, self.area.y0, self.area.x0 + thickness, self.area.y1)
            }
            AxisLocation::Right => {
                Rect::new(self.area.x1 - thickness, self.area.y0, self.area.x1, self.area.y1)
            }
            AxisLocation::Top | AxisLocation::Bottom => self.bounds,
        };

        if self.scale != old_scale {
            self.pending.pixel_scale_changed = true;
        }
    }

    /// Returns the cross-axis thickness this axis wants.
    ///
    /// For horizontal axes this is font-derived and valid any time after the
    /// options have been applied with a measurer (or a layout has run). For
    /// vertical axes it depends on the generated label texts and is only
    /// valid after a layout.
    #[must_use]
    pub fn preferred_space(&self) -> f64 {
        debug_assert!(
            !self.location.is_vertical() || self.laid_out,
            "vertical preferred space queried before layout"
        );
        self.thickness()
    }

    /// Returns the cached label font height.
    #[must_use]
    pub fn font_height(&self) -> f64 {
        self.font_height
    }

    /// Returns the widest measured label. Valid after a layout.
    #[must_use]
    pub fn max_label_width(&self) -> f64 {
        self.max_label_width
    }

    /// Returns the bounding rectangle reserved for the axis.
    ///
    /// # Panics
    ///
    /// Panics when no layout has run.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        assert!(self.laid_out, "axis bounds queried before layout");
        self.bounds
    }

    /// Returns the published pixel/value scale.
    #[must_use]
    pub fn pixel_scale(&self) -> &PixelScale {
        &self.scale
    }

    /// Whether the label at `index` survived thinning and is drawn with a
    /// full-length tick.
    ///
    /// # Panics
    ///
    /// Panics when no layout has run or `index` is out of range.
    #[must_use]
    pub fn is_label_visible(&self, index: usize) -> bool {
        assert!(self.laid_out, "label visibility queried before layout");
        self.entries[index].label_visible
    }

    /// Returns the pixel location of the label at `index`.
    ///
    /// # Panics
    ///
    /// Panics when no layout has run or `index` is out of range.
    #[must_use]
    pub fn label_location(&self, index: usize) -> f64 {
        assert!(self.laid_out, "label location queried before layout");
        self.entries[index].pixel
    }

    /// Half the extent of the wider end label, in pixels along the axis.
    ///
    /// This is how far the first or last label can overhang the pixel run
    /// into a corner of the chart; neighboring axes consult it in their
    /// adjust pass.
    #[must_use]
    pub fn end_label_extent(&self) -> f64 {
        let first = self.entries.first().map_or(0.0, |e| e.width);
        let last = self.entries.last().map_or(0.0, |e| e.width);
        if self.location.is_vertical() {
            0.5 * self.font_height
        } else {
            0.5 * first.max(last)
        }
    }

    /// Draws the axis line, ticks, and visible labels into `surface`.
    ///
    /// Pure read of the cached layout: thinned labels get short ticks,
    /// visible labels get full ticks and text. When the space was too small
    /// only the axis line is drawn. `area` is the repaint region; drawing is
    /// skipped entirely when the axis bounds fall outside it.
    ///
    /// # Panics
    ///
    /// Panics when no layout has run.
    pub fn draw(&self, surface: &mut dyn DrawSurface, area: Rect) {
        assert!(self.laid_out, "axis drawn before layout");
        if !self.options.visible {
            return;
        }
        if self.bounds.intersect(area).is_zero_area() {
            return;
        }

        let stroke = StrokeStyle::solid(self.options.axis_color.clone(), 1.0);
        let edge = self.line_coordinate();
        let Some((p0, p1)) = self.scale.pixel_range() else {
            return;
        };
        let (lo, hi) = (p0.min(p1), p0.max(p1));

        let line = if self.location.is_vertical() {
            Line::new((edge, lo), (edge, hi))
        } else {
            Line::new((lo, edge), (hi, edge))
        };
        surface.draw_line(line, &stroke);

        if self.space_too_small {
            return;
        }

        let outward = self.outward_sign();
        for entry in &self.entries {
            let len = if entry.label_visible {
                self.options.tick_length
            } else {
                self.options.short_tick_length
            };
            let tick = if self.location.is_vertical() {
                Line::new((edge, entry.pixel), (edge + outward * len, entry.pixel))
            } else {
                Line::new((entry.pixel, edge), (entry.pixel, edge + outward * len))
            };
            surface.draw_line(tick, &stroke);

            if entry.label_visible && self.options.labels_visible {
                let gap = self.options.tick_length + self.options.label_gap;
                let (origin, anchor, baseline) = match self.location {
                    AxisLocation::Left => (
                        Point::new(edge - gap, entry.pixel),
                        TextAnchor::End,
                        TextBaseline::Middle,
                    ),
                    AxisLocation::Right => (
                        Point::new(edge + gap, entry.pixel),
                        TextAnchor::Start,
                        TextBaseline::Middle,
                    ),
                    AxisLocation::Top => (
                        Point::new(entry.pixel, edge - gap),
                        TextAnchor::Middle,
                        TextBaseline::Ideographic,
                    ),
                    AxisLocation::Bottom => (
                        Point::new(entry.pixel, edge + gap),
                        TextAnchor::Middle,
                        TextBaseline::Hanging,
                    ),
                };
                let style = LabelStyle {
                    fill: self.options.label_color.clone(),
                    font_size: self.options.label_font_size,
                    font_family: self.text_style().font_family,
                    anchor,
                    baseline,
                };
                surface.draw_text(origin, &entry.text, &style);
            }
        }
    }

    // ---- internals ----

    fn text_style(&self) -> TextStyle {
        TextStyle::new(self.options.label_font_size)
    }

    fn update_font_height(&mut self, measurer: &dyn TextMeasurer) {
        self.font_height = measurer.measure("0", &self.text_style()).line_height();
    }

    /// Whether a logarithmic scale is currently legal: the value domain must
    /// be strictly positive.
    fn log_allowed(&self) -> bool {
        if self.best_fit {
            let (min, max) = self.range;
            min > 0.0 && max > 0.0
        } else {
            match (self.model.first(), self.model.last()) {
                (Some(first), Some(last)) => first > 0.0 && last > 0.0,
                _ => true,
            }
        }
    }

    /// The generation-range endpoints used for width guessing.
    fn guess_endpoints(&self) -> (f64, f64) {
        if self.best_fit {
            let (min, max) = self.range;
            (min, if max >= min { max } else { min })
        } else {
            (
                self.model.first().unwrap_or(0.0),
                self.model.last().unwrap_or(0.0),
            )
        }
    }

    /// Estimated widest label, measured from the range endpoints at full
    /// precision. Used before labels exist.
    fn label_width_guess(&self, measurer: &dyn TextMeasurer) -> f64 {
        let (min, max) = self.guess_endpoints();
        let style = self.text_style();
        let opts = &self.options;
        let w_min = measurer
            .measure(&format_label(min, 0.0, opts.precision, opts.notation), &style)
            .advance_width;
        let w_max = measurer
            .measure(&format_label(max, 0.0, opts.precision, opts.notation), &style)
            .advance_width;
        w_min.max(w_max)
    }

    /// Space another axis should reserve for this one, usable before this
    /// axis has been laid out (falls back to an estimate).
    fn space_hint(&self, measurer: &dyn TextMeasurer) -> f64 {
        if self.laid_out {
            return self.thickness();
        }
        let label_extent = if self.location.is_vertical() {
            self.label_width_guess(measurer)
        } else {
            measurer.measure("0", &self.text_style()).line_height()
        };
        self.options.tick_length + self.options.label_gap + label_extent
    }

    fn thickness(&self) -> f64 {
        let label_extent = if self.location.is_vertical() {
            self.max_label_width
        } else {
            self.font_height
        };
        self.options.tick_length + self.options.label_gap + label_extent
    }

    /// Resolves the pixel run along the axis direction: the chart span minus
    /// an inset at each end for the neighboring axis (or at least half an
    /// end label), shifted by the contents-space pan offset. Vertical runs
    /// are inverted so the value minimum maps to the bottom.
    fn pixel_run(
        &self,
        area: Rect,
        measurer: &dyn TextMeasurer,
        ctx: &LayoutContext<'_>,
    ) -> (f64, f64) {
        let own_half = if self.location.is_vertical() {
            0.5 * self.font_height
        } else {
            0.5 * self.label_width_guess(measurer)
        };
        let inset_min = ctx
            .at_min
            .map_or(0.0, |a| a.space_hint(measurer))
            .max(own_half);
        let inset_max = ctx
            .at_max
            .map_or(0.0, |a| a.space_hint(measurer))
            .max(own_half);

        let offset = ctx.contents.copied().unwrap_or_default();
        if self.location.is_vertical() {
            (
                area.y1 - inset_min - offset.y_offset,
                area.y0 + inset_max - offset.y_offset,
            )
        } else {
            (
                area.x0 + inset_min - offset.x_offset,
                area.x1 - inset_max - offset.x_offset,
            )
        }
    }

    fn strip_bounds(&self, area: Rect) -> Rect {
        let thickness = self.thickness();
        match self.location {
            AxisLocation::Left => Rect::new(area.x0, area.y0, area.x0 + thickness, area.y1),
            AxisLocation::Right => Rect::new(area.x1 - thickness, area.y0, area.x1, area.y1),
            AxisLocation::Top => Rect::new(area.x0, area.y0, area.x1, area.y0 + thickness),
            AxisLocation::Bottom => Rect::new(area.x0, area.y1 - thickness, area.x1, area.y1),
        }
    }

    /// The fixed coordinate of the axis line: the strip edge facing the plot.
    fn line_coordinate(&self) -> f64 {
        match self.location {
            AxisLocation::Left => self.bounds.x1,
            AxisLocation::Right => self.bounds.x0,
            AxisLocation::Top => self.bounds.y1,
            AxisLocation::Bottom => self.bounds.y0,
        }
    }

    /// +1 when ticks grow toward larger coordinates (Right/Bottom strips).
    fn outward_sign(&self) -> f64 {
        match self.location {
            AxisLocation::Left | AxisLocation::Top => -1.0,
            AxisLocation::Right | AxisLocation::Bottom => 1.0,
        }
    }

    /// How many labels the run has room for, before nice-interval rounding.
    fn allowed_label_count(&self, run_len: f64, per_label: f64, ctx: &LayoutContext<'_>) -> usize {
        let mut allowed = if per_label > 0.0 {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "clamped non-negative and small before the cast"
            )]
            let slots = (run_len / per_label).floor().clamp(0.0, 64.0) as usize;
            slots + 1
        } else {
            MAX_LABEL_COUNT
        };
        allowed = allowed.clamp(MIN_LABEL_COUNT, MAX_LABEL_COUNT);

        // Align tick counts with the parallel axis when it already has a
        // layout, so shared gridlines land together.
        if let Some(across) = ctx.across
            && across.laid_out
            && across.model.len() >= MIN_LABEL_COUNT
        {
            allowed = allowed.min(across.model.len());
        }
        allowed.max(MIN_LABEL_COUNT)
    }

    fn generate_best_fit(
        &mut self,
        run_len: f64,
        scale_type: ValueScale,
        measurer: &dyn TextMeasurer,
        ctx: &LayoutContext<'_>,
    ) {
        let (raw_min, raw_max) = self.range;
        // Inverted input degenerates to a single-point range at the minimum.
        let (min, max) = if raw_min > raw_max {
            (raw_min, raw_min)
        } else {
            (raw_min, raw_max)
        };

        self.model.clear();
        if scale_type == ValueScale::Logarithmic {
            self.generate_log_labels(min, max, run_len, ctx);
        } else {
            self.generate_labels(min, max, run_len, measurer, ctx);
        }
    }

    fn generate_labels(
        &mut self,
        mut min: f64,
        mut max: f64,
        run_len: f64,
        measurer: &dyn TextMeasurer,
        ctx: &LayoutContext<'_>,
    ) {
        if min == max {
            if self.data_available {
                self.model.insert_label(0, min);
                self.step = 0.0;
                return;
            }
            // No data to anchor on; spread a default unit span around the
            // value so the axis still reads.
            min -= 0.5;
            max += 0.5;
        }

        let per_label = if self.location.is_vertical() {
            self.font_height + self.options.label_gap
        } else {
            self.label_width_guess(measurer) + self.options.label_gap
        };
        let allowed = self.allowed_label_count(run_len, per_label, ctx);

        let span = max - min;
        let mut step = nice_step(span / (allowed - 1) as f64);
        if step <= 0.0 || !step.is_finite() {
            self.model.insert_label(0, min);
            self.model.insert_label(1, max);
            self.step = 0.0;
            return;
        }

        let mut start;
        let mut end;
        loop {
            start = (min / step).floor() * step;
            end = (max / step).ceil() * step;
            let count = ((end - start) / step).round();
            if !count.is_finite() || count < 0.0 {
                self.model.insert_label(0, min);
                self.model.insert_label(1, max);
                self.step = 0.0;
                return;
            }
            if count + 1.0 <= allowed as f64 {
                break;
            }
            step = next_nice_step(step);
        }

        let eps = step * 1e-6;
        if self.extra_min_padding && (min - start).abs() <= eps {
            start -= step;
        }
        if self.extra_max_padding && (end - max).abs() <= eps {
            end += step;
        }

        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "count is finite, non-negative, and capped well below usize"
        )]
        let n = (((end - start) / step).round().min(1000.0)) as usize;
        for i in 0..=n {
            let mut value = start + step * i as f64;
            if value.abs() < eps {
                value = 0.0;
            }
            self.model.insert_label(i, value);
        }
        self.step = step;
    }

    fn generate_log_labels(&mut self, min: f64, max: f64, run_len: f64, ctx: &LayoutContext<'_>) {
        // The caller guarantees a positive domain here (log_allowed).
        let (mut e0, mut e1);
        if min == max {
            if self.data_available {
                self.model.insert_label(0, min);
                self.step = 0.0;
                return;
            }
            // Bracket the value with the surrounding decade boundaries.
            let e = min.log10();
            e0 = (e - 0.5).floor();
            e1 = (e + 0.5).ceil();
        } else {
            e0 = min.log10().floor();
            e1 = max.log10().ceil();
        }
        if e1 <= e0 {
            e1 = e0 + 1.0;
        }

        let per_label = self.font_height + self.options.label_gap;
        let allowed = self.allowed_label_count(run_len, per_label, ctx);
        let decades = e1 - e0;
        let estep = (decades / (allowed - 1) as f64).ceil().max(1.0);

        let eps = 1e-9;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "decade exponents are tiny; clamped to the i32 range"
        )]
        let to_exp = |e: f64| e.clamp(-300.0, 300.0) as i32;

        if self.extra_min_padding && (min.log10() - e0).abs() <= eps {
            e0 -= estep;
        }
        if self.extra_max_padding && (max.log10() - e1).abs() <= eps {
            e1 += estep;
        }

        let mut index = 0;
        let mut e = e0;
        while e < e1 - eps {
            self.model.insert_label(index, 10.0_f64.powi(to_exp(e)));
            index += 1;
            e += estep;
        }
        self.model.insert_label(index, 10.0_f64.powi(to_exp(e1)));
        self.step = 0.0;
    }

    /// Rebuilds the per-label cache: formatted text, measured width, pixel
    /// location.
    fn rebuild_entries(&mut self, measurer: &dyn TextMeasurer) {
        let style = self.text_style();
        let opts = &self.options;
        let log = self.scale.scale_type() == ValueScale::Logarithmic;
        let valid = self.scale.is_valid();

        self.max_label_width = 0.0;
        let mut entries = Vec::with_capacity(self.model.len());
        for &value in self.model.labels() {
            // Log labels are decades; derive their digits from the value
            // itself so 0.01 keeps its decimals and 1000 drops them.
            let step = if log { value.abs() } else { self.step };
            let text = format_label(value, step, opts.precision, opts.notation);
            let width = measurer.measure(&text, &style).advance_width;
            self.max_label_width = self.max_label_width.max(width);
            let pixel = if valid { self.scale.pixel_for(value) } else { 0.0 };
            entries.push(LabelEntry {
                pixel,
                label_visible: true,
                width,
                text,
            });
        }
        self.entries = entries;
    }

    /// Thins overlapping labels: walk the labels in display order and keep
    /// one whenever it sits at least the needed spacing past the last kept
    /// one. Uniformly spaced ticks therefore keep an evenly spaced subset.
    /// Every label keeps its tick regardless.
    fn apply_visibility(&mut self, run_len: f64) {
        let needed = if self.location.is_vertical() {
            self.font_height + self.options.label_gap
        } else {
            self.max_label_width + self.options.label_gap
        };

        let mut last_kept: Option<f64> = None;
        let mut visible = 0_usize;
        for entry in &mut self.entries {
            let keep = match last_kept {
                None => true,
                Some(pixel) => (entry.pixel - pixel).abs() + 1e-9 >= needed,
            };
            entry.label_visible = keep;
            if keep {
                last_kept = Some(entry.pixel);
                visible += 1;
            }
        }

        if run_len <= 0.0 || (self.entries.len() >= MIN_LABEL_COUNT && visible < MIN_LABEL_COUNT) {
            self.space_too_small = true;
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use ortho_text::HeuristicTextMeasurer;
    use peniko::color::palette::css;

    use super::*;
    use crate::surface::RecordingSurface;

    const MEASURER: HeuristicTextMeasurer = HeuristicTextMeasurer;

    fn area(width: f64, height: f64) -> Rect {
        Rect::new(0.0, 0.0, width, height)
    }

    fn best_fit_axis(location: AxisLocation, min: f64, max: f64) -> ChartAxis {
        let mut axis = ChartAxis::new(location);
        axis.set_best_fit(true);
        axis.set_best_fit_range(min, max);
        axis
    }

    #[test]
    fn bottom_best_fit_picks_a_nice_interval() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());

        assert_eq!(axis.model().labels(), &[0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert!((0..6).all(|i| axis.is_label_visible(i)));
        assert!(!axis.is_space_too_small());

        let scale = axis.pixel_scale();
        assert!(scale.is_valid());
        // The run is inset by half the widest end-label guess at each end.
        assert!((axis.label_location(0) - 18.0).abs() < 1e-9);
        assert!((axis.label_location(5) - 382.0).abs() < 1e-9);
    }

    #[test]
    fn log_best_fit_emits_decade_labels() {
        let mut axis = best_fit_axis(AxisLocation::Left, 1.0, 10000.0);
        axis.set_scale_type(ValueScale::Logarithmic);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());

        assert_eq!(axis.scale_type(), ValueScale::Logarithmic);
        assert_eq!(axis.model().labels(), &[1.0, 10.0, 100.0, 1000.0, 10000.0]);
        // Vertical runs are inverted: the minimum sits at the bottom.
        assert!(axis.label_location(0) > axis.label_location(4));
        // Decades are evenly spaced in pixels.
        let gap01 = axis.label_location(0) - axis.label_location(1);
        let gap34 = axis.label_location(3) - axis.label_location(4);
        assert!((gap01 - gap34).abs() < 1e-9);
    }

    #[test]
    fn log_request_falls_back_to_linear_for_non_positive_range() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, -5.0, 100.0);
        axis.set_scale_type(ValueScale::Logarithmic);
        assert_eq!(axis.scale_type(), ValueScale::Linear);

        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        assert_eq!(axis.scale_type(), ValueScale::Linear);
        assert!(axis.model().first().is_some());

        // The request is remembered: a positive range restores it.
        axis.set_best_fit_range(1.0, 100.0);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        assert_eq!(axis.scale_type(), ValueScale::Logarithmic);
    }

    #[test]
    fn degenerate_range_without_data_centers_a_default_span() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 5.0, 5.0);
        axis.set_data_available(false);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());

        let first = axis.model().first().unwrap();
        let last = axis.model().last().unwrap();
        assert!(first < 5.0 && 5.0 < last);
        assert!((0.5 * (first + last) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_range_with_data_emits_one_centered_label() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 5.0, 5.0);
        axis.set_data_available(true);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());

        assert_eq!(axis.model().labels(), &[5.0]);
        assert!(axis.is_label_visible(0));
        assert!((axis.label_location(0) - 200.0).abs() < 1e-9);
        assert!(!axis.is_space_too_small());
    }

    #[test]
    fn inverted_range_degenerates_at_the_minimum() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 10.0, 2.0);
        axis.set_data_available(true);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        assert_eq!(axis.model().labels(), &[10.0]);
    }

    #[test]
    fn extra_padding_adds_one_interval_on_exact_multiples() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.set_extra_min_padding(true);
        axis.set_extra_max_padding(true);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        assert_eq!(axis.model().first(), Some(-20.0));
        assert_eq!(axis.model().last(), Some(120.0));

        // A maximum off the interval grid already has headroom; no pad.
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 95.0);
        axis.set_extra_max_padding(true);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        assert_eq!(axis.model().last(), Some(100.0));
    }

    #[test]
    fn repeated_identical_layouts_are_quiet() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        assert!(axis.take_notifications().pixel_scale_changed);

        let before: Vec<f64> = (0..axis.model().len())
            .map(|i| axis.label_location(i))
            .collect();
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        let pending = axis.take_notifications();
        assert!(!pending.pixel_scale_changed);
        assert!(!pending.layout_needed);
        for (i, pixel) in before.iter().enumerate() {
            assert!((axis.label_location(i) - pixel).abs() < 1e-12);
        }
    }

    #[test]
    fn thinning_is_monotone_and_keeps_every_tick() {
        let mut axis = ChartAxis::new(AxisLocation::Bottom);
        axis.set_model(AxisLabelModel::from_values(
            (0..=10).map(f64::from).collect(),
        ));

        let mut counts = Vec::new();
        for width in [400.0, 250.0, 150.0, 80.0, 60.0] {
            axis.layout(area(width, 300.0), &MEASURER, &LayoutContext::default());
            assert_eq!(axis.model().len(), 11);
            let visible = (0..11).filter(|&i| axis.is_label_visible(i)).count();
            counts.push(visible);
        }

        assert_eq!(counts[0], 11);
        assert!(counts.windows(2).all(|pair| pair[1] <= pair[0]));
        // The narrowest pass cannot even show two labels.
        assert!(axis.is_space_too_small());
        // The first label always survives thinning.
        assert!(axis.is_label_visible(0));
    }

    #[test]
    fn too_small_axis_draws_only_its_line() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.layout(area(30.0, 300.0), &MEASURER, &LayoutContext::default());
        assert!(axis.is_space_too_small());

        let mut surface = RecordingSurface::default();
        axis.draw(&mut surface, area(30.0, 300.0));
        assert_eq!(surface.lines.len(), 1);
        assert!(surface.texts.is_empty());
    }

    #[test]
    fn draw_emits_line_ticks_and_visible_labels() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());

        let mut surface = RecordingSurface::default();
        axis.draw(&mut surface, area(400.0, 300.0));
        // One axis line plus one tick per label.
        assert_eq!(surface.lines.len(), 7);
        assert_eq!(surface.texts.len(), 6);
        assert_eq!(surface.texts[0].1, "0");
        assert_eq!(surface.texts[5].1, "100");
    }

    #[test]
    fn hidden_labels_still_get_ticks() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.set_options(
            AxisOptions::new().with_labels_visible(false),
            &MEASURER,
        );
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());

        let mut surface = RecordingSurface::default();
        axis.draw(&mut surface, area(400.0, 300.0));
        assert_eq!(surface.lines.len(), 7);
        assert!(surface.texts.is_empty());
    }

    #[test]
    fn published_scale_round_trips() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        let scale = axis.pixel_scale();
        let pixel = scale.pixel_for(42.0);
        assert!((scale.value_for(pixel) - 42.0).abs() < 1e-9);
    }

    #[test]
    fn adjust_layout_insets_the_run_for_a_neighbor() {
        let chart = area(400.0, 300.0);
        let mut bottom = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        bottom.layout(chart, &MEASURER, &LayoutContext::default());

        let mut left = best_fit_axis(AxisLocation::Left, 0.0, 100.0);
        left.layout(chart, &MEASURER, &LayoutContext::default());
        let _ = left.take_notifications();
        assert!((left.label_location(0) - 295.0).abs() < 1e-9);

        let ctx = LayoutContext {
            at_min: Some(&bottom),
            ..LayoutContext::default()
        };
        left.adjust_layout(&MEASURER, &ctx);
        // The bottom axis reserves tick + gap + font height = 19 pixels.
        assert!((left.label_location(0) - 281.0).abs() < 1e-9);
        assert!(left.take_notifications().pixel_scale_changed);
        assert!(left.bounds().width() >= bottom.end_label_extent());
    }

    #[test]
    fn parallel_axis_caps_the_label_count() {
        let chart = area(400.0, 300.0);
        let mut right = ChartAxis::new(AxisLocation::Right);
        right.set_model(AxisLabelModel::from_values(vec![0.0, 50.0, 100.0]));
        right.layout(chart, &MEASURER, &LayoutContext::default());

        let mut left = best_fit_axis(AxisLocation::Left, 0.0, 100.0);
        let ctx = LayoutContext {
            across: Some(&right),
            ..LayoutContext::default()
        };
        left.layout(chart, &MEASURER, &ctx);
        assert_eq!(left.model().labels(), &[0.0, 50.0, 100.0]);
    }

    #[test]
    fn contents_offset_pans_the_run() {
        let chart = area(400.0, 300.0);
        let mut panned = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        let contents = ContentsSpace {
            x_offset: 25.0,
            y_offset: 0.0,
        };
        let ctx = LayoutContext {
            contents: Some(&contents),
            ..LayoutContext::default()
        };
        panned.layout(chart, &MEASURER, &ctx);
        assert!((panned.label_location(0) - (18.0 - 25.0)).abs() < 1e-9);
    }

    #[test]
    fn set_options_classifies_notifications() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        let _ = axis.take_notifications();

        axis.set_options(
            AxisOptions::new().with_axis_color(css::DARK_GRAY),
            &MEASURER,
        );
        let pending = axis.take_notifications();
        assert!(pending.repaint_needed);
        assert!(!pending.layout_needed);

        axis.set_options(AxisOptions::new().with_label_font_size(14.0), &MEASURER);
        assert!(axis.take_notifications().layout_needed);
        assert!((axis.font_height() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn model_mutation_raises_layout_needed() {
        let mut axis = ChartAxis::new(AxisLocation::Bottom);
        let _ = axis.take_notifications();
        axis.model_mut().add_label(1.0);
        assert!(axis.take_notifications().layout_needed);

        axis.set_best_fit_range(0.0, 1.0);
        assert!(axis.take_notifications().layout_needed);
        // Setting the same range again still asks for a layout.
        axis.set_best_fit_range(0.0, 1.0);
        assert!(axis.take_notifications().layout_needed);
    }

    #[test]
    fn reset_drops_labels_and_requests_layout() {
        let mut axis = best_fit_axis(AxisLocation::Bottom, 0.0, 100.0);
        axis.layout(area(400.0, 300.0), &MEASURER, &LayoutContext::default());
        let _ = axis.take_notifications();

        axis.reset();
        assert!(axis.model().is_empty());
        assert!(axis.take_notifications().layout_needed);
    }

    #[test]
    #[should_panic(expected = "axis bounds queried before layout")]
    fn bounds_before_layout_panics() {
        let _ = ChartAxis::new(AxisLocation::Bottom).bounds();
    }

    #[test]
    #[should_panic(expected = "axis drawn before layout")]
    fn draw_before_layout_panics() {
        let axis = ChartAxis::new(AxisLocation::Bottom);
        let mut surface = RecordingSurface::default();
        axis.draw(&mut surface, area(10.0, 10.0));
    }
}
