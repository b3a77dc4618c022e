// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart axis layout for orthogonal (cartesian) charts.
//!
//! This crate is the layout half of an axis guide:
//! - **[`ChartAxis`]** turns a value range (or a caller-built label model)
//!   into tick values, pixel placements, and label visibility for one edge
//!   of a chart rectangle.
//! - **[`PixelScale`]** is the published pixel/value mapping other chart
//!   layers (series, gridlines, cursors) use to place their own geometry.
//! - **[`DrawSurface`]** is the immediate-mode sink the draw pass paints
//!   into; renderers implement it however they like.
//!
//! Layout and drawing are separate passes: layout is the only place text is
//! measured or labels are generated, and drawing only reads the cached
//! result. Text measurement comes in through [`ortho_text::TextMeasurer`],
//! so the crate works the same over a shaping engine, a web canvas, or the
//! test heuristic.

#![no_std]

extern crate alloc;

mod axis;
mod event;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod model;
mod options;
mod scale;
mod surface;

pub use axis::{AxisLocation, ChartAxis, ContentsSpace, LayoutContext};
pub use event::Notifications;
pub use format::{decimals_for_step, format_label};
pub use model::AxisLabelModel;
pub use options::{AxisOptions, LabelNotation};
pub use scale::{PixelScale, ValueScale};
pub use surface::{DrawSurface, LabelStyle, StrokeStyle, TextAnchor, TextBaseline};
