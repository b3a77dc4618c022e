// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout demos for `ortho_axis`.

mod svg;

use kurbo::Rect;
use peniko::color::palette::css;

use ortho_axis::{
    AxisLocation, AxisOptions, ChartAxis, DrawSurface, LayoutContext, ValueScale,
};
use ortho_text::HeuristicTextMeasurer;

use svg::SvgSurface;

fn main() {
    let measurer = HeuristicTextMeasurer;
    let chart = Rect::new(20.0, 20.0, 620.0, 380.0);

    // A best-fit linear axis along the bottom.
    let mut bottom = ChartAxis::new(AxisLocation::Bottom);
    bottom.set_best_fit(true);
    bottom.set_best_fit_range(0.0, 100.0);
    bottom.set_extra_max_padding(true);

    // A logarithmic axis on the left, spanning four decades.
    let mut left = ChartAxis::new(AxisLocation::Left);
    left.set_best_fit(true);
    left.set_best_fit_range(1.0, 10000.0);
    left.set_scale_type(ValueScale::Logarithmic);
    left.set_options(
        AxisOptions::new()
            .with_axis_color(css::DARK_SLATE_GRAY)
            .with_label_color(css::DARK_SLATE_GRAY),
        &measurer,
    );

    // A degenerate range on top: a flat series still gets one tick.
    let mut top = ChartAxis::new(AxisLocation::Top);
    top.set_best_fit(true);
    top.set_best_fit_range(42.0, 42.0);
    top.set_data_available(true);
    top.set_options(
        AxisOptions::new()
            .with_axis_color(css::GRAY)
            .with_label_color(css::GRAY),
        &measurer,
    );

    // First pass: everyone lays out against their neighbors' estimates;
    // second pass lets the vertical axis settle on final insets.
    bottom.layout(
        chart,
        &measurer,
        &LayoutContext {
            at_min: Some(&left),
            ..LayoutContext::default()
        },
    );
    top.layout(
        chart,
        &measurer,
        &LayoutContext {
            at_min: Some(&left),
            ..LayoutContext::default()
        },
    );
    left.layout(
        chart,
        &measurer,
        &LayoutContext {
            at_min: Some(&bottom),
            at_max: Some(&top),
            ..LayoutContext::default()
        },
    );
    left.adjust_layout(
        &measurer,
        &LayoutContext {
            at_min: Some(&bottom),
            at_max: Some(&top),
            ..LayoutContext::default()
        },
    );

    let mut surface = SvgSurface::new(Rect::new(0.0, 0.0, 640.0, 400.0));
    draw_axis(&bottom, &mut surface, chart);
    draw_axis(&left, &mut surface, chart);
    draw_axis(&top, &mut surface, chart);

    std::fs::write("ortho_axis_demo.svg", surface.to_svg_string())
        .expect("write ortho_axis_demo.svg");
    println!("wrote ortho_axis_demo.svg");

    report(&bottom, "bottom");
    report(&left, "left");
    report(&top, "top");
}

fn draw_axis(axis: &ChartAxis, surface: &mut dyn DrawSurface, area: Rect) {
    axis.draw(surface, area);
}

fn report(axis: &ChartAxis, name: &str) {
    let labels = axis.model().labels();
    println!(
        "{name}: {} labels {:?}, preferred space {:.1}px",
        labels.len(),
        labels,
        axis.preferred_space()
    );
}
