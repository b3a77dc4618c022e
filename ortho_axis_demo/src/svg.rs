// Copyright 2026 the Ortho Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump surface for `ortho_axis_demo`.

use kurbo::{Line, Point, Rect};
use peniko::Brush;

use ortho_axis::{DrawSurface, LabelStyle, StrokeStyle, TextAnchor, TextBaseline};

/// A [`DrawSurface`] that collects axis primitives as SVG elements.
#[derive(Debug)]
pub(crate) struct SvgSurface {
    view_box: Rect,
    body: String,
}

impl SvgSurface {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            body: String::new(),
        }
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let vb = self.view_box;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height()
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl DrawSurface for SvgSurface {
    fn draw_line(&mut self, line: Line, stroke: &StrokeStyle) {
        self.body.push_str(&format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        ));
        write_paint_attr(&mut self.body, "stroke", &stroke.brush);
        self.body
            .push_str(&format!(r#" stroke-width="{}""#, stroke.stroke_width));
        self.body.push_str("/>\n");
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &LabelStyle) {
        let baseline = match style.baseline {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Middle => "middle",
            TextBaseline::Hanging => "hanging",
            TextBaseline::Ideographic => "ideographic",
        };
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}" font-family="{}" dominant-baseline="{}""#,
            origin.x,
            origin.y,
            style.font_size,
            style.font_family.as_css_family(),
            baseline
        ));
        self.body.push_str(match style.anchor {
            TextAnchor::Start => r#" text-anchor="start""#,
            TextAnchor::Middle => r#" text-anchor="middle""#,
            TextAnchor::End => r#" text-anchor="end""#,
        });
        write_paint_attr(&mut self.body, "fill", &style.fill);
        self.body.push('>');
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn lines_and_text_land_in_the_svg() {
        let mut surface = SvgSurface::new(Rect::new(0.0, 0.0, 100.0, 50.0));
        surface.draw_line(
            Line::new((0.0, 10.0), (100.0, 10.0)),
            &StrokeStyle::default(),
        );
        surface.draw_text(
            Point::new(50.0, 20.0),
            "a<b",
            &LabelStyle {
                fill: Brush::Solid(css::BLACK),
                font_size: 10.0,
                font_family: ortho_text::FontFamily::SansSerif,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Hanging,
            },
        );
        let svg = surface.to_svg_string();
        assert!(svg.contains("<line x1=\"0\""));
        assert!(svg.contains("a&lt;b"));
        assert!(svg.contains("text-anchor=\"middle\""));
    }
}
