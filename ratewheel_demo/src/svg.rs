// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `ratewheel_demo`.

use peniko::Brush;
use ratewheel::ChartFrame;

pub(crate) fn frame_to_svg(frame: &ChartFrame) -> String {
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}" overflow="visible""#,
        w = frame.width,
        h = frame.height
    ));
    if !frame.classes.is_empty() {
        out.push_str(&format!(
            r#" class="{}""#,
            escape_xml(&frame.classes.join(" "))
        ));
    }
    out.push_str(">\n");

    for arc in &frame.arcs {
        let mut classes = String::from("arc");
        for class in &arc.classes {
            classes.push(' ');
            classes.push_str(class);
        }
        out.push_str(&format!(
            r#"<g class="{}" index="{}" transform="translate({},{})">"#,
            escape_xml(&classes),
            arc.index,
            arc.offset.x,
            arc.offset.y
        ));
        out.push('\n');

        out.push_str(&format!(r#"<path d="{}""#, arc.body.to_svg()));
        write_paint_attr(&mut out, "fill", &arc.fill);
        out.push_str("/>\n");

        out.push_str(&format!(
            r##"<path class="highlight" d="{}" fill="#fff"/>"##,
            arc.highlight.to_svg()
        ));
        out.push_str("\n</g>\n");
    }

    if let Some(class) = &frame.no_votes_class {
        out.push_str(&format!(
            r#"<text class="{}" x="{}" y="{}" text-anchor="middle" font-size="10">no votes yet</text>"#,
            escape_xml(class),
            frame.center.x,
            frame.center.y
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
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

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
