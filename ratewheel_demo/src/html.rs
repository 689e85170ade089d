// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML report assembly for `ratewheel_demo`.

pub(crate) struct HtmlSection {
    pub(crate) title: String,
    /// `(caption, svg)` pairs rendered side by side.
    pub(crate) blocks: Vec<(String, String)>,
}

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{title}</title>\n"));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         figure { display: inline-block; vertical-align: top; margin: 0 1.5em 1.5em 0; }\n\
         figcaption { font-size: 12px; color: #555; max-width: 160px; }\n\
         .selected path { stroke: #333; stroke-width: 1; }\n\
         .chart-loading { opacity: 0.4; }\n\
         .chart__no-votes { fill: #999; }\n\
         </style>\n</head>\n<body>\n",
    );
    out.push_str(&format!("<h1>{title}</h1>\n"));

    for section in sections {
        out.push_str(&format!("<h2>{}</h2>\n", section.title));
        for (caption, svg) in &section.blocks {
            out.push_str("<figure>\n");
            out.push_str(svg);
            out.push_str(&format!("<figcaption>{caption}</figcaption>\n</figure>\n"));
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}
