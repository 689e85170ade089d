// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating chart demos for `ratewheel`.
mod html;
mod svg;

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Point;
use ratewheel::{ChartConfig, InteractionController, RatingChart, RenderOptions};

fn main() {
    let sections = vec![
        gallery_demo(),
        hover_demo(),
        rate_mode_demo(),
        touch_rating_demo(),
        loading_demo(),
    ];

    let report = html::render_report("Ratewheel demo", &sections);
    std::fs::write("ratewheel_demo.html", report).expect("write ratewheel_demo.html");
    println!("wrote ratewheel_demo.html");
}

fn chart(container: &str, id: u64, rates: Vec<f64>, rated: Option<usize>) -> RatingChart {
    let mut config = ChartConfig::new(id, rates);
    config.rated = rated;
    RatingChart::new(container, config, RenderOptions::default()).expect("valid demo rates")
}

fn snapshot(ctl: &InteractionController, caption: &str) -> (String, String) {
    (caption.to_string(), svg::frame_to_svg(&ctl.chart().render()))
}

fn gallery_demo() -> html::HtmlSection {
    let charts = [
        chart("#chart-1", 1, vec![30.0, 20.0, 25.0, 25.0], Some(0)),
        chart("#chart-2", 2, vec![20.0, 20.0, 30.0, 20.0], None),
        chart("#chart-3", 3, vec![10.0, 60.0, 15.0, 15.0], Some(1)),
        chart("#chart-4", 4, vec![70.0, 10.0, 10.0, 10.0], Some(3)),
        chart("#chart-5", 5, vec![0.0, 0.0, 0.0, 0.0], None),
    ];

    let blocks = charts
        .iter()
        .map(|c| {
            let caption = if c.has_no_votes_marker() {
                format!("{}: no votes yet", c.container())
            } else {
                let shares: Vec<String> = (0..c.segments().len())
                    .map(|i| format!("{}%", c.share(i).unwrap_or(0.0)))
                    .collect();
                format!("{}: {}", c.container(), shares.join(" / "))
            };
            (caption, svg::frame_to_svg(&c.render()))
        })
        .collect();

    html::HtmlSection {
        title: "Chart gallery".to_string(),
        blocks,
    }
}

fn hover_demo() -> html::HtmlSection {
    let mut ctl = InteractionController::new(chart(
        "#hover",
        10,
        vec![30.0, 20.0, 25.0, 25.0],
        Some(0),
    ));
    let mut blocks = vec![snapshot(&ctl, "idle")];

    // Onto the first segment: lifted and displaced outward over 150 ms.
    ctl.pointer_moved(Point::new(90.0, 60.0));
    ctl.advance(150.0);
    blocks.push(snapshot(&ctl, "segment hovered: lifted and moved along its bisector"));

    // Away again: settles back over 100 ms.
    ctl.pointer_moved(Point::new(200.0, 60.0));
    ctl.advance(100.0);
    blocks.push(snapshot(&ctl, "pointer gone: settled back to base geometry"));

    html::HtmlSection {
        title: "Hover lift".to_string(),
        blocks,
    }
}

fn rate_mode_demo() -> html::HtmlSection {
    let mut ctl = InteractionController::new(chart(
        "#rate-mode",
        11,
        vec![10.0, 60.0, 15.0, 15.0],
        Some(1),
    ));
    let mut blocks = vec![snapshot(&ctl, "idle: live distribution")];

    // Into the frame corner: over the chart but over no segment.
    ctl.pointer_moved(Point::new(4.0, 4.0));
    ctl.advance(100.0);
    blocks.push(snapshot(&ctl, "rating mode: equal shares, separated outward"));

    ctl.pointer_moved(Point::new(200.0, 200.0));
    ctl.advance(100.0);
    blocks.push(snapshot(&ctl, "left the chart: baseline restored"));

    html::HtmlSection {
        title: "Rating mode".to_string(),
        blocks,
    }
}

fn touch_rating_demo() -> html::HtmlSection {
    let mut ctl = InteractionController::new(chart(
        "#touch",
        12,
        vec![20.0, 20.0, 30.0, 20.0],
        None,
    ));

    let chosen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&chosen);
    ctl.on_select(move |ev| {
        *sink.borrow_mut() = Some(ev.index);
    });

    let mut blocks = vec![snapshot(&ctl, "no rating cast yet")];

    // First tap arms the controller and shows the rating affordance.
    ctl.touch_at(Point::new(40.0, 85.0));
    ctl.advance(100.0);
    blocks.push(snapshot(&ctl, "first tap: armed, rating affordance shown"));

    // Second tap confirms; the caller reacts by applying the selection.
    ctl.touch_at(Point::new(40.0, 85.0));
    if let Some(index) = *chosen.borrow() {
        ctl.chart_mut().set_selected_arc(Some(index));
    }
    ctl.advance(100.0);
    blocks.push(snapshot(&ctl, "second tap: confirmed, selection applied by the caller"));

    html::HtmlSection {
        title: "Touch rating".to_string(),
        blocks,
    }
}

fn loading_demo() -> html::HtmlSection {
    let mut ctl = InteractionController::new(chart(
        "#loading",
        13,
        vec![30.0, 20.0, 25.0, 25.0],
        Some(2),
    ));

    ctl.chart_mut().toggle_loading_mode(true);
    let mut blocks = vec![snapshot(&ctl, "loading mode on")];

    ctl.chart_mut().toggle_loading_mode(false);
    blocks.push(snapshot(&ctl, "loading mode off"));

    html::HtmlSection {
        title: "Loading mode".to_string(),
        blocks,
    }
}
