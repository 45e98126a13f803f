use dioxus::prelude::*;

use crate::core::format::series_label;
use crate::core::projection::{ChartRow, ChartSeries};
use crate::radar::geometry::{label_anchor, RadarFrame, DOMAIN_MAX, RING_STEPS};

const CANVAS: f64 = 420.0;
const LABEL_MARGIN: f64 = 70.0;
const FILL_OPACITY: &str = "0.3";

#[component]
pub fn RadarChart(rows: Vec<ChartRow>, series: Vec<ChartSeries>) -> Element {
    if rows.is_empty() {
        return rsx! {
            div { class: "radar radar--empty",
                p { class: "board-card__placeholder", "Add a metric to start drawing the chart." }
            }
        };
    }

    let frame = RadarFrame::new(CANVAS, LABEL_MARGIN);
    let axis_count = rows.len();
    let view_box = format!("0 0 {CANVAS} {CANVAS}");

    let rings: Vec<String> = RING_STEPS
        .iter()
        .map(|step| frame.ring(axis_count, *step))
        .collect();

    let axes: Vec<AxisLine> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let end = frame.point(index, axis_count, DOMAIN_MAX);
            let label = frame.label_point(index, axis_count, 14.0);
            AxisLine {
                x2: format!("{:.2}", end.x),
                y2: format!("{:.2}", end.y),
                label_x: format!("{:.2}", label.x),
                label_y: format!("{:.2}", label.y),
                anchor: label_anchor(index, axis_count),
                text: row.metric.clone(),
            }
        })
        .collect();

    // Series read their column by display name, so same-named data sets draw the same shape.
    let shapes: Vec<SeriesShape> = series
        .iter()
        .map(|entry| {
            let values: Vec<f64> = rows
                .iter()
                .map(|row| row.value(&entry.key).unwrap_or(0.0))
                .collect();
            SeriesShape {
                points: frame.polygon(&values),
                stroke: entry.color.stroke.clone(),
                fill: entry.color.fill.clone(),
            }
        })
        .collect();

    let center = frame.center;

    rsx! {
        div { class: "radar",
            svg {
                class: "radar__plot",
                view_box: "{view_box}",
                g { class: "radar__grid",
                    for points in rings {
                        polygon { points: "{points}", fill: "none", stroke: "#d0d4dc", stroke_width: "1" }
                    }
                    for axis in axes.iter() {
                        line {
                            x1: "{center}",
                            y1: "{center}",
                            x2: "{axis.x2}",
                            y2: "{axis.y2}",
                            stroke: "#d0d4dc",
                            stroke_width: "1",
                        }
                    }
                }
                g { class: "radar__series",
                    for shape in shapes {
                        polygon {
                            points: "{shape.points}",
                            stroke: "{shape.stroke}",
                            fill: "{shape.fill}",
                            fill_opacity: FILL_OPACITY,
                            stroke_width: "2",
                        }
                    }
                }
                g { class: "radar__labels",
                    for axis in axes.iter() {
                        text {
                            x: "{axis.label_x}",
                            y: "{axis.label_y}",
                            text_anchor: axis.anchor,
                            dominant_baseline: "middle",
                            "{axis.text}"
                        }
                    }
                }
            }
            {render_legend(&series)}
        }
    }
}

struct AxisLine {
    x2: String,
    y2: String,
    label_x: String,
    label_y: String,
    anchor: &'static str,
    text: String,
}

struct SeriesShape {
    points: String,
    stroke: String,
    fill: String,
}

fn render_legend(series: &[ChartSeries]) -> Element {
    if series.is_empty() {
        return rsx! {
            p { class: "board-card__placeholder", "Add a member to plot scores." }
        };
    }

    rsx! {
        ul { class: "radar__legend",
            for entry in series.iter() {
                li { class: "radar__legend-item",
                    span {
                        class: "radar__swatch",
                        style: "background:{entry.color.fill};border-color:{entry.color.stroke}",
                    }
                    span { "{series_label(&entry.key)}" }
                }
            }
        }
    }
}
