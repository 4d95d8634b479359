use dioxus::prelude::*;

use crate::poller::ChartSeries;
use crate::utils::format::{format_celsius, format_percent};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 260.0;
const PADDING: f32 = 20.0;

const TEMP_COLOR: &str = "#3b82f6"; // blue
const HUM_COLOR: &str = "#10b981"; // green

/// Both series share one y axis; it hugs the data instead of starting at zero.
fn y_bounds(series: &ChartSeries) -> (f64, f64) {
    match series.value_range() {
        Some((lo, hi)) => {
            let margin = ((hi - lo) * 0.05).max(0.5);
            (lo - margin, hi + margin)
        }
        None => (0.0, 1.0),
    }
}

fn x_at(i: usize, n: usize) -> f32 {
    let inner = WIDTH - PADDING * 2.0;
    if n <= 1 {
        PADDING + inner / 2.0
    } else {
        PADDING + (i as f32) * inner / ((n - 1) as f32)
    }
}

fn y_at(v: f64, lo: f64, hi: f64) -> f32 {
    let inner = HEIGHT - PADDING * 2.0;
    let span = (hi - lo).max(f64::EPSILON);
    PADDING + ((1.0 - (v - lo) / span) as f32) * inner
}

fn polyline_points(values: &[f64], lo: f64, hi: f64) -> String {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", x_at(i, values.len()), y_at(*v, lo, hi)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[allow(non_snake_case)]
#[component]
pub fn HistoryChart(series: ChartSeries) -> Element {
    // Hovered point index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    let n = series.len();
    let (lo, hi) = y_bounds(&series);
    let temp_points = polyline_points(&series.temperature, lo, hi);
    let hum_points = polyline_points(&series.humidity, lo, hi);
    let view_box = format!("0 0 {} {}", WIDTH, HEIGHT);
    let column_w = if series.is_empty() {
        0.0
    } else {
        (WIDTH - PADDING * 2.0) / n as f32
    };

    rsx! {
        div { class: "space-y-3",
            div { class: "flex items-center justify-between text-xs text-slate-500",
                div { class: "flex gap-4",
                    span { class: "flex items-center gap-1",
                        span { class: "inline-block w-3 h-3 rounded-sm", style: "background:{TEMP_COLOR}" }
                        "Temperature (°C)"
                    }
                    span { class: "flex items-center gap-1",
                        span { class: "inline-block w-3 h-3 rounded-sm", style: "background:{HUM_COLOR}" }
                        "Humidity (%)"
                    }
                }
                if series.anomalies > 0 {
                    span { class: "text-red-500 font-medium", "{series.anomalies} anomalies in window" }
                }
            }
            div { class: "relative w-full h-64",
                svg { class: "block w-full h-full", view_box: "{view_box}", preserve_aspect_ratio: "none",
                    onmouseleave: move |_| *hovered.write() = None,
                    line { x1: "{PADDING}", y1: "{HEIGHT - PADDING}", x2: "{WIDTH - PADDING}", y2: "{HEIGHT - PADDING}", stroke: "#e5e7eb", stroke_width: "1" }
                    polyline { points: "{temp_points}", fill: "none", stroke: TEMP_COLOR, stroke_width: "2", stroke_linejoin: "round" }
                    polyline { points: "{hum_points}", fill: "none", stroke: HUM_COLOR, stroke_width: "2", stroke_linejoin: "round" }
                    // hover columns, index mode: one column per point covers both series
                    {
                        (0..n).map(|i| {
                            let x = x_at(i, n) - column_w / 2.0;
                            rsx!{ rect {
                                key: "{i}", x: "{x}", y: "0", width: "{column_w}", height: "{HEIGHT}", fill: "transparent",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                ontouchstart: move |_| *hovered.write() = Some(i),
                                ontouchend: move |_| *hovered.write() = None,
                            }}
                        })
                    }
                    {
                        match *hovered.read() {
                            Some(i) if i < n => {
                                let x = x_at(i, n);
                                let yt = y_at(series.temperature[i], lo, hi);
                                let yh = y_at(series.humidity[i], lo, hi);
                                rsx!{ g { key: "cursor",
                                    line { x1: "{x}", y1: "{PADDING}", x2: "{x}", y2: "{HEIGHT - PADDING}", stroke: "#94a3b8", stroke_width: "1" }
                                    circle { cx: "{x}", cy: "{yt}", r: "4", fill: TEMP_COLOR }
                                    circle { cx: "{x}", cy: "{yh}", r: "4", fill: HUM_COLOR }
                                }}
                            }
                            _ => rsx!{ Fragment {} }
                        }
                    }
                }
                {
                    match *hovered.read() {
                        Some(i) if i < n => {
                            let left_pct = x_at(i, n) / WIDTH * 100.0;
                            let label = series.labels[i].clone();
                            let temp = format_celsius(series.temperature[i]);
                            let hum = format_percent(series.humidity[i]);
                            rsx!{ div {
                                class: "absolute top-2 -translate-x-1/2 rounded-md bg-slate-900 text-white text-xs px-2 py-1 pointer-events-none",
                                style: "left:{left_pct}%",
                                div { class: "font-medium", "{label}" }
                                div { "Temperature: {temp}" }
                                div { "Humidity: {hum}" }
                            }}
                        }
                        _ => rsx!{ Fragment {} }
                    }
                }
                if series.is_empty() {
                    div { class: "absolute inset-0 grid place-items-center text-sm text-slate-400", "No history yet" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_spans_the_inner_width() {
        assert_eq!(x_at(0, 5), PADDING);
        assert_eq!(x_at(4, 5), WIDTH - PADDING);
        assert_eq!(x_at(0, 1), WIDTH / 2.0);
    }

    #[test]
    fn y_maps_high_values_up() {
        assert_eq!(y_at(10.0, 0.0, 10.0), PADDING);
        assert_eq!(y_at(0.0, 0.0, 10.0), HEIGHT - PADDING);
    }

    #[test]
    fn polyline_has_one_pair_per_value() {
        let pts = polyline_points(&[1.0, 2.0, 3.0], 0.0, 4.0);
        assert_eq!(pts.split(' ').count(), 3);
        assert!(pts.starts_with("20.0,"));
        assert_eq!(polyline_points(&[], 0.0, 1.0), "");
    }

    #[test]
    fn bounds_do_not_start_at_zero() {
        let series = ChartSeries {
            labels: vec!["a".into(), "b".into()],
            temperature: vec![24.0, 26.0],
            humidity: vec![60.0, 62.0],
            anomalies: 0,
        };
        let (lo, hi) = y_bounds(&series);
        assert!(lo > 20.0 && lo < 24.0);
        assert!(hi > 62.0);
    }
}
