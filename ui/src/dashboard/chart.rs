use dioxus::prelude::*;

use crate::core::dataset::{ChartDataset, ChartOptions, ChartStyle};

use super::geometry::{self, Mark, Slice, HEIGHT, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, WIDTH};

fn px(value: f64) -> String {
    format!("{value:.2}")
}

/// Rendering surface: paints one dataset with its kind-specific options.
#[component]
pub fn ChartSurface(dataset: ChartDataset, options: ChartOptions) -> Element {
    if dataset.is_empty() {
        return rsx! {
            p { class: "dashboard__notice", {crate::t!("report-empty")} }
        };
    }

    let body = match options.style {
        ChartStyle::Column => column_chart(geometry::column_bars(&dataset, &options)),
        ChartStyle::Timeline => timeline_chart(geometry::timeline_spans(&dataset, &options)),
        ChartStyle::Pie => pie_chart(geometry::pie_slices(&dataset, &options)),
    };

    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let axis_title = options.h_axis_title.clone().unwrap_or_default();
    let show_axis = options.style != ChartStyle::Pie;
    let baseline = px(HEIGHT - MARGIN_BOTTOM);
    let axis_start = px(MARGIN_LEFT);
    let axis_end = px(WIDTH - MARGIN_RIGHT);

    rsx! {
        figure { id: "chart_div", class: "chart",
            svg {
                view_box: "{view_box}",
                {body}
                if show_axis {
                    line {
                        class: "chart__axis",
                        x1: "{axis_start}",
                        y1: "{baseline}",
                        x2: "{axis_end}",
                        y2: "{baseline}",
                    }
                }
            }
            if !axis_title.is_empty() {
                figcaption { class: "chart__label", "{axis_title}" }
            }
        }
    }
}

fn column_chart(bars: Vec<Mark>) -> Element {
    let label_y = px(HEIGHT - 22.0);
    let nodes = bars.into_iter().map(|bar| {
        let center = px(bar.x + bar.width / 2.0);
        let caption_y = px((bar.y - 4.0).max(MARGIN_TOP));
        let (x, y, width, height) = (px(bar.x), px(bar.y), px(bar.width), px(bar.height));
        rsx! {
            g { key: "{bar.label}",
                rect { class: "chart__bar", x: "{x}", y: "{y}", width: "{width}", height: "{height}" }
                text { class: "chart__label", x: "{center}", y: "{label_y}", text_anchor: "middle", "{bar.label}" }
                text { class: "chart__label", x: "{center}", y: "{caption_y}", text_anchor: "middle", "{bar.caption}" }
            }
        }
    });
    rsx! { {nodes} }
}

fn timeline_chart(spans: Vec<Mark>) -> Element {
    let label_x = px(MARGIN_LEFT - 8.0);
    let nodes = spans.into_iter().map(|span| {
        let middle = px(span.y + span.height / 2.0 + 4.0);
        let caption_x = px(span.x + 4.0);
        let (x, y, width, height) = (px(span.x), px(span.y), px(span.width), px(span.height));
        rsx! {
            g { key: "{span.label}",
                text { class: "chart__label", x: "{label_x}", y: "{middle}", text_anchor: "end", "{span.label}" }
                rect { class: "chart__span", x: "{x}", y: "{y}", width: "{width}", height: "{height}" }
                text { class: "chart__label", x: "{caption_x}", y: "{middle}", "{span.caption}" }
            }
        }
    });
    rsx! { {nodes} }
}

fn pie_chart(slices: Vec<Slice>) -> Element {
    let legend_x = px(WIDTH - 150.0);
    let legend_text_x = px(WIDTH - 132.0);
    let nodes = slices.into_iter().enumerate().map(|(index, slice)| {
        let row_y = MARGIN_TOP + index as f64 * 20.0;
        let (swatch_y, text_y) = (px(row_y), px(row_y + 10.0));
        rsx! {
            g { key: "{slice.label}",
                path { d: "{slice.path}", fill: "{slice.color}" }
                rect { x: "{legend_x}", y: "{swatch_y}", width: "12", height: "12", fill: "{slice.color}" }
                text { class: "chart__label", x: "{legend_text_x}", y: "{text_y}", "{slice.label}: {slice.caption}" }
            }
        }
    });
    rsx! { {nodes} }
}
