//! Stats Card Component
//!
//! A labeled metric with an optional trend row. The trend row is omitted
//! entirely when the metric has no delta; a zero delta still renders, in
//! the neutral style.

use dioxus::prelude::*;
use kindred_core::{format_trend, Metric, TrendDirection};

#[component]
pub fn StatsCard(metric: Metric) -> Element {
    let trend = metric
        .trend
        .map(|delta| (TrendDirection::from_delta(delta).css_class(), format_trend(delta)));

    rsx! {
        div { class: "stat-card",
            div { class: "stat-title", "{metric.title}" }
            div { class: "stat-value", "{metric.value}" }

            if let Some((trend_class, trend_text)) = trend {
                div { class: "{trend_class}", "{trend_text}" }
            }
        }
    }
}
