use dioxus::prelude::*;
use store::analytics::{bars, Bar};

use crate::icons::{FaArrowTrendUp, FaBook, FaClock, FaTag};
use crate::{use_app_config, Icon};

#[component]
pub fn AnalyticsView() -> Element {
    let config = use_app_config();
    let books = bars(&config.activity, |m| m.books);
    let subjects = bars(&config.activity, |m| m.subjects);

    rsx! {
        div {
            class: "view",
            h1 { class: "view-title", "Analytics Dashboard" }

            div {
                class: "stat-grid",
                for (i, stat) in config.stats.iter().enumerate() {
                    div {
                        key: "{stat.id}",
                        class: "card stat-card",
                        {match i % 4 {
                            0 => rsx! { Icon { width: 24, height: 24, icon: FaBook, class: "accent" } },
                            1 => rsx! { Icon { width: 24, height: 24, icon: FaClock, class: "accent" } },
                            2 => rsx! { Icon { width: 24, height: 24, icon: FaTag, class: "accent" } },
                            _ => rsx! { Icon { width: 24, height: 24, icon: FaArrowTrendUp, class: "accent" } },
                        }}
                        div {
                            p { class: "muted small", "{stat.name}" }
                            p { class: "stat-value", "{stat.value}" }
                        }
                    }
                }
            }

            div {
                class: "chart-grid",
                BarChart { title: "Cataloging Activity", bars: books }
                BarChart { title: "Subject Distribution", bars: subjects }
            }
        }
    }
}

/// Vertical bars sized as a percentage of the tallest one.
#[component]
fn BarChart(title: String, bars: Vec<Bar>) -> Element {
    rsx! {
        div {
            class: "card",
            h2 { class: "card-title", "{title}" }
            if bars.is_empty() {
                p { class: "muted", "No data yet." }
            }
            div {
                class: "bar-chart",
                for bar in bars {
                    div {
                        key: "{bar.label}",
                        class: "bar-column",
                        title: "{bar.label}: {bar.value}",
                        div {
                            class: "bar",
                            style: "height: {bar.percent}%",
                        }
                        span { class: "bar-label", "{bar.label}" }
                    }
                }
            }
        }
    }
}
