use dioxus::prelude::*;

use dioxus_free_icons::icons::ld_icons::{
    LdCalendarClock, LdCoins, LdHourglass, LdTrendingUp, LdTriangleAlert,
};
use dioxus_free_icons::Icon;
use shared_ui::{use_sidebar, Badge, BadgeVariant, Card, Skeleton};

use crate::format::format_peso;

/// Monthly revenue figures for the growth chart.
const REVENUE_GROWTH: [(&str, u32); 12] = [
    ("Mar 2025", 2_000),
    ("Apr 2025", 3_500),
    ("May 2025", 5_000),
    ("Jun 2025", 7_000),
    ("Jul 2025", 9_000),
    ("Aug 2025", 12_000),
    ("Sep 2025", 15_000),
    ("Oct 2025", 17_000),
    ("Nov 2025", 20_000),
    ("Dec 2025", 23_000),
    ("Jan 2026", 25_000),
    ("Feb 2026", 27_000),
];

/// Occupied room counts by type for the occupancy chart.
const OCCUPIED_BY_TYPE: [(&str, u32); 4] = [("Studio", 4), ("1BR", 3), ("2BR", 2), ("3BR", 1)];

const PIE_COLORS: [&str; 4] = ["#a21caf", "#d946ef", "#f0abfc", "#f472b6"];

/// Polyline points for the revenue chart, scaled into a fixed viewbox.
fn revenue_polyline(width: f64, height: f64) -> String {
    let max = REVENUE_GROWTH
        .iter()
        .map(|(_, v)| *v)
        .max()
        .unwrap_or(1)
        .max(1) as f64;
    let step = width / (REVENUE_GROWTH.len() - 1) as f64;
    REVENUE_GROWTH
        .iter()
        .enumerate()
        .map(|(i, (_, v))| {
            let x = i as f64 * step;
            let y = height - (*v as f64 / max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Stroke dash segments for the occupancy donut: one (fraction, offset)
/// pair per room type, as fractions of the circumference.
fn donut_segments() -> Vec<(f64, f64)> {
    let total: u32 = OCCUPIED_BY_TYPE.iter().map(|(_, v)| *v).sum();
    let mut offset = 0.0;
    OCCUPIED_BY_TYPE
        .iter()
        .map(|(_, v)| {
            let fraction = *v as f64 / total.max(1) as f64;
            let segment = (fraction, offset);
            offset += fraction;
            segment
        })
        .collect()
}

/// Finance analytics: stat cards plus two charts. The charts skip rendering
/// while the sidebar width animation runs and show a placeholder instead.
#[component]
pub fn Finance() -> Element {
    let sidebar = use_sidebar();
    let transitioning = sidebar.is_transitioning();
    let total_occupied: u32 = OCCUPIED_BY_TYPE.iter().map(|(_, v)| *v).sum();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "finance-page",
            div { class: "summary-row",
                Card { class: "stat-card",
                    div { class: "stat-card-icon",
                        Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 22, height: 22 }
                    }
                    span { class: "stat-card-value", "3" }
                    span { class: "stat-card-label", "Overdue Users" }
                    span { class: "stat-card-caption", "Users with overdue payments (after assigned deadline)" }
                }
                Card { class: "stat-card",
                    div { class: "stat-card-icon",
                        Icon::<LdCoins> { icon: LdCoins, width: 22, height: 22 }
                    }
                    span { class: "stat-card-value", {format_peso(3_250)} }
                    span { class: "stat-card-label", "Total Overdue Amount" }
                    span { class: "stat-card-caption", "Sum of all overdue balances" }
                }
                Card { class: "stat-card",
                    div { class: "stat-card-icon",
                        Icon::<LdCalendarClock> { icon: LdCalendarClock, width: 22, height: 22 }
                    }
                    span { class: "stat-card-value", "2" }
                    span { class: "stat-card-label", "Nearing Due" }
                    span { class: "stat-card-caption", "Users nearing payment deadline (within 7 days)" }
                }
                Card { class: "stat-card",
                    div { class: "stat-card-icon",
                        Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 22, height: 22 }
                    }
                    span { class: "stat-card-value", {format_peso(24_000)} }
                    span { class: "stat-card-label", "Revenue" }
                    span { class: "stat-card-caption", "Total revenue for monthly" }
                }
            }

            div { class: "finance-charts",
                Card { class: "chart-card",
                    div { class: "chart-card-title",
                        "Revenue Growth"
                        Badge { variant: BadgeVariant::Muted, "All Time" }
                    }
                    div { class: "chart-area",
                        if transitioning {
                            ChartPlaceholder {}
                        } else {
                            svg {
                                class: "line-chart",
                                view_box: "0 0 400 200",
                                preserve_aspect_ratio: "none",
                                polyline {
                                    points: revenue_polyline(400.0, 200.0),
                                    fill: "none",
                                    stroke: "#a21caf",
                                    stroke_width: "3",
                                }
                            }
                            div { class: "chart-axis",
                                span { "{REVENUE_GROWTH[0].0}" }
                                span { "{REVENUE_GROWTH[REVENUE_GROWTH.len() - 1].0}" }
                            }
                        }
                    }
                    div { class: "chart-facts",
                        ChartFact { label: "Revenue Change", value: "290%" }
                        ChartFact { label: "Gross Income", value: format_peso(120_000) }
                        ChartFact { label: "Gross Expenditure", value: format_peso(45_000) }
                        ChartFact { label: "Best Month", value: format!("Dec 2025 ({})", format_peso(23_000)) }
                        ChartFact { label: "Avg. Monthly Revenue", value: format_peso(13_750) }
                    }
                }

                Card { class: "chart-card",
                    div { class: "chart-card-title",
                        "Occupied Rooms by Type"
                        Badge { variant: BadgeVariant::Muted, "{total_occupied} Occupants" }
                    }
                    div { class: "chart-area",
                        if transitioning {
                            ChartPlaceholder {}
                        } else {
                            svg {
                                class: "donut-chart",
                                view_box: "0 0 200 200",
                                for (idx, (fraction, offset)) in donut_segments().into_iter().enumerate() {
                                    circle {
                                        cx: "100",
                                        cy: "100",
                                        r: "60",
                                        fill: "none",
                                        stroke: PIE_COLORS[idx % PIE_COLORS.len()],
                                        stroke_width: "36",
                                        stroke_dasharray: format!("{} {}", fraction * 377.0, 377.0),
                                        transform: format!("rotate({} 100 100)", offset * 360.0 - 90.0),
                                    }
                                }
                            }
                            div { class: "chart-legend",
                                for (idx, (kind, count)) in OCCUPIED_BY_TYPE.into_iter().enumerate() {
                                    span { class: "chart-legend-item",
                                        span {
                                            class: "chart-legend-swatch",
                                            style: "background: {PIE_COLORS[idx % PIE_COLORS.len()]}",
                                        }
                                        "{kind} ({count})"
                                    }
                                }
                            }
                        }
                    }
                    div { class: "chart-facts",
                        ChartFact { label: "Highest Paid Room", value: format!("Room 105 ({})", format_peso(18_000)) }
                        ChartFact { label: "Most Overdue Room", value: format!("Room 102 ({})", format_peso(2_500)) }
                        ChartFact { label: "Most Common Type", value: "Studio" }
                        ChartFact { label: "Total Occupied", value: "{total_occupied}" }
                    }
                }
            }
        }
    }
}

#[component]
fn ChartPlaceholder() -> Element {
    rsx! {
        div { class: "chart-placeholder",
            Icon::<LdHourglass> { icon: LdHourglass, width: 32, height: 32 }
            "Sidebar is transitioning..."
            Skeleton { class: "chart-skeleton" }
        }
    }
}

#[component]
fn ChartFact(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "chart-fact",
            span { class: "chart-fact-label", "{label}" }
            span { class: "chart-fact-value", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_spans_the_viewbox() {
        let points = revenue_polyline(400.0, 200.0);
        assert!(points.starts_with("0.0,"));
        assert!(points.ends_with("400.0,0.0"));
    }

    #[test]
    fn donut_segments_cover_the_circle() {
        let segments = donut_segments();
        let total: f64 = segments.iter().map(|(fraction, _)| fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
        let (last_fraction, last_offset) = segments.last().copied().unwrap();
        assert!((last_fraction + last_offset - 1.0).abs() < 1e-9);
    }
}
