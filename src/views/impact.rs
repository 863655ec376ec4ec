use crate::components::map::{ImpactMap, LocationFigures};
use crate::components::{Button, ButtonVariant};
use crate::hooks::use_impact;
use crate::icons::*;
use crate::models::{ImpactTier, LocationRecord, RegionSelector};
use akkss_common::format;
use dioxus::prelude::*;

#[component]
pub fn Impact() -> Element {
    let impact = use_impact();
    let view = impact.view.read();
    let visible = view.visible().into_owned();
    let totals = view.totals();
    let selected = view.selected.value().to_string();
    let refreshing = view.is_refreshing;
    drop(view);

    let location_count = visible.len();

    rsx! {
        div { class: "min-h-screen bg-background",
            // Header
            div { class: "bg-primary text-primary-foreground py-12",
                div { class: "max-w-7xl mx-auto px-4 text-center",
                    h1 { class: "text-4xl font-bold mb-4", "Environmental Impact Map" }
                    p { class: "text-xl opacity-90 mb-6",
                        "Track our tree planting initiatives and environmental impact across India"
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-6 max-w-4xl mx-auto",
                        HeaderStat {
                            value: format::count(totals.trees),
                            label: "Trees Planted",
                            icon: rsx! { Leaf { size: 32 } },
                        }
                        HeaderStat {
                            value: format::count(totals.laptops),
                            label: "Laptops Sold",
                            icon: rsx! { MapPin { size: 32 } },
                        }
                        HeaderStat {
                            value: format::tonnes(totals.co2),
                            label: "CO₂ Saved",
                            icon: rsx! { Zap { size: 32 } },
                        }
                    }
                }
            }

            div { class: "max-w-7xl mx-auto px-4 py-6",
                // Controls
                div { class: "flex flex-col sm:flex-row justify-between items-start sm:items-center gap-4 mb-6",
                    div { class: "flex items-center gap-4",
                        Filter { size: 20, class: Some("text-muted-foreground".to_string()) }
                        select {
                            class: "px-3 py-2 border border-border rounded-md bg-background text-foreground",
                            value: "{selected}",
                            onchange: move |e| impact.select_region(&e.value()),
                            for option in RegionSelector::options() {
                                option {
                                    key: "{option.value()}",
                                    value: "{option.value()}",
                                    selected: option.value() == selected,
                                    "{option.display_label()}"
                                }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: refreshing,
                        onclick: move |_| impact.refresh(),
                        if refreshing {
                            RefreshCw { size: 16, class: Some("animate-spin".to_string()) }
                            "Refreshing..."
                        } else {
                            RefreshCw { size: 16 }
                            "Refresh Data"
                        }
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-4 gap-6",
                    div { class: "lg:col-span-3 bg-card rounded-lg shadow-lg overflow-hidden",
                        ImpactMap { records: visible.clone() }
                    }
                    QuickStats {
                        locations: location_count,
                        trees_this_month: totals.trees_this_month(),
                    }
                }

                Legend {}

                // Location details
                div { class: "mt-6 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for record in visible.iter() {
                        LocationCard { key: "{record.id}", record: record.clone() }
                    }
                }
                if location_count == 0 {
                    div { class: "mt-6 text-center text-muted-foreground py-12",
                        "No locations in this region yet."
                    }
                }
            }
        }
    }
}

#[component]
fn HeaderStat(value: String, label: &'static str, icon: Element) -> Element {
    rsx! {
        div { class: "bg-white/10 backdrop-blur-sm rounded-lg p-6",
            div { class: "flex items-center justify-center gap-2 mb-2",
                {icon}
                span { class: "text-3xl font-bold", "{value}" }
            }
            p { class: "text-sm opacity-80", "{label}" }
        }
    }
}

#[component]
fn QuickStats(locations: usize, trees_this_month: u64) -> Element {
    rsx! {
        div { class: "bg-card border border-border rounded-lg shadow-sm p-6 space-y-4",
            h3 { class: "text-lg font-semibold", "Quick Stats" }
            div { class: "flex items-center justify-between",
                span { class: "text-sm text-muted-foreground", "Active Locations" }
                span { class: "font-bold", "{locations}" }
            }
            div { class: "flex items-center justify-between",
                span { class: "text-sm text-muted-foreground", "Trees This Month" }
                span { class: "font-bold text-primary", "+{format::count(trees_this_month)}" }
            }
            div { class: "flex items-center gap-2 text-xs text-muted-foreground pt-2 border-t border-border",
                TrendingUp { size: 14 }
                "Every laptop sold plants one tree"
            }
        }
    }
}

#[component]
fn Legend() -> Element {
    rsx! {
        div { class: "mt-6 bg-card rounded-lg shadow-sm p-6",
            h3 { class: "text-lg font-semibold mb-4", "Map Legend" }
            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4",
                div { class: "flex items-center gap-3",
                    div { class: "w-6 h-6 bg-green-500 rounded-full flex items-center justify-center text-white text-xs",
                        "🌱"
                    }
                    span { class: "text-sm", "Tree planting locations" }
                }
                for tier in ImpactTier::all() {
                    div { class: "flex items-center gap-3",
                        div { class: "rounded-full {tier_dot(*tier)}" }
                        span { class: "text-sm", "{tier.label()}" }
                    }
                }
            }
        }
    }
}

fn tier_dot(tier: ImpactTier) -> &'static str {
    match tier {
        ImpactTier::High => "w-4 h-4 bg-green-400",
        ImpactTier::Medium => "w-3 h-3 bg-green-500",
        ImpactTier::Growing => "w-2 h-2 bg-green-600",
    }
}

#[component]
fn LocationCard(record: LocationRecord) -> Element {
    let figures = LocationFigures::of(&record);
    let tier = ImpactTier::for_trees(record.trees_planted);
    rsx! {
        div { class: "bg-card rounded-lg shadow-sm p-6 hover:shadow-md transition-shadow",
            div { class: "flex items-center justify-between mb-3",
                h3 { class: "text-lg font-semibold text-foreground", "{record.name}" }
                MapPin { size: 20, class: Some("text-primary".to_string()) }
            }
            p { class: "text-sm text-muted-foreground mb-4",
                "{record.city}, {record.region_group}"
            }
            div { class: "space-y-3",
                MetricRow { label: "Trees Planted", value: figures.trees, class: "text-green-600" }
                MetricRow { label: "Laptops Sold", value: figures.laptops, class: "text-blue-600" }
                MetricRow { label: "CO₂ Saved", value: figures.co2, class: "text-yellow-600" }
            }
            div { class: "mt-4 text-[11px] font-medium text-muted-foreground", "{tier.label()}" }
        }
    }
}

#[component]
fn MetricRow(label: &'static str, value: String, class: &'static str) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            span { class: "text-sm text-muted-foreground", "{label}" }
            span { class: "font-semibold {class}", "{value}" }
        }
    }
}
