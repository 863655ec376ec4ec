mod dashboard;
mod locations;
mod orders;
mod products;

use crate::icons::*;
use crate::models::AdminTab;
use dioxus::prelude::*;

pub use dashboard::AdminDashboard;
pub use locations::LocationManager;
pub use orders::OrderManager;
pub use products::ProductManager;

#[component]
pub fn Admin() -> Element {
    let mut active = use_signal(AdminTab::default);

    rsx! {
        div { class: "min-h-screen bg-background",
            div { class: "bg-card border-b border-border",
                div { class: "max-w-7xl mx-auto px-4 py-6 flex items-center gap-3",
                    BarChart { size: 28, class: Some("text-primary".to_string()) }
                    h1 { class: "text-xl font-bold text-foreground", "AKKSS Tech Admin" }
                }
            }
            div { class: "max-w-7xl mx-auto px-4 py-8 grid grid-cols-1 lg:grid-cols-5 gap-8",
                nav { class: "lg:col-span-1 space-y-1",
                    for tab in AdminTab::all() {
                        button {
                            key: "{tab.label()}",
                            class: if active() == *tab { "w-full flex items-center gap-3 px-4 py-3 rounded-xl text-left font-medium bg-primary text-primary-foreground" } else { "w-full flex items-center gap-3 px-4 py-3 rounded-xl text-left font-medium text-muted-foreground hover:bg-accent" },
                            onclick: {
                                let tab = *tab;
                                move |_| {
                                    tracing::debug!("Admin tab {}", tab.label());
                                    active.set(tab);
                                }
                            },
                            TabIcon { tab: *tab }
                            "{tab.label()}"
                        }
                    }
                }
                div { class: "lg:col-span-4",
                    match active() {
                        AdminTab::Dashboard => rsx! { AdminDashboard {} },
                        AdminTab::Products => rsx! { ProductManager {} },
                        AdminTab::Orders => rsx! { OrderManager {} },
                        AdminTab::Locations => rsx! { LocationManager {} },
                    }
                }
            }
        }
    }
}

#[component]
fn TabIcon(tab: AdminTab) -> Element {
    match tab {
        AdminTab::Dashboard => rsx! { BarChart { size: 18 } },
        AdminTab::Products => rsx! { Package { size: 18 } },
        AdminTab::Orders => rsx! { ShoppingCart { size: 18 } },
        AdminTab::Locations => rsx! { MapPin { size: 18 } },
    }
}

/// Badge colours for an order status.
pub(crate) fn status_classes(status: crate::models::OrderStatus) -> &'static str {
    use crate::models::OrderStatus::*;
    match status {
        Confirmed => "bg-green-100 text-green-800",
        Shipped => "bg-blue-100 text-blue-800",
        Delivered => "bg-purple-100 text-purple-800",
        Cancelled => "bg-red-100 text-red-800",
        Pending => "bg-yellow-100 text-yellow-800",
    }
}

/// Which record an admin form is editing.
#[derive(Clone, Copy, PartialEq, Debug)]
pub(crate) enum Editing {
    New,
    Existing(u32),
}

impl Editing {
    pub(crate) fn heading(&self, noun: &str) -> String {
        match self {
            Editing::New => format!("Add {noun}"),
            Editing::Existing(_) => format!("Edit {noun}"),
        }
    }
}

#[component]
pub(crate) fn FormField(
    label: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "block",
            span { class: "block text-sm font-medium mb-1", "{label}" }
            input {
                r#type: input_type,
                class: "w-full px-3 py-2 border border-border rounded-lg bg-background focus:ring-2 focus:ring-primary outline-none",
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}
