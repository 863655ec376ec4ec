use super::status_classes;
use crate::components::StatCard;
use crate::data::get_admin_stats;
use crate::icons::*;
use crate::state::StoreState;
use akkss_common::format;
use dioxus::prelude::*;

const RECENT_ORDERS: usize = 5;

#[component]
pub fn AdminDashboard() -> Element {
    let store = use_context::<StoreState>();
    let stats = use_hook(get_admin_stats);
    let live_products = store.products.read().len();
    let orders = store.orders.read();
    let recent: Vec<_> = orders.iter().take(RECENT_ORDERS).cloned().collect();
    let live_orders = orders.len();
    drop(orders);

    rsx! {
        div { class: "space-y-6",
            div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4",
                StatCard {
                    label: "Products".to_string(),
                    value: format::count(u64::from(stats.total_products)),
                    hint: Some(format!("{live_products} in this catalog")),
                    icon: rsx! { Package { size: 22 } },
                }
                StatCard {
                    label: "Orders".to_string(),
                    value: format::count(u64::from(stats.total_orders)),
                    hint: Some(format!("{live_orders} in this session")),
                    icon: rsx! { ShoppingCart { size: 22 } },
                    accent: Some("bg-blue-100 text-blue-700".to_string()),
                }
                StatCard {
                    label: "Users".to_string(),
                    value: format::count(u64::from(stats.total_users)),
                    icon: rsx! { Users { size: 22 } },
                    accent: Some("bg-purple-100 text-purple-700".to_string()),
                }
                StatCard {
                    label: "Revenue".to_string(),
                    value: format::rupees(stats.total_revenue),
                    icon: rsx! { TrendingUp { size: 22 } },
                    accent: Some("bg-yellow-100 text-yellow-700".to_string()),
                }
            }

            div { class: "bg-card border border-border rounded-2xl p-6",
                h3 { class: "text-lg font-semibold mb-4 flex items-center gap-2",
                    Leaf { size: 20, class: Some("text-primary".to_string()) }
                    "Environmental Impact"
                }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    div { class: "text-center p-4 bg-green-50 rounded-lg",
                        div { class: "text-2xl font-bold text-green-600", "{format::count(stats.total_trees)}" }
                        div { class: "text-sm text-muted-foreground", "Trees Planted" }
                    }
                    div { class: "text-center p-4 bg-blue-50 rounded-lg",
                        div { class: "text-2xl font-bold text-blue-600", "{format::tonnes(stats.total_co2_saved)}" }
                        div { class: "text-sm text-muted-foreground", "CO₂ Saved" }
                    }
                }
            }

            div { class: "bg-card border border-border rounded-2xl p-6",
                h3 { class: "text-lg font-semibold mb-4", "Recent Orders" }
                if recent.is_empty() {
                    p { class: "text-sm text-muted-foreground", "No orders yet." }
                }
                div { class: "space-y-3",
                    for order in recent {
                        div {
                            key: "{order.id}",
                            class: "flex items-center justify-between p-3 bg-accent/40 rounded-lg",
                            div {
                                p { class: "font-medium", "{order.order_number}" }
                                p { class: "text-sm text-muted-foreground", "{order.customer_name}" }
                            }
                            div { class: "text-right",
                                p { class: "font-medium", "{format::rupees(order.total_amount)}" }
                                span { class: "px-2 py-1 rounded-full text-xs {status_classes(order.status)}",
                                    "{order.status.label()}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
