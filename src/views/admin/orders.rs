use super::status_classes;
use crate::models::OrderStatus;
use crate::state::StoreState;
use akkss_common::format;
use dioxus::prelude::*;
use tracing::info;

#[component]
pub fn OrderManager() -> Element {
    let mut store = use_context::<StoreState>();
    let orders = store.orders.read().clone();

    rsx! {
        div { class: "space-y-6",
            h2 { class: "text-2xl font-bold", "Order Management" }
            div { class: "bg-card border border-border rounded-2xl overflow-x-auto",
                table { class: "w-full text-sm",
                    thead {
                        tr { class: "border-b border-border",
                            th { class: "text-left py-3 px-4 font-medium text-muted-foreground", "Order Number" }
                            th { class: "text-left py-3 px-4 font-medium text-muted-foreground", "Customer" }
                            th { class: "text-left py-3 px-4 font-medium text-muted-foreground", "Amount" }
                            th { class: "text-left py-3 px-4 font-medium text-muted-foreground", "Status" }
                            th { class: "text-left py-3 px-4 font-medium text-muted-foreground", "Date" }
                        }
                    }
                    tbody {
                        for order in orders {
                            tr { key: "{order.id}", class: "border-b border-border last:border-0",
                                td { class: "py-3 px-4 font-medium", "{order.order_number}" }
                                td { class: "py-3 px-4", "{order.customer_name}" }
                                td { class: "py-3 px-4", "{format::rupees(order.total_amount)}" }
                                td { class: "py-3 px-4",
                                    select {
                                        class: "px-2 py-1 rounded text-xs font-medium border-0 {status_classes(order.status)}",
                                        onchange: move |e| {
                                            let Some(status) = OrderStatus::from_label(&e.value()) else {
                                                return;
                                            };
                                            if let Some(o) = store.orders.write().iter_mut().find(|o| o.id == order.id) {
                                                info!("Order {} marked {}", o.order_number, status.label());
                                                o.status = status;
                                            }
                                        },
                                        for status in OrderStatus::all() {
                                            option {
                                                value: "{status.label()}",
                                                selected: *status == order.status,
                                                "{status.label()}"
                                            }
                                        }
                                    }
                                }
                                td { class: "py-3 px-4 text-muted-foreground", {order.created_at.format("%Y-%m-%d").to_string()} }
                            }
                        }
                    }
                }
            }
        }
    }
}
