use crate::components::Modal;
use crate::hooks::{use_checkout, use_store_client, CheckoutFlow};
use crate::icons::*;
use crate::models::{CartLine, CartTotals, CheckoutStep, ShippingDetails};
use crate::state::StoreState;
use crate::Route;
use akkss_common::format;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum ShippingField {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    Pincode,
}

impl ShippingField {
    const ALL: [ShippingField; 8] = [
        ShippingField::FirstName,
        ShippingField::LastName,
        ShippingField::Email,
        ShippingField::Phone,
        ShippingField::Address,
        ShippingField::City,
        ShippingField::State,
        ShippingField::Pincode,
    ];

    /// Field name as reported by validation.
    fn key(&self) -> &'static str {
        match self {
            ShippingField::FirstName => "first_name",
            ShippingField::LastName => "last_name",
            ShippingField::Email => "email",
            ShippingField::Phone => "phone",
            ShippingField::Address => "address",
            ShippingField::City => "city",
            ShippingField::State => "state",
            ShippingField::Pincode => "pincode",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ShippingField::FirstName => "First Name *",
            ShippingField::LastName => "Last Name *",
            ShippingField::Email => "Email *",
            ShippingField::Phone => "Phone *",
            ShippingField::Address => "Address *",
            ShippingField::City => "City *",
            ShippingField::State => "State *",
            ShippingField::Pincode => "Pincode *",
        }
    }

    fn input_type(&self) -> &'static str {
        match self {
            ShippingField::Email => "email",
            ShippingField::Phone => "tel",
            _ => "text",
        }
    }

    fn wide(&self) -> bool {
        matches!(self, ShippingField::Address)
    }

    fn slot<'a>(&self, details: &'a mut ShippingDetails) -> &'a mut String {
        match self {
            ShippingField::FirstName => &mut details.first_name,
            ShippingField::LastName => &mut details.last_name,
            ShippingField::Email => &mut details.email,
            ShippingField::Phone => &mut details.phone,
            ShippingField::Address => &mut details.address,
            ShippingField::City => &mut details.city,
            ShippingField::State => &mut details.state,
            ShippingField::Pincode => &mut details.pincode,
        }
    }

    fn value<'a>(&self, details: &'a ShippingDetails) -> &'a str {
        match self {
            ShippingField::FirstName => &details.first_name,
            ShippingField::LastName => &details.last_name,
            ShippingField::Email => &details.email,
            ShippingField::Phone => &details.phone,
            ShippingField::Address => &details.address,
            ShippingField::City => &details.city,
            ShippingField::State => &details.state,
            ShippingField::Pincode => &details.pincode,
        }
    }
}

#[component]
pub fn CartPage() -> Element {
    let store = use_context::<StoreState>();
    let mut show_checkout = use_signal(|| false);
    let nav = use_navigator();

    let cart = store.cart.read();
    let lines = cart.lines().to_vec();
    let totals = cart.totals();
    drop(cart);

    if lines.is_empty() && !show_checkout() {
        return rsx! {
            div { class: "min-h-screen bg-background py-12",
                div { class: "max-w-4xl mx-auto px-4 text-center py-16",
                    ShoppingCart { size: 64, class: Some("text-muted-foreground mx-auto mb-4".to_string()) }
                    h2 { class: "text-2xl font-bold text-foreground mb-2", "Your cart is empty" }
                    p { class: "text-muted-foreground mb-8", "Add some laptops to your cart to get started!" }
                    Link {
                        to: Route::Store { category: String::new() },
                        class: "inline-block bg-primary text-primary-foreground px-6 py-3 rounded-lg hover:opacity-90",
                        "Continue Shopping"
                    }
                }
            }
        };
    }

    let plural = if lines.len() == 1 { "" } else { "s" };

    rsx! {
        div { class: "min-h-screen bg-background py-12",
            div { class: "max-w-6xl mx-auto px-4",
                div { class: "mb-8",
                    h1 { class: "text-3xl font-bold text-foreground mb-2", "Shopping Cart" }
                    p { class: "text-muted-foreground", "{lines.len()} item{plural} in your cart" }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-8",
                    div { class: "lg:col-span-2 space-y-4",
                        for line in lines.iter() {
                            CartRow { key: "{line.id}", line: line.clone() }
                        }
                    }

                    div { class: "lg:col-span-1",
                        div { class: "bg-card rounded-xl border border-border p-6 sticky top-20",
                            h2 { class: "text-xl font-bold text-foreground mb-6", "Order Summary" }
                            OrderSummary { totals, lines: lines.len() }
                            button {
                                class: "w-full mt-6 bg-primary text-primary-foreground py-3 rounded-lg hover:opacity-90 flex items-center justify-center gap-2 font-medium",
                                onclick: move |_| show_checkout.set(true),
                                Truck { size: 20 }
                                "Proceed to Checkout"
                            }
                            div { class: "mt-4 flex items-center justify-center gap-2 text-sm text-muted-foreground",
                                Shield { size: 16 }
                                "Pay on delivery. No card details needed."
                            }
                        }
                    }
                }
            }

            if show_checkout() {
                CheckoutModal {
                    onclose: move |_| show_checkout.set(false),
                    onplaced: move |_| {
                        show_checkout.set(false);
                        nav.push(Route::Store { category: String::new() });
                    },
                }
            }
        }
    }
}

#[component]
fn CartRow(line: CartLine) -> Element {
    let client = use_store_client();
    let id = line.id;
    let quantity = i64::from(line.quantity);
    let at_stock = line.quantity >= line.product.stock_quantity;

    rsx! {
        div { class: "bg-card rounded-xl border border-border p-6 hover:shadow-md transition-shadow",
            div { class: "flex items-center gap-4",
                div { class: "w-20 h-20 bg-accent rounded-lg flex items-center justify-center",
                    Laptop { size: 36, class: Some("text-muted-foreground".to_string()) }
                }
                div { class: "flex-1 min-w-0",
                    h3 { class: "font-semibold text-foreground mb-1", "{line.product.name}" }
                    p { class: "text-sm text-muted-foreground mb-2",
                        "Stock: {line.product.stock_quantity} available"
                    }
                    div { class: "flex items-center gap-4",
                        span { class: "text-lg font-bold text-primary", "{format::rupees(line.product.price)}" }
                        div { class: "flex items-center gap-1 text-sm text-green-600",
                            Leaf { size: 16 }
                            "{line.product.trees_planted} tree • {line.product.co2_saved}t CO₂"
                        }
                    }
                }
                div { class: "flex items-center gap-3",
                    div { class: "flex items-center border border-border rounded-lg",
                        button {
                            class: "p-2 hover:bg-accent transition-colors",
                            onclick: move |_| client.update_quantity(id, quantity - 1),
                            Minus { size: 16 }
                        }
                        span { class: "px-4 py-2 font-medium", "{line.quantity}" }
                        button {
                            class: "p-2 hover:bg-accent transition-colors disabled:opacity-40",
                            disabled: at_stock,
                            onclick: move |_| client.update_quantity(id, quantity + 1),
                            Plus { size: 16 }
                        }
                    }
                    button {
                        class: "p-2 text-red-600 hover:bg-red-50 rounded-lg transition-colors",
                        title: "Remove",
                        onclick: move |_| client.remove(id),
                        Trash { size: 16 }
                    }
                }
                div { class: "text-right",
                    p { class: "text-lg font-bold text-foreground", "{format::rupees(line.total())}" }
                }
            }
        }
    }
}

#[component]
fn OrderSummary(totals: CartTotals, lines: usize) -> Element {
    rsx! {
        div { class: "space-y-3 text-sm",
            div { class: "flex justify-between",
                span { "Subtotal ({lines} items)" }
                span { "{format::rupees(totals.amount)}" }
            }
            div { class: "flex justify-between",
                span { "Shipping" }
                span { class: "text-green-600 font-medium", "Free" }
            }
            div { class: "flex justify-between",
                span { "Tax" }
                span { "Included" }
            }
            div { class: "border-t border-border pt-3 flex justify-between text-lg font-bold",
                span { "Total" }
                span { "{format::rupees(totals.amount)}" }
            }
        }
        div { class: "bg-green-50 rounded-lg p-4 mt-4",
            h3 { class: "font-semibold text-green-800 mb-2 flex items-center gap-2",
                Leaf { size: 16 }
                "Environmental Impact"
            }
            div { class: "space-y-1 text-sm text-green-700",
                p { "🌳 {totals.trees} trees will be planted" }
                p { "🌍 {totals.co2:.1}t CO₂ will be saved" }
            }
        }
    }
}

#[component]
fn CheckoutModal(onclose: EventHandler<MouseEvent>, onplaced: EventHandler<String>) -> Element {
    let checkout = use_checkout(onplaced);
    let step = (checkout.step)();

    rsx! {
        Modal { title: "Checkout".to_string(), onclose,
            StepIndicator { step }
            match step {
                CheckoutStep::Shipping => rsx! { ShippingForm { checkout } },
                CheckoutStep::Review => rsx! { ReviewStep { checkout } },
            }
        }
    }
}

#[component]
fn StepIndicator(step: CheckoutStep) -> Element {
    let current = step.number();
    rsx! {
        div { class: "flex items-center gap-4 mb-6",
            for (n, label) in [(1u8, "Shipping"), (2u8, "Review")] {
                div {
                    key: "{n}",
                    class: if current >= n { "flex items-center gap-2 text-primary" } else { "flex items-center gap-2 text-muted-foreground" },
                    div {
                        class: if current >= n { "w-8 h-8 rounded-full flex items-center justify-center bg-primary text-primary-foreground" } else { "w-8 h-8 rounded-full flex items-center justify-center bg-accent" },
                        if current > n {
                            CircleCheck { size: 18 }
                        } else {
                            "{n}"
                        }
                    }
                    span { class: "font-medium", "{label}" }
                }
            }
        }
    }
}

#[component]
fn ShippingForm(checkout: CheckoutFlow) -> Element {
    let details = checkout.shipping.read().clone();
    let invalid = checkout.invalid.read().clone();

    rsx! {
        div { class: "space-y-4",
            h3 { class: "text-lg font-semibold", "Shipping Information" }
            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                for field in ShippingField::ALL {
                    div {
                        key: "{field.key()}",
                        class: if field.wide() { "md:col-span-2" },
                        label { class: "block text-sm font-medium text-muted-foreground mb-1", "{field.label()}" }
                        input {
                            r#type: field.input_type(),
                            class: if invalid.iter().any(|f| f == field.key()) { "w-full px-3 py-2 border border-red-500 rounded-lg bg-background" } else { "w-full px-3 py-2 border border-border rounded-lg bg-background focus:ring-2 focus:ring-primary" },
                            value: "{field.value(&details)}",
                            oninput: move |e| {
                                let mut shipping = checkout.shipping;
                                *field.slot(&mut shipping.write()) = e.value();
                            },
                        }
                    }
                }
            }
            div { class: "flex justify-end pt-4",
                button {
                    class: "bg-primary text-primary-foreground px-6 py-2 rounded-lg hover:opacity-90 flex items-center gap-2",
                    onclick: move |_| {
                        checkout.continue_to_review();
                    },
                    "Continue to Review"
                    ArrowRight { size: 16 }
                }
            }
        }
    }
}

#[component]
fn ReviewStep(checkout: CheckoutFlow) -> Element {
    let store = use_context::<StoreState>();
    let totals = store.cart.read().totals();
    let lines = store.cart.read().lines().len();
    let details = checkout.shipping.read().clone();
    let placing = (checkout.is_placing)();

    rsx! {
        div { class: "space-y-4",
            h3 { class: "text-lg font-semibold", "Review Your Order" }
            div { class: "bg-accent/40 rounded-lg p-4 text-sm",
                h4 { class: "font-semibold mb-2", "Ship to" }
                p { "{details.full_name()}" }
                p { "{details.address}" }
                p { "{details.city}, {details.state} {details.pincode}" }
                p { class: "text-muted-foreground", "{details.email} • {details.phone}" }
            }
            div { class: "bg-accent/40 rounded-lg p-4",
                h4 { class: "font-semibold mb-3", "Order Summary" }
                OrderSummary { totals, lines }
            }
            div { class: "flex justify-between pt-4",
                button {
                    class: "px-6 py-2 text-muted-foreground bg-accent rounded-lg hover:opacity-80",
                    disabled: placing,
                    onclick: move |_| checkout.back_to_shipping(),
                    "Back"
                }
                button {
                    class: "bg-primary text-primary-foreground px-6 py-2 rounded-lg hover:opacity-90 flex items-center gap-2 disabled:opacity-50",
                    disabled: placing || lines == 0,
                    onclick: move |_| checkout.place_order(),
                    if placing {
                        Loader { size: 16, class: Some("animate-spin".to_string()) }
                        "Placing Order..."
                    } else {
                        Shield { size: 16 }
                        "Place Order"
                    }
                }
            }
        }
    }
}
