use crate::hooks::use_store_client;
use crate::icons::*;
use crate::models::{Product, ProductCategory, ProductKind, ProductQuery, SortOrder, StoreSummary};
use crate::state::StoreState;
use akkss_common::catalog::{DEFAULT_PRICE_MAX, INR_PER_USD};
use akkss_common::format;
use dioxus::prelude::*;

/// Store page. `category` comes from `?category=`; a new value remounts the
/// catalog with fresh filters.
#[component]
pub fn Store(category: String) -> Element {
    let initial = ProductCategory::from_slug(&category);
    rsx! {
        Catalog { key: "{category}", initial }
    }
}

#[component]
fn Catalog(initial: Option<ProductCategory>) -> Element {
    let store = use_context::<StoreState>();
    let mut query = use_signal(|| ProductQuery {
        category: initial,
        ..Default::default()
    });

    let products = store.products.read();
    let filtered = query.read().apply(&products);
    let total = products.len();
    drop(products);
    let summary = StoreSummary::of(&filtered);
    let q = query.read().clone();

    rsx! {
        div { class: "min-h-screen bg-background",
            div { class: "bg-primary text-primary-foreground py-12",
                div { class: "max-w-7xl mx-auto px-4 text-center",
                    h1 { class: "text-4xl md:text-5xl font-bold mb-4", "Sustainable Laptop Store" }
                    p { class: "text-xl opacity-90", "New and certified refurbished laptops. One tree planted with every order." }
                }
            }

            // Filters
            div { class: "bg-card border-b border-border",
                div { class: "max-w-7xl mx-auto px-4 py-6 grid grid-cols-1 md:grid-cols-5 gap-4 items-center",
                    div { class: "relative md:col-span-2",
                        Search { size: 18, class: Some("absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground".to_string()) }
                        input {
                            class: "w-full pl-10 pr-3 py-2 border border-border rounded-md bg-background",
                            placeholder: "Search laptops...",
                            value: "{q.search}",
                            oninput: move |e| query.write().search = e.value(),
                        }
                    }
                    select {
                        class: "px-3 py-2 border border-border rounded-md bg-background",
                        onchange: move |e| query.write().category = ProductCategory::from_slug(&e.value()),
                        option { value: "all", selected: q.category.is_none(), "All Categories" }
                        for c in ProductCategory::all() {
                            option { value: "{c.slug()}", selected: q.category == Some(*c), "{c.label()}" }
                        }
                    }
                    select {
                        class: "px-3 py-2 border border-border rounded-md bg-background",
                        onchange: move |e| query.write().kind = ProductKind::from_label(&e.value()),
                        option { value: "all", selected: q.kind.is_none(), "All Types" }
                        for k in ProductKind::all() {
                            option { value: "{k.label()}", selected: q.kind == Some(*k), "{k.label()}" }
                        }
                    }
                    select {
                        class: "px-3 py-2 border border-border rounded-md bg-background",
                        onchange: move |e| query.write().sort = SortOrder::from_value(&e.value()),
                        for s in SortOrder::all() {
                            option { value: "{s.value()}", selected: q.sort == *s, "{s.label()}" }
                        }
                    }
                    div { class: "md:col-span-5 flex items-center gap-4 text-sm text-muted-foreground",
                        span { "Max price: {format::dollars(q.price_max)}" }
                        input {
                            r#type: "range",
                            class: "flex-1 accent-primary",
                            min: "0",
                            max: "{DEFAULT_PRICE_MAX}",
                            step: "50",
                            value: "{q.price_max}",
                            oninput: move |e| {
                                if let Ok(max) = e.value().parse::<u32>() {
                                    query.write().price_max = max;
                                }
                            },
                        }
                    }
                }
            }

            div { class: "py-12",
                div { class: "max-w-7xl mx-auto px-4",
                    div { class: "flex items-center justify-between mb-8",
                        h2 { class: "text-2xl font-semibold text-foreground", "{filtered.len()} Products Found" }
                        div { class: "text-sm text-muted-foreground", "Showing {filtered.len()} of {total} products" }
                    }
                    if filtered.is_empty() {
                        div { class: "text-center py-12",
                            Search { size: 48, class: Some("mx-auto mb-4 text-muted-foreground".to_string()) }
                            h3 { class: "text-xl font-semibold text-foreground mb-2", "No products found" }
                            p { class: "text-muted-foreground", "Try adjusting your search or filter criteria" }
                        }
                    } else {
                        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                            for product in filtered.iter() {
                                ProductCard { key: "{product.id}", product: product.clone() }
                            }
                        }
                    }
                }
            }

            div { class: "bg-accent/30 py-12",
                div { class: "max-w-7xl mx-auto px-4",
                    div { class: "text-center mb-8",
                        h2 { class: "text-3xl font-bold text-foreground mb-4", "Your Environmental Impact" }
                        p { class: "text-xl text-muted-foreground", "Every laptop purchase contributes to a greener future" }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        SummaryTile { value: summary.count.to_string(), label: "Trees Will Be Planted" }
                        SummaryTile { value: format!("{}kg", format::count(summary.co2_saved_kg)), label: "CO₂ Emissions Saved" }
                        SummaryTile { value: format::rupees(summary.refurbished_savings_inr), label: "Total Savings Available" }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryTile(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "text-center p-6 bg-card rounded-2xl",
            div { class: "text-3xl font-bold text-primary mb-2", "{value}" }
            div { class: "text-muted-foreground", "{label}" }
        }
    }
}

#[component]
fn ProductCard(product: Product) -> Element {
    let client = use_store_client();
    let favorite = client.is_favorite(product.id);
    let price = format::rupees(u64::from(product.price) * INR_PER_USD);
    let original = product
        .original_price
        .map(|p| format::rupees(u64::from(p) * INR_PER_USD));
    let savings = product.savings();
    let full_stars = product.rating.floor() as usize;
    let id = product.id;
    let for_cart = product.clone();

    rsx! {
        div { class: "bg-card rounded-2xl shadow-sm border border-border hover:shadow-lg transition-all duration-300 overflow-hidden group",
            div { class: "relative h-48 bg-accent/40 flex items-center justify-center",
                Laptop { size: 96, class: Some("text-primary/60 group-hover:scale-105 transition-transform".to_string()) }
                div { class: "absolute top-3 left-3 flex flex-col gap-2",
                    if product.category == ProductCategory::Refurbished {
                        span { class: "bg-primary text-primary-foreground px-2 py-1 rounded-full text-xs font-medium", "Refurbished" }
                    }
                    if !product.in_stock() {
                        span { class: "bg-red-500 text-white px-2 py-1 rounded-full text-xs font-medium", "Out of Stock" }
                    }
                    if product.featured {
                        span { class: "bg-yellow-500 text-white px-2 py-1 rounded-full text-xs font-medium", "Featured" }
                    }
                }
                button {
                    class: "absolute top-3 right-3 w-8 h-8 rounded-full bg-card/90 flex items-center justify-center",
                    title: if favorite { "Remove from favourites" } else { "Add to favourites" },
                    onclick: move |_| client.toggle_favorite(id),
                    Heart {
                        size: 16,
                        class: Some(if favorite { "text-red-500".to_string() } else { "text-muted-foreground".to_string() }),
                        fill: if favorite { Some("currentColor".to_string()) } else { None },
                    }
                }
                div { class: "absolute bottom-3 left-3 bg-card/90 backdrop-blur-sm rounded-lg p-2 text-xs",
                    div { class: "flex items-center gap-1 text-primary",
                        Leaf { size: 12 }
                        span { class: "font-medium", "{product.trees_planted} Tree Planted" }
                    }
                    if product.co2_saved_kg > 0 {
                        div { class: "text-green-600 font-medium", "{product.co2_saved_kg}kg CO₂ Saved" }
                    }
                }
            }

            div { class: "p-6",
                div { class: "mb-3",
                    h3 { class: "text-lg font-semibold text-foreground mb-1", "{product.name}" }
                    div { class: "flex items-center gap-2",
                        div { class: "flex items-center",
                            for i in 0..5usize {
                                Star {
                                    key: "{i}",
                                    size: 16,
                                    class: Some(if i < full_stars { "text-yellow-400".to_string() } else { "text-gray-300".to_string() }),
                                    fill: if i < full_stars { Some("currentColor".to_string()) } else { None },
                                }
                            }
                        }
                        span { class: "text-sm text-muted-foreground", "{product.rating} ({product.reviews} reviews)" }
                    }
                }
                div { class: "mb-4 space-y-1 text-sm text-muted-foreground",
                    div { "{product.specs.processor}" }
                    div { "{product.specs.memory} • {product.specs.storage}" }
                    div { "{product.specs.display}" }
                }
                div { class: "flex items-center justify-between mb-4",
                    div { class: "flex items-center gap-2",
                        span { class: "text-2xl font-bold text-primary", "{price}" }
                        if let Some(original) = original {
                            span { class: "text-sm text-muted-foreground line-through", "{original}" }
                        }
                    }
                    if savings > 0 {
                        span { class: "text-sm font-medium text-green-600",
                            "Save {format::rupees(u64::from(savings) * INR_PER_USD)}"
                        }
                    }
                }
                button {
                    class: "w-full inline-flex items-center justify-center gap-2 h-10 rounded-xl bg-primary text-primary-foreground font-semibold disabled:opacity-50 disabled:pointer-events-none",
                    disabled: !product.in_stock(),
                    onclick: move |_| client.add_to_cart(&for_cart),
                    ShoppingCart { size: 16 }
                    if product.in_stock() { "Add to Cart" } else { "Out of Stock" }
                }
            }
        }
    }
}
