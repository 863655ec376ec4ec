use super::{Editing, FormField};
use crate::components::toast::{use_toast, ToastType};
use crate::components::{Button, ButtonVariant, IconButton, Modal};
use crate::icons::*;
use crate::models::{ProductCategory, ProductDraft, ProductKind};
use crate::state::StoreState;
use akkss_common::format;
use dioxus::prelude::*;
use tracing::info;

#[component]
pub fn ProductManager() -> Element {
    let mut store = use_context::<StoreState>();
    let mut toast = use_toast();
    let mut search = use_signal(String::new);
    let mut editing = use_signal(|| None::<Editing>);
    let mut draft = use_signal(ProductDraft::default);

    let needle = search().to_lowercase();
    let products: Vec<_> = store
        .products
        .read()
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    let mut save = move || {
        let Some(target) = *editing.peek() else {
            return;
        };
        let result = match target {
            Editing::New => {
                let id = store.products.peek().iter().map(|p| p.id).max().unwrap_or(0) + 1;
                draft.peek().create(id).map(|p| {
                    info!("Product {} added: {}", p.id, p.name);
                    store.products.write().push(p);
                })
            }
            Editing::Existing(id) => {
                let mut products = store.products.write();
                match products.iter_mut().find(|p| p.id == id) {
                    Some(slot) => draft.peek().apply(slot.clone()).map(|p| {
                        info!("Product {} updated", p.id);
                        *slot = p;
                    }),
                    None => Ok(()),
                }
            }
        };
        match result {
            Ok(()) => {
                toast.show("Product saved", ToastType::Success);
                editing.set(None);
            }
            Err(e) => toast.show(&e.user_friendly_message(), ToastType::Error),
        }
    };

    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                h2 { class: "text-2xl font-bold", "Product Management" }
                Button {
                    onclick: move |_| {
                        draft.set(ProductDraft::default());
                        editing.set(Some(Editing::New));
                    },
                    Plus { size: 16 }
                    "Add Product"
                }
            }

            div { class: "relative",
                Search { size: 18, class: Some("absolute left-3 top-1/2 -translate-y-1/2 text-muted-foreground".to_string()) }
                input {
                    class: "w-full pl-10 pr-4 py-2 border border-border rounded-lg bg-background focus:ring-2 focus:ring-primary outline-none",
                    placeholder: "Search products...",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
            }

            div { class: "bg-card border border-border rounded-2xl overflow-x-auto",
                table { class: "w-full text-sm",
                    thead {
                        tr { class: "border-b border-border",
                            for heading in ["Product", "Category", "Price", "Stock", "Status", "Actions"] {
                                th { class: "text-left py-3 px-4 font-medium text-muted-foreground", "{heading}" }
                            }
                        }
                    }
                    tbody {
                        for product in products {
                            tr { key: "{product.id}", class: "border-b border-border last:border-0",
                                td { class: "py-3 px-4",
                                    p { class: "font-medium", "{product.name}" }
                                    p { class: "text-xs text-muted-foreground", "{product.kind.label()}" }
                                }
                                td { class: "py-3 px-4", "{product.category.label()}" }
                                td { class: "py-3 px-4", "{format::dollars(product.price)}" }
                                td { class: "py-3 px-4",
                                    span { class: stock_class(product.stock_quantity), "{product.stock_quantity}" }
                                }
                                td { class: "py-3 px-4",
                                    if product.featured {
                                        span { class: "px-2 py-1 rounded-full text-xs bg-primary/10 text-primary", "Featured" }
                                    } else {
                                        span { class: "px-2 py-1 rounded-full text-xs bg-accent text-muted-foreground", "Active" }
                                    }
                                }
                                td { class: "py-3 px-4",
                                    div { class: "flex gap-1",
                                        IconButton {
                                            title: "Edit".to_string(),
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let product = product.clone();
                                                move |_| {
                                                    draft.set(ProductDraft::from_product(&product));
                                                    editing.set(Some(Editing::Existing(product.id)));
                                                }
                                            },
                                            Pencil { size: 16 }
                                        }
                                        IconButton {
                                            title: "Delete".to_string(),
                                            variant: ButtonVariant::Danger,
                                            onclick: move |_| {
                                                store.products.write().retain(|p| p.id != product.id);
                                                info!("Product {} deleted", product.id);
                                                toast.show("Product deleted", ToastType::Info);
                                            },
                                            Trash { size: 16 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(target) = editing() {
                Modal {
                    title: target.heading("Product"),
                    onclose: move |_| editing.set(None),
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        FormField {
                            label: "Name",
                            value: draft.read().name.clone(),
                            oninput: move |v| draft.write().name = v,
                        }
                        label { class: "block",
                            span { class: "block text-sm font-medium mb-1", "Category" }
                            select {
                                class: "w-full px-3 py-2 border border-border rounded-lg bg-background",
                                onchange: move |e| {
                                    if let Some(c) = ProductCategory::from_slug(&e.value()) {
                                        draft.write().category = c;
                                    }
                                },
                                for c in ProductCategory::all() {
                                    option {
                                        value: "{c.slug()}",
                                        selected: draft.read().category == *c,
                                        "{c.label()}"
                                    }
                                }
                            }
                        }
                        label { class: "block",
                            span { class: "block text-sm font-medium mb-1", "Type" }
                            select {
                                class: "w-full px-3 py-2 border border-border rounded-lg bg-background",
                                onchange: move |e| {
                                    if let Some(k) = ProductKind::from_label(&e.value()) {
                                        draft.write().kind = k;
                                    }
                                },
                                for k in ProductKind::all() {
                                    option {
                                        value: "{k.label()}",
                                        selected: draft.read().kind == *k,
                                        "{k.label()}"
                                    }
                                }
                            }
                        }
                        FormField {
                            label: "Price (USD)",
                            input_type: "number",
                            value: draft.read().price.clone(),
                            oninput: move |v| draft.write().price = v,
                        }
                        FormField {
                            label: "Original Price (USD)",
                            input_type: "number",
                            value: draft.read().original_price.clone(),
                            oninput: move |v| draft.write().original_price = v,
                        }
                        FormField {
                            label: "Stock",
                            input_type: "number",
                            value: draft.read().stock.clone(),
                            oninput: move |v| draft.write().stock = v,
                        }
                        label { class: "flex items-center gap-2 md:col-span-2",
                            input {
                                r#type: "checkbox",
                                checked: draft.read().featured,
                                onchange: move |e| draft.write().featured = e.checked(),
                            }
                            span { class: "text-sm", "Featured product" }
                        }
                    }
                    div { class: "flex justify-end gap-2 mt-6",
                        Button { variant: ButtonVariant::Outline, onclick: move |_| editing.set(None), "Cancel" }
                        Button { onclick: move |_| save(), Check { size: 16 } "Save" }
                    }
                }
            }
        }
    }
}

/// Stock above ten reads as healthy.
fn stock_class(quantity: u32) -> &'static str {
    if quantity > 10 {
        "font-medium text-green-600"
    } else {
        "font-medium text-red-600"
    }
}
