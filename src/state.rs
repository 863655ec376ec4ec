use crate::models::{Cart, LocationRecord, Order, Product};
use dioxus::prelude::*;
use std::collections::HashSet;
use tracing::info;

/// App-wide store state shared through context. Everything lives in memory
/// for the lifetime of the window.
#[derive(Clone, Copy)]
pub struct StoreState {
    pub products: Signal<Vec<Product>>,
    pub cart: Signal<Cart>,
    pub orders: Signal<Vec<Order>>,
    pub favorites: Signal<HashSet<u32>>,
    /// Admin's editable copy of the impact locations. The public impact
    /// page keeps its own dataset.
    pub locations: Signal<Vec<LocationRecord>>,
    pub next_order_id: Signal<u32>,
}

impl StoreState {
    pub fn product(&self, id: u32) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    /// Reserves the next local order id.
    pub fn take_order_id(&mut self) -> u32 {
        let mut next = self.next_order_id.write();
        let id = *next;
        *next += 1;
        id
    }
}

#[component]
pub fn StoreStateProvider(children: Element) -> Element {
    let products = use_signal(crate::data::get_default_products);
    let cart = use_signal(|| Cart::new(crate::data::get_default_cart()));
    let orders = use_signal(crate::data::get_default_orders);
    let favorites = use_signal(HashSet::new);
    let locations = use_signal(crate::data::get_baseline_locations);
    let next_order_id = use_signal(|| {
        crate::data::get_default_orders()
            .iter()
            .map(|o| o.id)
            .max()
            .unwrap_or(0)
            + 1
    });

    use_hook(|| {
        info!(
            "Store state ready: {} products, {} cart lines",
            products.peek().len(),
            cart.peek().lines().len()
        );
    });

    use_context_provider(|| StoreState {
        products,
        cart,
        orders,
        favorites,
        locations,
        next_order_id,
    });

    rsx! {
        {children}
    }
}
