pub mod tests;
pub mod use_checkout;
pub mod use_impact;

use crate::components::toast::{use_toast, ToastManager, ToastType};
use crate::data::cart_product_for;
use crate::models::Product;
use crate::state::StoreState;
use dioxus::prelude::*;
use tracing::{debug, info};

pub use use_checkout::{use_checkout, CheckoutFlow};
pub use use_impact::{use_impact, ImpactState};

#[derive(Clone, Copy)]
pub struct StoreClient {
    state: StoreState,
    toast: ToastManager,
}

impl StoreClient {
    pub fn add_to_cart(&self, product: &Product) {
        let mut toast = self.toast;
        let mut cart = self.state.cart;
        if !product.in_stock() {
            toast.show(&format!("{} is out of stock", product.name), ToastType::Error);
            return;
        }
        let quantity = cart.write().add(cart_product_for(product), 1);
        info!("Added {} to cart (now {})", product.name, quantity);
        toast.show(&format!("{} added to cart", product.name), ToastType::Success);
    }

    pub fn update_quantity(&self, line_id: u32, quantity: i64) {
        let mut cart = self.state.cart;
        cart.write().update_quantity(line_id, quantity);
        debug!("Cart line {} set to {}", line_id, quantity);
    }

    pub fn remove(&self, line_id: u32) {
        let mut cart = self.state.cart;
        cart.write().remove(line_id);
        debug!("Cart line {} removed", line_id);
    }

    pub fn toggle_favorite(&self, product_id: u32) {
        let mut favorites = self.state.favorites;
        let mut current = favorites.peek().clone();
        if !current.remove(&product_id) {
            current.insert(product_id);
        }
        favorites.set(current);
    }

    pub fn is_favorite(&self, product_id: u32) -> bool {
        self.state.favorites.read().contains(&product_id)
    }

    pub fn cart_count(&self) -> u32 {
        self.state.cart.read().totals().items
    }
}

pub fn use_store_client() -> StoreClient {
    let state = use_context::<StoreState>();
    let toast = use_toast();
    StoreClient { state, toast }
}
