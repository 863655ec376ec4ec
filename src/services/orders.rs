use crate::config::config;
use crate::error::AppError;
use crate::models::{Cart, Order, ShippingDetails};
use akkss_common::cart::build_order;
use std::time::Duration;
use tracing::info;
use validator::Validate;

/// Accepts orders locally. No payment or backend is involved; the delay
/// only mimics a round trip.
pub struct OrderDesk {
    delay: Duration,
}

impl OrderDesk {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config() -> Self {
        Self::new(config().order_delay)
    }

    pub async fn place_order(
        &self,
        order_id: u32,
        cart: &Cart,
        shipping: &ShippingDetails,
    ) -> Result<Order, AppError> {
        if cart.is_empty() {
            return Err(AppError::EmptyCart);
        }
        shipping.validate()?;

        tokio::time::sleep(self.delay).await;

        let now = chrono::Local::now().naive_local();
        let order = build_order(
            order_id,
            cart,
            shipping.full_name(),
            now,
            &mut rand::thread_rng(),
        );
        info!(
            "Order {} placed for {} ({} items)",
            order.order_number,
            order.customer_name,
            cart.totals().items
        );
        Ok(order)
    }
}
