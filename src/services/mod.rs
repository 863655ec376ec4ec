pub mod impact;
pub mod orders;

use crate::error::AppError;
use crate::models::{Cart, LocationRecord, Order, ShippingDetails};
use async_trait::async_trait;

/// Produces the next impact snapshot from the current one.
///
/// Implementations must return the same records (ids, names, places,
/// regions) with counters that never decrease. The call cannot fail.
#[async_trait]
pub trait ImpactSource: Clone + PartialEq + Send + Sync + 'static {
    async fn refresh(&self, baseline: Vec<LocationRecord>) -> Vec<LocationRecord>;
}

#[async_trait]
pub trait CheckoutService: Clone + PartialEq + Send + Sync + 'static {
    async fn place_order(
        &self,
        order_id: u32,
        cart: Cart,
        shipping: ShippingDetails,
    ) -> Result<Order, AppError>;
}

#[derive(Clone, Copy, PartialEq)]
pub struct ProductionImpactSource;

#[async_trait]
impl ImpactSource for ProductionImpactSource {
    async fn refresh(&self, baseline: Vec<LocationRecord>) -> Vec<LocationRecord> {
        impact::SimulatedImpact::from_config().refresh(&baseline).await
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct ProductionCheckoutService;

#[async_trait]
impl CheckoutService for ProductionCheckoutService {
    async fn place_order(
        &self,
        order_id: u32,
        cart: Cart,
        shipping: ShippingDetails,
    ) -> Result<Order, AppError> {
        orders::OrderDesk::from_config()
            .place_order(order_id, &cart, &shipping)
            .await
    }
}
