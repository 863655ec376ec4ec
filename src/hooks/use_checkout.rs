use crate::components::toast::{ToastManager, ToastType};
use crate::models::{CheckoutStep, ShippingDetails};
use crate::services::{CheckoutService, ProductionCheckoutService};
use crate::state::StoreState;
use dioxus::prelude::*;
use tracing::{error, info};
use validator::Validate;

/// Two-step checkout flow over the shared cart.
#[derive(Clone, Copy, PartialEq)]
pub struct CheckoutFlow {
    pub step: Signal<CheckoutStep>,
    pub shipping: Signal<ShippingDetails>,
    pub is_placing: Signal<bool>,
    /// Fields that failed the last shipping check.
    pub invalid: Signal<Vec<String>>,
    place: Callback<()>,
    toast: ToastManager,
}

impl CheckoutFlow {
    /// Validates shipping details and moves to review on success.
    pub fn continue_to_review(&self) -> bool {
        let mut invalid = self.invalid;
        let mut step = self.step;
        match self.shipping.peek().validate() {
            Ok(()) => {
                invalid.set(Vec::new());
                step.set(CheckoutStep::Review);
                true
            }
            Err(errors) => {
                let mut fields: Vec<String> =
                    errors.field_errors().keys().map(|k| k.to_string()).collect();
                fields.sort_unstable();
                let err = crate::error::AppError::Validation(fields.join(", "));
                invalid.set(fields);
                let mut toast = self.toast;
                toast.show(&err.user_friendly_message(), ToastType::Error);
                false
            }
        }
    }

    pub fn back_to_shipping(&self) {
        let mut step = self.step;
        step.set(CheckoutStep::Shipping);
    }

    pub fn place_order(&self) {
        self.place.call(());
    }

    pub fn reset(&self) {
        let (mut step, mut shipping, mut invalid) = (self.step, self.shipping, self.invalid);
        step.set(CheckoutStep::Shipping);
        shipping.set(ShippingDetails::default());
        invalid.set(Vec::new());
    }
}

pub fn use_checkout(on_placed: EventHandler<String>) -> CheckoutFlow {
    let service = use_hook(|| ProductionCheckoutService);
    use_checkout_internal(service, on_placed)
}

pub fn use_checkout_with_service<S: CheckoutService>(
    service: S,
    on_placed: EventHandler<String>,
) -> CheckoutFlow {
    use_checkout_internal(service, on_placed)
}

fn use_checkout_internal<S: CheckoutService>(
    service: S,
    on_placed: EventHandler<String>,
) -> CheckoutFlow {
    let mut store = use_context::<StoreState>();
    let toast = use_context::<ToastManager>();
    let step = use_signal(|| CheckoutStep::Shipping);
    let shipping = use_signal(ShippingDetails::default);
    let mut is_placing = use_signal(|| false);
    let invalid = use_signal(Vec::new);

    let place = use_callback(move |_| {
        if *is_placing.peek() {
            return;
        }
        is_placing.set(true);
        let service = service.clone();
        let cart = store.cart.peek().clone();
        let details = shipping.peek().clone();
        let order_id = store.take_order_id();
        let mut toast = toast;
        spawn(async move {
            let placed = cart.clone();
            match service.place_order(order_id, cart, details).await {
                Ok(order) => {
                    info!("Checkout complete: {}", order.order_number);
                    let number = order.order_number.clone();
                    store.orders.write().insert(0, order);
                    store.cart.write().settle(&placed);
                    toast.show(
                        &format!("Order {} placed successfully!", number),
                        ToastType::Success,
                    );
                    on_placed.call(number);
                }
                Err(e) => {
                    error!("Checkout failed: {}", e);
                    toast.show(&e.user_friendly_message(), ToastType::Error);
                }
            }
            is_placing.set(false);
        });
    });

    CheckoutFlow {
        step,
        shipping,
        is_placing,
        invalid,
        place,
        toast,
    }
}
