#[cfg(test)]
mod tests {
    use crate::components::toast::ToastProvider;
    use crate::error::AppError;
    use crate::hooks::use_checkout::use_checkout_with_service;
    use crate::hooks::use_impact::use_impact_with_source;
    use crate::models::{
        Cart, ImpactTotals, LocationRecord, Order, OrderStatus, RegionGroup, ShippingDetails,
    };
    use crate::services::{CheckoutService, ImpactSource};
    use crate::state::{StoreState, StoreStateProvider};
    use akkss_common::impact::aggregate;
    use async_trait::async_trait;
    use dioxus::prelude::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    const TREE_BUMP: u64 = 5;

    #[derive(Clone)]
    struct MockImpactSource {
        calls: Arc<Mutex<usize>>,
    }

    impl PartialEq for MockImpactSource {
        fn eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.calls, &other.calls)
        }
    }

    impl MockImpactSource {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(0)),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl ImpactSource for MockImpactSource {
        async fn refresh(&self, baseline: Vec<LocationRecord>) -> Vec<LocationRecord> {
            {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
            }
            tokio::time::sleep(Duration::from_millis(60)).await;
            baseline
                .into_iter()
                .map(|mut r| {
                    r.trees_planted += TREE_BUMP;
                    r
                })
                .collect()
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Snapshot {
        refreshing: bool,
        visible: usize,
        totals: ImpactTotals,
    }

    #[derive(Clone, Default)]
    struct Probe(Arc<Mutex<Vec<Snapshot>>>);

    impl PartialEq for Probe {
        fn eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.0, &other.0)
        }
    }

    impl Probe {
        fn all(&self) -> Vec<Snapshot> {
            self.0.lock().unwrap().clone()
        }

        fn last(&self) -> Option<Snapshot> {
            self.0.lock().unwrap().last().copied()
        }
    }

    #[component]
    fn ImpactHarness(source: MockImpactSource, probe: Probe, region: Option<String>) -> Element {
        let impact = use_impact_with_source(source);

        use_effect(move || {
            impact.refresh();
            impact.refresh();
            if let Some(region) = region.as_deref() {
                impact.select_region(region);
            }
        });

        let recorder = probe.clone();
        use_effect(move || {
            let view = impact.view.read();
            recorder.0.lock().unwrap().push(Snapshot {
                refreshing: view.is_refreshing,
                visible: view.visible().len(),
                totals: view.totals(),
            });
        });

        rsx! {
            div { "{impact.visible().len()}" }
        }
    }

    async fn drive_until(dom: &mut VirtualDom, done: impl Fn() -> bool) -> bool {
        for _ in 0..40 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
            if done() {
                return true;
            }
        }
        false
    }

    fn baseline_trees() -> u64 {
        aggregate(&crate::data::get_baseline_locations()).trees
    }

    #[tokio::test]
    async fn test_double_refresh_runs_once() {
        let source = MockImpactSource::new();
        let probe = Probe::default();

        let mut dom = VirtualDom::new_with_props(
            ImpactHarness,
            ImpactHarnessProps {
                source: source.clone(),
                probe: probe.clone(),
                region: None,
            },
        );
        dom.rebuild_in_place();

        let expected = baseline_trees() + 12 * TREE_BUMP;
        let finished = drive_until(&mut dom, || {
            probe
                .last()
                .map(|s| !s.refreshing && s.totals.trees == expected)
                .unwrap_or(false)
        })
        .await;

        assert!(finished, "refresh never completed: {:?}", probe.all());
        assert_eq!(source.calls(), 1);
        assert!(probe.all().iter().any(|s| s.refreshing));
        assert_eq!(probe.last().map(|s| s.visible), Some(12));
    }

    #[tokio::test]
    async fn test_region_change_while_refreshing() {
        let source = MockImpactSource::new();
        let probe = Probe::default();

        let mut dom = VirtualDom::new_with_props(
            ImpactHarness,
            ImpactHarnessProps {
                source: source.clone(),
                probe: probe.clone(),
                region: Some(RegionGroup::SouthernIndia.label().to_string()),
            },
        );
        dom.rebuild_in_place();

        let finished = drive_until(&mut dom, || probe.last().map(|s| !s.refreshing).unwrap_or(false)).await;
        assert!(finished);

        let southern: Vec<LocationRecord> = crate::data::get_baseline_locations()
            .into_iter()
            .filter(|r| r.region_group == RegionGroup::SouthernIndia)
            .collect();
        let before = aggregate(&southern);

        let snapshots = probe.all();
        assert!(snapshots
            .iter()
            .any(|s| s.refreshing && s.visible == 4 && s.totals == before));

        let last = probe.last().unwrap();
        assert_eq!(last.visible, 4);
        assert_eq!(last.totals.trees, before.trees + 4 * TREE_BUMP);
        assert_eq!(last.totals.laptops, before.laptops);
    }

    #[derive(Clone)]
    struct MockCheckoutService {
        calls: Arc<Mutex<usize>>,
        fail: bool,
    }

    impl PartialEq for MockCheckoutService {
        fn eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.calls, &other.calls)
        }
    }

    #[async_trait]
    impl CheckoutService for MockCheckoutService {
        async fn place_order(
            &self,
            order_id: u32,
            cart: Cart,
            shipping: ShippingDetails,
        ) -> Result<Order, AppError> {
            {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
            }
            if self.fail {
                return Err(AppError::Checkout("desk closed".to_string()));
            }
            Ok(Order {
                id: order_id,
                order_number: "AKKSS20250101TEST01".to_string(),
                customer_name: shipping.full_name(),
                total_amount: cart.totals().amount,
                status: OrderStatus::Pending,
                created_at: chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct StoreProbe(Arc<Mutex<Option<(usize, usize)>>>);

    impl PartialEq for StoreProbe {
        fn eq(&self, other: &Self) -> bool {
            Arc::ptr_eq(&self.0, &other.0)
        }
    }

    #[component]
    fn CheckoutApp(
        service: MockCheckoutService,
        probe: StoreProbe,
        #[props(default)] add_during_order: bool,
    ) -> Element {
        rsx! {
            ToastProvider {
                StoreStateProvider {
                    CheckoutHarness { service, probe, add_during_order }
                }
            }
        }
    }

    #[component]
    fn CheckoutHarness(
        service: MockCheckoutService,
        probe: StoreProbe,
        add_during_order: bool,
    ) -> Element {
        let mut store = use_context::<StoreState>();
        let on_placed = use_hook(|| EventHandler::new(|_number: String| {}));
        let checkout = use_checkout_with_service(service, on_placed);

        use_effect(move || {
            let mut shipping = checkout.shipping;
            shipping.set(ShippingDetails {
                first_name: "Rajesh".to_string(),
                last_name: "Kumar".to_string(),
                email: "rajesh@example.com".to_string(),
                phone: "+919876543210".to_string(),
                address: "12 MG Road".to_string(),
                city: "Bangalore".to_string(),
                state: "Karnataka".to_string(),
                pincode: "560001".to_string(),
            });
            if checkout.continue_to_review() {
                checkout.place_order();
                checkout.place_order();
                if add_during_order {
                    if let Some(product) = store.product(3) {
                        store.cart.write().add(crate::data::cart_product_for(&product), 1);
                    }
                }
            }
        });

        let recorder = probe.clone();
        use_effect(move || {
            let lines = store.cart.read().lines().len();
            let orders = store.orders.read().len();
            *recorder.0.lock().unwrap() = Some((lines, orders));
        });

        rsx! {
            div { "{store.orders.read().len()}" }
        }
    }

    #[tokio::test]
    async fn test_checkout_places_single_order() {
        let service = MockCheckoutService {
            calls: Arc::new(Mutex::new(0)),
            fail: false,
        };
        let probe = StoreProbe::default();

        let mut dom = VirtualDom::new_with_props(
            CheckoutApp,
            CheckoutAppProps {
                service: service.clone(),
                probe: probe.clone(),
                add_during_order: false,
            },
        );
        dom.rebuild_in_place();

        let placed = drive_until(&mut dom, || *probe.0.lock().unwrap() == Some((0, 3))).await;
        assert!(placed, "cart not cleared: {:?}", probe.0.lock().unwrap());
        assert_eq!(*service.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_checkout_keeps_lines_added_while_placing() {
        let service = MockCheckoutService {
            calls: Arc::new(Mutex::new(0)),
            fail: false,
        };
        let probe = StoreProbe::default();

        let mut dom = VirtualDom::new_with_props(
            CheckoutApp,
            CheckoutAppProps {
                service: service.clone(),
                probe: probe.clone(),
                add_during_order: true,
            },
        );
        dom.rebuild_in_place();

        let placed = drive_until(&mut dom, || *probe.0.lock().unwrap() == Some((1, 3))).await;
        assert!(placed, "late line lost: {:?}", probe.0.lock().unwrap());
        assert_eq!(*service.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failed_checkout_keeps_cart() {
        let service = MockCheckoutService {
            calls: Arc::new(Mutex::new(0)),
            fail: true,
        };
        let probe = StoreProbe::default();

        let mut dom = VirtualDom::new_with_props(
            CheckoutApp,
            CheckoutAppProps {
                service: service.clone(),
                probe: probe.clone(),
                add_during_order: false,
            },
        );
        dom.rebuild_in_place();

        let called = drive_until(&mut dom, || *service.calls.lock().unwrap() > 0).await;
        assert!(called);
        let _ = drive_until(&mut dom, || false).await;
        assert_eq!(*probe.0.lock().unwrap(), Some((2, 2)));
    }
}
