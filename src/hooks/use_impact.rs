use crate::models::{ImpactView, LocationRecord, RegionSelector};
use crate::services::{ImpactSource, ProductionImpactSource};
use dioxus::prelude::*;
use tracing::{debug, info, warn};

/// Handle to the impact page state. All mutation goes through the
/// `ImpactView` reducer.
#[derive(Clone, Copy)]
pub struct ImpactState {
    pub view: Signal<ImpactView>,
    refresh: Callback<()>,
}

impl ImpactState {
    pub fn select_region(&self, value: &str) {
        let selector = RegionSelector::parse(value);
        info!("Region changed to {}", selector.display_label());
        let mut view = self.view;
        view.write().select_region(selector);
    }

    /// Starts a refresh unless one is already pending, in which case the
    /// request is dropped.
    pub fn refresh(&self) {
        self.refresh.call(());
    }

    pub fn is_refreshing(&self) -> bool {
        self.view.read().is_refreshing
    }

    pub fn visible(&self) -> Vec<LocationRecord> {
        self.view.read().visible().into_owned()
    }
}

pub fn use_impact() -> ImpactState {
    let source = use_hook(|| ProductionImpactSource);
    use_impact_internal(source)
}

pub fn use_impact_with_source<S: ImpactSource>(source: S) -> ImpactState {
    use_impact_internal(source)
}

fn use_impact_internal<S: ImpactSource>(source: S) -> ImpactState {
    let mut view = use_signal(|| ImpactView::new(crate::data::get_baseline_locations()));

    let refresh = use_callback(move |_| {
        if !view.write().begin_refresh() {
            debug!("Refresh already pending, ignoring request");
            return;
        }
        info!("Impact refresh started");
        let source = source.clone();
        let current = view.peek().dataset.clone();
        // Scoped to the component: an unmount drops the task and its result.
        spawn(async move {
            let next = source.refresh(current).await;
            if view.write().apply_refresh(next) {
                info!("Impact refresh finished");
            } else {
                warn!("Discarded refresh result with mismatched locations");
            }
        });
    });

    ImpactState { view, refresh }
}
