use akkss::config::StoreConfig;
use akkss::data::get_baseline_locations;
use akkss::models::{ImpactView, RefreshBounds, RegionGroup, RegionSelector};
use akkss::services::impact::SimulatedImpact;
use serial_test::serial;
use std::time::Duration;

#[test]
fn test_southern_india_view() {
    let mut view = ImpactView::new(get_baseline_locations());
    view.select_region(RegionSelector::parse("Southern India"));

    let visible = view.visible();
    assert_eq!(visible.len(), 4);
    assert!(visible
        .iter()
        .all(|r| r.region_group == RegionGroup::SouthernIndia));

    let totals = view.totals();
    assert_eq!(totals.trees, 7874);
    assert_eq!(totals.laptops, 5289);
    assert!((totals.co2 - 2364.1).abs() < 1e-6);
}

#[test]
fn test_unknown_region_is_empty() {
    let mut view = ImpactView::new(get_baseline_locations());
    view.select_region(RegionSelector::parse("Atlantis"));
    assert!(view.visible().is_empty());
    assert_eq!(view.totals().trees, 0);
}

#[tokio::test]
async fn test_refresh_cycle_is_monotonic() {
    let sim = SimulatedImpact::new(Duration::from_millis(1), RefreshBounds::default());
    let mut view = ImpactView::new(get_baseline_locations());
    let before = view.totals();

    assert!(view.begin_refresh());
    assert!(!view.begin_refresh());

    let next = sim.refresh(&view.dataset).await;
    assert!(view.apply_refresh(next));
    assert!(!view.is_refreshing);

    let after = view.totals();
    assert_eq!(view.dataset.len(), 12);
    assert!(after.trees >= before.trees);
    assert!(after.laptops >= before.laptops);
    assert!(after.co2 >= before.co2);

    let ids: Vec<u32> = view.dataset.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<_>>());
}

#[test]
#[serial]
fn test_config_reads_environment() {
    std::env::set_var("AKKSS_MAP_ZOOM", "6");
    std::env::set_var("AKKSS_ORDER_DELAY_MS", "25");

    let cfg = StoreConfig::from_lookup(|key| std::env::var(key).ok());
    assert_eq!(cfg.map_zoom, 6);
    assert_eq!(cfg.order_delay, Duration::from_millis(25));

    std::env::remove_var("AKKSS_MAP_ZOOM");
    std::env::remove_var("AKKSS_ORDER_DELAY_MS");
}

#[test]
#[serial]
fn test_config_ignores_bad_environment() {
    std::env::set_var("AKKSS_MAP_CENTER", "somewhere");

    let cfg = StoreConfig::from_lookup(|key| std::env::var(key).ok());
    assert_eq!(cfg.map_center, StoreConfig::default().map_center);

    std::env::remove_var("AKKSS_MAP_CENTER");
}
