//! Region filtering, aggregation and simulated refresh for the impact map.
//!
//! Everything here is pure: the map widget and the async delay live in the
//! application crate and only consume these functions.

use std::borrow::Cow;
use std::ops::Range;

use rand::Rng;

use crate::{LocationRecord, RegionGroup};

pub const ALL_REGIONS: &str = "all";

/// Value of the region select control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionSelector {
    #[default]
    All,
    Only(RegionGroup),
    /// Anything the control should never send. Matches no record.
    Unknown(String),
}

impl RegionSelector {
    pub fn parse(value: &str) -> Self {
        if value == ALL_REGIONS {
            return RegionSelector::All;
        }
        match RegionGroup::from_label(value) {
            Some(group) => RegionSelector::Only(group),
            None => RegionSelector::Unknown(value.to_string()),
        }
    }

    /// Option value as submitted by the select control.
    pub fn value(&self) -> &str {
        match self {
            RegionSelector::All => ALL_REGIONS,
            RegionSelector::Only(group) => group.label(),
            RegionSelector::Unknown(raw) => raw,
        }
    }

    pub fn display_label(&self) -> &str {
        match self {
            RegionSelector::All => "All Regions",
            other => other.value(),
        }
    }

    /// Options offered by the control, `All` first.
    pub fn options() -> Vec<RegionSelector> {
        std::iter::once(RegionSelector::All)
            .chain(RegionGroup::all().iter().copied().map(RegionSelector::Only))
            .collect()
    }

    pub fn matches(&self, record: &LocationRecord) -> bool {
        match self {
            RegionSelector::All => true,
            RegionSelector::Only(group) => record.region_group == *group,
            RegionSelector::Unknown(_) => false,
        }
    }
}

/// Records visible under `selector`, in dataset order.
///
/// `All` borrows the dataset as-is; any other selector yields an owned
/// subsequence.
pub fn filter_by_region<'a>(
    records: &'a [LocationRecord],
    selector: &RegionSelector,
) -> Cow<'a, [LocationRecord]> {
    match selector {
        RegionSelector::All => Cow::Borrowed(records),
        _ => Cow::Owned(
            records
                .iter()
                .filter(|r| selector.matches(r))
                .cloned()
                .collect(),
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpactTotals {
    pub trees: u64,
    pub laptops: u64,
    pub co2: f64,
}

impl ImpactTotals {
    /// "Trees this month" shown in the quick stats panel.
    pub fn trees_this_month(&self) -> u64 {
        self.trees * 15 / 100
    }
}

pub fn aggregate(records: &[LocationRecord]) -> ImpactTotals {
    records
        .iter()
        .fold(ImpactTotals::default(), |acc, r| ImpactTotals {
            trees: acc.trees + r.trees_planted,
            laptops: acc.laptops + r.laptops_sold,
            co2: acc.co2 + r.co2_saved,
        })
}

/// Legend bucket for a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactTier {
    High,
    Medium,
    Growing,
}

impl ImpactTier {
    pub fn for_trees(trees: u64) -> Self {
        match trees {
            t if t >= 2000 => ImpactTier::High,
            t if t >= 1000 => ImpactTier::Medium,
            _ => ImpactTier::Growing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ImpactTier::High => "High impact (2000+ trees)",
            ImpactTier::Medium => "Medium impact (1000-2000 trees)",
            ImpactTier::Growing => "Growing impact (<1000 trees)",
        }
    }

    pub fn all() -> &'static [ImpactTier] {
        &[ImpactTier::High, ImpactTier::Medium, ImpactTier::Growing]
    }
}

/// Half-open ranges for the per-record refresh increments.
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshBounds {
    pub trees: Range<u64>,
    pub laptops: Range<u64>,
    pub co2: Range<f64>,
}

impl Default for RefreshBounds {
    fn default() -> Self {
        Self {
            trees: 0..10,
            laptops: 0..5,
            co2: 0.0..2.0,
        }
    }
}

/// Returns a copy of `baseline` with every counter bumped by a random
/// non-negative amount drawn from `bounds`. Identity fields are untouched.
pub fn simulate_refresh<R: Rng + ?Sized>(
    baseline: &[LocationRecord],
    bounds: &RefreshBounds,
    rng: &mut R,
) -> Vec<LocationRecord> {
    baseline
        .iter()
        .map(|record| LocationRecord {
            trees_planted: record.trees_planted + sample_u64(rng, &bounds.trees),
            laptops_sold: record.laptops_sold + sample_u64(rng, &bounds.laptops),
            co2_saved: record.co2_saved + sample_f64(rng, &bounds.co2),
            ..record.clone()
        })
        .collect()
}

fn sample_u64<R: Rng + ?Sized>(rng: &mut R, range: &Range<u64>) -> u64 {
    if range.is_empty() {
        return range.start;
    }
    rng.gen_range(range.clone())
}

fn sample_f64<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        return range.start.max(0.0);
    }
    rng.gen_range(range.clone()).max(0.0)
}

/// State owned by the impact page. Mutated only through the reducer
/// methods below.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactView {
    pub selected: RegionSelector,
    pub dataset: Vec<LocationRecord>,
    pub is_refreshing: bool,
}

impl ImpactView {
    pub fn new(dataset: Vec<LocationRecord>) -> Self {
        Self {
            selected: RegionSelector::All,
            dataset,
            is_refreshing: false,
        }
    }

    pub fn select_region(&mut self, selector: RegionSelector) {
        self.selected = selector;
    }

    /// Marks a refresh as pending. Returns `false` when one is already
    /// outstanding, in which case the request must be dropped.
    pub fn begin_refresh(&mut self) -> bool {
        if self.is_refreshing {
            return false;
        }
        self.is_refreshing = true;
        true
    }

    /// Installs a refreshed snapshot and clears the pending flag.
    ///
    /// The snapshot is only accepted when it carries exactly the current ids
    /// in the same order; anything else is discarded and `false` returned.
    pub fn apply_refresh(&mut self, dataset: Vec<LocationRecord>) -> bool {
        self.is_refreshing = false;
        let same_ids = dataset.len() == self.dataset.len()
            && dataset
                .iter()
                .zip(self.dataset.iter())
                .all(|(new, old)| new.id == old.id);
        if same_ids {
            self.dataset = dataset;
        }
        same_ids
    }

    pub fn visible(&self) -> Cow<'_, [LocationRecord]> {
        filter_by_region(&self.dataset, &self.selected)
    }

    pub fn totals(&self) -> ImpactTotals {
        aggregate(&self.visible())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinates;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(id: u32, group: RegionGroup, trees: u64) -> LocationRecord {
        LocationRecord {
            id,
            name: format!("State {id}"),
            city: format!("City {id}"),
            coordinates: Coordinates::new(20.0, 78.0),
            trees_planted: trees,
            laptops_sold: trees / 2,
            co2_saved: trees as f64 * 0.3,
            region_group: group,
        }
    }

    fn sample() -> Vec<LocationRecord> {
        vec![
            record(1, RegionGroup::WesternIndia, 3000),
            record(2, RegionGroup::SouthernIndia, 1500),
            record(3, RegionGroup::NorthernIndia, 900),
            record(4, RegionGroup::SouthernIndia, 2100),
        ]
    }

    #[test]
    fn test_selector_parse() {
        assert_eq!(RegionSelector::parse("all"), RegionSelector::All);
        assert_eq!(
            RegionSelector::parse("Eastern India"),
            RegionSelector::Only(RegionGroup::EasternIndia)
        );
        assert_eq!(
            RegionSelector::parse("Central India"),
            RegionSelector::Unknown("Central India".to_string())
        );
        assert_eq!(RegionSelector::options().len(), 5);
    }

    #[test]
    fn test_filter_all_borrows_dataset() {
        let data = sample();
        let visible = filter_by_region(&data, &RegionSelector::All);
        assert!(matches!(visible, Cow::Borrowed(_)));
        assert_eq!(&*visible, data.as_slice());
    }

    #[test]
    fn test_filter_preserves_order() {
        let data = sample();
        let visible = filter_by_region(&data, &RegionSelector::Only(RegionGroup::SouthernIndia));
        let ids: Vec<u32> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_filter_unknown_and_empty() {
        let data = sample();
        let unknown = RegionSelector::Unknown("Central India".into());
        assert!(filter_by_region(&data, &unknown).is_empty());
        assert!(filter_by_region(&[], &RegionSelector::All).is_empty());
        assert!(filter_by_region(&[], &RegionSelector::Only(RegionGroup::WesternIndia)).is_empty());
    }

    #[test]
    fn test_aggregate_sums_fields() {
        let data = sample();
        let totals = aggregate(&data);
        assert_eq!(totals.trees, 7500);
        assert_eq!(totals.laptops, 1500 + 750 + 450 + 1050);
        assert!((totals.co2 - 2250.0).abs() < 1e-6);
        assert_eq!(aggregate(&[]), ImpactTotals::default());
    }

    #[test]
    fn test_tiers() {
        assert_eq!(ImpactTier::for_trees(2000), ImpactTier::High);
        assert_eq!(ImpactTier::for_trees(1999), ImpactTier::Medium);
        assert_eq!(ImpactTier::for_trees(1000), ImpactTier::Medium);
        assert_eq!(ImpactTier::for_trees(999), ImpactTier::Growing);
    }

    #[test]
    fn test_simulate_refresh_is_monotonic() {
        let data = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = RefreshBounds::default();
        let mut current = data.clone();
        for _ in 0..50 {
            let next = simulate_refresh(&current, &bounds, &mut rng);
            assert_eq!(next.len(), current.len());
            for (new, old) in next.iter().zip(current.iter()) {
                assert_eq!(new.id, old.id);
                assert_eq!(new.name, old.name);
                assert_eq!(new.coordinates, old.coordinates);
                assert_eq!(new.region_group, old.region_group);
                assert!(new.trees_planted >= old.trees_planted);
                assert!(new.trees_planted < old.trees_planted + 10);
                assert!(new.laptops_sold >= old.laptops_sold);
                assert!(new.laptops_sold < old.laptops_sold + 5);
                assert!(new.co2_saved >= old.co2_saved);
                assert!(new.co2_saved < old.co2_saved + 2.0);
            }
            current = next;
        }
    }

    #[test]
    fn test_simulate_refresh_with_empty_bounds_is_identity() {
        let data = sample();
        let bounds = RefreshBounds {
            trees: 0..0,
            laptops: 0..0,
            co2: 0.0..0.0,
        };
        let next = simulate_refresh(&data, &bounds, &mut rand::thread_rng());
        assert_eq!(next, data);
    }

    #[test]
    fn test_view_refresh_guard() {
        let mut view = ImpactView::new(sample());
        assert!(view.begin_refresh());
        assert!(!view.begin_refresh());
        assert!(view.is_refreshing);

        let mut refreshed = view.dataset.clone();
        refreshed[0].trees_planted += 5;
        assert!(view.apply_refresh(refreshed));
        assert!(!view.is_refreshing);
        assert_eq!(view.dataset[0].trees_planted, 3005);
        assert!(view.begin_refresh());
    }

    #[test]
    fn test_view_rejects_mismatched_snapshot() {
        let mut view = ImpactView::new(sample());
        view.begin_refresh();
        let mut shorter = view.dataset.clone();
        shorter.pop();
        assert!(!view.apply_refresh(shorter));
        assert_eq!(view.dataset.len(), 4);
        assert!(!view.is_refreshing);
    }

    #[test]
    fn test_view_totals_follow_selection() {
        let mut view = ImpactView::new(sample());
        view.select_region(RegionSelector::Only(RegionGroup::SouthernIndia));
        assert_eq!(view.visible().len(), 2);
        assert_eq!(view.totals().trees, 3600);
        view.select_region(RegionSelector::parse("nowhere"));
        assert_eq!(view.totals(), ImpactTotals::default());
    }
}
