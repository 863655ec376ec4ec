use crate::config::{config, StoreConfig};
use crate::models::LocationRecord;
use akkss_common::format;
use dioxus::prelude::*;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

pub const MARKER_MIN_PX: f64 = 20.0;
pub const MARKER_MAX_PX: f64 = 40.0;
const TREES_PER_PX: f64 = 100.0;
const FIT_PADDING: f64 = 0.1;
const READY_POLL_MS: u32 = 50;
/// About thirty seconds of waiting for Leaflet or the container.
const READY_POLL_LIMIT: u32 = 600;

static NEXT_MAP_ID: AtomicUsize = AtomicUsize::new(0);

/// Marker diameter: linear in trees planted, clamped to stay legible.
pub fn marker_size(trees_planted: u64) -> f64 {
    (trees_planted as f64 / TREES_PER_PX).clamp(MARKER_MIN_PX, MARKER_MAX_PX)
}

/// Display strings for a location's metrics. Popups and detail cards both
/// render from this so the two never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFigures {
    pub trees: String,
    pub laptops: String,
    pub co2: String,
}

impl LocationFigures {
    pub fn of(record: &LocationRecord) -> Self {
        Self {
            trees: format::count(record.trees_planted),
            laptops: format::count(record.laptops_sold),
            co2: format::tonnes(record.co2_saved),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerSpec {
    pub id: u32,
    pub lat: f64,
    pub lng: f64,
    pub size: f64,
    pub font_size: f64,
    pub popup_html: String,
}

impl MarkerSpec {
    pub fn for_record(record: &LocationRecord) -> Self {
        let size = marker_size(record.trees_planted);
        Self {
            id: record.id,
            lat: record.coordinates.lat,
            lng: record.coordinates.lng,
            size,
            font_size: (size / 4.0).max(8.0),
            popup_html: popup_html(record),
        }
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn popup_html(record: &LocationRecord) -> String {
    let figures = LocationFigures::of(record);
    format!(
        r#"<div class="impact-popup">
  <h3>{name}</h3>
  <p class="impact-popup-place">{city}, {region}</p>
  <div class="impact-popup-grid">
    <div class="impact-popup-trees"><strong>{trees}</strong><span>Trees Planted</span></div>
    <div class="impact-popup-laptops"><strong>{laptops}</strong><span>Laptops Sold</span></div>
  </div>
  <div class="impact-popup-co2"><strong>{co2} CO₂</strong><span>Carbon Saved</span></div>
</div>"#,
        name = escape_html(&record.name),
        city = escape_html(&record.city),
        region = record.region_group.label(),
        trees = figures.trees,
        laptops = figures.laptops,
        co2 = figures.co2,
    )
}

/// Geographic rectangle in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl MapBounds {
    pub fn around(markers: &[MarkerSpec]) -> Option<Self> {
        let first = markers.first()?;
        let seed = MapBounds {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        Some(markers.iter().skip(1).fold(seed, |b, m| MapBounds {
            south: b.south.min(m.lat),
            west: b.west.min(m.lng),
            north: b.north.max(m.lat),
            east: b.east.max(m.lng),
        }))
    }

    /// Grows each side by `ratio` of the span on that axis.
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.north - self.south).abs() * ratio;
        let lng_buffer = (self.east - self.west).abs() * ratio;
        MapBounds {
            south: self.south - lat_buffer,
            west: self.west - lng_buffer,
            north: self.north + lat_buffer,
            east: self.east + lng_buffer,
        }
    }
}

/// The only seam through which the app touches a map widget.
pub trait MapSurface {
    fn init(&mut self);
    fn set_markers(&mut self, markers: &[MarkerSpec]);
    fn fit_to_markers(&mut self, bounds: MapBounds);
    fn dispose(&mut self);
}

/// Owns a map surface and keeps its markers in step with the visible set.
///
/// Rendering before a surface is attached is a no-op; the caller renders
/// again once the container exists.
pub struct MarkerLayer<S: MapSurface> {
    surface: Option<S>,
    placed: usize,
    padding: f64,
}

impl<S: MapSurface> MarkerLayer<S> {
    pub fn new(padding: f64) -> Self {
        Self {
            surface: None,
            placed: 0,
            padding,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Takes ownership of `surface` and initialises it. A layer holds at most
    /// one surface; further calls are ignored and return `false`.
    pub fn attach(&mut self, mut surface: S) -> bool {
        if self.surface.is_some() {
            return false;
        }
        surface.init();
        self.surface = Some(surface);
        true
    }

    /// Replaces every marker with one per record and fits the viewport to
    /// them. An empty set clears the map and leaves the viewport alone.
    pub fn render(&mut self, records: &[LocationRecord]) -> usize {
        let Some(surface) = self.surface.as_mut() else {
            return 0;
        };
        let markers: Vec<MarkerSpec> = records.iter().map(MarkerSpec::for_record).collect();
        surface.set_markers(&markers);
        if let Some(bounds) = MapBounds::around(&markers) {
            surface.fit_to_markers(bounds.pad(self.padding));
        }
        self.placed = markers.len();
        debug!("Placed {} impact markers", self.placed);
        self.placed
    }

    pub fn placed(&self) -> usize {
        self.placed
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn dispose(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.dispose();
            self.placed = 0;
        }
    }
}

impl<S: MapSurface> Drop for MarkerLayer<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Leaflet map living in the webview, driven through `document::eval`.
pub struct LeafletSurface {
    container_id: String,
    tile_url: String,
    attribution: String,
    max_zoom: u8,
    center: (f64, f64),
    zoom: u8,
}

impl LeafletSurface {
    pub fn new(container_id: String, cfg: &StoreConfig) -> Self {
        Self {
            container_id,
            tile_url: cfg.tile_url.clone(),
            attribution: cfg.tile_attribution.clone(),
            max_zoom: cfg.tile_max_zoom,
            center: cfg.map_center,
            zoom: cfg.map_zoom,
        }
    }

    /// Runs `body` once Leaflet is loaded and (unless `creating`) the map
    /// for this container exists. `map` is bound inside `body`.
    ///
    /// Polling stops for good once the surface is disposed or after
    /// `READY_POLL_LIMIT` attempts.
    fn when_ready(&self, creating: bool, body: &str) -> String {
        let id = json(&self.container_id);
        let guard = if creating {
            "!window.L || !document.getElementById(id)"
        } else {
            "!window.L || !(window.__akkssMaps && window.__akkssMaps[id])"
        };
        format!(
            r#"(function () {{
  const id = {id};
  let polls = 0;
  const run = function () {{
    if (window.__akkssDisposed && window.__akkssDisposed[id]) return;
    if ({guard}) {{
      if (++polls < {limit}) setTimeout(run, {interval});
      return;
    }}
    window.__akkssMaps = window.__akkssMaps || {{}};
    let map = window.__akkssMaps[id];
    {body}
  }};
  run();
}})();"#,
            limit = READY_POLL_LIMIT,
            interval = READY_POLL_MS,
        )
    }

    fn dispose_script(&self) -> String {
        let id = json(&self.container_id);
        format!(
            r#"(function () {{
  const id = {id};
  window.__akkssDisposed = window.__akkssDisposed || {{}};
  window.__akkssDisposed[id] = true;
  if (window.__akkssMaps && window.__akkssMaps[id]) {{
    window.__akkssMaps[id].remove();
    delete window.__akkssMaps[id];
  }}
}})();"#
        )
    }

    fn eval(&self, js: String) {
        let _ = document::eval(&js);
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

impl MapSurface for LeafletSurface {
    fn init(&mut self) {
        let body = format!(
            r#"if (map) return;
    map = L.map(id, {{ center: [{lat}, {lng}], zoom: {zoom}, zoomControl: true, scrollWheelZoom: true }});
    L.tileLayer({url}, {{ attribution: {attribution}, maxZoom: {max_zoom}, tileSize: 256, zoomOffset: 0 }}).addTo(map);
    map.__akkssMarkers = L.layerGroup().addTo(map);
    window.__akkssMaps[id] = map;"#,
            lat = self.center.0,
            lng = self.center.1,
            zoom = self.zoom,
            url = json(&self.tile_url),
            attribution = json(&self.attribution),
            max_zoom = self.max_zoom,
        );
        self.eval(self.when_ready(true, &body));
        info!("Impact map initialised in #{}", self.container_id);
    }

    fn set_markers(&mut self, markers: &[MarkerSpec]) {
        let body = format!(
            r#"const markers = {markers};
    map.__akkssMarkers.clearLayers();
    markers.forEach(function (m) {{
      const html = '<div class="impact-marker" style="width:' + m.size + 'px;height:' + m.size +
        'px;font-size:' + m.font_size + 'px;">🌱</div>';
      const icon = L.divIcon({{ html: html, className: 'custom-marker', iconSize: [m.size, m.size], iconAnchor: [m.size / 2, m.size / 2] }});
      L.marker([m.lat, m.lng], {{ icon: icon }}).bindPopup(m.popup_html).addTo(map.__akkssMarkers);
    }});"#,
            markers = json(markers),
        );
        self.eval(self.when_ready(false, &body));
    }

    fn fit_to_markers(&mut self, bounds: MapBounds) {
        let body = format!(
            "map.fitBounds([[{}, {}], [{}, {}]]);",
            bounds.south, bounds.west, bounds.north, bounds.east
        );
        self.eval(self.when_ready(false, &body));
    }

    fn dispose(&mut self) {
        self.eval(self.dispose_script());
        info!("Impact map #{} disposed", self.container_id);
    }
}

#[component]
pub fn ImpactMap(records: ReadOnlySignal<Vec<LocationRecord>>) -> Element {
    let container_id = use_hook(|| {
        format!("impact-map-{}", NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed))
    });
    let layer = use_hook(|| Rc::new(RefCell::new(MarkerLayer::<LeafletSurface>::new(FIT_PADDING))));
    let mut container_ready = use_signal(|| false);

    let render_layer = layer.clone();
    use_effect(move || {
        let visible = records.read();
        if !container_ready() {
            return;
        }
        render_layer.borrow_mut().render(&visible);
    });

    let drop_layer = layer.clone();
    use_drop(move || drop_layer.borrow_mut().dispose());

    let mount_layer = layer.clone();
    let mount_id = container_id.clone();
    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        div {
            id: "{container_id}",
            class: "w-full h-[600px]",
            style: "background: #f8f9fa;",
            onmounted: move |_| {
                if mount_layer.borrow_mut().attach(LeafletSurface::new(mount_id.clone(), config())) {
                    container_ready.set(true);
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::get_baseline_locations;
    use crate::models::RegionSelector;
    use akkss_common::impact::filter_by_region;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Init,
        SetMarkers(Vec<u32>),
        Fit(MapBounds),
        Dispose,
    }

    #[derive(Clone, Default)]
    struct FakeSurface {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl FakeSurface {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl MapSurface for FakeSurface {
        fn init(&mut self) {
            self.calls.lock().unwrap().push(Call::Init);
        }
        fn set_markers(&mut self, markers: &[MarkerSpec]) {
            let ids = markers.iter().map(|m| m.id).collect();
            self.calls.lock().unwrap().push(Call::SetMarkers(ids));
        }
        fn fit_to_markers(&mut self, bounds: MapBounds) {
            self.calls.lock().unwrap().push(Call::Fit(bounds));
        }
        fn dispose(&mut self) {
            self.calls.lock().unwrap().push(Call::Dispose);
        }
    }

    #[test]
    fn test_marker_size_clamps() {
        assert_eq!(marker_size(0), MARKER_MIN_PX);
        assert_eq!(marker_size(1999), MARKER_MIN_PX);
        assert_eq!(marker_size(2500), 25.0);
        assert_eq!(marker_size(3245), 32.45);
        assert_eq!(marker_size(1_000_000), MARKER_MAX_PX);
        assert!(marker_size(3000) >= marker_size(2900));
    }

    #[test]
    fn test_render_before_attach_is_deferred() {
        let mut layer = MarkerLayer::<FakeSurface>::new(FIT_PADDING);
        assert_eq!(layer.render(&get_baseline_locations()), 0);
        assert!(!layer.is_attached());
    }

    #[test]
    fn test_render_replaces_markers_and_fits() {
        let fake = FakeSurface::default();
        let mut layer = MarkerLayer::new(FIT_PADDING);
        assert!(layer.attach(fake.clone()));

        let data = get_baseline_locations();
        assert_eq!(layer.render(&data), 12);
        assert_eq!(layer.render(&data[..3]), 3);
        assert_eq!(layer.placed(), 3);

        let calls = fake.calls();
        assert_eq!(calls[0], Call::Init);
        assert_eq!(calls[1], Call::SetMarkers((1..=12).collect()));
        assert!(matches!(calls[2], Call::Fit(_)));
        assert_eq!(calls[3], Call::SetMarkers(vec![1, 2, 3]));
        assert!(matches!(calls[4], Call::Fit(_)));
    }

    #[test]
    fn test_markers_follow_every_region_filter() {
        let baseline = get_baseline_locations();
        let mut selectors = RegionSelector::options();
        selectors.push(RegionSelector::Unknown("Central India".to_string()));

        for selector in selectors {
            let fake = FakeSurface::default();
            let mut layer = MarkerLayer::new(FIT_PADDING);
            layer.attach(fake.clone());

            let visible = filter_by_region(&baseline, &selector);
            let expected: Vec<u32> = visible.iter().map(|r| r.id).collect();
            assert_eq!(layer.render(&visible), expected.len());

            let calls = fake.calls();
            let placed = calls.iter().rev().find_map(|c| match c {
                Call::SetMarkers(ids) => Some(ids.clone()),
                _ => None,
            });
            assert_eq!(placed, Some(expected.clone()), "{}", selector.display_label());

            let fitted = calls.iter().any(|c| matches!(c, Call::Fit(_)));
            assert_eq!(fitted, !expected.is_empty(), "{}", selector.display_label());
            if let RegionSelector::Unknown(_) = selector {
                assert!(expected.is_empty());
            }
        }
    }

    #[test]
    fn test_empty_set_clears_without_fit() {
        let fake = FakeSurface::default();
        let mut layer = MarkerLayer::new(FIT_PADDING);
        layer.attach(fake.clone());
        layer.render(&[]);
        assert_eq!(fake.calls(), vec![Call::Init, Call::SetMarkers(vec![])]);
        assert_eq!(layer.placed(), 0);
    }

    #[test]
    fn test_second_attach_ignored() {
        let first = FakeSurface::default();
        let second = FakeSurface::default();
        let mut layer = MarkerLayer::new(FIT_PADDING);
        assert!(layer.attach(first.clone()));
        assert!(!layer.attach(second.clone()));
        assert!(second.calls().is_empty());
    }

    #[test]
    fn test_dispose_on_drop_once() {
        let fake = FakeSurface::default();
        {
            let mut layer = MarkerLayer::new(FIT_PADDING);
            layer.attach(fake.clone());
            layer.dispose();
            assert!(!layer.is_attached());
        }
        let disposals = fake.calls().iter().filter(|c| **c == Call::Dispose).count();
        assert_eq!(disposals, 1);

        let other = FakeSurface::default();
        {
            let mut layer = MarkerLayer::new(FIT_PADDING);
            layer.attach(other.clone());
        }
        assert_eq!(other.calls().last(), Some(&Call::Dispose));
    }

    #[test]
    fn test_no_surface_calls_after_dispose() {
        let fake = FakeSurface::default();
        let mut layer = MarkerLayer::new(FIT_PADDING);
        layer.attach(fake.clone());
        layer.render(&get_baseline_locations());
        layer.dispose();

        assert_eq!(layer.render(&get_baseline_locations()), 0);
        layer.dispose();

        let calls = fake.calls();
        assert_eq!(calls.last(), Some(&Call::Dispose));
        assert_eq!(calls.iter().filter(|c| **c == Call::Dispose).count(), 1);
    }

    #[test]
    fn test_leaflet_scripts_stop_after_dispose() {
        let surface = LeafletSurface::new("impact-map-7".to_string(), &StoreConfig::default());

        for creating in [true, false] {
            let script = surface.when_ready(creating, "map.invalidateSize();");
            let disposed_check = script
                .find("window.__akkssDisposed[id]) return;")
                .unwrap();
            assert!(disposed_check < script.find("map.invalidateSize();").unwrap());
            assert!(script.contains(&format!("if (++polls < {READY_POLL_LIMIT}) setTimeout(run, {READY_POLL_MS});")));
        }

        let teardown = surface.dispose_script();
        let flagged = teardown.find("window.__akkssDisposed[id] = true;").unwrap();
        assert!(flagged < teardown.find(".remove();").unwrap());
        assert!(teardown.contains(r#"const id = "impact-map-7";"#));
    }

    #[test]
    fn test_bounds_padding() {
        let data = get_baseline_locations();
        let markers: Vec<MarkerSpec> = data.iter().map(MarkerSpec::for_record).collect();
        let bounds = MapBounds::around(&markers).unwrap();
        assert_eq!(bounds.south, 10.8505);
        assert_eq!(bounds.north, 31.1471);
        assert_eq!(bounds.west, 72.5714);
        assert_eq!(bounds.east, 87.8550);

        let padded = bounds.pad(0.1);
        assert!(padded.south < bounds.south && padded.north > bounds.north);
        assert!(padded.west < bounds.west && padded.east > bounds.east);
        assert!(MapBounds::around(&[]).is_none());
    }

    #[test]
    fn test_popup_matches_card_figures() {
        let record = get_baseline_locations().remove(0);
        let figures = LocationFigures::of(&record);
        assert_eq!(figures.trees, "3,245");
        assert_eq!(figures.laptops, "2,156");
        assert_eq!(figures.co2, "972.5t");

        let html = popup_html(&record);
        assert!(html.contains("Maharashtra"));
        assert!(html.contains("Mumbai, Western India"));
        assert!(html.contains(&figures.trees));
        assert!(html.contains(&figures.laptops));
        assert!(html.contains(&figures.co2));
    }

    #[test]
    fn test_popup_escapes_names() {
        let mut record = get_baseline_locations().remove(0);
        record.name = "<b>Goa</b>".to_string();
        assert!(popup_html(&record).contains("&lt;b&gt;Goa&lt;/b&gt;"));
    }
}
