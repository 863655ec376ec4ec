use crate::error::AppError;
use once_cell::sync::Lazy;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub tile_url: String,
    pub tile_attribution: String,
    pub tile_max_zoom: u8,
    pub map_center: (f64, f64),
    pub map_zoom: u8,
    pub refresh_delay: Duration,
    pub order_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
            tile_max_zoom: 18,
            map_center: (20.5937, 78.9629),
            map_zoom: 5,
            refresh_delay: Duration::from_millis(1000),
            order_delay: Duration::from_millis(800),
        }
    }
}

static CONFIG: Lazy<StoreConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    StoreConfig::from_lookup(|key| std::env::var(key).ok())
});

pub fn config() -> &'static StoreConfig {
    &CONFIG
}

impl StoreConfig {
    /// Builds a config from `lookup`, falling back to defaults for missing
    /// or malformed entries.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = StoreConfig::default();

        if let Some(url) = lookup("AKKSS_TILE_URL").filter(|v| !v.trim().is_empty()) {
            cfg.tile_url = url;
        }
        if let Some(attr) = lookup("AKKSS_TILE_ATTRIBUTION").filter(|v| !v.trim().is_empty()) {
            cfg.tile_attribution = attr;
        }
        apply("AKKSS_TILE_MAX_ZOOM", &lookup, parse_zoom, &mut cfg.tile_max_zoom);
        apply("AKKSS_MAP_CENTER", &lookup, parse_center, &mut cfg.map_center);
        apply("AKKSS_MAP_ZOOM", &lookup, parse_zoom, &mut cfg.map_zoom);
        apply("AKKSS_REFRESH_DELAY_MS", &lookup, parse_millis, &mut cfg.refresh_delay);
        apply("AKKSS_ORDER_DELAY_MS", &lookup, parse_millis, &mut cfg.order_delay);

        cfg
    }
}

fn apply<F, T>(key: &str, lookup: &F, parse: fn(&str) -> Result<T, AppError>, slot: &mut T)
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match parse(raw.trim()) {
        Ok(value) => *slot = value,
        Err(e) => warn!("Ignoring {}: {}", key, e),
    }
}

fn parse_zoom(raw: &str) -> Result<u8, AppError> {
    let zoom: u8 = raw
        .parse()
        .map_err(|_| AppError::Config(format!("invalid zoom level '{}'", raw)))?;
    if zoom > 20 {
        return Err(AppError::Config(format!("zoom level {} out of range", zoom)));
    }
    Ok(zoom)
}

fn parse_center(raw: &str) -> Result<(f64, f64), AppError> {
    let (lat, lng) = raw
        .split_once(',')
        .ok_or_else(|| AppError::Config(format!("expected 'lat,lng', got '{}'", raw)))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("invalid latitude '{}'", lat)))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|_| AppError::Config(format!("invalid longitude '{}'", lng)))?;
    if !akkss_common::Coordinates::new(lat, lng).is_valid() {
        return Err(AppError::Config(format!("centre {},{} out of range", lat, lng)));
    }
    Ok((lat, lng))
}

fn parse_millis(raw: &str) -> Result<Duration, AppError> {
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| AppError::Config(format!("invalid duration '{}'", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = StoreConfig::from_lookup(|_| None);
        assert_eq!(cfg, StoreConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cfg = StoreConfig::from_lookup(lookup_from(&[
            ("AKKSS_MAP_CENTER", "12.97, 77.59"),
            ("AKKSS_MAP_ZOOM", "7"),
            ("AKKSS_REFRESH_DELAY_MS", "10"),
        ]));
        assert_eq!(cfg.map_center, (12.97, 77.59));
        assert_eq!(cfg.map_zoom, 7);
        assert_eq!(cfg.refresh_delay, Duration::from_millis(10));
        assert_eq!(cfg.tile_url, DEFAULT_TILE_URL);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let cfg = StoreConfig::from_lookup(lookup_from(&[
            ("AKKSS_MAP_CENTER", "north"),
            ("AKKSS_MAP_ZOOM", "42"),
            ("AKKSS_TILE_MAX_ZOOM", "-1"),
            ("AKKSS_REFRESH_DELAY_MS", "soon"),
            ("AKKSS_TILE_URL", "   "),
        ]));
        assert_eq!(cfg, StoreConfig::default());
    }
}
