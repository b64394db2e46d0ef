//! Region configuration and INI file loading.

use chrono::{NaiveTime, Timelike};
use ini::{Ini, Properties};
use thiserror::Error;

use super::{BoundingBox, OperatingHours};

/// Prefix identifying restricted-zone sections in a config file.
const ZONE_SECTION_PREFIX: &str = "zone:";

/// Errors raised while loading a region configuration.
#[derive(Debug, Error)]
pub enum RegionConfigError {
    /// The file could not be read or parsed as INI.
    #[error("failed to read region config: {0}")]
    Read(#[from] ini::Error),

    /// A required section is absent.
    #[error("missing section [{0}] in region config")]
    MissingSection(String),

    /// A required key is absent from its section.
    #[error("missing key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    /// A value failed to parse.
    #[error("invalid value '{value}' for '{key}' in section [{section}]")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },

    /// A bounding box has min above max.
    #[error("invalid bounds in section [{0}]: min exceeds max")]
    InvalidBounds(String),
}

/// A rectangular sub-area of the region where presence is itself a
/// violation (e.g. a protected fishing ground).
#[derive(Debug, Clone, PartialEq)]
pub struct RestrictedZone {
    /// Zone name, taken from the config section (`[zone:<name>]`).
    pub name: String,
    /// The zone rectangle; containment is inclusive on the edges.
    pub bounds: BoundingBox,
}

impl RestrictedZone {
    /// Create a new restricted zone.
    pub fn new(name: impl Into<String>, bounds: BoundingBox) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Whether the position lies inside this zone.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.bounds.contains(latitude, longitude)
    }
}

/// The complete rule set for a monitored region.
///
/// Immutable for the lifetime of a tracking service instance. Zones are
/// kept in configuration order; the evaluator reports only the first zone
/// containing a position.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionConfig {
    /// The permitted operating rectangle.
    pub bounds: BoundingBox,
    /// The permitted time-of-day window.
    pub hours: OperatingHours,
    /// Restricted zones in priority order.
    pub restricted_zones: Vec<RestrictedZone>,
}

impl RegionConfig {
    /// Create a region config from its parts.
    pub fn new(
        bounds: BoundingBox,
        hours: OperatingHours,
        restricted_zones: Vec<RestrictedZone>,
    ) -> Self {
        Self {
            bounds,
            hours,
            restricted_zones,
        }
    }

    /// Load a region configuration from an INI file.
    ///
    /// Expects a `[region]` section with the four bounds, an `[hours]`
    /// section with `start`/`end` times (`HH:MM`), and any number of
    /// `[zone:<name>]` sections. Zones keep their file order.
    pub fn from_ini_file(path: impl AsRef<std::path::Path>) -> Result<Self, RegionConfigError> {
        let ini = Ini::load_from_file(path)?;
        Self::from_ini(&ini)
    }

    /// Build a region configuration from parsed INI data.
    pub fn from_ini(ini: &Ini) -> Result<Self, RegionConfigError> {
        let region = ini
            .section(Some("region"))
            .ok_or_else(|| RegionConfigError::MissingSection("region".into()))?;
        let bounds = bounds_from(region, "region")?;

        let hours = ini
            .section(Some("hours"))
            .ok_or_else(|| RegionConfigError::MissingSection("hours".into()))?;
        let start = get_time(hours, "hours", "start")?;
        let end = get_time(hours, "hours", "end")?;

        let mut restricted_zones = Vec::new();
        for (name, props) in ini.iter() {
            let Some(section) = name else { continue };
            let Some(zone_name) = section.strip_prefix(ZONE_SECTION_PREFIX) else {
                continue;
            };
            let zone_bounds = bounds_from(props, section)?;
            restricted_zones.push(RestrictedZone::new(zone_name, zone_bounds));
        }

        Ok(Self::new(
            bounds,
            OperatingHours::new(start, end),
            restricted_zones,
        ))
    }
}

impl Default for RegionConfig {
    /// The built-in demonstration region: a stretch of the Red Sea coast,
    /// latitude 18-23, longitude 39-42, operating hours 06:00-18:00, with
    /// one protected fishery as a restricted zone.
    fn default() -> Self {
        Self::new(
            BoundingBox::new(18.0, 23.0, 39.0, 42.0),
            OperatingHours::new(
                NaiveTime::from_hms_opt(6, 0, 0).expect("valid constant time"),
                NaiveTime::from_hms_opt(18, 0, 0).expect("valid constant time"),
            ),
            vec![RestrictedZone::new(
                "protected-fishery",
                BoundingBox::new(20.5, 21.0, 40.5, 41.0),
            )],
        )
    }
}

fn get_f64(props: &Properties, section: &str, key: &str) -> Result<f64, RegionConfigError> {
    let raw = props.get(key).ok_or_else(|| RegionConfigError::MissingKey {
        section: section.to_string(),
        key: key.to_string(),
    })?;
    raw.trim()
        .parse()
        .map_err(|_| RegionConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: raw.to_string(),
        })
}

fn get_time(props: &Properties, section: &str, key: &str) -> Result<NaiveTime, RegionConfigError> {
    let raw = props.get(key).ok_or_else(|| RegionConfigError::MissingKey {
        section: section.to_string(),
        key: key.to_string(),
    })?;
    let time = NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| {
        RegionConfigError::InvalidValue {
            section: section.to_string(),
            key: key.to_string(),
            value: raw.to_string(),
        }
    })?;
    // Minute resolution: seconds are always zero with this format.
    debug_assert_eq!(time.second(), 0);
    Ok(time)
}

fn bounds_from(props: &Properties, section: &str) -> Result<BoundingBox, RegionConfigError> {
    let min_lat = get_f64(props, section, "min_latitude")?;
    let max_lat = get_f64(props, section, "max_latitude")?;
    let min_lon = get_f64(props, section, "min_longitude")?;
    let max_lon = get_f64(props, section, "max_longitude")?;
    if min_lat > max_lat || min_lon > max_lon {
        return Err(RegionConfigError::InvalidBounds(section.to_string()));
    }
    Ok(BoundingBox::new(min_lat, max_lat, min_lon, max_lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_CONFIG: &str = "
[region]
min_latitude = 18.0
max_latitude = 23.0
min_longitude = 39.0
max_longitude = 42.0

[hours]
start = 06:00
end = 18:00

[zone:protected-fishery]
min_latitude = 20.5
max_latitude = 21.0
min_longitude = 40.5
max_longitude = 41.0

[zone:naval-exercise]
min_latitude = 19.0
max_latitude = 19.5
min_longitude = 39.5
max_longitude = 40.0
";

    fn parse(text: &str) -> Result<RegionConfig, RegionConfigError> {
        let ini = Ini::load_from_str(text).expect("test INI should parse");
        RegionConfig::from_ini(&ini)
    }

    #[test]
    fn test_full_config_parses() {
        let config = parse(FULL_CONFIG).unwrap();
        assert_eq!(config.bounds, BoundingBox::new(18.0, 23.0, 39.0, 42.0));
        assert_eq!(config.hours.to_string(), "06:00-18:00");
        assert_eq!(config.restricted_zones.len(), 2);
    }

    #[test]
    fn test_zone_order_matches_file_order() {
        let config = parse(FULL_CONFIG).unwrap();
        assert_eq!(config.restricted_zones[0].name, "protected-fishery");
        assert_eq!(config.restricted_zones[1].name, "naval-exercise");
    }

    #[test]
    fn test_missing_region_section() {
        let err = parse("[hours]\nstart = 06:00\nend = 18:00\n").unwrap_err();
        assert!(matches!(err, RegionConfigError::MissingSection(s) if s == "region"));
    }

    #[test]
    fn test_missing_bound_key() {
        let err = parse(
            "[region]\nmin_latitude = 18.0\nmax_latitude = 23.0\nmin_longitude = 39.0\n\
             [hours]\nstart = 06:00\nend = 18:00\n",
        )
        .unwrap_err();
        assert!(
            matches!(err, RegionConfigError::MissingKey { ref key, .. } if key == "max_longitude")
        );
    }

    #[test]
    fn test_invalid_time_value() {
        let err = parse(
            "[region]\nmin_latitude = 18.0\nmax_latitude = 23.0\n\
             min_longitude = 39.0\nmax_longitude = 42.0\n\
             [hours]\nstart = six\nend = 18:00\n",
        )
        .unwrap_err();
        assert!(matches!(err, RegionConfigError::InvalidValue { ref key, .. } if key == "start"));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = parse(
            "[region]\nmin_latitude = 23.0\nmax_latitude = 18.0\n\
             min_longitude = 39.0\nmax_longitude = 42.0\n\
             [hours]\nstart = 06:00\nend = 18:00\n",
        )
        .unwrap_err();
        assert!(matches!(err, RegionConfigError::InvalidBounds(s) if s == "region"));
    }

    #[test]
    fn test_default_matches_demo_region() {
        let config = RegionConfig::default();
        assert!(config.bounds.contains(20.0, 40.0));
        assert!(!config.bounds.contains(25.0, 43.0));
        assert_eq!(config.restricted_zones.len(), 1);
        assert!(config.restricted_zones[0].contains(20.6, 40.6));
    }
}
