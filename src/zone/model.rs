use crate::{Error, Result};
use geo::Point;
use geojson::{Feature, Value};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

/// Callers may reference a property either by its bare name or by its path
/// inside a feature collection.
const PROPERTY_PATH_PREFIX: &str = "features.properties.";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ZoneAssignment {
    pub layer_id: String,
    pub property_key: String,
}

impl ZoneAssignment {
    #[cfg(test)]
    pub fn new(layer_id: impl Into<String>, property_key: impl Into<String>) -> Self {
        ZoneAssignment {
            layer_id: layer_id.into(),
            property_key: property_key.into(),
        }
    }

    /// Property name with the path prefix stripped, `features.properties.rating` -> `rating`.
    pub fn property(&self) -> &str {
        self.property_key
            .split(PROPERTY_PATH_PREFIX)
            .last()
            .unwrap_or(&self.property_key)
    }
}

/// A loaded zone layer, its metadata plus the features in stored order.
#[derive(Clone, Debug)]
pub struct ZoneLayer {
    pub id: String,
    pub dataset_id: String,
    pub name: String,
    pub legend: String,
    pub description: String,
    pub features: Vec<Feature>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Band {
    Low,
    Medium,
    High,
    Overlap,
}

impl Band {
    pub fn index(self) -> usize {
        match self {
            Band::Low => 0,
            Band::Medium => 1,
            Band::High => 2,
            Band::Overlap => 3,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Band::Low => "#808080",
            Band::Medium => "#00FFFF",
            Band::High => "#FF0000",
            Band::Overlap => "#0000FF",
        }
    }

    pub fn legend(self, zone_legend: &str, property: &str) -> String {
        let text = match self {
            Band::Low => format!("low {property}"),
            Band::Medium => format!("medium {property}"),
            Band::High => format!("high {property}"),
            Band::Overlap => format!("outside of {property} zone"),
        };
        if zone_legend.is_empty() {
            text
        } else {
            format!("{zone_legend} - {text}")
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct OutputLayer {
    pub layer_id: String,
    pub layer_name: String,
    pub dataset_id: String,
    pub color: String,
    pub legend: String,
    pub description: String,
    pub records_count: usize,
    pub is_zone_layer: bool,
    pub features: Vec<Feature>,
}

impl OutputLayer {
    pub fn empty(zone: &ZoneLayer, property: &str, band: Band) -> Self {
        let band_name: &'static str = band.into();
        OutputLayer {
            layer_id: format!("zy{}_applied_{}", zone.id, band.index() + 1),
            layer_name: format!("{} {band_name}", zone.name),
            dataset_id: zone.dataset_id.clone(),
            color: band.color().into(),
            legend: band.legend(&zone.legend, property),
            description: zone.description.clone(),
            records_count: 0,
            is_zone_layer: true,
            features: vec![],
        }
    }
}

/// Reads a numeric property. A missing key or a JSON null is `None`, numeric
/// strings are parsed, any other value is an error.
pub fn numeric_property(feature: &Feature, key: &str) -> Result<Option<f64>> {
    let Some(value) = feature.properties.as_ref().and_then(|it| it.get(key)) else {
        return Ok(None);
    };
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => Ok(number.as_f64()),
        serde_json::Value::String(string) => string.trim().parse::<f64>().map(Some).map_err(|_| {
            Error::Computation(format!("Property {key} is not numeric: {string:?}"))
        }),
        other => Err(Error::Computation(format!(
            "Property {key} is not numeric: {other}"
        ))),
    }
}

/// Point geometry of a feature, `None` for any other geometry.
pub fn feature_point(feature: &Feature) -> Option<Point<f64>> {
    match feature.geometry.as_ref().map(|it| &it.value) {
        Some(Value::Point(coordinates)) => match coordinates.as_slice() {
            [lng, lat, ..] => Some(Point::new(*lng, *lat)),
            _ => None,
        },
        _ => None,
    }
}
