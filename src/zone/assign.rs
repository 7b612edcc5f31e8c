use super::distance::within_proximity;
use super::model::{feature_point, numeric_property, Band, OutputLayer, ZoneLayer};
use super::threshold::{impute_mean, thresholds};
use crate::{Error, Result};
use geo::Point;
use geojson::Feature;
use strum::IntoEnumIterator;
use tracing::{debug, info};

/// How the zone features are scanned for each non-zone point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneScan {
    /// Legacy behavior: only the first zone feature in stored order is looked
    /// at. Within range the point is classified by that feature's value,
    /// otherwise it goes to the overlap layer, even when a later zone feature
    /// is close by. Kept as is until product owners confirm whether
    /// `AllFeatures` (or nearest feature) is what they want. Zone features
    /// past the first are never read, broken geometry there included.
    FirstFeatureOnly,
    /// The first zone feature in stored order that is within range wins.
    AllFeatures,
}

pub const ZONE_SCAN: ZoneScan = ZoneScan::FirstFeatureOnly;

/// Runs [apply_zone_transformation] for every zone layer and concatenates the
/// output layers in zone order. Any failure aborts the whole run.
pub fn apply_zone_layers(
    zones: &[(ZoneLayer, String)],
    non_zone_features: &[Feature],
    scan: ZoneScan,
) -> Result<Vec<OutputLayer>> {
    let mut res = Vec::with_capacity(zones.len() * 4);
    for (zone, property) in zones {
        res.extend(apply_zone_transformation(
            zone,
            property,
            non_zone_features,
            scan,
        )?);
    }
    Ok(res)
}

/// Routes every non-zone feature into one of four output layers of `zone`:
/// low, medium, high and overlap, in that order.
pub fn apply_zone_transformation(
    zone: &ZoneLayer,
    property: &str,
    non_zone_features: &[Feature],
    scan: ZoneScan,
) -> Result<Vec<OutputLayer>> {
    let values = zone
        .features
        .iter()
        .map(|it| numeric_property(it, property))
        .collect::<Result<Vec<_>>>()
        .map_err(|e| Error::Computation(format!("Zone layer {}: {e}", zone.id)))?;

    let [t_low, t_high] = impute_mean(&values)
        .and_then(|imputed| thresholds(&imputed))
        .map_err(|e| match e {
            Error::InsufficientData(msg) => Error::InsufficientData(format!(
                "Zone layer {} has no usable {property} values: {msg}",
                zone.id
            )),
            Error::Computation(msg) => {
                Error::Computation(format!("Zone layer {} thresholds: {msg}", zone.id))
            }
            other => other,
        })?;

    info!(
        zone_layer_id = %zone.id,
        property,
        zone_features = zone.features.len(),
        non_zone_features = non_zone_features.len(),
        t_low,
        t_high,
        "Applying zone layer"
    );

    // The value read on a match is the raw one, missing reads as 0 and not
    // as the imputed mean.
    let zone_values: Vec<(&Feature, f64)> = zone
        .features
        .iter()
        .zip(&values)
        .map(|(feature, value)| (feature, value.unwrap_or(0.0)))
        .collect();

    let mut layers: Vec<OutputLayer> = Band::iter()
        .map(|band| OutputLayer::empty(zone, property, band))
        .collect();

    for (index, feature) in non_zone_features.iter().enumerate() {
        let point = feature_point(feature).ok_or_else(|| {
            Error::Computation(format!(
                "Non-zone feature #{index} has no point geometry (zone layer {})",
                zone.id
            ))
        })?;
        let value = matched_value(point, &zone_values, scan)
            .map_err(|e| Error::Computation(format!("Zone layer {}: {e}", zone.id)))?;
        let band = classify(value, t_low, t_high);
        layers[band.index()].features.push(feature.clone());
    }

    for layer in &mut layers {
        layer.records_count = layer.features.len();
        debug!(layer_id = %layer.layer_id, records = layer.records_count);
    }

    Ok(layers)
}

/// Zone feature geometry is only resolved for the features the scan reaches.
fn matched_value(
    point: Point<f64>,
    zone_values: &[(&Feature, f64)],
    scan: ZoneScan,
) -> Result<Option<f64>> {
    let candidates = match scan {
        ZoneScan::FirstFeatureOnly => &zone_values[..zone_values.len().min(1)],
        ZoneScan::AllFeatures => zone_values,
    };
    for (index, (feature, value)) in candidates.iter().enumerate() {
        let zone_point = feature_point(feature).ok_or_else(|| {
            Error::Computation(format!("Zone feature #{index} has no point geometry"))
        })?;
        if within_proximity(point, zone_point) {
            return Ok(Some(*value));
        }
    }
    Ok(None)
}

fn classify(value: Option<f64>, t_low: f64, t_high: f64) -> Band {
    match value {
        None => Band::Overlap,
        Some(value) if value <= t_low => Band::Low,
        Some(value) if value <= t_high => Band::Medium,
        Some(_) => Band::High,
    }
}
