use geo::Point;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A non-zone point is matched to a zone feature at this distance or closer.
pub const ZONE_PROXIMITY_KM: f64 = 2.0;

/// Great-circle distance in kilometers between two `(lng, lat)` points, haversine formula.
pub fn distance_km(p1: Point<f64>, p2: Point<f64>) -> f64 {
    let lat1 = p1.y().to_radians();
    let lat2 = p2.y().to_radians();
    let delta_lat = (p2.y() - p1.y()).to_radians();
    let delta_lng = (p2.x() - p1.x()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    // rounding can push antipodal points slightly above 1
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

pub fn within_proximity(p1: Point<f64>, p2: Point<f64>) -> bool {
    distance_km(p1, p2) <= ZONE_PROXIMITY_KM
}
