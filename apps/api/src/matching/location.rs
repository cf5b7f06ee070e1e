use thiserror::Error;
use tracing::debug;

use crate::models::geo::GeoPoint;

/// Mean Earth radius (IUGG), in kilometres.
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Score used when the distance cannot be computed.
pub const UNKNOWN_DISTANCE_SCORE: f64 = 0.5;

/// Distance buckets: (max distance in km, score). Anything further scores 0.2.
const DISTANCE_STEPS: &[(f64, f64)] = &[(5.0, 1.0), (15.0, 0.8), (30.0, 0.6), (50.0, 0.4)];
const FAR_SCORE: f64 = 0.2;

#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    InvalidLongitude(f64),
}

fn validate(point: &GeoPoint) -> Result<(), GeoError> {
    if !point.latitude.is_finite() || !(-90.0..=90.0).contains(&point.latitude) {
        return Err(GeoError::InvalidLatitude(point.latitude));
    }
    if !point.longitude.is_finite() || !(-180.0..=180.0).contains(&point.longitude) {
        return Err(GeoError::InvalidLongitude(point.longitude));
    }
    Ok(())
}

/// Great-circle distance between two points, in kilometres (haversine).
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> Result<f64, GeoError> {
    validate(a)?;
    validate(b)?;

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let central_angle = 2.0 * h.sqrt().min(1.0).asin();

    Ok(EARTH_RADIUS_KM * central_angle)
}

/// Maps a distance onto the fixed proximity step function.
pub fn score_for_distance(km: f64) -> f64 {
    DISTANCE_STEPS
        .iter()
        .find(|(limit, _)| km <= *limit)
        .map(|(_, score)| *score)
        .unwrap_or(FAR_SCORE)
}

/// Proximity score in 0.0 – 1.0. Falls back to 0.5 on invalid coordinates.
pub fn location_score(job: &GeoPoint, provider: &GeoPoint) -> f64 {
    match distance_km(job, provider) {
        Ok(km) => score_for_distance(km),
        Err(e) => {
            debug!("Distance unavailable, using neutral location score: {e}");
            UNKNOWN_DISTANCE_SCORE
        }
    }
}
