use crate::models::Coordinate;

/// Earth's radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers on a sphere of radius [`EARTH_RADIUS_KM`]
///
/// Inputs are degrees, as carried by [`Coordinate`]. Callers validate ranges first;
/// the ranker goes through [`Coordinate::distance_to`].
#[inline]
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let half_dphi = (phi2 - phi1) / 2.0;
    let half_dlambda = (lon2 - lon1).to_radians() / 2.0;

    let h = half_dphi.sin().powi(2) + phi1.cos() * phi2.cos() * half_dlambda.sin().powi(2);

    // h can round past 1 near antipodes
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).max(0.0).sqrt())
}

impl Coordinate {
    /// Great-circle distance to another coordinate in kilometers
    #[inline]
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        haversine_distance(self.latitude, self.longitude, other.latitude, other.longitude)
    }
}

/// Format a distance for display, e.g. `4.4 km away`
pub fn format_distance(distance_km: f64, unit_label: &str) -> String {
    format!("{:.1} {}", distance_km, unit_label)
}
