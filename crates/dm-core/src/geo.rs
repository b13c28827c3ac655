//! Geographic coordinate type and spherical geodesic math.
//!
//! Everything here works on a sphere of radius [`EARTH_RADIUS_M`].  The
//! haversine model is within ±0.5 % of the WGS-84 ellipsoid for separations
//! up to half the Earth's circumference, which is the tolerance the line tool
//! advertises.  An ellipsoidal (Vincenty) solver can replace [`distance_m`],
//! [`bearing_deg`] and [`destination`] without touching their callers.
//!
//! The functions assume valid input.  Clamping out-of-range or NaN
//! coordinates is the caller's job (see [`Coordinate::clamped`]).

use std::fmt;

/// Mean Earth radius, metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 geographic coordinate in degrees.
///
/// Unlike a simulation-scale point, line endpoints can sit on opposite sides
/// of the planet, so both components are stored as `f64`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const MIN_LAT: f64 = -90.0;
    pub const MAX_LAT: f64 = 90.0;
    pub const MIN_LNG: f64 = -180.0;
    pub const MAX_LNG: f64 = 180.0;

    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `true` if both components are finite and inside their ranges.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (Self::MIN_LAT..=Self::MAX_LAT).contains(&self.lat)
            && (Self::MIN_LNG..=Self::MAX_LNG).contains(&self.lng)
    }

    /// Clamp each component to its nearest valid value.
    ///
    /// NaN becomes `0.0`; ±∞ clamps to the range edge.  The flag is `true`
    /// if anything had to change.
    pub fn clamped(self) -> (Coordinate, bool) {
        let lat = clamp_component(self.lat, Self::MIN_LAT, Self::MAX_LAT);
        let lng = clamp_component(self.lng, Self::MIN_LNG, Self::MAX_LNG);
        let out = Coordinate { lat, lng };
        // Compare bit patterns so a NaN input always counts as changed.
        let changed = lat.to_bits() != self.lat.to_bits() || lng.to_bits() != self.lng.to_bits();
        (out, changed)
    }

    /// Haversine great-circle distance to `other`, metres.
    #[inline]
    pub fn distance_m(self, other: Coordinate) -> f64 {
        distance_m(self, other)
    }

    /// Initial bearing from `self` towards `other`, degrees in `[0, 360)`.
    #[inline]
    pub fn bearing_to(self, other: Coordinate) -> f64 {
        bearing_deg(self, other)
    }

    /// The point reached by travelling `distance_m` along `bearing_deg`.
    #[inline]
    pub fn destination(self, distance_m: f64, bearing_deg: f64) -> Coordinate {
        destination(self, distance_m, bearing_deg)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

impl From<(f64, f64)> for Coordinate {
    /// `(lat, lng)` tuple.
    #[inline]
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

fn clamp_component(v: f64, min: f64, max: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(min, max) }
}

// ── Inverse problem ───────────────────────────────────────────────────────────

/// Haversine great-circle distance between `a` and `b`, metres.
///
/// Symmetric, and exactly `0.0` when `a == b`.
pub fn distance_m(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

    // Rounding can push `h` a hair past 1.0 for antipodal pairs.
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Initial forward azimuth from `a` to `b`, degrees in `[0, 360)`.
///
/// 0 = North, 90 = East.  Coincident points have no defined bearing; this
/// returns `0.0` for them rather than whatever `atan2(±0, ±0)` happens to give.
pub fn bearing_deg(a: Coordinate, b: Coordinate) -> f64 {
    if a == b {
        return 0.0;
    }
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let y = d_lng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lng.cos();
    if y == 0.0 && x == 0.0 {
        return 0.0;
    }
    normalize_bearing(y.atan2(x).to_degrees())
}

// ── Direct problem ────────────────────────────────────────────────────────────

/// The point reached by travelling `distance_m` from `origin` along the
/// initial bearing `bearing_deg`.
///
/// The result's longitude is normalized into `[-180, 180]`.  Non-finite
/// distance or bearing are treated as `0.0` so the result is never NaN.
pub fn destination(origin: Coordinate, distance_m: f64, bearing_deg: f64) -> Coordinate {
    let distance_m = if distance_m.is_finite() { distance_m } else { 0.0 };
    if distance_m == 0.0 {
        return origin;
    }
    let theta = normalize_bearing(bearing_deg).to_radians();
    let delta = distance_m / EARTH_RADIUS_M;

    let lat1 = origin.lat.to_radians();
    let lng1 = origin.lng.to_radians();

    let sin_lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos())
        .clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let lng2 = lng1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * sin_lat2);

    Coordinate {
        lat: lat2.to_degrees().clamp(Coordinate::MIN_LAT, Coordinate::MAX_LAT),
        lng: normalize_lng(lng2.to_degrees()),
    }
}

// ── Angle helpers ─────────────────────────────────────────────────────────────

/// Fold any angle into `[0, 360)`.  NaN and ±∞ map to `0.0`.
pub fn normalize_bearing(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let r = deg.rem_euclid(360.0);
    // `rem_euclid` rounds tiny negatives up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Wrap a longitude into `[-180, 180]`.  NaN and ±∞ map to `0.0`.
pub fn normalize_lng(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    if (Coordinate::MIN_LNG..=Coordinate::MAX_LNG).contains(&deg) {
        return deg;
    }
    (deg + 180.0).rem_euclid(360.0) - 180.0
}
