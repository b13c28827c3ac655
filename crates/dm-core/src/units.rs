//! Display units and distance formatting.
//!
//! Formatting is deterministic and locale-independent: `.` decimal separator,
//! no digit grouping, fixed precision per magnitude band.  The renderer shows
//! these strings verbatim, and tests compare them literally.

/// Metres per international mile.
pub const METERS_PER_MILE: f64 = 1_609.344;

/// Metres per international foot.
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Unit system used for distance labels.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    /// Metres below 1 km, kilometres above.
    #[default]
    Metric,
    /// Feet below 0.1 mi, miles above.
    Imperial,
}

impl DistanceUnit {
    /// The other unit system (for a unit toggle).
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            DistanceUnit::Metric   => DistanceUnit::Imperial,
            DistanceUnit::Imperial => DistanceUnit::Metric,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Metric   => "metric",
            DistanceUnit::Imperial => "imperial",
        }
    }
}

impl std::fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable distance label.
///
/// | Unit       | Range        | Example      |
/// |------------|--------------|--------------|
/// | `Metric`   | `< 1000 m`   | `"850 m"`    |
/// | `Metric`   | `≥ 1000 m`   | `"3935.75 km"` |
/// | `Imperial` | `< 0.1 mi`   | `"420 ft"`   |
/// | `Imperial` | `≥ 0.1 mi`   | `"2445.56 mi"` |
///
/// Negative or non-finite input is shown as zero.
pub fn format_distance(meters: f64, unit: DistanceUnit) -> String {
    let meters = if meters.is_finite() && meters > 0.0 { meters } else { 0.0 };
    match unit {
        DistanceUnit::Metric => {
            if meters < 1_000.0 {
                format!("{:.0} m", meters)
            } else {
                format!("{:.2} km", meters / 1_000.0)
            }
        }
        DistanceUnit::Imperial => {
            let miles = meters / METERS_PER_MILE;
            if miles < 0.1 {
                format!("{:.0} ft", meters / METERS_PER_FOOT)
            } else {
                format!("{:.2} mi", miles)
            }
        }
    }
}
