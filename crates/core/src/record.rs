//! Soil measurement and record types.

use serde::{Deserialize, Serialize};

/// Compute soil organic carbon stock in Mg/ha.
///
/// `bulk_density` is in g/cm³, `depth_cm` in centimetres and
/// `carbon_percentage` in percent of mass. The result is rounded to two
/// decimal places.
pub fn soc_stock(bulk_density: f64, depth_cm: f64, carbon_percentage: f64) -> f64 {
    round_to_hundredths(bulk_density * depth_cm * (carbon_percentage / 100.0))
}

/// Relative nudge applied before rounding so that products which are
/// exactly on a `.xx5` boundary in decimal, but land a few ulps below it in
/// binary, still round away from zero.
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Round to two decimal places, halves away from zero.
///
/// Matches decimal `ROUND(x, 2)` for values carrying a handful of decimal
/// places, which is what measurement columns hold.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    (scaled + scaled * ROUNDING_TOLERANCE).round() / 100.0
}

/// A raw soil measurement exactly as stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoilMeasurement {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_cm: f64,
    pub carbon_percentage: f64,
    pub bulk_density: f64,
}

/// A soil measurement with its derived SOC stock.
///
/// The only way to build one is [`SoilRecord::from_measurement`], so
/// `soc_stock` always agrees with the other fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SoilRecord {
    location: String,
    latitude: f64,
    longitude: f64,
    depth_cm: f64,
    carbon_percentage: f64,
    bulk_density: f64,
    soc_stock: f64,
}

impl SoilRecord {
    /// Column names in output order (CSV header, PDF header, JSON fields).
    pub const FIELD_NAMES: [&'static str; 7] = [
        "location",
        "latitude",
        "longitude",
        "depth_cm",
        "carbon_percentage",
        "bulk_density",
        "soc_stock",
    ];

    /// Derive a record from a raw measurement.
    pub fn from_measurement(measurement: SoilMeasurement) -> Self {
        let soc_stock = soc_stock(
            measurement.bulk_density,
            measurement.depth_cm,
            measurement.carbon_percentage,
        );
        Self {
            location: measurement.location,
            latitude: measurement.latitude,
            longitude: measurement.longitude,
            depth_cm: measurement.depth_cm,
            carbon_percentage: measurement.carbon_percentage,
            bulk_density: measurement.bulk_density,
            soc_stock,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn depth_cm(&self) -> f64 {
        self.depth_cm
    }

    pub fn carbon_percentage(&self) -> f64 {
        self.carbon_percentage
    }

    pub fn bulk_density(&self) -> f64 {
        self.bulk_density
    }

    /// Derived SOC stock in Mg/ha.
    pub fn soc_stock(&self) -> f64 {
        self.soc_stock
    }

    /// Cell values in [`Self::FIELD_NAMES`] order, formatted for display.
    pub fn display_values(&self) -> [String; 7] {
        [
            self.location.clone(),
            self.latitude.to_string(),
            self.longitude.to_string(),
            self.depth_cm.to_string(),
            self.carbon_percentage.to_string(),
            self.bulk_density.to_string(),
            self.soc_stock.to_string(),
        ]
    }
}

impl From<SoilMeasurement> for SoilRecord {
    fn from(measurement: SoilMeasurement) -> Self {
        Self::from_measurement(measurement)
    }
}
