//! Database row models.

use soil_core::SoilMeasurement;
use sqlx::FromRow;

/// Raw measurement row as returned by the soil data query.
///
/// Numeric columns are cast to double in SQL so DECIMAL and FLOAT
/// schemas decode the same way.
#[derive(Debug, Clone, FromRow)]
pub struct SoilMeasurementRow {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub depth_cm: f64,
    pub carbon_percentage: f64,
    pub bulk_density: f64,
}

impl From<SoilMeasurementRow> for SoilMeasurement {
    fn from(row: SoilMeasurementRow) -> Self {
        Self {
            location: row.location,
            latitude: row.latitude,
            longitude: row.longitude,
            depth_cm: row.depth_cm,
            carbon_percentage: row.carbon_percentage,
            bulk_density: row.bulk_density,
        }
    }
}
