//! Cost-of-living row model.

use serde::{Deserialize, Serialize};

/// One country's cost-of-living indices, relative to NYC = 100.
///
/// The country name is the natural key but is neither guaranteed unique nor
/// normalized — rows may carry stray whitespace. Index cells that failed
/// numeric coercion at load time are `None`, so a matched row can still
/// contribute only some of its indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostOfLivingRecord {
    /// Country name as it appears in the dataset
    pub country: String,
    /// Cost of living excluding rent
    pub cost_of_living_index: Option<f64>,
    /// Combined cost of living and rent
    pub cost_of_living_plus_rent_index: Option<f64>,
    /// Local purchasing power
    pub local_purchasing_power_index: Option<f64>,
}
