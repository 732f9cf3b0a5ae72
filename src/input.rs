/// Raw input-table ingestion.
///
/// The field observation table arrives as CSV with cover and slope values
/// in percent (0–100). Rows are deserialized against the expected header
/// and scaled to fractions on conversion, so everything downstream of
/// this module works in [0, 1].
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::record::HillslopeRecord;

/// One CSV row, before percent→fraction scaling.
#[derive(Debug, Deserialize)]
pub struct RawHillslopeRow {
    #[serde(rename = "HillslopeID")]
    pub hillslope_id: String,
    #[serde(rename = "SlopeLength")]
    pub slope_length: f64,
    /// Slope in percent.
    #[serde(rename = "Slope")]
    pub slope: f64,
    #[serde(rename = "SoilTexture")]
    pub soil_texture: String,
    #[serde(rename = "GroundBasal")]
    pub ground_basal: f64,
    #[serde(rename = "GroundLitter")]
    pub ground_litter: f64,
    #[serde(rename = "GroundRock")]
    pub ground_rock: f64,
    #[serde(rename = "GroundCrust")]
    pub ground_crust: f64,
    #[serde(rename = "FoliarShrub")]
    pub foliar_shrub: f64,
    #[serde(rename = "FoliarSod")]
    pub foliar_sod: f64,
    #[serde(rename = "FoliarBunch")]
    pub foliar_bunch: f64,
    #[serde(rename = "FoliarForbAnnual")]
    pub foliar_forb_annual: f64,
}

const PERCENT: f64 = 100.0;

impl RawHillslopeRow {
    /// Scale percent fields to fractions. Slope length is already metric
    /// and passes through unchanged.
    pub fn into_record(self) -> HillslopeRecord {
        HillslopeRecord {
            hillslope_id: self.hillslope_id,
            slope_length: self.slope_length,
            slope: self.slope / PERCENT,
            soil_texture: self.soil_texture,
            ground_basal: self.ground_basal / PERCENT,
            ground_litter: self.ground_litter / PERCENT,
            ground_rock: self.ground_rock / PERCENT,
            ground_crust: self.ground_crust / PERCENT,
            foliar_shrub: self.foliar_shrub / PERCENT,
            foliar_sod: self.foliar_sod / PERCENT,
            foliar_bunch: self.foliar_bunch / PERCENT,
            foliar_forb_annual: self.foliar_forb_annual / PERCENT,
        }
    }
}

/// Load and scale the hillslope input table.
pub fn load_hillslopes(path: &Path) -> Result<Vec<HillslopeRecord>> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    let mut records = Vec::new();
    for row in reader.deserialize::<RawHillslopeRow>() {
        let row = row.map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        records.push(row.into_record());
    }
    Ok(records)
}
