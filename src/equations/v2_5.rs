/// RHEM v2.5 infiltration model.
///
/// Same weighting structure as v2.4, but the bare-soil model is
/// `keb = A · exp(1.81·ground + 1.059·foliar)` with a different per-texture
/// A and both ground (basal + litter) and total foliar cover in the
/// exponent.
use super::common::weight_by_foliar;
use super::constants::{KE25_FOLIAR_COEFF, KE25_GROUND_COEFF};
use super::EquationSet;
use crate::error::Result;
use crate::record::HillslopeRecord;
use crate::texture::RhemSoilTexture;

/// Bare-soil coefficient A per texture class.
fn ke_base_coefficient(texture: RhemSoilTexture) -> f64 {
    match texture {
        RhemSoilTexture::Sand => 2.40,
        RhemSoilTexture::LoamySand => 2.20,
        RhemSoilTexture::SandyLoam => 1.90,
        RhemSoilTexture::Loam => 1.40,
        RhemSoilTexture::SiltLoam => 1.70,
        RhemSoilTexture::Silt => 2.25,
        RhemSoilTexture::SandyClayLoam => 1.13,
        RhemSoilTexture::ClayLoam => 0.90,
        RhemSoilTexture::SiltyClayLoam => 0.93,
        RhemSoilTexture::SandyClay => 0.72,
        RhemSoilTexture::SiltyClay => 0.61,
        RhemSoilTexture::Clay => 0.37,
    }
}

/// The v2.5 equation set.
#[derive(Debug, Clone, Copy)]
pub struct EquationsV25;

impl EquationSet for EquationsV25 {
    fn infiltration_coefficient(
        &self,
        record: &HillslopeRecord,
        texture: RhemSoilTexture,
    ) -> Result<f64> {
        let ground_cover = record.ground_basal + record.ground_litter;
        let foliar_cover = record.total_foliar();
        let cover_term = KE25_GROUND_COEFF * ground_cover + KE25_FOLIAR_COEFF * foliar_cover;
        let keb = ke_base_coefficient(texture) * cover_term.exp();
        weight_by_foliar(
            keb,
            record.foliar_shrub,
            record.foliar_sod,
            record.foliar_bunch,
            record.foliar_forb_annual,
        )
    }
}
