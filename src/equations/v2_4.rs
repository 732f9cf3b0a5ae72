/// RHEM v2.4 infiltration model.
///
/// Per-texture bare-soil model `keb = A · exp(B · (basal + litter))` with
/// one fixed (A, B) pair per texture class, then plant-functional-type
/// scaling and foliar-cover weighting shared with v2.5.
use super::common::weight_by_foliar;
use super::EquationSet;
use crate::error::Result;
use crate::record::HillslopeRecord;
use crate::texture::RhemSoilTexture;

/// Bare-soil coefficients (A, B) per texture class.
fn ke_base_coefficients(texture: RhemSoilTexture) -> (f64, f64) {
    match texture {
        RhemSoilTexture::Sand => (64.0, 0.3564),
        RhemSoilTexture::LoamySand => (30.5, 0.3056),
        RhemSoilTexture::SandyLoam => (5.0, 1.1632),
        RhemSoilTexture::Loam => (2.5, 1.5686),
        RhemSoilTexture::SiltLoam => (1.2, 2.0149),
        RhemSoilTexture::Silt => (1.2, 2.0149),
        RhemSoilTexture::SandyClayLoam => (0.80, 2.1691),
        RhemSoilTexture::ClayLoam => (0.50, 2.3026),
        RhemSoilTexture::SiltyClayLoam => (0.90, 1.4137),
        RhemSoilTexture::SandyClay => (0.30, 2.1203),
        RhemSoilTexture::SiltyClay => (0.5, 1.2809),
        RhemSoilTexture::Clay => (0.3, 1.7918),
    }
}

/// The v2.4 equation set.
#[derive(Debug, Clone, Copy)]
pub struct EquationsV24;

impl EquationSet for EquationsV24 {
    fn infiltration_coefficient(
        &self,
        record: &HillslopeRecord,
        texture: RhemSoilTexture,
    ) -> Result<f64> {
        let cover_term = record.ground_basal + record.ground_litter;
        let (a, b) = ke_base_coefficients(texture);
        let keb = a * (b * cover_term).exp();
        weight_by_foliar(
            keb,
            record.foliar_shrub,
            record.foliar_sod,
            record.foliar_bunch,
            record.foliar_forb_annual,
        )
    }
}
