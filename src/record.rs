/// Validated per-hillslope input record.
///
/// One row per hillslope/plot, with cover values already scaled from
/// percentages to fractions (see `input`). Validation happens once at
/// construction: every cover fraction must be a finite value in [0, 1] and
/// the geometry finite and non-negative. Component sums are deliberately
/// not validated here; `Bare = 1 - ground` may leave [0, 1] on malformed
/// input and is surfaced unclamped downstream.
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct HillslopeRecord {
    pub hillslope_id: String,
    /// Slope length [m].
    pub slope_length: f64,
    /// Slope as a fraction (0.05 = 5%).
    pub slope: f64,
    /// Raw soil-texture label, resolved by the pipeline's texture join.
    pub soil_texture: String,
    pub ground_basal: f64,
    pub ground_litter: f64,
    pub ground_rock: f64,
    pub ground_crust: f64,
    pub foliar_shrub: f64,
    pub foliar_sod: f64,
    pub foliar_bunch: f64,
    pub foliar_forb_annual: f64,
}

fn check_fraction(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NotFinite { field });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::OutOfRange {
            field,
            value,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::NotFinite { field });
    }
    if value < 0.0 {
        return Err(Error::OutOfRange {
            field,
            value,
            min: 0.0,
            max: f64::INFINITY,
        });
    }
    Ok(())
}

impl HillslopeRecord {
    /// Validate a fully populated record.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("SlopeLength", self.slope_length)?;
        check_non_negative("Slope", self.slope)?;
        for (field, value) in [
            ("GroundBasal", self.ground_basal),
            ("GroundLitter", self.ground_litter),
            ("GroundRock", self.ground_rock),
            ("GroundCrust", self.ground_crust),
            ("FoliarShrub", self.foliar_shrub),
            ("FoliarSod", self.foliar_sod),
            ("FoliarBunch", self.foliar_bunch),
            ("FoliarForbAnnual", self.foliar_forb_annual),
        ] {
            check_fraction(field, value)?;
        }
        Ok(())
    }

    /// Total ground cover: litter + rock + basal + crust.
    pub fn total_ground(&self) -> f64 {
        self.ground_litter + self.ground_rock + self.ground_basal + self.ground_crust
    }

    /// Total foliar cover: shrub + sod + bunch + forb.
    pub fn total_foliar(&self) -> f64 {
        self.foliar_shrub + self.foliar_sod + self.foliar_bunch + self.foliar_forb_annual
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A valid sandy-loam record used across the crate's tests.
    pub(crate) fn sample_record() -> HillslopeRecord {
        HillslopeRecord {
            hillslope_id: "plot_01".to_string(),
            slope_length: 50.0,
            slope: 0.05,
            soil_texture: "sandy loam".to_string(),
            ground_basal: 0.1,
            ground_litter: 0.2,
            ground_rock: 0.05,
            ground_crust: 0.02,
            foliar_shrub: 0.3,
            foliar_sod: 0.1,
            foliar_bunch: 0.05,
            foliar_forb_annual: 0.02,
        }
    }

    #[test]
    fn valid_record_passes() {
        assert!(sample_record().validate().is_ok());
    }

    #[test]
    fn rejects_cover_above_one() {
        let mut r = sample_record();
        r.ground_litter = 1.2;
        let err = r.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                field: "GroundLitter",
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_cover() {
        let mut r = sample_record();
        r.foliar_sod = -0.1;
        assert!(r.validate().is_err());
    }

    #[test]
    fn rejects_nan_slope() {
        let mut r = sample_record();
        r.slope = f64::NAN;
        let err = r.validate().unwrap_err();
        assert!(matches!(err, Error::NotFinite { field: "Slope" }));
    }

    #[test]
    fn cover_totals() {
        let r = sample_record();
        let tol = 1e-12;
        assert!((r.total_ground() - 0.37).abs() < tol);
        assert!((r.total_foliar() - 0.47).abs() < tol);
    }
}
