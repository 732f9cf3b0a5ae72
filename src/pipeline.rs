/// Parameterization pipeline.
///
/// Orchestrates one batch: texture normalization through the mapping
/// table, per-record equation evaluation, and the particle-catalog join.
/// Both lookup tables are loaded once by the caller and passed in
/// immutable; every record's computation is pure and independent of its
/// siblings. Outputs are two aligned collections keyed by hillslope id —
/// consumers join them by key, never by position. The first failing
/// record aborts the batch, wrapped with its hillslope id.
use tracing::debug;

use crate::equations::{DefaultCoefficients, EquationSet, ModelVersion};
use crate::error::Result;
use crate::particles::{ParticleProperties, SoilParticleCatalog};
use crate::record::HillslopeRecord;
use crate::texture::TextureMap;

/// Per-hillslope primary parameters.
///
/// Computed once and never mutated; the raw cover fields are consumed by
/// the Ke/Kss/Ft/Bare computations and do not appear here.
#[derive(Debug, Clone)]
pub struct PrimaryParameters {
    pub hillslope_id: String,
    pub slope_length: f64,
    pub slope: f64,
    pub ke: f64,
    pub kss: f64,
    pub ft: f64,
    pub chezy: f64,
    /// Identical to `chezy` at this stage of the model.
    pub rchezy: f64,
    pub bare: f64,
    pub defaults: DefaultCoefficients,
}

/// Per-hillslope particle parameters from the catalog.
#[derive(Debug, Clone)]
pub struct ParticleParameters {
    pub hillslope_id: String,
    /// Rock cover fraction, carried through for the writer's ROCK field.
    pub ground_rock: f64,
    pub properties: ParticleProperties,
}

pub struct ParameterizationPipeline<'a> {
    version: ModelVersion,
    textures: &'a TextureMap,
    catalog: &'a SoilParticleCatalog,
}

impl<'a> ParameterizationPipeline<'a> {
    pub fn new(
        version: ModelVersion,
        textures: &'a TextureMap,
        catalog: &'a SoilParticleCatalog,
    ) -> Self {
        Self {
            version,
            textures,
            catalog,
        }
    }

    pub fn version(&self) -> ModelVersion {
        self.version
    }

    /// Parameterize a batch of hillslope records.
    pub fn parameterize(
        &self,
        records: &[HillslopeRecord],
    ) -> Result<(Vec<PrimaryParameters>, Vec<ParticleParameters>)> {
        let equations = self.version.equation_set();
        let mut primary = Vec::with_capacity(records.len());
        let mut particles = Vec::with_capacity(records.len());
        for record in records {
            let (p, q) = self
                .parameterize_record(equations, record)
                .map_err(|e| e.for_hillslope(&record.hillslope_id))?;
            primary.push(p);
            particles.push(q);
        }
        Ok((primary, particles))
    }

    fn parameterize_record(
        &self,
        equations: &dyn EquationSet,
        record: &HillslopeRecord,
    ) -> Result<(PrimaryParameters, ParticleParameters)> {
        record.validate()?;
        let texture = self.textures.resolve(&record.soil_texture)?;

        let ke = equations.infiltration_coefficient(record, texture)?;
        let kss = equations.erodibility(record);
        let ft = equations.friction_term(record);
        let chezy = crate::equations::common::chezy(ft)?;
        let bare = equations.bare_fraction(record);

        // The particle join depends only on the texture class, not on the
        // primary parameters.
        let properties = *self.catalog.lookup(texture)?;

        debug!(
            hillslope = %record.hillslope_id,
            texture = %texture,
            ke, kss, chezy,
            "parameterized hillslope"
        );

        let primary = PrimaryParameters {
            hillslope_id: record.hillslope_id.clone(),
            slope_length: record.slope_length,
            slope: record.slope,
            ke,
            kss,
            ft,
            chezy,
            rchezy: chezy,
            bare,
            defaults: equations.default_coefficients(),
        };
        let particles = ParticleParameters {
            hillslope_id: record.hillslope_id.clone(),
            ground_rock: record.ground_rock,
            properties,
        };
        Ok((primary, particles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::constants::KOMEGA;
    use crate::error::Error;
    use crate::particles::tests::sample_catalog;
    use crate::record::tests::sample_record;
    use crate::texture::TextureMap;

    fn sample_texture_map() -> TextureMap {
        TextureMap::from_pairs([
            ("sandy loam", "sandy loam"),
            ("fine sandy loam", "sandy loam"),
            ("loam", "loam"),
            ("sand", "sand"),
        ])
        .unwrap()
    }

    #[test]
    fn batch_produces_aligned_outputs() {
        let textures = sample_texture_map();
        let catalog = sample_catalog();
        let pipeline = ParameterizationPipeline::new(ModelVersion::V2_4, &textures, &catalog);

        let mut second = sample_record();
        second.hillslope_id = "plot_02".to_string();
        second.soil_texture = "Fine Sandy Loam".to_string();
        let records = vec![sample_record(), second];

        let (primary, particles) = pipeline.parameterize(&records).unwrap();
        assert_eq!(primary.len(), 2);
        assert_eq!(particles.len(), 2);
        for (p, q) in primary.iter().zip(&particles) {
            assert_eq!(p.hillslope_id, q.hillslope_id);
        }
        assert_eq!(primary[1].hillslope_id, "plot_02");
        assert!(primary[0].ke > 0.0);
        assert!((primary[0].chezy - primary[0].rchezy).abs() < 1e-15);
        assert_eq!(primary[0].defaults.komega, KOMEGA);
    }

    #[test]
    fn versions_agree_except_for_ke() {
        let textures = sample_texture_map();
        let catalog = sample_catalog();
        let records = vec![sample_record()];

        let v24 = ParameterizationPipeline::new(ModelVersion::V2_4, &textures, &catalog);
        let v25 = ParameterizationPipeline::new(ModelVersion::V2_5, &textures, &catalog);
        let (p24, q24) = v24.parameterize(&records).unwrap();
        let (p25, q25) = v25.parameterize(&records).unwrap();

        assert_eq!(p24[0].kss, p25[0].kss);
        assert_eq!(p24[0].ft, p25[0].ft);
        assert_eq!(p24[0].chezy, p25[0].chezy);
        assert_eq!(p24[0].bare, p25[0].bare);
        assert_eq!(q24[0].properties, q25[0].properties);
        assert!((p24[0].ke - p25[0].ke).abs() > 1e-9);
    }

    #[test]
    fn unmapped_texture_fails_with_hillslope_context() {
        let textures = sample_texture_map();
        let catalog = sample_catalog();
        let pipeline = ParameterizationPipeline::new(ModelVersion::V2_4, &textures, &catalog);

        let mut record = sample_record();
        record.soil_texture = "volcanic ash".to_string();
        let err = pipeline.parameterize(&[record]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("plot_01"));
        assert!(matches!(err, Error::Hillslope { .. }));
    }

    #[test]
    fn missing_catalog_entry_aborts_batch() {
        let textures = TextureMap::from_pairs([("clay", "clay")]).unwrap();
        let catalog = sample_catalog(); // no clay entry
        let pipeline = ParameterizationPipeline::new(ModelVersion::V2_4, &textures, &catalog);

        let mut record = sample_record();
        record.soil_texture = "clay".to_string();
        let err = pipeline.parameterize(&[record]).unwrap_err();
        assert!(err.to_string().contains("clay"));
    }

    #[test]
    fn zero_foliar_record_fails_not_nan() {
        let textures = sample_texture_map();
        let catalog = sample_catalog();
        let pipeline = ParameterizationPipeline::new(ModelVersion::V2_4, &textures, &catalog);

        let record = HillslopeRecord {
            soil_texture: "loam".to_string(),
            foliar_shrub: 0.0,
            foliar_sod: 0.0,
            foliar_bunch: 0.0,
            foliar_forb_annual: 0.0,
            ..sample_record()
        };
        assert!(pipeline.parameterize(&[record]).is_err());
    }

    #[test]
    fn bare_can_exceed_unit_range_without_failing() {
        let textures = sample_texture_map();
        let catalog = sample_catalog();
        let pipeline = ParameterizationPipeline::new(ModelVersion::V2_4, &textures, &catalog);

        // Ground components are each valid but sum past 1.
        let record = HillslopeRecord {
            ground_litter: 0.5,
            ground_rock: 0.4,
            ground_basal: 0.3,
            ground_crust: 0.2,
            ..sample_record()
        };
        let (primary, _) = pipeline.parameterize(&[record]).unwrap();
        assert!((primary[0].bare - (-0.4)).abs() < 1e-12);
    }
}
