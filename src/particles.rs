/// Soil particle catalog.
///
/// Static reference data keyed by canonical texture class: matric
/// potential, porosity, size-distribution shape, Smax, and the
/// per-particle-class fraction / specific-gravity / diameter arrays. The
/// five-element arrays keep the fixed class order clay, silt, small
/// aggregates, large aggregates, sand throughout the system; reordering
/// them is a breaking change to the output format. A texture class with no
/// catalog row is a hard lookup failure, never a default substitution.
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::texture::RhemSoilTexture;

/// Number of particle classes in the size distribution.
pub const N_PARTICLE_CLASSES: usize = 5;

/// Particle class names, in reporting order.
pub const PARTICLE_CLASS_NAMES: [&str; N_PARTICLE_CLASSES] =
    ["clay", "silt", "small_aggregates", "large_aggregates", "sand"];

/// Particle-size distribution and pore statistics for one texture class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleProperties {
    /// Mean matric potential G [mm].
    pub g: f64,
    /// Mean porosity [-].
    pub porosity: f64,
    /// Size-distribution shape parameter.
    pub dist: f64,
    pub smax: f64,
    /// Mass fraction per particle class, in reporting order.
    pub fraction: [f64; N_PARTICLE_CLASSES],
    /// Specific gravity per particle class [g/cc].
    pub specific_gravity: [f64; N_PARTICLE_CLASSES],
    /// Diameter per particle class [mm].
    pub diameter: [f64; N_PARTICLE_CLASSES],
}

/// Row shape of the particle lookup CSV.
#[derive(Debug, Deserialize)]
struct ParticleRow {
    #[serde(rename = "RHEMSoilTexture")]
    rhem_soil_texture: String,
    mean_matric_potential: f64,
    mean_porosity: f64,
    #[serde(rename = "Dist")]
    dist: f64,
    #[serde(rename = "Smax")]
    smax: f64,
    clay_fraction: f64,
    silt_fraction: f64,
    small_aggregates_fraction: f64,
    large_aggregates_fraction: f64,
    sand_fraction: f64,
    clay_specific_gravity: f64,
    silt_specific_gravity: f64,
    small_aggregates_specific_gravity: f64,
    large_aggregates_specific_gravity: f64,
    sand_specific_gravity: f64,
    clay_diameter: f64,
    silt_diameter: f64,
    small_aggregates_diameter: f64,
    large_aggregates_diameter: f64,
    sand_diameter: f64,
}

impl ParticleRow {
    fn into_entry(self) -> Result<(RhemSoilTexture, ParticleProperties)> {
        let texture = RhemSoilTexture::from_str(&self.rhem_soil_texture)?;
        let properties = ParticleProperties {
            g: self.mean_matric_potential,
            porosity: self.mean_porosity,
            dist: self.dist,
            smax: self.smax,
            fraction: [
                self.clay_fraction,
                self.silt_fraction,
                self.small_aggregates_fraction,
                self.large_aggregates_fraction,
                self.sand_fraction,
            ],
            specific_gravity: [
                self.clay_specific_gravity,
                self.silt_specific_gravity,
                self.small_aggregates_specific_gravity,
                self.large_aggregates_specific_gravity,
                self.sand_specific_gravity,
            ],
            diameter: [
                self.clay_diameter,
                self.silt_diameter,
                self.small_aggregates_diameter,
                self.large_aggregates_diameter,
                self.sand_diameter,
            ],
        };
        Ok((texture, properties))
    }
}

/// Lookup from canonical texture class to particle properties.
///
/// Loaded once at startup from the particle CSV and shared read-only for
/// the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct SoilParticleCatalog {
    entries: HashMap<RhemSoilTexture, ParticleProperties>,
}

impl SoilParticleCatalog {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RhemSoilTexture, ParticleProperties)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Load the catalog from the particle lookup CSV.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut entries = HashMap::new();
        for row in reader.deserialize::<ParticleRow>() {
            let row = row.map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            let (texture, properties) = row.into_entry()?;
            entries.insert(texture, properties);
        }
        Ok(Self { entries })
    }

    /// Particle properties for a texture class.
    ///
    /// Fails when the class has no catalog row.
    pub fn lookup(&self, texture: RhemSoilTexture) -> Result<&ParticleProperties> {
        self.entries
            .get(&texture)
            .ok_or(Error::MissingParticleEntry { texture })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
