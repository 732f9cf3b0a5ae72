/// Crate-wide error type.
///
/// One enum covers the four failure families of the parameterization:
/// configuration (unsupported model version), mapping (raw texture label
/// unknown to the texture-group table), lookup (canonical class missing
/// from the particle catalog), and domain (mathematically undefined
/// results). Soil physics is never guessed: none of these are substituted
/// with defaults, they propagate to the caller with enough context to name
/// the offending hillslope and rule.
use std::path::PathBuf;

use thiserror::Error;

use crate::texture::RhemSoilTexture;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // -- Configuration --
    /// Version selector does not name a supported equation set.
    #[error("unsupported RHEM version {version:?} (supported: rhem2.4, rhem2.5)")]
    UnsupportedVersion { version: String },

    // -- Mapping --
    /// Raw soil-texture label has no row in the texture-group table.
    #[error("soil texture {label:?} has no entry in the texture mapping table")]
    UnmappedTexture { label: String },

    /// A texture string is not one of the 12 canonical RHEM classes.
    #[error("{label:?} is not a recognized RHEM soil texture class")]
    UnknownTextureClass { label: String },

    // -- Lookup --
    /// Canonical texture class missing from the particle catalog.
    #[error("soil texture '{texture}' not found in particle lookup table")]
    MissingParticleEntry { texture: RhemSoilTexture },

    // -- Domain --
    /// Total foliar cover is zero where the Ke model divides by it.
    #[error("total foliar cover is 0, infiltration coefficient is undefined")]
    ZeroFoliarCover,

    /// Friction term must be positive before the Chezy square root.
    #[error("friction term {ft} is not positive, Chezy coefficient is undefined")]
    NonPositiveFriction { ft: f64 },

    /// An input value failed record validation.
    #[error("{field} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// An input value is NaN or infinite.
    #[error("{field} is not a finite number")]
    NotFinite { field: &'static str },

    // -- Context wrapper --
    /// Attaches the failing hillslope to a per-record error.
    #[error("hillslope {hillslope}: {source}")]
    Hillslope {
        hillslope: String,
        #[source]
        source: Box<Error>,
    },

    // -- I/O and parsing --
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl Error {
    /// Wrap a per-record error with the hillslope it occurred on.
    pub fn for_hillslope(self, hillslope: &str) -> Self {
        Error::Hillslope {
            hillslope: hillslope.to_string(),
            source: Box::new(self),
        }
    }
}
