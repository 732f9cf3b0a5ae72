/// rhem-param — RHEM hillslope parameterization in Rust.
///
/// Turns field-measured ground/foliar cover fractions and soil-texture
/// classes into the parameter set consumed by the RHEM hillslope erosion
/// simulator, and renders one fixed-format `.par` file per hillslope.
/// Equation sets v2.4 and v2.5 are implemented from the published RHEM
/// Ke/Kss equation documents; only the infiltration model differs between
/// the two versions.
pub mod equations;
pub mod error;
pub mod input;
pub mod particles;
pub mod pipeline;
pub mod record;
pub mod texture;
pub mod writer;

pub use equations::ModelVersion;
pub use error::{Error, Result};
pub use pipeline::ParameterizationPipeline;
