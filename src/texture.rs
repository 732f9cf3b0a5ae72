/// RHEM soil texture taxonomy and the raw-label mapping table.
///
/// The simulator recognizes the 12 USDA texture classes below. Raw
/// soil-survey labels (free text) are normalized to a canonical class
/// through an externally supplied two-column table; the join is
/// case-insensitive and an unmapped label is a hard error, never a guess.
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Canonical RHEM soil texture class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RhemSoilTexture {
    Sand,
    LoamySand,
    SandyLoam,
    Loam,
    SiltLoam,
    Silt,
    SandyClayLoam,
    ClayLoam,
    SiltyClayLoam,
    SandyClay,
    SiltyClay,
    Clay,
}

/// All 12 classes, in conventional coarse-to-fine order.
pub const ALL_TEXTURES: [RhemSoilTexture; 12] = [
    RhemSoilTexture::Sand,
    RhemSoilTexture::LoamySand,
    RhemSoilTexture::SandyLoam,
    RhemSoilTexture::Loam,
    RhemSoilTexture::SiltLoam,
    RhemSoilTexture::Silt,
    RhemSoilTexture::SandyClayLoam,
    RhemSoilTexture::ClayLoam,
    RhemSoilTexture::SiltyClayLoam,
    RhemSoilTexture::SandyClay,
    RhemSoilTexture::SiltyClay,
    RhemSoilTexture::Clay,
];

impl RhemSoilTexture {
    /// Canonical lowercase name used in lookup tables and output.
    pub fn as_str(self) -> &'static str {
        match self {
            RhemSoilTexture::Sand => "sand",
            RhemSoilTexture::LoamySand => "loamy sand",
            RhemSoilTexture::SandyLoam => "sandy loam",
            RhemSoilTexture::Loam => "loam",
            RhemSoilTexture::SiltLoam => "silt loam",
            RhemSoilTexture::Silt => "silt",
            RhemSoilTexture::SandyClayLoam => "sandy clay loam",
            RhemSoilTexture::ClayLoam => "clay loam",
            RhemSoilTexture::SiltyClayLoam => "silty clay loam",
            RhemSoilTexture::SandyClay => "sandy clay",
            RhemSoilTexture::SiltyClay => "silty clay",
            RhemSoilTexture::Clay => "clay",
        }
    }
}

impl fmt::Display for RhemSoilTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RhemSoilTexture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        ALL_TEXTURES
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| Error::UnknownTextureClass {
                label: s.to_string(),
            })
    }
}

/// Row shape of the texture-group CSV (`SoilTexture, RHEMSoilTexture, ...`).
#[derive(Debug, Deserialize)]
struct TextureGroupRow {
    #[serde(rename = "SoilTexture")]
    soil_texture: String,
    #[serde(rename = "RHEMSoilTexture")]
    rhem_soil_texture: String,
}

/// Raw soil-texture label → canonical class mapping table.
///
/// Loaded once before processing and shared read-only across all records.
#[derive(Debug, Clone, Default)]
pub struct TextureMap {
    entries: HashMap<String, RhemSoilTexture>,
}

impl TextureMap {
    /// Build a map from `(raw label, canonical class)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for (raw, canonical) in pairs {
            let texture = RhemSoilTexture::from_str(canonical.as_ref())?;
            entries.insert(raw.as_ref().trim().to_lowercase(), texture);
        }
        Ok(Self { entries })
    }

    /// Load the mapping table from a texture-group CSV file.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut pairs = Vec::new();
        for row in reader.deserialize::<TextureGroupRow>() {
            let row = row.map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            pairs.push((row.soil_texture, row.rhem_soil_texture));
        }
        Self::from_pairs(pairs)
    }

    /// Resolve a raw label, case-insensitively.
    pub fn resolve(&self, raw_label: &str) -> Result<RhemSoilTexture> {
        self.entries
            .get(&raw_label.trim().to_lowercase())
            .copied()
            .ok_or_else(|| Error::UnmappedTexture {
                label: raw_label.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- RhemSoilTexture parsing --

    #[test]
    fn parses_all_canonical_names() {
        for texture in ALL_TEXTURES {
            let parsed = RhemSoilTexture::from_str(texture.as_str()).unwrap();
            assert_eq!(parsed, texture);
        }
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let parsed = RhemSoilTexture::from_str("Silty Clay Loam").unwrap();
        assert_eq!(parsed, RhemSoilTexture::SiltyClayLoam);
    }

    #[test]
    fn rejects_unknown_class() {
        let err = RhemSoilTexture::from_str("unknown_texture").unwrap_err();
        assert!(matches!(err, Error::UnknownTextureClass { .. }));
        assert!(err.to_string().contains("unknown_texture"));
    }

    // -- TextureMap --

    #[test]
    fn resolves_case_insensitively() {
        let map = TextureMap::from_pairs([("Fine Sandy Loam", "sandy loam")]).unwrap();
        assert_eq!(
            map.resolve("FINE SANDY LOAM").unwrap(),
            RhemSoilTexture::SandyLoam
        );
    }

    #[test]
    fn unmapped_label_is_an_error() {
        let map = TextureMap::from_pairs([("loam", "loam")]).unwrap();
        let err = map.resolve("volcanic ash").unwrap_err();
        assert!(matches!(err, Error::UnmappedTexture { .. }));
    }

    #[test]
    fn rejects_table_with_bad_canonical_class() {
        let result = TextureMap::from_pairs([("loam", "not a class")]);
        assert!(matches!(result, Err(Error::UnknownTextureClass { .. })));
    }
}
