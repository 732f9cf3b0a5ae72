/// Fixed-format `.par` parameter-file writer.
///
/// Renders one file per hillslope: a file-info header (version, creation
/// time, plot id), a GLOBAL block with the particle-class diameters and
/// densities (identical across the supported versions), and one PLANE
/// block carrying the primary and particle parameters at the simulator's
/// expected decimal precisions. Field order and formatting are part of
/// the simulator's input contract — do not reorder.
use std::fmt::Write as _;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::equations::ModelVersion;
use crate::error::{Error, Result};
use crate::pipeline::{ParticleParameters, PrimaryParameters};

/// Characteristic length for the GLOBAL block [m].
const CLEN: f64 = 125.0;

/// Global particle-class diameters [mm], in reporting order.
const GLOBAL_DIAMETERS: [f64; 5] = [0.002, 0.01, 0.03, 0.3, 0.2];

/// Global particle-class densities [g/cc], in reporting order.
const GLOBAL_DENSITIES: [f64; 5] = [2.6, 2.65, 1.8, 1.6, 2.65];

fn five_values(values: &[f64; 5], precision: usize) -> String {
    values
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a complete parameter file as a string.
pub fn render_parameter_file(
    version: ModelVersion,
    created: NaiveDateTime,
    primary: &PrimaryParameters,
    particles: &ParticleParameters,
) -> String {
    let mut out = String::new();

    // File info header.
    let _ = writeln!(out, "! Parameter file for scenario:");
    let _ = writeln!(out, "!  RHEM Version:                         {version}");
    let _ = writeln!(
        out,
        "!  File Created:                        {}",
        created.format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(
        out,
        "!  Plot ID:                              {}",
        primary.hillslope_id
    );
    let _ = writeln!(out, "! End of File Info");
    let _ = writeln!(out);

    // Global block.
    let _ = writeln!(out, "BEGIN GLOBAL");
    let _ = writeln!(out, "   CLEN = {CLEN:.1}");
    let _ = writeln!(out, "   UNITS = METRIC");
    let _ = writeln!(out, "   DIAMS   =   {} ! mm", five_values(&GLOBAL_DIAMETERS, 6));
    let _ = writeln!(out, "   DENSITY =   {} ! g/cc", five_values(&GLOBAL_DENSITIES, 6));
    let _ = writeln!(out, "   TEMP = 40                 ! deg C");
    let _ = writeln!(out, "   NELE = 1");
    let _ = writeln!(out, "END GLOBAL");
    let _ = writeln!(out);

    // Plane block.
    let d = &primary.defaults;
    let p = &particles.properties;
    let _ = writeln!(out, "BEGIN PLANE");
    let _ = writeln!(out, "  ID = 1");
    let _ = writeln!(out, "  LEN = {:.4}", primary.slope_length);
    let _ = writeln!(out, "  WIDTH = 1.0");
    let _ = writeln!(out, "  CHEZY = {:.16}", primary.chezy);
    let _ = writeln!(out, "  RCHEZY = {:.16}", primary.rchezy);
    let _ = writeln!(out, "  SL = {:.4}, {:.4}", primary.slope, primary.slope);
    let _ = writeln!(out, "  SX = 0.00000, 1.0000");
    let _ = writeln!(out, "  CV = 1.0");
    let _ = writeln!(out, "  SAT = 0.25");
    let _ = writeln!(out, "  PR = 1");
    let _ = writeln!(out, "  KSS = {:.16}", primary.kss);
    let _ = writeln!(out, "  KOMEGA = {:.9}", d.komega);
    let _ = writeln!(out, "  KCM = {:.10}", d.kcmax);
    let _ = writeln!(out, "  CA = 1.0");
    let _ = writeln!(out, "  IN = 0.0");
    let _ = writeln!(out, "  KE = {:.16}", primary.ke);
    let _ = writeln!(out, "  G = {:.4}", p.g);
    let _ = writeln!(out, "  DIST = {:.4}", p.dist);
    let _ = writeln!(out, "  POR = {:.4}", p.porosity);
    let _ = writeln!(out, "  ROCK = {:.4}", particles.ground_rock);
    let _ = writeln!(out, "  SMAX = {:.4}", p.smax);
    let _ = writeln!(out, "  ADF = {:.1}", d.adf);
    let _ = writeln!(out, "  ALF = {:.1}", d.alf);
    let _ = writeln!(out, "  BARE = {:.4}   ! INACTIVE", primary.bare);
    let _ = writeln!(out, "  RSP = {:.1}", d.rsp);
    let _ = writeln!(out, "  SPACING = {:.1}", d.spacing);
    let _ = writeln!(out, "  FRACT = {}", five_values(&p.fraction, 4));
    let _ = writeln!(out, "END PLANE");

    out
}

/// Write a hillslope's parameter file to disk, stamped with the current
/// local time.
pub fn write_parameter_file(
    path: &Path,
    version: ModelVersion,
    primary: &PrimaryParameters,
    particles: &ParticleParameters,
) -> Result<()> {
    let content = render_parameter_file(
        version,
        chrono::Local::now().naive_local(),
        primary,
        particles,
    );
    std::fs::write(path, content).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
