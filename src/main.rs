/// rhem-param CLI.
///
/// End-to-end driver: read the hillslope observation CSV, resolve soil
/// textures, run the selected equation set, and write one `.par` file per
/// hillslope into a timestamped output directory.
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rhem_param::input::load_hillslopes;
use rhem_param::particles::SoilParticleCatalog;
use rhem_param::texture::TextureMap;
use rhem_param::writer::write_parameter_file;
use rhem_param::{ModelVersion, ParameterizationPipeline};

#[derive(Parser)]
#[command(name = "rhem-param")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate RHEM hillslope parameter files from cover observations")]
struct Cli {
    /// RHEM model version (rhem2.4 or rhem2.5)
    #[arg(short = 'm', long, default_value = "rhem2.4")]
    model_version: String,

    /// Hillslope observation CSV (cover and slope in percent)
    #[arg(short, long)]
    input: PathBuf,

    /// Soil texture group CSV (SoilTexture → RHEMSoilTexture)
    #[arg(long)]
    texture_table: PathBuf,

    /// Soil particle lookup CSV
    #[arg(long)]
    particle_table: PathBuf,

    /// Output directory (default: outputs_<timestamp>)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = Level::from_str(&cli.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let version = ModelVersion::from_str(&cli.model_version)?;

    info!("loading texture mapping from {}", cli.texture_table.display());
    let textures = TextureMap::from_csv_path(&cli.texture_table)?;
    info!("loading particle catalog from {}", cli.particle_table.display());
    let catalog = SoilParticleCatalog::from_csv_path(&cli.particle_table)?;
    info!("reading hillslope records from {}", cli.input.display());
    let records = load_hillslopes(&cli.input)?;
    info!("parameterizing {} hillslopes with {version}", records.len());

    let pipeline = ParameterizationPipeline::new(version, &textures, &catalog);
    let (primary, particles) = pipeline.parameterize(&records)?;

    let output_dir = cli.output_dir.unwrap_or_else(|| {
        PathBuf::from(format!("outputs_{}", Local::now().format("%Y%m%d_%H%M")))
    });
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating output directory {}", output_dir.display()))?;

    // Join the two collections by hillslope id, not by position.
    let particles_by_id: HashMap<&str, _> = particles
        .iter()
        .map(|p| (p.hillslope_id.as_str(), p))
        .collect();
    for p in &primary {
        let q = particles_by_id
            .get(p.hillslope_id.as_str())
            .with_context(|| format!("no particle parameters for hillslope {}", p.hillslope_id))?;
        let path = output_dir.join(format!("{}.par", p.hillslope_id));
        info!("writing parameter file for plot {}", p.hillslope_id);
        write_parameter_file(&path, version, p, q)?;
    }

    info!("wrote {} parameter files to {}", primary.len(), output_dir.display());
    Ok(())
}
