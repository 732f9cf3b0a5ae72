/// Numerical constants of the RHEM equation sets.
///
/// Centralises all fixed values shared by the v2.4 and v2.5 models.
/// Values are taken from the published RHEM Ke/Kss equation documents;
/// per-texture infiltration tables live with their version module.

// -- Default coefficients (version independent) --

pub const KOMEGA: f64 = 0.000007747;
pub const KCMAX: f64 = 0.000299364300;
pub const ALF: f64 = 0.8;
pub const ADF: f64 = 0.0;
pub const RSP: f64 = 1.0;
pub const SPACING: f64 = 1.0;

/// Fixed per-hillslope coefficients that do not depend on cover or texture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultCoefficients {
    pub komega: f64,
    pub adf: f64,
    pub alf: f64,
    pub kcmax: f64,
    pub rsp: f64,
    pub spacing: f64,
}

impl Default for DefaultCoefficients {
    fn default() -> Self {
        Self {
            komega: KOMEGA,
            adf: ADF,
            alf: ALF,
            kcmax: KCMAX,
            rsp: RSP,
            spacing: SPACING,
        }
    }
}

// -- Splash/sheet erodibility (Kss) --

/// Ground-cover fraction at which the Kss regression regime switches.
pub const KSS_GROUND_THRESHOLD: f64 = 0.475;

/// Combined unit/adjustment factor applied to every Kss term (1.3 × 2.0).
pub const KSS_SCALE: f64 = 2.6;

pub const KSS_SLOPE_COEFF: f64 = 2.5535;
pub const KSS_FOLIAR_COEFF: f64 = 0.7822;

/// Ground-cover coefficient below / at-or-above the regime threshold.
pub const KSS_GROUND_COEFF_LOW: f64 = 2.547;
pub const KSS_GROUND_COEFF_HIGH: f64 = 0.4811;

/// Regression intercepts per plant functional type, one set per regime.
#[derive(Debug, Clone, Copy)]
pub struct KssIntercepts {
    pub shrub: f64,
    pub sod: f64,
    pub bunch: f64,
    pub forb: f64,
}

/// Intercepts for ground cover below the threshold.
pub const KSS_INTERCEPTS_LOW: KssIntercepts = KssIntercepts {
    shrub: 4.2587,
    sod: 4.2169,
    bunch: 4.154,
    forb: 4.1106,
};

/// Intercepts for ground cover at or above the threshold. Chosen so the
/// two regimes agree exactly at the 0.475 crossover.
pub const KSS_INTERCEPTS_HIGH: KssIntercepts = KssIntercepts {
    shrub: 3.2773975,
    sod: 3.2355975,
    bunch: 3.1726975,
    forb: 3.1292975,
};

/// Total foliar cover below which Kss blends toward the zero-foliar form.
pub const KSS_FOLIAR_BLEND_LIMIT: f64 = 0.02;

// -- Friction term (Ft) and hydraulic roughness --

pub const FT_INTERCEPT: f64 = -0.109;
pub const FT_LITTER_COEFF: f64 = 1.425;
pub const FT_ROCK_COEFF: f64 = 0.442;
pub const FT_BASAL_CRUST_COEFF: f64 = 1.764;
pub const FT_SLOPE_COEFF: f64 = 2.068;

/// Gravitational acceleration [m/s²] in the Chezy relation.
pub const GRAVITY: f64 = 9.81;

// -- Infiltration (Ke) plant-functional-type scaling --

pub const KE_SHRUB_SCALE: f64 = 1.2;
pub const KE_SOD_SCALE: f64 = 0.8;
pub const KE_BUNCH_SCALE: f64 = 1.0;
pub const KE_FORB_SCALE: f64 = 1.0;

// -- v2.5 cover-term coefficients --

pub const KE25_GROUND_COEFF: f64 = 1.81;
pub const KE25_FOLIAR_COEFF: f64 = 1.059;
