/// Shared RHEM process functions.
///
/// Pure functions implementing the equations common to the v2.4 and v2.5
/// model versions: splash/sheet erodibility (Kss), the friction term (Ft)
/// with its Chezy roughness, the unclamped bare fraction, and the
/// plant-functional-type weighting used by both infiltration models. All
/// cover inputs are fractions in [0, 1]; slope is a fraction.
use super::constants::{
    FT_BASAL_CRUST_COEFF, FT_INTERCEPT, FT_LITTER_COEFF, FT_ROCK_COEFF, FT_SLOPE_COEFF, GRAVITY,
    KE_BUNCH_SCALE, KE_FORB_SCALE, KE_SHRUB_SCALE, KE_SOD_SCALE, KSS_FOLIAR_BLEND_LIMIT,
    KSS_FOLIAR_COEFF, KSS_GROUND_COEFF_HIGH, KSS_GROUND_COEFF_LOW, KSS_GROUND_THRESHOLD,
    KSS_INTERCEPTS_HIGH, KSS_INTERCEPTS_LOW, KSS_SCALE, KSS_SLOPE_COEFF,
};
use crate::error::{Error, Result};

/// Splash/sheet erodibility Kss.
///
/// Two blending axes handle the regression's edge regions, evaluated in a
/// fixed order. First, when total foliar cover is in (0, 0.02) the
/// foliar-weighted average of the four plant-type values is linearly
/// interpolated with the zero-foliar reference (shrub intercept, no foliar
/// term) by `foliar / 0.02`, so Kss is continuous as foliar cover drops to
/// zero. Second, when ground cover is below 0.475 the result is
/// interpolated with the shrub-specific value by `ground / 0.475`. At
/// exactly zero foliar cover the reference form is used directly — no
/// division by zero.
pub fn erodibility(
    litter: f64,
    rock: f64,
    basal: f64,
    crust: f64,
    shrub: f64,
    sod: f64,
    bunch: f64,
    forb: f64,
    slope: f64,
) -> f64 {
    let foliar = shrub + sod + bunch + forb;
    let ground = litter + rock + basal + crust;

    let below = ground < KSS_GROUND_THRESHOLD;
    let k_ground = if below {
        KSS_GROUND_COEFF_LOW
    } else {
        KSS_GROUND_COEFF_HIGH
    };
    let intercepts = if below {
        KSS_INTERCEPTS_LOW
    } else {
        KSS_INTERCEPTS_HIGH
    };

    // Per-plant-type Kss with the full slope/ground/foliar term.
    let term = KSS_SLOPE_COEFF * slope - k_ground * ground - KSS_FOLIAR_COEFF * foliar;
    let kss_shrub = KSS_SCALE * 10f64.powf(intercepts.shrub + term);
    let kss_sod = KSS_SCALE * 10f64.powf(intercepts.sod + term);
    let kss_bunch = KSS_SCALE * 10f64.powf(intercepts.bunch + term);
    let kss_forb = KSS_SCALE * 10f64.powf(intercepts.forb + term);

    // Zero-foliar reference: shrub intercept, no foliar-cover subtraction.
    let reference_term = KSS_SLOPE_COEFF * slope - k_ground * ground;
    let kss_reference = KSS_SCALE * 10f64.powf(intercepts.shrub + reference_term);

    if foliar == 0.0 {
        return kss_reference;
    }

    // Foliar blend, computed before the ground blend.
    let weighted =
        (shrub * kss_shrub + sod * kss_sod + bunch * kss_bunch + forb * kss_forb) / foliar;
    let blended = if foliar < KSS_FOLIAR_BLEND_LIMIT {
        let w = foliar / KSS_FOLIAR_BLEND_LIMIT;
        w * weighted + (1.0 - w) * kss_reference
    } else {
        weighted
    };

    // Ground blend below the regime threshold.
    if below {
        let w = ground / KSS_GROUND_THRESHOLD;
        w * blended + (1.0 - w) * kss_shrub
    } else {
        blended
    }
}

/// Friction term Ft.
pub fn friction_term(litter: f64, rock: f64, basal: f64, crust: f64, slope: f64) -> f64 {
    10f64.powf(
        FT_INTERCEPT
            + FT_LITTER_COEFF * litter
            + FT_ROCK_COEFF * rock
            + FT_BASAL_CRUST_COEFF * (basal + crust)
            + FT_SLOPE_COEFF * slope,
    )
}

/// Chezy hydraulic roughness from the friction term.
///
/// Ft must be positive and finite for the square root to be defined.
pub fn chezy(ft: f64) -> Result<f64> {
    if !ft.is_finite() || ft <= 0.0 {
        return Err(Error::NonPositiveFriction { ft });
    }
    Ok((8.0 * GRAVITY / ft).sqrt())
}

/// Bare-ground fraction, unclamped.
///
/// May leave [0, 1] on malformed input; surfaced as-is, not corrected.
pub fn bare_fraction(litter: f64, rock: f64, basal: f64, crust: f64) -> f64 {
    1.0 - (litter + rock + basal + crust)
}

/// Foliar-cover weighting of a bare-soil infiltration coefficient.
///
/// Scales `keb` per plant functional type (shrub ×1.2, sod ×0.8, bunch and
/// forb ×1.0) and averages by foliar cover share. Fails when total foliar
/// cover is zero, where the average is undefined.
pub fn weight_by_foliar(keb: f64, shrub: f64, sod: f64, bunch: f64, forb: f64) -> Result<f64> {
    let total = shrub + sod + bunch + forb;
    if total == 0.0 {
        return Err(Error::ZeroFoliarCover);
    }
    Ok((keb * KE_SHRUB_SCALE * shrub
        + keb * KE_SOD_SCALE * sod
        + keb * KE_BUNCH_SCALE * bunch
        + keb * KE_FORB_SCALE * forb)
        / total)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: assert two f64 values are close (like pytest.approx).
    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    fn assert_rel_close(a: f64, b: f64, rel_tol: f64) {
        let rel = ((a - b) / b).abs();
        assert!(rel < rel_tol, "expected {b} within {rel_tol} rel, got {a} (rel {rel})");
    }

    // -- Bare fraction --

    #[test]
    fn bare_is_exact_complement_of_ground() {
        assert_approx(bare_fraction(0.2, 0.05, 0.1, 0.02), 1.0 - 0.37, 1e-12);
    }

    #[test]
    fn bare_is_not_clamped() {
        // Malformed ground sums above 1 surface as negative bare ground.
        assert!(bare_fraction(0.5, 0.4, 0.3, 0.2) < 0.0);
        assert_approx(bare_fraction(0.5, 0.4, 0.3, 0.2), -0.4, 1e-12);
        assert_approx(bare_fraction(0.0, 0.0, 0.0, 0.0), 1.0, 1e-12);
    }

    // -- Friction term and Chezy --

    #[test]
    fn friction_term_closed_form() {
        let ft = friction_term(0.2, 0.05, 0.1, 0.02, 0.05);
        let expected =
            10f64.powf(-0.109 + 1.425 * 0.2 + 0.442 * 0.05 + 1.764 * 0.12 + 2.068 * 0.05);
        assert_approx(ft, expected, 1e-12);
        assert!(ft > 0.0);
    }

    #[test]
    fn chezy_from_friction_term() {
        let c = chezy(2.0).unwrap();
        assert_approx(c, (8.0f64 * 9.81 / 2.0).sqrt(), 1e-12);
    }

    #[test]
    fn chezy_rejects_non_positive_friction() {
        assert!(matches!(
            chezy(0.0),
            Err(Error::NonPositiveFriction { .. })
        ));
        assert!(chezy(-1.0).is_err());
        assert!(chezy(f64::INFINITY).is_err());
    }

    // -- Foliar weighting --

    #[test]
    fn foliar_weighting_shrub_only() {
        // All foliar cover on shrub reduces to keb * 1.2.
        let ke = weight_by_foliar(10.0, 0.3, 0.0, 0.0, 0.0).unwrap();
        assert_approx(ke, 12.0, 1e-12);
    }

    #[test]
    fn foliar_weighting_mixed_cover() {
        let ke = weight_by_foliar(10.0, 0.1, 0.1, 0.1, 0.1).unwrap();
        // (1.2 + 0.8 + 1.0 + 1.0) / 4 = 1.0
        assert_approx(ke, 10.0, 1e-12);
    }

    #[test]
    fn foliar_weighting_rejects_zero_cover() {
        assert!(matches!(
            weight_by_foliar(10.0, 0.0, 0.0, 0.0, 0.0),
            Err(Error::ZeroFoliarCover)
        ));
    }

    // -- Kss: closed forms --

    #[test]
    fn kss_zero_foliar_closed_form_low_regime() {
        // ground = 0.37 < 0.475, foliar = 0
        let kss = erodibility(0.2, 0.05, 0.1, 0.02, 0.0, 0.0, 0.0, 0.0, 0.05);
        let expected = 2.6 * 10f64.powf(4.2587 + 2.5535 * 0.05 - 2.547 * 0.37);
        assert_approx(kss, expected, expected * 1e-12);
    }

    #[test]
    fn kss_zero_foliar_closed_form_high_regime() {
        // ground = 0.6 >= 0.475, foliar = 0
        let kss = erodibility(0.3, 0.1, 0.15, 0.05, 0.0, 0.0, 0.0, 0.0, 0.05);
        let expected = 2.6 * 10f64.powf(3.2773975 + 2.5535 * 0.05 - 0.4811 * 0.6);
        assert_approx(kss, expected, expected * 1e-12);
    }

    #[test]
    fn kss_shrub_only_high_regime_closed_form() {
        // ground = 0.6, foliar = 0.3 all shrub: plain weighted average,
        // no blending on either axis.
        let kss = erodibility(0.3, 0.1, 0.15, 0.05, 0.3, 0.0, 0.0, 0.0, 0.05);
        let expected =
            2.6 * 10f64.powf(3.2773975 + 2.5535 * 0.05 - 0.4811 * 0.6 - 0.7822 * 0.3);
        assert_approx(kss, expected, expected * 1e-12);
    }

    // -- Kss: continuity as foliar cover approaches zero --

    #[test]
    fn kss_converges_to_zero_foliar_form() {
        // Hold ground cover in the high regime so only the foliar blend acts.
        let kss_at = |shrub: f64| erodibility(0.3, 0.1, 0.15, 0.05, shrub, 0.0, 0.0, 0.0, 0.05);
        let kss0 = kss_at(0.0);

        let deltas: Vec<f64> = [0.019999, 0.01, 0.0001]
            .iter()
            .map(|&f| (kss_at(f) - kss0).abs())
            .collect();
        assert!(deltas[0] > deltas[1] && deltas[1] > deltas[2]);
        assert_rel_close(kss_at(0.0001), kss0, 1e-3);
    }

    #[test]
    fn kss_continuous_at_blend_limit() {
        let kss_at = |shrub: f64| erodibility(0.3, 0.1, 0.15, 0.05, shrub, 0.0, 0.0, 0.0, 0.05);
        assert_rel_close(kss_at(0.0199999), kss_at(0.02), 1e-4);
    }

    // -- Kss: continuity across the ground regime threshold --

    #[test]
    fn kss_continuous_at_ground_threshold() {
        // The two intercept sets agree exactly at ground = 0.475, so the
        // jump across the threshold reduces to the 2e-4 cover difference.
        let kss_at = |litter: f64| erodibility(litter, 0.1, 0.1, 0.05, 0.1, 0.05, 0.0, 0.0, 0.05);
        let below = kss_at(0.2249); // ground = 0.4749
        let above = kss_at(0.2251); // ground = 0.4751
        assert_rel_close(below, above, 5e-3);
    }
}
