// ─────────────────────────────────────────────────────────────────────────────
// LMS (Box-Cox) transform
// ─────────────────────────────────────────────────────────────────────────────
//
// For a measurement X with age-specific parameters (L, M, S):
//
//   L ≠ 0 :  Z = ((X/M)^L - 1) / (L·S)        X = M·(1 + L·S·Z)^(1/L)
//   L = 0 :  Z = ln(X/M) / S                  X = M·e^(S·Z)
//
// The two functions below are exact inverses of each other.

/// Z-score of `value` against the distribution described by `l`, `m`, `s`.
///
/// `value` must be positive; zero or negative measurements give `-inf`,
/// `NaN` or an extreme result.
pub fn calculate_z_score(value: f64, l: f64, m: f64, s: f64) -> f64 {
    if l == 0.0 {
        (value / m).ln() / s
    } else {
        ((value / m).powf(l) - 1.0) / (l * s)
    }
}

/// Measurement lying at Z-score `z` of the distribution described by `l`,
/// `m`, `s`.
pub fn inverse_lms(l: f64, m: f64, s: f64, z: f64) -> f64 {
    if l == 0.0 {
        m * (s * z).exp()
    } else {
        m * (1.0 + l * s * z).powf(1.0 / l)
    }
}
