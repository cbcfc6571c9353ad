//! Dirichlet-multinomial log-likelihoods with unit pseudo-counts.

use std::f64::consts::PI;

/// Lanczos g parameter matching the coefficient table below.
const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients (g = 7, n = 9).
const LANCZOS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Natural log of the gamma function, via the Lanczos approximation.
///
/// Accurate to well below 1e-10 over the argument range used here
/// (positive counts plus small pseudo-counts).
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection: Γ(x)Γ(1−x) = π / sin(πx).
        return (PI / (PI * x).sin()).ln() - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut acc = LANCZOS[0];
    for (i, coefficient) in LANCZOS.iter().enumerate().skip(1) {
        acc += coefficient / (x + i as f64);
    }
    let t = x + LANCZOS_G + 0.5;

    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + acc.ln()
}

/// Log-likelihood of category counts under a symmetric
/// Dirichlet-multinomial with concentration 1 per category.
///
/// This is the marginal log-probability of one particular draw sequence
/// with the given counts, `lnΓ(k) − lnΓ(n + k) + Σ lnΓ(x_i + 1)` for
/// `k` categories and `n` total draws (the `lnΓ(α_i)` terms vanish for
/// unit pseudo-counts).
pub fn log_likelihood(counts: &[u64]) -> f64 {
    let categories = counts.len() as f64;
    let draws: u64 = counts.iter().sum();

    ln_gamma(categories) - ln_gamma(draws as f64 + categories)
        + counts
            .iter()
            .map(|&count| ln_gamma(count as f64 + 1.0))
            .sum::<f64>()
}

#[cfg(test)]
mod test {
    use super::*;

    /// Absolute tolerance for float comparisons.
    const EPS: f64 = 1e-9;

    #[test]
    fn ln_gamma_of_small_integers() {
        // Γ(n) = (n-1)!
        assert!((ln_gamma(1.0)).abs() < EPS);
        assert!((ln_gamma(2.0)).abs() < EPS);
        assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < EPS);
        assert!((ln_gamma(11.0) - 3_628_800.0_f64.ln()).abs() < EPS);
    }

    #[test]
    fn ln_gamma_of_half() {
        // Γ(1/2) = √π.
        assert!((ln_gamma(0.5) - 0.5 * PI.ln()).abs() < EPS);
    }

    #[test]
    fn two_category_uniform_case() {
        // One head, one tail out of two draws under Beta(1,1):
        // lnΓ(2) − lnΓ(4) + lnΓ(2) + lnΓ(2) = −ln 6.
        assert!((log_likelihood(&[1, 1]) + 6.0_f64.ln()).abs() < EPS);
    }

    #[test]
    fn likelihood_is_symmetric_in_categories() {
        assert!((log_likelihood(&[3, 7]) - log_likelihood(&[7, 3])).abs() < EPS);
        assert!(
            (log_likelihood(&[1, 2, 3, 4]) - log_likelihood(&[4, 3, 2, 1])).abs() < EPS
        );
    }

    #[test]
    fn concentrated_counts_are_more_likely_than_split_ones() {
        // A Beta(1,1) prior favors a skewed partition over an even one.
        assert!(log_likelihood(&[10, 0]) > log_likelihood(&[5, 5]));
    }
}
