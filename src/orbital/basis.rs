//! Primitive 1s functions and contracted basis sets.
//!
//! Contractions are `ψ(r) = Σ cᵢ · g(r, αᵢ)` with normalized Gaussian
//! primitives `g`. 6-31G is the sum of its 3-primitive core shell and its
//! single-primitive valence shell.

use std::f64::consts::PI;

use crate::domain::BasisSet;

/// One contraction: `(exponent α, coefficient c)` pairs.
pub type Contraction = &'static [(f64, f64)];

const STO_1G: Contraction = &[(0.270950, 1.0)];

const STO_2G: Contraction = &[(0.151623, 0.678914), (0.851819, 0.430129)];

const STO_3G: Contraction = &[
    (2.22766, 0.154329),
    (0.405771, 0.535328),
    (0.109818, 0.444635),
];

const G631_CORE: Contraction = &[
    (18.73113696, 0.03349460434),
    (2.825394365, 0.2347269535),
    (0.6401216923, 0.8137573261),
];

const G631_VALENCE: Contraction = &[(0.1612777588, 1.0)];

/// Slater exponent used for the reference orbital.
pub const SLATER_ZETA: f64 = 1.0;

/// Normalized Slater-type 1s orbital: `√(ζ³/π) · e^(-ζr)`.
pub fn slater_1s(r: f64, zeta: f64) -> f64 {
    (zeta.powi(3) / PI).sqrt() * (-zeta * r).exp()
}

/// Normalized Gaussian 1s primitive: `(2α/π)^(3/4) · e^(-αr²)`.
pub fn gto_1s(r: f64, alpha: f64) -> f64 {
    (2.0 * alpha / PI).powf(0.75) * (-alpha * r * r).exp()
}

/// Evaluate one contraction at `r`.
pub fn contracted(r: f64, contraction: Contraction) -> f64 {
    contraction
        .iter()
        .map(|&(alpha, coeff)| coeff * gto_1s(r, alpha))
        .sum()
}

/// The contractions making up a Gaussian basis set (empty for Slater).
pub fn contractions(basis: BasisSet) -> &'static [Contraction] {
    match basis {
        BasisSet::Slater => &[],
        BasisSet::Sto1g => &[STO_1G],
        BasisSet::Sto2g => &[STO_2G],
        BasisSet::Sto3g => &[STO_3G],
        BasisSet::G631 => &[G631_CORE, G631_VALENCE],
    }
}

/// Unnormalized `ψ(r)` for a basis set.
pub fn wavefunction(basis: BasisSet, r: f64) -> f64 {
    match basis {
        BasisSet::Slater => slater_1s(r, SLATER_ZETA),
        _ => contractions(basis).iter().map(|&c| contracted(r, c)).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slater_value_at_origin() {
        assert!((slater_1s(0.0, 1.0) - (1.0 / PI).sqrt()).abs() < 1e-15);
        assert!((slater_1s(1.0, 2.0) - (8.0 / PI).sqrt() * (-2.0f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn gto_decays_faster_than_slater() {
        let far = 6.0;
        assert!(gto_1s(far, 0.270950) < slater_1s(far, 1.0));
    }

    #[test]
    fn sto_ng_approaches_slater_with_more_primitives() {
        let r = 1.0;
        let exact = slater_1s(r, SLATER_ZETA);
        let e1 = (wavefunction(BasisSet::Sto1g, r) - exact).abs();
        let e3 = (wavefunction(BasisSet::Sto3g, r) - exact).abs();
        assert!(e3 < e1, "STO-3G error {e3} should beat STO-1G error {e1}");
    }

    #[test]
    fn g631_sums_core_and_valence() {
        let r = 0.7;
        let expected = contracted(r, G631_CORE) + contracted(r, G631_VALENCE);
        assert_eq!(wavefunction(BasisSet::G631, r), expected);
        assert_eq!(contractions(BasisSet::G631).len(), 2);
        assert!(contractions(BasisSet::Slater).is_empty());
    }
}
