//! Punnett-square outcome probabilities for autosomal-recessive inheritance.
//!
//! Both parents are assumed to be drawn independently from a population where
//! each is a carrier with probability `p`. A carrier x carrier pairing yields
//! the classic 1/4 affected, 1/2 carrier, 1/4 normal split; a carrier x
//! non-carrier pairing yields 1/2 carrier.
//!
//! The formula order below is deliberate and must not be rearranged or
//! renormalized: displayed values (and the golden tests) depend on the exact
//! double-precision rounding it produces.

use crate::domain::{OutcomeDistribution, PairingDistribution};

/// Probability split over parent pairings for carrier probability `p`.
pub fn pairing_distribution(p: f64) -> PairingDistribution {
    let q = 1.0 - p;
    PairingDistribution {
        both_carriers: p * p,
        one_carrier: 2.0 * p * q,
        neither_carrier: q * q,
    }
}

/// Child genotype-outcome distribution for carrier probability `p`.
///
/// Total over all finite inputs: `p` outside [0,1] (from malformed fraction
/// text) flows through untouched and may produce out-of-range or NaN outputs.
/// That mirrors the behavior users see in the equation panel, where the bad
/// input itself is visible.
pub fn outcome_distribution(p: f64) -> OutcomeDistribution {
    let q = 1.0 - p;

    let both_carriers = p * p;
    let one_carrier = 2.0 * p * q;

    let affected = both_carriers * 0.25;
    let carrier = both_carriers * 0.5 + one_carrier * 0.5;
    let normal = 1.0 - affected - carrier;

    OutcomeDistribution {
        normal,
        carrier,
        affected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_carriers_means_all_normal() {
        let o = outcome_distribution(0.0);
        assert_eq!(o.normal, 1.0);
        assert_eq!(o.carrier, 0.0);
        assert_eq!(o.affected, 0.0);
    }

    #[test]
    fn certain_carriers() {
        // p = 1: both parents are carriers, so the child is a pure
        // carrier x carrier Punnett square.
        let o = outcome_distribution(1.0);
        assert_eq!(o.normal, 0.25);
        assert_eq!(o.carrier, 0.5);
        assert_eq!(o.affected, 0.25);
    }

    #[test]
    fn half_carriers_worked_example() {
        // p = 0.5: p^2 = 0.25, 2pq = 0.5
        // affected = 0.25 * 1/4 = 0.0625
        // carrier  = 0.25 * 1/2 + 0.5 * 1/2 = 0.25
        // normal   = 1 - 0.0625 - 0.25 = 0.6875
        let o = outcome_distribution(0.5);
        assert_eq!(o.affected, 0.0625);
        assert_eq!(o.carrier, 0.25);
        assert_eq!(o.normal, 0.6875);
    }

    #[test]
    fn outcomes_sum_to_one_across_domain() {
        for i in 0..=1000 {
            let p = i as f64 / 1000.0;
            let o = outcome_distribution(p);
            let sum = o.normal + o.carrier + o.affected;
            assert!((sum - 1.0).abs() < 1e-9, "sum at p={p} was {sum}");
            assert!(o.normal >= 0.0 && o.normal <= 1.0);
            assert!(o.carrier >= 0.0 && o.carrier <= 1.0);
            assert!(o.affected >= 0.0 && o.affected <= 1.0);
        }
    }

    #[test]
    fn pairing_matches_hardy_weinberg_terms() {
        let d = pairing_distribution(0.25);
        assert_eq!(d.both_carriers, 0.0625);
        assert_eq!(d.one_carrier, 0.375);
        assert_eq!(d.neither_carrier, 0.5625);
        assert!((d.both_carriers + d.one_carrier + d.neither_carrier - 1.0).abs() < 1e-12);
    }

    #[test]
    fn out_of_domain_inputs_stay_finite() {
        // No validation by design: slightly out-of-range p must not panic and
        // must return finite numbers.
        for p in [-0.1, 1.1] {
            let o = outcome_distribution(p);
            assert!(o.normal.is_finite());
            assert!(o.carrier.is_finite());
            assert!(o.affected.is_finite());
        }
    }

    #[test]
    fn nan_propagates() {
        let o = outcome_distribution(f64::NAN);
        assert!(o.normal.is_nan());
        assert!(o.carrier.is_nan());
        assert!(o.affected.is_nan());
    }
}
