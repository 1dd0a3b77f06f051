//! Shared calculation pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! input -> probability -> pairing terms -> outcome distribution
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).
//! The pipeline is a pure, synchronous function: front-ends re-run it on every
//! input change, which is safe because it is O(1) and side-effect-free.

use crate::domain::{CalcConfig, CarrierInput, OutcomeDistribution, PairingDistribution};
use crate::math::{outcome_distribution, pairing_distribution};

/// All computed outputs of a single calculation.
#[derive(Debug, Clone)]
pub struct CalcOutput {
    pub input: CarrierInput,
    pub p: f64,
    pub q: f64,
    pub pairing: PairingDistribution,
    pub outcomes: OutcomeDistribution,
}

/// Execute the full calculation for a single carrier input.
///
/// Total: never fails. Out-of-domain probabilities (from lenient fraction
/// evaluation) flow through and surface as NaN/Infinity in the output.
pub fn run_calc(input: CarrierInput) -> CalcOutput {
    let p = input.probability();
    let q = 1.0 - p;
    let pairing = pairing_distribution(p);
    let outcomes = outcome_distribution(p);

    CalcOutput {
        input,
        p,
        q,
        pairing,
        outcomes,
    }
}

/// Execute the calculation for the active input of a `CalcConfig`.
///
/// This is the interactive path: fraction text is evaluated leniently so the
/// UI can display NaN results rather than rejecting the keystroke.
pub fn run_calc_config(config: &CalcConfig) -> CalcOutput {
    run_calc(config.carrier_input())
}
