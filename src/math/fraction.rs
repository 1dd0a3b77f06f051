//! Simplest-fraction approximation of a decimal.
//!
//! Probabilities like `0.015625` are much easier to teach as `1/64`, so every
//! displayed value is accompanied by the smallest-denominator fraction that
//! matches it within a relative tolerance.
//!
//! The algorithm is the standard continued-fraction expansion: repeatedly split
//! off the integer part, recurse on the reciprocal of the remainder, and track
//! the convergents `h/k`. For a finite-precision float the expansion always
//! terminates, but we still cap the iteration count so that pathological inputs
//! (e.g., subnormals where `d * tolerance` underflows to 0) cannot spin.

/// Relative tolerance for accepting a convergent.
const TOLERANCE: f64 = 1.0e-6;

/// Hard cap on expansion steps. Doubles have ~15-17 significant digits, so any
/// representable input converges in far fewer steps than this.
const MAX_ITERS: usize = 100;

/// Approximate a decimal with the simplest fraction within tolerance.
///
/// Returns `"0"` for exactly 0 and `"1"` for exactly 1; otherwise the reduced
/// fraction `"h/k"` with the smallest denominator satisfying
/// `|d - h/k| <= d * 1e-6`. The convergents of a continued-fraction expansion
/// are automatically in lowest terms, so no explicit gcd reduction is needed.
///
/// Inputs outside [0,1] are not produced by the calculator, but the expansion
/// itself is correct for any finite non-negative real.
pub fn decimal_to_fraction(d: f64) -> String {
    if d == 0.0 {
        return "0".to_string();
    }
    if d == 1.0 {
        return "1".to_string();
    }

    // Convergent state: `h/k` is the current convergent, `h_prev/k_prev` the
    // previous one. Kept as f64 on purpose: the values are exact integers until
    // they exceed 2^53, and by then the tolerance check has long since passed.
    let (mut h, mut h_prev) = (1.0_f64, 0.0_f64);
    let (mut k, mut k_prev) = (0.0_f64, 1.0_f64);
    let mut b = d;

    for _ in 0..MAX_ITERS {
        let a = b.floor();

        let next_h = a * h + h_prev;
        h_prev = h;
        h = next_h;

        let next_k = a * k + k_prev;
        k_prev = k;
        k = next_k;

        if (d - h / k).abs() <= d * TOLERANCE {
            break;
        }

        // An exact integer remainder means `h/k` already equals `d`; taking the
        // reciprocal would divide by zero.
        let rem = b - a;
        if rem == 0.0 {
            break;
        }
        b = 1.0 / rem;
    }

    format!("{h}/{k}")
}
