//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can
//! be:
//!
//! - used in-memory during calculation
//! - exported to JSON
//! - reloaded later for comparisons

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Which input representation feeds the carrier probability `p`.
///
/// The two modes keep **independent** state: switching modes does not convert
/// the other mode's stored value, so toggling can change `p`. This mirrors the
/// original calculator's observable behavior and is preserved on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    Percentage,
    Fraction,
}

impl InputMode {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            InputMode::Percentage => "percentage",
            InputMode::Fraction => "fraction",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InputMode::Percentage => InputMode::Fraction,
            InputMode::Fraction => InputMode::Percentage,
        }
    }
}

/// A validated numerator/denominator pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractionInput {
    pub numerator: f64,
    pub denominator: f64,
}

impl FractionInput {
    /// Strictly parse `"numerator/denominator"` text.
    ///
    /// Used by the CLI, where a malformed fraction should fail loudly instead
    /// of flowing through the math as NaN.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let Some((num, den)) = text.split_once('/') else {
            return Err(AppError::invalid_input(format!(
                "Invalid fraction '{text}': expected 'numerator/denominator' (e.g. 1/4)."
            )));
        };

        let numerator: f64 = num.trim().parse().map_err(|_| {
            AppError::invalid_input(format!("Invalid fraction numerator '{}'.", num.trim()))
        })?;
        let denominator: f64 = den.trim().parse().map_err(|_| {
            AppError::invalid_input(format!("Invalid fraction denominator '{}'.", den.trim()))
        })?;

        if denominator == 0.0 {
            return Err(AppError::invalid_input(format!(
                "Invalid fraction '{text}': denominator must be non-zero."
            )));
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn value(&self) -> f64 {
        self.numerator / self.denominator
    }
}

/// Leniently evaluate fraction text to a probability.
///
/// This preserves the original calculator's behavior for the interactive path:
/// malformed text produces NaN (or Infinity for a zero denominator), which then
/// propagates through the outcome math and is displayed as-is (`NaN%`). No
/// error is raised.
pub fn eval_fraction_lenient(text: &str) -> f64 {
    let mut parts = text.splitn(3, '/');
    let numerator = coerce_number(parts.next());
    let denominator = coerce_number(parts.next());
    numerator / denominator
}

fn coerce_number(part: Option<&str>) -> f64 {
    match part {
        // Missing side (no '/' at all): NaN, never a silent default.
        None => f64::NAN,
        Some(s) => {
            let t = s.trim();
            // An empty side coerces to 0, so "1/" divides by zero. Same
            // behavior as the original input handling.
            if t.is_empty() {
                0.0
            } else {
                t.parse().unwrap_or(f64::NAN)
            }
        }
    }
}

/// The active carrier-probability input.
#[derive(Debug, Clone, PartialEq)]
pub enum CarrierInput {
    /// Integer-percentage slider value in [0, 100].
    Percentage(f64),
    /// Numerator/denominator pair. The pair is *not* validated here; a zero
    /// denominator evaluates to Infinity per the no-validation policy.
    Fraction(FractionInput),
    /// Fraction-mode text that does not strictly parse. The raw text is kept
    /// so the UI can echo it as typed while the lenient value (NaN/Infinity)
    /// propagates through the math.
    MalformedFraction { text: String, value: f64 },
}

impl CarrierInput {
    /// The carrier probability `p` this input denotes.
    pub fn probability(&self) -> f64 {
        match self {
            CarrierInput::Percentage(v) => v / 100.0,
            CarrierInput::Fraction(f) => f.value(),
            CarrierInput::MalformedFraction { value, .. } => *value,
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            CarrierInput::Percentage(_) => InputMode::Percentage,
            CarrierInput::Fraction(_) | CarrierInput::MalformedFraction { .. } => {
                InputMode::Fraction
            }
        }
    }
}

/// Probability split over parent pairings (Hardy-Weinberg terms).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairingDistribution {
    /// p² — both parents are carriers.
    pub both_carriers: f64,
    /// 2pq — exactly one parent is a carrier.
    pub one_carrier: f64,
    /// q² — neither parent is a carrier.
    pub neither_carrier: f64,
}

/// Child genotype-outcome distribution.
///
/// For `p` in [0,1] each field lies in [0,1] and the three sum to 1 within
/// floating-point tolerance. Always recomputed fresh from the current input,
/// never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeDistribution {
    /// Homozygous normal, no recessive allele.
    pub normal: f64,
    /// Heterozygous carrier, phenotypically unaffected.
    pub carrier: f64,
    /// Homozygous recessive, affected.
    pub affected: f64,
}

/// Interactive/CLI calculator configuration.
///
/// Both input values are stored simultaneously; `mode` selects which one is
/// live (see `InputMode` for why the inactive value is kept untouched).
#[derive(Debug, Clone)]
pub struct CalcConfig {
    pub mode: InputMode,
    /// Percentage-mode value (bounded range control, 0..=100).
    pub percent: u32,
    /// Fraction-mode raw text; may be malformed.
    pub fraction_text: String,
}

impl CalcConfig {
    /// The active input under the lenient evaluation rules.
    pub fn carrier_input(&self) -> CarrierInput {
        match self.mode {
            InputMode::Percentage => CarrierInput::Percentage(self.percent as f64),
            // A well-formed pair is kept as-is for faithful echoing in
            // reports. Malformed text still evaluates leniently so
            // NaN/Infinity propagate instead of erroring, and the raw text
            // rides along for display.
            InputMode::Fraction => match FractionInput::parse(&self.fraction_text) {
                Ok(f) => CarrierInput::Fraction(f),
                Err(_) => CarrierInput::MalformedFraction {
                    text: self.fraction_text.clone(),
                    value: eval_fraction_lenient(&self.fraction_text),
                },
            },
        }
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        // Matches the original calculator's initial state.
        Self {
            mode: InputMode::Percentage,
            percent: 25,
            fraction_text: "1/4".to_string(),
        }
    }
}

/// A saved report file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    pub tool: String,
    pub mode: InputMode,
    /// Echo of the raw input ("25%" or the fraction text).
    pub input: String,
    pub p: f64,
    pub q: f64,
    pub pairing: PairingDistribution,
    pub outcomes: OutcomeDistribution,
    /// Display fractions for every value above, keyed for readability.
    pub fractions: ReportFractions,
}

/// Reduced-fraction renditions of the report values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFractions {
    pub p: String,
    pub q: String,
    pub both_carriers: String,
    pub one_carrier: String,
    pub neither_carrier: String,
    pub normal: String,
    pub carrier: String,
    pub affected: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_parse_accepts_valid_fractions() {
        let f = FractionInput::parse("1/4").unwrap();
        assert_eq!(f.numerator, 1.0);
        assert_eq!(f.denominator, 4.0);
        assert_eq!(f.value(), 0.25);

        let f = FractionInput::parse(" 3 / 8 ").unwrap();
        assert_eq!(f.value(), 0.375);
    }

    #[test]
    fn strict_parse_rejects_malformed_text() {
        assert!(FractionInput::parse("3").is_err());
        assert!(FractionInput::parse("a/b").is_err());
        assert!(FractionInput::parse("1/0").is_err());
        assert!(FractionInput::parse("").is_err());
    }

    #[test]
    fn lenient_eval_propagates_sentinels() {
        assert_eq!(eval_fraction_lenient("1/4"), 0.25);
        assert!(eval_fraction_lenient("abc").is_nan());
        assert!(eval_fraction_lenient("a/b").is_nan());
        // Zero denominator divides through to Infinity, not an error.
        assert_eq!(eval_fraction_lenient("1/0"), f64::INFINITY);
        // An empty side coerces to 0.
        assert!(eval_fraction_lenient("/").is_nan()); // 0/0
        assert_eq!(eval_fraction_lenient("1/"), f64::INFINITY);
    }

    #[test]
    fn probability_derivation_per_mode() {
        assert_eq!(CarrierInput::Percentage(25.0).probability(), 0.25);
        let f = CarrierInput::Fraction(FractionInput {
            numerator: 1.0,
            denominator: 4.0,
        });
        assert_eq!(f.probability(), 0.25);
    }

    #[test]
    fn config_modes_keep_independent_state() {
        // Toggling modes must not cross-derive values: percent stays 25 even
        // when the fraction says 1/2, and vice versa.
        let mut config = CalcConfig {
            mode: InputMode::Percentage,
            percent: 25,
            fraction_text: "1/2".to_string(),
        };
        assert_eq!(config.carrier_input().probability(), 0.25);

        config.mode = InputMode::Fraction;
        assert_eq!(config.carrier_input().probability(), 0.5);

        config.mode = InputMode::Percentage;
        assert_eq!(config.carrier_input().probability(), 0.25);
    }

    #[test]
    fn config_lenient_fraction_keeps_nan() {
        let config = CalcConfig {
            mode: InputMode::Fraction,
            percent: 25,
            fraction_text: "oops".to_string(),
        };
        assert!(config.carrier_input().probability().is_nan());
    }

    #[test]
    fn malformed_fraction_keeps_raw_text() {
        let config = CalcConfig {
            mode: InputMode::Fraction,
            percent: 25,
            fraction_text: "1/oops".to_string(),
        };
        match config.carrier_input() {
            CarrierInput::MalformedFraction { text, value } => {
                assert_eq!(text, "1/oops");
                assert!(value.is_nan());
            }
            other => panic!("expected malformed fraction, got {other:?}"),
        }
    }
}
