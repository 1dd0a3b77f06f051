//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the math stays clean and testable
//! - output changes are localized (important for the golden tests below)
//!
//! Percentages are always rendered with two decimals; NaN from lenient
//! fraction input renders as `NaN%` rather than being suppressed.

use crate::app::pipeline::CalcOutput;
use crate::domain::{CarrierInput, OutcomeDistribution, ReportFile};
use crate::math::{decimal_to_fraction, outcome_distribution};

/// Render a probability as a two-decimal percentage.
pub fn fmt_percent(v: f64) -> String {
    format!("{:.2}%", v * 100.0)
}

/// Echo the raw input for headers and exports, e.g. `25% (p = 1/4)` or `1/4`.
pub fn input_echo(input: &CarrierInput) -> String {
    match input {
        CarrierInput::Percentage(v) => {
            format!("{v}% (p = {})", decimal_to_fraction(v / 100.0))
        }
        CarrierInput::Fraction(f) => format!("{}/{}", f.numerator, f.denominator),
        // Malformed text is echoed exactly as typed.
        CarrierInput::MalformedFraction { text, .. } => text.clone(),
    }
}

/// The fraction shown for `p` itself.
///
/// In fraction mode the user's own text is echoed back (even when malformed);
/// in percentage mode we derive the reduced fraction.
pub fn p_fraction_label(input: &CarrierInput) -> String {
    match input {
        CarrierInput::Percentage(v) => decimal_to_fraction(v / 100.0),
        CarrierInput::Fraction(f) => format!("{}/{}", f.numerator, f.denominator),
        CarrierInput::MalformedFraction { text, .. } => text.clone(),
    }
}

/// One line per outcome: percentage plus fraction approximation.
pub fn format_outcome_lines(out: &CalcOutput) -> Vec<String> {
    let o = &out.outcomes;
    outcome_lines(
        o,
        &decimal_to_fraction(o.normal),
        &decimal_to_fraction(o.carrier),
        &decimal_to_fraction(o.affected),
    )
}

fn outcome_lines(
    o: &OutcomeDistribution,
    normal_frac: &str,
    carrier_frac: &str,
    affected_frac: &str,
) -> Vec<String> {
    vec![
        format!("Normal:   {} = {normal_frac}", fmt_percent(o.normal)),
        format!("Carrier:  {} = {carrier_frac}", fmt_percent(o.carrier)),
        format!("Affected: {} = {affected_frac}", fmt_percent(o.affected)),
    ]
}

/// The six worked equation lines (plus the p/q definitions above them).
pub fn format_equation_lines(out: &CalcOutput) -> Vec<String> {
    equation_lines(
        &p_fraction_label(&out.input),
        &decimal_to_fraction(out.q),
        &decimal_to_fraction(out.pairing.both_carriers),
        &decimal_to_fraction(out.pairing.one_carrier),
        &decimal_to_fraction(out.pairing.neither_carrier),
        &decimal_to_fraction(out.outcomes.affected),
        &decimal_to_fraction(out.outcomes.carrier),
        &decimal_to_fraction(out.outcomes.normal),
    )
}

#[allow(clippy::too_many_arguments)]
fn equation_lines(
    p: &str,
    q: &str,
    both: &str,
    one: &str,
    neither: &str,
    affected: &str,
    carrier: &str,
    normal: &str,
) -> Vec<String> {
    vec![
        format!("p = probability of a parent being a carrier = {p}"),
        format!("q = probability of a parent not being a carrier = 1 - p = {q}"),
        format!("1. Probability of both parents being carriers: p² = {both}"),
        format!("2. Probability of only one parent being a carrier: 2pq = {one}"),
        format!("3. Probability of no parent being a carrier: q² = {neither}"),
        format!("4. Probability of an affected child: p² × 1/4 = {affected}"),
        format!("5. Probability of a carrier child: (p² × 1/2) + (2pq × 1/2) = {carrier}"),
        format!("6. Probability of a normal child: 1 - (affected + carrier) = {normal}"),
    ]
}

/// Format the full run summary (input echo + outcomes + worked equations).
pub fn format_run_summary(out: &CalcOutput) -> String {
    summary_text(
        out.input.mode().display_name(),
        &input_echo(&out.input),
        &format_outcome_lines(out),
        &format_equation_lines(out),
    )
}

/// Format a previously exported report, using its stored fraction strings.
///
/// Produces the same text as `format_run_summary` did when the report was
/// written, without recomputing anything.
pub fn format_report_summary(report: &ReportFile) -> String {
    let f = &report.fractions;
    summary_text(
        report.mode.display_name(),
        &report.input,
        &outcome_lines(&report.outcomes, &f.normal, &f.carrier, &f.affected),
        &equation_lines(
            &f.p,
            &f.q,
            &f.both_carriers,
            &f.one_carrier,
            &f.neither_carrier,
            &f.affected,
            &f.carrier,
            &f.normal,
        ),
    )
}

fn summary_text(mode: &str, echo: &str, outcomes: &[String], equations: &[String]) -> String {
    let mut text = String::new();

    text.push_str("=== punnett — Autosomal Recessive Genetic Calculator ===\n");
    text.push_str(&format!("Input: {mode} | {echo}\n"));

    text.push_str("\nOutcomes:\n");
    for line in outcomes {
        text.push_str(line);
        text.push('\n');
    }

    text.push_str("\nCalculations and equations (autosomal recessive):\n");
    for line in equations {
        text.push_str(line);
        text.push('\n');
    }

    text
}

/// Format an outcome table over an even grid of carrier probabilities.
pub fn format_sweep_table(steps: usize) -> String {
    let steps = steps.max(2);
    let mut text = String::new();

    text.push_str(&format!(
        "{:<12} {:>10} {:>10} {:>10}\n",
        "p", "normal", "carrier", "affected"
    ));
    text.push_str(&format!("{:-<12} {:-<10} {:-<10} {:-<10}\n", "", "", "", ""));

    for i in 0..steps {
        let p = i as f64 / (steps - 1) as f64;
        let o = outcome_distribution(p);
        text.push_str(&format!(
            "{:<12} {:>10} {:>10} {:>10}\n",
            decimal_to_fraction(p),
            fmt_percent(o.normal),
            fmt_percent(o.carrier),
            fmt_percent(o.affected),
        ));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_calc;
    use crate::domain::{CalcConfig, CarrierInput, FractionInput, InputMode};

    #[test]
    fn percent_formatting() {
        assert_eq!(fmt_percent(0.6875), "68.75%");
        assert_eq!(fmt_percent(0.0), "0.00%");
        assert_eq!(fmt_percent(1.0), "100.00%");
        assert_eq!(fmt_percent(f64::NAN), "NaN%");
    }

    #[test]
    fn equation_lines_for_quarter_carrier() {
        let out = run_calc(CarrierInput::Fraction(FractionInput {
            numerator: 1.0,
            denominator: 4.0,
        }));
        let lines = format_equation_lines(&out);
        assert_eq!(
            lines,
            vec![
                "p = probability of a parent being a carrier = 1/4",
                "q = probability of a parent not being a carrier = 1 - p = 3/4",
                "1. Probability of both parents being carriers: p² = 1/16",
                "2. Probability of only one parent being a carrier: 2pq = 3/8",
                "3. Probability of no parent being a carrier: q² = 9/16",
                "4. Probability of an affected child: p² × 1/4 = 1/64",
                "5. Probability of a carrier child: (p² × 1/2) + (2pq × 1/2) = 7/32",
                "6. Probability of a normal child: 1 - (affected + carrier) = 49/64",
            ]
        );
    }

    #[test]
    fn outcome_lines_for_quarter_carrier() {
        let out = run_calc(CarrierInput::Percentage(25.0));
        let lines = format_outcome_lines(&out);
        assert_eq!(lines[0], "Normal:   76.56% = 49/64");
        assert_eq!(lines[1], "Carrier:  21.88% = 7/32");
        assert_eq!(lines[2], "Affected: 1.56% = 1/64");
    }

    #[test]
    fn input_echo_per_mode() {
        assert_eq!(input_echo(&CarrierInput::Percentage(25.0)), "25% (p = 1/4)");
        assert_eq!(
            input_echo(&CarrierInput::Fraction(FractionInput {
                numerator: 1.0,
                denominator: 4.0,
            })),
            "1/4"
        );
    }

    #[test]
    fn malformed_fraction_is_echoed_as_typed() {
        let config = CalcConfig {
            mode: InputMode::Fraction,
            percent: 25,
            fraction_text: "1/oops".to_string(),
        };
        let out = run_calc(config.carrier_input());

        assert_eq!(p_fraction_label(&out.input), "1/oops");
        assert_eq!(input_echo(&out.input), "1/oops");
        let lines = format_equation_lines(&out);
        assert_eq!(
            lines[0],
            "p = probability of a parent being a carrier = 1/oops"
        );
    }

    #[test]
    fn sweep_table_shape() {
        let table = format_sweep_table(11);
        let lines: Vec<&str> = table.lines().collect();
        // header + separator + 11 rows
        assert_eq!(lines.len(), 13);
        assert!(lines[2].starts_with('0'));
        assert!(lines[12].starts_with('1'));
        assert!(lines[12].contains("25.00%"));
    }
}
