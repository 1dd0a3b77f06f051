//! ASCII bar rendering for terminal output.
//!
//! This is intentionally "dumb" (fixed-width rows), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! The TUI renders a real pie chart; `punnett calc` gets these bars so the
//! distribution is visible without entering the interactive mode.

use crate::domain::OutcomeDistribution;
use crate::report::fmt_percent;

/// Render one horizontal bar per outcome, scaled to `width` columns.
///
/// Non-finite values (NaN/Infinity from lenient fraction input) render an
/// empty bar with the raw value still shown in the right-hand label.
pub fn render_outcome_bars(outcomes: &OutcomeDistribution, width: usize) -> String {
    let width = width.max(10);

    let rows = [
        ("Normal", outcomes.normal),
        ("Carrier", outcomes.carrier),
        ("Affected", outcomes.affected),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        let filled = if value.is_finite() {
            (value.clamp(0.0, 1.0) * width as f64).round() as usize
        } else {
            0
        };

        let mut bar = String::with_capacity(width);
        for i in 0..width {
            bar.push(if i < filled { '#' } else { ' ' });
        }

        out.push_str(&format!("{label:<8} |{bar}| {}\n", fmt_percent(value)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::outcome_distribution;

    #[test]
    fn bars_golden_snapshot_half_carrier() {
        let txt = render_outcome_bars(&outcome_distribution(0.5), 20);
        let expected = concat!(
            "Normal   |##############      | 68.75%\n",
            "Carrier  |#####               | 25.00%\n",
            "Affected |#                   | 6.25%\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn nan_renders_empty_bar() {
        let txt = render_outcome_bars(&outcome_distribution(f64::NAN), 10);
        for line in txt.lines() {
            assert!(line.contains("|          |"), "bad line: {line}");
            assert!(line.ends_with("NaN%"));
        }
    }
}
