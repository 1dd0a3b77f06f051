//! Read/write report JSON files.
//!
//! Report JSON is the "portable" representation of a single calculation:
//! - the input (mode + echoed value)
//! - the derived probabilities (p, q, pairing terms, outcomes)
//! - the fraction rendition of every value
//!
//! The schema is defined by `domain::ReportFile`.

use std::fs::File;
use std::path::Path;

use crate::app::pipeline::CalcOutput;
use crate::domain::{ReportFile, ReportFractions};
use crate::error::AppError;
use crate::math::decimal_to_fraction;
use crate::report::{input_echo, p_fraction_label};

/// Build the export schema from a computed calculation.
pub fn build_report(out: &CalcOutput) -> ReportFile {
    ReportFile {
        tool: "punnett".to_string(),
        mode: out.input.mode(),
        input: input_echo(&out.input),
        p: out.p,
        q: out.q,
        pairing: out.pairing,
        outcomes: out.outcomes,
        fractions: ReportFractions {
            p: p_fraction_label(&out.input),
            q: decimal_to_fraction(out.q),
            both_carriers: decimal_to_fraction(out.pairing.both_carriers),
            one_carrier: decimal_to_fraction(out.pairing.one_carrier),
            neither_carrier: decimal_to_fraction(out.pairing.neither_carrier),
            normal: decimal_to_fraction(out.outcomes.normal),
            carrier: decimal_to_fraction(out.outcomes.carrier),
            affected: decimal_to_fraction(out.outcomes.affected),
        },
    }
}

/// Write a report JSON file.
pub fn write_report_json(path: &Path, out: &CalcOutput) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create report JSON '{}': {e}",
            path.display()
        ))
    })?;

    serde_json::to_writer_pretty(file, &build_report(out))
        .map_err(|e| AppError::io(format!("Failed to write report JSON: {e}")))?;

    Ok(())
}

/// Read a report JSON file.
pub fn read_report_json(path: &Path) -> Result<ReportFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!(
            "Failed to open report JSON '{}': {e}",
            path.display()
        ))
    })?;
    let report: ReportFile = serde_json::from_reader(file)
        .map_err(|e| AppError::io(format!("Invalid report JSON: {e}")))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_calc;
    use crate::domain::{CarrierInput, FractionInput, InputMode};

    #[test]
    fn report_schema_for_quarter_carrier() {
        let out = run_calc(CarrierInput::Fraction(FractionInput {
            numerator: 1.0,
            denominator: 4.0,
        }));
        let report = build_report(&out);

        assert_eq!(report.tool, "punnett");
        assert_eq!(report.mode, InputMode::Fraction);
        assert_eq!(report.input, "1/4");
        assert_eq!(report.p, 0.25);
        assert_eq!(report.fractions.q, "3/4");
        assert_eq!(report.fractions.affected, "1/64");
        assert_eq!(report.fractions.carrier, "7/32");
        assert_eq!(report.fractions.normal, "49/64");
    }

    #[test]
    fn written_report_reads_back_from_disk() {
        let out = run_calc(CarrierInput::Fraction(FractionInput {
            numerator: 1.0,
            denominator: 4.0,
        }));

        let path =
            std::env::temp_dir().join(format!("punnett-report-{}.json", std::process::id()));
        write_report_json(&path, &out).unwrap();
        let report = read_report_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(report.mode, InputMode::Fraction);
        assert_eq!(report.p, 0.25);
        assert_eq!(report.fractions.affected, "1/64");
    }

    #[test]
    fn saved_report_renders_like_the_live_run() {
        // `punnett show` must reproduce the `punnett calc` output of the run
        // that produced the report.
        let out = run_calc(CarrierInput::Percentage(25.0));
        let report = build_report(&out);
        assert_eq!(
            crate::report::format_report_summary(&report),
            crate::report::format_run_summary(&out)
        );
    }

    #[test]
    fn report_json_round_trips() {
        let out = run_calc(CarrierInput::Percentage(50.0));
        let report = build_report(&out);

        let json = serde_json::to_string(&report).unwrap();
        let back: ReportFile = serde_json::from_str(&json).unwrap();

        assert_eq!(back.mode, InputMode::Percentage);
        assert_eq!(back.p, 0.5);
        assert_eq!(back.outcomes.normal, report.outcomes.normal);
        assert_eq!(back.fractions.affected, "1/16");
    }
}
