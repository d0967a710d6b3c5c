//! Operator-facing rendering of probe results

use std::fmt;

use crate::probe::check::{Outcome, ProbeReport, ProbeResult};

/// Render a report as text lines, one block per result plus a summary line
pub fn render(report: &ProbeReport) -> Vec<String> {
    let mut lines: Vec<String> = report.results.iter().flat_map(render_result).collect();
    lines.push(format!(
        "{} passed, {} failed, {} skipped",
        report.count(Outcome::Pass),
        report.count(Outcome::Fail),
        report.count(Outcome::Skip)
    ));
    lines
}

fn render_result(result: &ProbeResult) -> Vec<String> {
    let head = format!("{} {}", result.outcome.as_str(), result.label);
    match result.outcome {
        Outcome::Pass => match &result.matched {
            Some(matched) => vec![format!("{head}: {matched}")],
            None => vec![head],
        },
        Outcome::Skip => vec![format!("{head}: gate not satisfied")],
        Outcome::Fail => {
            let expected = result
                .expected
                .as_ref()
                .map_or_else(|| "extension".to_string(), |p| p.to_string());
            std::iter::once(format!("{head}: expected {expected}; observed:"))
                .chain(result.observed.iter().map(|d| format!("  - {d}")))
                .collect()
        }
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render(self) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
