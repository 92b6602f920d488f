use std::io::Write;
use tabled::{Table, Tabled};
use varscope_runtime::NamingOutcome;

#[derive(Tabled)]
struct MissedRow {
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Call")]
    call: String,
}

#[derive(Tabled)]
struct MissingParameterRow {
    #[tabled(rename = "Count")]
    count: usize,
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Index")]
    index: usize,
    #[tabled(rename = "Type")]
    type_text: String,
}

#[derive(Tabled)]
struct FailureRow {
    #[tabled(rename = "Class")]
    class: String,
    #[tabled(rename = "Error")]
    error: String,
}

/// Print the pass summary, capping each diagnostics table at `limit` rows.
pub fn print_summary(
    outcome: &NamingOutcome,
    limit: usize,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let report = &outcome.report;
    writeln!(out, "Named classes: {}", report.named_classes)?;
    writeln!(out, "Failed classes: {}", report.failures.len())?;

    let missed = outcome.diagnostics.missed_suggestions();
    if !missed.is_empty() {
        writeln!(out, "\nUnmatched producing calls ({} distinct):", missed.len())?;
        let rows: Vec<MissedRow> = missed
            .into_iter()
            .take(limit)
            .map(|(event, count)| MissedRow {
                count,
                owner: event.owner,
                call: format!("{}{}", event.method_name, event.descriptor),
            })
            .collect();
        writeln!(out, "{}", Table::new(rows))?;
    }

    let missing = outcome.diagnostics.missing_parameter_mappings();
    if !missing.is_empty() {
        writeln!(out, "\nParameters without a declared name ({} distinct):", missing.len())?;
        let rows: Vec<MissingParameterRow> = missing
            .into_iter()
            .take(limit)
            .map(|(event, count)| MissingParameterRow {
                count,
                method: event.method.to_string(),
                index: event.parameter_index,
                type_text: event.type_text,
            })
            .collect();
        writeln!(out, "{}", Table::new(rows))?;
    }

    if !report.failures.is_empty() {
        writeln!(out, "\nFailures:")?;
        let rows: Vec<FailureRow> = report
            .failures
            .iter()
            .map(|f| FailureRow {
                class: f.class.clone(),
                error: f.error.clone(),
            })
            .collect();
        writeln!(out, "{}", Table::new(rows))?;
    }
    Ok(())
}
