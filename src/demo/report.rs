use crate::demo::runner::ActivationReport;
use crate::error::Result;

const RULE: &str = "============================";

/// Human-readable report: one block per activation, one line per input.
pub fn render_text(reports: &[ActivationReport]) -> String {
    reports.iter().flat_map(block_lines).map(|line| line + "\n").collect()
}

/// The same reports as pretty-printed JSON.
pub fn render_json(reports: &[ActivationReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

fn block_lines(report: &ActivationReport) -> Vec<String> {
    let weights: Vec<String> = report.weights.iter().map(|w| format!("{w:.4}")).collect();
    let mut lines = vec![
        String::new(),
        RULE.to_string(),
        format!("Activation: {}", report.activation),
        RULE.to_string(),
        format!("Weights: [{}]  Bias: {:.4}", weights.join(", "), report.bias),
    ];

    lines.extend(report.evaluation.rows.iter().map(|row| {
        format!(
            "Input {} -> Prediction: {:.4} (class {}, expected {})",
            format_input(&row.input),
            row.output,
            row.class,
            row.expected
        )
    }));
    lines.push(format!(
        "Accuracy: {:.1}% ({}/{})",
        report.evaluation.accuracy * 100.0,
        report.evaluation.correct(),
        report.evaluation.rows.len()
    ));
    lines.extend(report.unseen.iter().map(|row| {
        format!(
            "Unseen {} -> Prediction: {:.4} (class {})",
            format_input(&row.input),
            row.output,
            row.class
        )
    }));
    lines
}

fn format_input(input: &[f64]) -> String {
    let parts: Vec<String> = input.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
