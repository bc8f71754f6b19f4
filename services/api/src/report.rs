use bmed_eval::evaluation::EvaluationSummary;
use std::fmt::Write;

fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}

/// Terminal rendition of a finalized evaluation.
pub(crate) fn render_summary(summary: &EvaluationSummary) -> String {
    let identification = &summary.identification;
    let mut out = String::new();

    let _ = writeln!(out, "b-Med evaluation report");
    let _ = writeln!(out, "Evaluator: {}", identification.evaluator_name);
    let _ = writeln!(out, "Email: {}", or_dash(&identification.email));
    let _ = writeln!(out, "Registration: {}", identification.registration());
    let _ = writeln!(out, "Solution: {}", or_dash(&identification.solution_name));
    let _ = writeln!(
        out,
        "Niche: {} ({})",
        summary.niche_label, summary.group_label
    );
    let _ = writeln!(
        out,
        "Evaluated at: {}",
        summary.evaluated_at.format("%Y-%m-%d %H:%M UTC")
    );

    let _ = writeln!(out, "\nCategory scores");
    for row in &summary.breakdown {
        let marker = if row.blocked { " [blocked]" } else { "" };
        let _ = writeln!(
            out,
            "- {}: {}/{}{}",
            row.label, row.points, row.max_points, marker
        );
        for note in &row.notes {
            let _ = writeln!(out, "    {note}");
        }
    }

    if !summary.advisories.is_empty() {
        let _ = writeln!(out, "\nAdvisories");
        for advisory in &summary.advisories {
            let _ = writeln!(out, "- {}: {}", advisory.category, advisory.message);
        }
    }

    let _ = write!(
        out,
        "\nTotal: {} points (of {} attainable)",
        summary.total, summary.max_total
    );
    out
}
