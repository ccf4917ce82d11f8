use crate::analysis::coverage::CoverageSummary;

const NONE: &str = "none";

/// Cell for row `i` of a listing column. An empty listing shows `none` in its
/// first row only.
fn cell(listing: &[String], i: usize) -> &str {
    if listing.is_empty() {
        if i == 0 {
            NONE
        } else {
            ""
        }
    } else {
        listing.get(i).map_or("", String::as_str)
    }
}

/// Render the fixed-width chromosome-end coverage report
pub fn render_coverage(summary: &CoverageSummary) -> String {
    let mut lines = vec![
        "Chromosome ends".to_string(),
        String::new(),
        format!("{:<15} {:<10}", "unambiguous", "total"),
        format!("{:<15} {:<10}", summary.unambiguous, summary.total),
        String::new(),
        format!("{:<23} {:<20}", "ambiguous ends", "missing end"),
    ];

    let ambiguous = &summary.ambiguous_ends;
    let missing = &summary.missing_ends;
    let rows = ambiguous.len().max(missing.len()).max(1);

    for i in 0..rows {
        lines.push(format!("{:<23} {:<20}", cell(ambiguous, i), cell(missing, i)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
