use serde::Serialize;

use crate::analysis::aggregate::EndAggregate;
use crate::analysis::stats::StatsSummary;

/// Maximum TL-75 and summary statistics of one telomere-length table
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Per-end maxima, lexical end order
    pub maxima: EndAggregate,
    pub statistics: StatsSummary,
}

impl SummaryReport {
    pub fn new(maxima: EndAggregate) -> Self {
        let statistics = StatsSummary::from_aggregate(&maxima);
        Self { maxima, statistics }
    }

    /// Render as `#`-commented TSV: part 1 lists per-end maxima, part 2 the
    /// statistics with the autosome column before the all-ends column
    pub fn render(&self) -> String {
        let mut lines = vec![
            "# Simplified TL-75 Summary from tlens_by_allele.tsv".to_string(),
            "#".to_string(),
            "# Part 1: Maximum TL-75 for each Chromosome End (Max TL-75 per Telomere End)"
                .to_string(),
            "#".to_string(),
            "Telomere_End\tMax_TL_p75".to_string(),
        ];
        lines.extend(self.maxima.iter().map(|(end, max)| format!("{end}\t{max}")));

        lines.push(String::new());
        lines.push("#".to_string());
        lines.push("# Part 2: Overall Summary Statistics on Max TL-75 Values".to_string());
        lines.push("# 'Autosomes_Only' excludes chrX and chrY ends.".to_string());
        lines.push("#".to_string());
        lines.push("Metric\tAutosomes_Only_TL_p75\tAll_Chr_TL_p75".to_string());
        lines.extend(
            self.statistics
                .rows()
                .map(|(metric, autosomes, all)| format!("{metric}\t{autosomes}\t{all}")),
        );

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}
