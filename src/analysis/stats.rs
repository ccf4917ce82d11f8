use serde::Serialize;

use crate::analysis::aggregate::EndAggregate;
use crate::core::types::{Metric, StatValue};

/// Descriptive statistics over one partition of per-end maxima
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    #[serde(rename = "Count")]
    pub count: StatValue,
    #[serde(rename = "Min")]
    pub min: StatValue,
    #[serde(rename = "Max")]
    pub max: StatValue,
    #[serde(rename = "Median")]
    pub median: StatValue,
    #[serde(rename = "Mean")]
    pub mean: StatValue,
    #[serde(rename = "Stdev_Sample")]
    pub stdev_sample: StatValue,
}

impl SummaryStats {
    /// Every metric reports "not applicable"
    pub fn not_applicable() -> Self {
        Self {
            count: StatValue::NotApplicable,
            min: StatValue::NotApplicable,
            max: StatValue::NotApplicable,
            median: StatValue::NotApplicable,
            mean: StatValue::NotApplicable,
            stdev_sample: StatValue::NotApplicable,
        }
    }

    /// Compute statistics; an empty slice gives [`SummaryStats::not_applicable`].
    ///
    /// Mean and sample deviation are rounded to two decimals. With a single
    /// value the sample deviation is NaN.
    pub fn calculate(values: &[i64]) -> Self {
        if values.is_empty() {
            return Self::not_applicable();
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let mean = mean(&sorted);
        Self {
            count: StatValue::Count(sorted.len()),
            min: StatValue::Integer(sorted[0]),
            max: StatValue::Integer(sorted[sorted.len() - 1]),
            median: StatValue::Float(median(&sorted)),
            mean: StatValue::Float(round2(mean)),
            stdev_sample: StatValue::Float(round2(sample_stdev(&sorted, mean))),
        }
    }

    pub fn get(&self, metric: Metric) -> StatValue {
        match metric {
            Metric::Count => self.count,
            Metric::Min => self.min,
            Metric::Max => self.max,
            Metric::Median => self.median,
            Metric::Mean => self.mean,
            Metric::StdevSample => self.stdev_sample,
        }
    }
}

/// Statistics for autosomal ends and for all ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatsSummary {
    #[serde(rename = "Autosomes_Only_TL_p75")]
    pub autosomes: SummaryStats,
    #[serde(rename = "All_Chr_TL_p75")]
    pub all: SummaryStats,
}

impl StatsSummary {
    pub fn from_aggregate(aggregate: &EndAggregate) -> Self {
        Self {
            autosomes: SummaryStats::calculate(&aggregate.autosomal_values()),
            all: SummaryStats::calculate(&aggregate.values()),
        }
    }

    /// (metric, autosomes, all) in report order
    pub fn rows(&self) -> impl Iterator<Item = (Metric, StatValue, StatValue)> + '_ {
        Metric::ALL
            .into_iter()
            .map(|m| (m, self.autosomes.get(m), self.all.get(m)))
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[i64]) -> f64 {
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Median of sorted, non-empty values
#[allow(clippy::cast_precision_loss)]
fn median(sorted: &[i64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Sample standard deviation (N - 1 divisor); NaN for fewer than two values
#[allow(clippy::cast_precision_loss)]
fn sample_stdev(values: &[i64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let sum_sq: f64 = values
        .iter()
        .map(|&v| {
            let diff = v as f64 - mean;
            diff * diff
        })
        .sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Round to two decimals, halves to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float(value: StatValue) -> f64 {
        match value {
            StatValue::Float(v) => v,
            other => panic!("expected float, got {other:?}"),
        }
    }

    #[test]
    fn test_calculate() {
        let stats = SummaryStats::calculate(&[150, 90, 150]);

        assert_eq!(stats.count, StatValue::Count(3));
        assert_eq!(stats.min, StatValue::Integer(90));
        assert_eq!(stats.max, StatValue::Integer(150));
        assert_eq!(float(stats.median), 150.0);
        assert_eq!(float(stats.mean), 130.0);
        // sqrt(((20^2) * 2 + 40^2) / 2) = sqrt(1200)
        assert_eq!(float(stats.stdev_sample), 34.64);
    }

    #[test]
    fn test_even_median() {
        let stats = SummaryStats::calculate(&[4, 1, 3, 2]);
        assert_eq!(float(stats.median), 2.5);
        assert_eq!(float(stats.mean), 2.5);
    }

    #[test]
    fn test_mean_rounded() {
        let stats = SummaryStats::calculate(&[1, 1, 2]);
        assert_eq!(float(stats.mean), 1.33);
    }

    #[test]
    fn test_rounding_halves_to_even() {
        // Mean is exactly 1.125
        let stats = SummaryStats::calculate(&[0, 0, 0, 0, 0, 0, 0, 9]);
        assert_eq!(stats.mean.to_string(), "1.12");

        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(2.5), 2.5);
    }

    #[test]
    fn test_single_value_stdev_is_nan() {
        let stats = SummaryStats::calculate(&[4200]);
        assert_eq!(stats.count, StatValue::Count(1));
        assert!(float(stats.stdev_sample).is_nan());
        assert!(!stats.stdev_sample.is_not_applicable());
    }

    #[test]
    fn test_empty_is_not_applicable() {
        let stats = SummaryStats::calculate(&[]);
        for metric in Metric::ALL {
            assert_eq!(stats.get(metric), StatValue::NotApplicable);
        }
    }

    #[test]
    fn test_sex_only_autosomes_not_applicable() {
        let mut aggregate = EndAggregate::new();
        aggregate.add("chrXp", 5000.0);
        aggregate.add("chrYq", 7000.0);

        let summary = StatsSummary::from_aggregate(&aggregate);
        for (metric, autosomes, all) in summary.rows() {
            assert!(autosomes.is_not_applicable(), "{metric} should be N/A");
            assert!(!all.is_not_applicable());
        }
        assert_eq!(summary.all.count, StatValue::Count(2));
    }

    #[test]
    fn test_rows_in_metric_order() {
        let aggregate = EndAggregate::new();
        let summary = StatsSummary::from_aggregate(&aggregate);
        let metrics: Vec<Metric> = summary.rows().map(|(m, _, _)| m).collect();
        assert_eq!(metrics, Metric::ALL.to_vec());
    }
}
