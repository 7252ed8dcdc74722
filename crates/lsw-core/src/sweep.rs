//! Threshold sweep evaluation.
//!
//! Classifies every case at each candidate threshold, builds explicit keyed
//! confusion counts, and simulates disbursement profit. Each threshold is
//! evaluated independently; the sweep is a pure map from (cases, thresholds)
//! to an ordered sequence of immutable results.

use serde::{Deserialize, Serialize};

use lsw_common::{Error, Result};

use crate::case::{Case, Label};

/// Confusion counts keyed by (predicted, actual) label pair.
///
/// Explicit fields instead of a positionally indexed 2x2 array, so cell
/// identity never depends on class ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub pred_good_true_good: usize,
    pub pred_good_true_bad: usize,
    pub pred_bad_true_good: usize,
    pub pred_bad_true_bad: usize,
}

impl ConfusionCounts {
    /// Record one classified case.
    pub fn record(&mut self, predicted: Label, actual: Label) {
        match (predicted, actual) {
            (Label::Good, Label::Good) => self.pred_good_true_good += 1,
            (Label::Good, Label::Bad) => self.pred_good_true_bad += 1,
            (Label::Bad, Label::Good) => self.pred_bad_true_good += 1,
            (Label::Bad, Label::Bad) => self.pred_bad_true_bad += 1,
        }
    }

    /// Sum of all four cells. Equals the case count for a full sweep pass.
    pub fn total(&self) -> usize {
        self.pred_good_true_good
            + self.pred_good_true_bad
            + self.pred_bad_true_good
            + self.pred_bad_true_bad
    }

    /// Count of cases whose true label is `Bad`.
    pub fn true_bad(&self) -> usize {
        self.pred_good_true_bad + self.pred_bad_true_bad
    }

    /// Count of cases whose true label is `Good`.
    pub fn true_good(&self) -> usize {
        self.pred_good_true_good + self.pred_bad_true_good
    }
}

/// Evaluation result for a single threshold.
///
/// Per-class accuracies are `None` when their denominator is zero (no case
/// with that true label); the sweep continues and every other metric for the
/// same threshold is still computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdResult {
    /// The probability cutoff this result was computed at.
    pub threshold: f64,
    /// Keyed 2x2 confusion counts.
    pub confusion: ConfusionCounts,
    /// (correct Good + correct Bad) / total cases.
    pub overall_accuracy: f64,
    /// Fraction of true-Bad loans classified Bad.
    pub bad_loan_accuracy: Option<f64>,
    /// Fraction of true-Good loans classified Good.
    pub good_loan_accuracy: Option<f64>,
    /// Number of loans the policy would disburse (predicted Good).
    pub disbursed_count: usize,
    /// Sum of (total_paid - amount) over disbursed loans with both fields
    /// present; loans missing either field contribute zero.
    pub total_profit: f64,
}

/// Classify one case at a threshold: Bad when the predicted default
/// probability exceeds the cutoff, Good otherwise.
fn classify(case: &Case, threshold: f64) -> Label {
    if case.predicted_probability > threshold {
        Label::Bad
    } else {
        Label::Good
    }
}

/// Evaluate a single threshold over the full case set.
///
/// Disbursement policy: disburse exactly the predicted-Good loans
/// (predicted default probability <= threshold).
pub fn evaluate_at(cases: &[Case], threshold: f64) -> ThresholdResult {
    let mut confusion = ConfusionCounts::default();
    let mut disbursed_count = 0usize;
    let mut total_profit = 0.0f64;

    for case in cases {
        let predicted = classify(case, threshold);
        confusion.record(predicted, case.label);

        if predicted == Label::Good {
            disbursed_count += 1;
            if let Some(profit) = case.profit() {
                total_profit += profit;
            }
        }
    }

    let total = confusion.total();
    let overall_accuracy =
        (confusion.pred_good_true_good + confusion.pred_bad_true_bad) as f64 / total as f64;

    let bad_loan_accuracy = match confusion.true_bad() {
        0 => None,
        n => Some(confusion.pred_bad_true_bad as f64 / n as f64),
    };
    let good_loan_accuracy = match confusion.true_good() {
        0 => None,
        n => Some(confusion.pred_good_true_good as f64 / n as f64),
    };

    ThresholdResult {
        threshold,
        confusion,
        overall_accuracy,
        bad_loan_accuracy,
        good_loan_accuracy,
        disbursed_count,
        total_profit,
    }
}

/// Validate the sweep input contract.
///
/// Rejects the whole request before any computation: empty case set, a
/// threshold outside (0, 1), or a predicted probability outside [0, 1].
pub fn validate_input(cases: &[Case], thresholds: &[f64]) -> Result<()> {
    if cases.is_empty() {
        return Err(Error::InvalidInput("empty case sequence".into()));
    }
    for (i, t) in thresholds.iter().enumerate() {
        if !t.is_finite() || *t <= 0.0 || *t >= 1.0 {
            return Err(Error::InvalidInput(format!(
                "threshold[{i}] = {t} outside (0, 1)"
            )));
        }
    }
    for (i, case) in cases.iter().enumerate() {
        let p = case.predicted_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidInput(format!(
                "case[{i}] predicted_probability = {p} outside [0, 1]"
            )));
        }
    }
    Ok(())
}

/// Sweep every candidate threshold over the case set.
///
/// Returns one result per input threshold, in input order. Thresholds are
/// evaluated independently; an undefined per-class accuracy at one threshold
/// never aborts the sweep.
pub fn evaluate_thresholds(cases: &[Case], thresholds: &[f64]) -> Result<Vec<ThresholdResult>> {
    validate_input(cases, thresholds)?;
    Ok(thresholds.iter().map(|t| evaluate_at(cases, *t)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(p: f64, label: Label, amount: f64, paid: f64) -> Case {
        Case {
            predicted_probability: p,
            label,
            amount: Some(amount),
            total_paid: Some(paid),
        }
    }

    /// The worked four-loan scenario: two clean goods, two clean bads.
    fn four_loans() -> Vec<Case> {
        vec![
            case(0.3, Label::Good, 100.0, 120.0),
            case(0.6, Label::Bad, 200.0, 50.0),
            case(0.8, Label::Bad, 150.0, 0.0),
            case(0.4, Label::Good, 80.0, 90.0),
        ]
    }

    #[test]
    fn test_four_loan_scenario_at_half() {
        let results = evaluate_thresholds(&four_loans(), &[0.5]).unwrap();
        assert_eq!(results.len(), 1);
        let r = &results[0];

        assert_eq!(r.confusion.pred_good_true_good, 2);
        assert_eq!(r.confusion.pred_bad_true_bad, 2);
        assert_eq!(r.confusion.pred_good_true_bad, 0);
        assert_eq!(r.confusion.pred_bad_true_good, 0);
        assert_eq!(r.overall_accuracy, 1.0);
        assert_eq!(r.bad_loan_accuracy, Some(1.0));
        assert_eq!(r.good_loan_accuracy, Some(1.0));
        assert_eq!(r.disbursed_count, 2);
        assert!((r.total_profit - 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_confusion_cells_sum_to_total() {
        let cases = four_loans();
        for t in [0.1, 0.35, 0.5, 0.65, 0.9] {
            let r = evaluate_at(&cases, t);
            assert_eq!(r.confusion.total(), cases.len());
        }
    }

    #[test]
    fn test_low_threshold_classifies_everything_bad() {
        // All probabilities exceed 0.1, so every case is predicted Bad.
        let cases = four_loans();
        let r = evaluate_at(&cases, 0.1);
        assert_eq!(r.disbursed_count, 0);
        assert_eq!(r.total_profit, 0.0);
        assert_eq!(r.bad_loan_accuracy, Some(1.0));
        assert_eq!(r.good_loan_accuracy, Some(0.0));
    }

    #[test]
    fn test_high_threshold_disburses_everything() {
        let cases = four_loans();
        let r = evaluate_at(&cases, 0.9);
        assert_eq!(r.disbursed_count, cases.len());
        // (120-100) + (50-200) + (0-150) + (90-80) = -270
        assert!((r.total_profit - (-270.0)).abs() < 1e-12);
        assert_eq!(r.bad_loan_accuracy, Some(0.0));
        assert_eq!(r.good_loan_accuracy, Some(1.0));
    }

    #[test]
    fn test_boundary_probability_is_disbursed() {
        // p == threshold -> predicted Good.
        let cases = vec![case(0.5, Label::Good, 10.0, 12.0)];
        let r = evaluate_at(&cases, 0.5);
        assert_eq!(r.disbursed_count, 1);
        assert_eq!(r.confusion.pred_good_true_good, 1);
    }

    #[test]
    fn test_missing_financials_contribute_zero_but_count_as_disbursed() {
        let cases = vec![
            Case {
                predicted_probability: 0.2,
                label: Label::Good,
                amount: None,
                total_paid: Some(500.0),
            },
            case(0.3, Label::Good, 100.0, 110.0),
        ];
        let r = evaluate_at(&cases, 0.5);
        assert_eq!(r.disbursed_count, 2);
        assert!((r.total_profit - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_undefined_metric_does_not_abort_sweep() {
        // No true-Bad case: bad_loan_accuracy undefined at every threshold.
        let cases = vec![
            case(0.2, Label::Good, 10.0, 11.0),
            case(0.7, Label::Good, 10.0, 11.0),
        ];
        let results = evaluate_thresholds(&cases, &[0.5, 0.9]).unwrap();
        for r in &results {
            assert_eq!(r.bad_loan_accuracy, None);
            assert!(r.good_loan_accuracy.is_some());
            assert!(r.overall_accuracy.is_finite());
        }
    }

    #[test]
    fn test_results_follow_input_threshold_order() {
        let results = evaluate_thresholds(&four_loans(), &[0.7, 0.2, 0.5]).unwrap();
        let order: Vec<f64> = results.iter().map(|r| r.threshold).collect();
        assert_eq!(order, vec![0.7, 0.2, 0.5]);
    }

    #[test]
    fn test_empty_cases_rejected() {
        let err = evaluate_thresholds(&[], &[0.5]).unwrap_err();
        assert_eq!(err.code(), 11);
    }

    #[test]
    fn test_threshold_outside_open_interval_rejected() {
        let cases = four_loans();
        for bad in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            assert!(evaluate_thresholds(&cases, &[bad]).is_err());
        }
    }

    #[test]
    fn test_probability_outside_unit_interval_rejected() {
        let mut cases = four_loans();
        cases[1].predicted_probability = 1.2;
        let err = evaluate_thresholds(&cases, &[0.5]).unwrap_err();
        assert!(err.to_string().contains("case[1]"));
    }

    #[test]
    fn test_deterministic() {
        let cases = four_loans();
        let thresholds = [0.25, 0.5, 0.75];
        let a = evaluate_thresholds(&cases, &thresholds).unwrap();
        let b = evaluate_thresholds(&cases, &thresholds).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.confusion, y.confusion);
            assert_eq!(x.total_profit, y.total_profit);
            assert_eq!(x.disbursed_count, y.disbursed_count);
        }
    }

    #[test]
    fn test_undefined_accuracy_serializes_as_null() {
        let cases = vec![case(0.2, Label::Good, 10.0, 11.0)];
        let r = evaluate_at(&cases, 0.5);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json["bad_loan_accuracy"].is_null());
    }
}
