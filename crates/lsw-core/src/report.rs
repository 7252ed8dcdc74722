//! Sweep report assembly and rendering.
//!
//! A `SweepReport` is the machine-readable summary of one evaluation run:
//! run identity, the per-threshold results, and the derived selections
//! (best-profit threshold, no-model baseline).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lsw_common::schema::SCHEMA_VERSION;

use crate::case::Case;
use crate::select::{baseline_profit, best_profit_threshold};
use crate::sweep::ThresholdResult;

/// Complete report for one threshold sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepReport {
    pub schema_version: String,
    pub run_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub case_count: usize,
    /// Profit of disbursing every loan (no model).
    pub baseline_profit: f64,
    /// Threshold with maximum total profit; ties to the lowest threshold.
    pub best_threshold: Option<f64>,
    pub best_profit: Option<f64>,
    pub results: Vec<ThresholdResult>,
}

impl SweepReport {
    /// Assemble a report from the evaluation inputs and sweep output.
    pub fn new(cases: &[Case], results: Vec<ThresholdResult>) -> Self {
        let best = best_profit_threshold(&results);
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            run_id: Uuid::new_v4(),
            evaluated_at: Utc::now(),
            case_count: cases.len(),
            baseline_profit: baseline_profit(cases),
            best_threshold: best.map(|r| r.threshold),
            best_profit: best.map(|r| r.total_profit),
            results,
        }
    }

    /// Render the per-threshold table, one row per result.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str(
            "threshold  overall_acc  bad_acc  good_acc  disbursed  total_profit\n",
        );
        for r in &self.results {
            out.push_str(&format!(
                "{:>9.3}  {:>11.4}  {:>7}  {:>8}  {:>9}  {:>12.2}\n",
                r.threshold,
                r.overall_accuracy,
                fmt_opt(r.bad_loan_accuracy),
                fmt_opt(r.good_loan_accuracy),
                r.disbursed_count,
                r.total_profit,
            ));
        }
        out.push_str(&format!(
            "\nbaseline profit (disburse all): {:.2}\n",
            self.baseline_profit
        ));
        match (self.best_threshold, self.best_profit) {
            (Some(t), Some(p)) => {
                out.push_str(&format!("best profit {:.2} at threshold {:.3}\n", p, t));
            }
            _ => out.push_str("no thresholds evaluated\n"),
        }
        out
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x:.4}"),
        None => "n/a".to_string(),
    }
}
