//! Lendsweep core: threshold evaluation for loan classification.
//!
//! Given predicted default probabilities, true outcomes, and per-loan
//! financials, sweep a set of decision thresholds and compute per-threshold
//! confusion counts, accuracy metrics, and a disbursement profit simulation.

pub mod case;
pub mod exit_codes;
pub mod input;
pub mod report;
pub mod select;
pub mod sweep;

pub use case::{Case, Label};
pub use input::{default_thresholds, EvaluationInput};
pub use report::SweepReport;
pub use select::{baseline_profit, best_profit_threshold};
pub use sweep::{evaluate_at, evaluate_thresholds, ConfusionCounts, ThresholdResult};
