//! Derived selection over sweep results.
//!
//! Reporting-side helpers: the profit-maximizing threshold and the no-model
//! baseline the sweep is compared against.

use crate::case::Case;
use crate::sweep::ThresholdResult;

/// The result with maximum total profit; ties broken by the lowest
/// threshold value. `None` for an empty slice.
pub fn best_profit_threshold(results: &[ThresholdResult]) -> Option<&ThresholdResult> {
    let mut best: Option<&ThresholdResult> = None;
    for r in results {
        best = match best {
            None => Some(r),
            Some(b) => {
                if r.total_profit > b.total_profit
                    || (r.total_profit == b.total_profit && r.threshold < b.threshold)
                {
                    Some(r)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}

/// No-model baseline profit: disburse everything.
///
/// Sum of (total_paid - amount) over all cases; cases missing either
/// financial field contribute zero.
pub fn baseline_profit(cases: &[Case]) -> f64 {
    cases.iter().filter_map(Case::profit).sum()
}
