//! Return-on-investment derivation.
//!
//! ROI here is revenue divided by hours invested, a plain efficiency ratio.
//! The ratio is defined only when there is a genuine reward being measured
//! (non-zero revenue) and a strictly positive time investment; every other
//! input combination yields the undefined sentinel, never a fault and never
//! an error code smuggled into the number.

use crate::task::Task;

/// Rendered stand-in for an undefined ROI.
pub const ROI_UNDEFINED: &str = "-";

/// Compute ROI from raw user-entered numbers.
///
/// Returns `None` when the ratio is not meaningful:
/// - `time_taken` is zero, negative, or non-finite (guarded division), or
/// - `revenue` is zero or non-finite. Zero revenue carries no signal worth
///   ranking by; this is an explicit policy, tested directly, not an
///   accident of falsy-value coercion.
pub fn compute_roi(revenue: f64, time_taken: f64) -> Option<f64> {
    if !revenue.is_finite() || revenue == 0.0 {
        return None;
    }
    if !time_taken.is_finite() || time_taken <= 0.0 {
        return None;
    }
    Some(revenue / time_taken)
}

/// Format an ROI for display: two decimals, or the dash sentinel.
pub fn format_roi(roi: Option<f64>) -> String {
    match roi {
        Some(value) => format!("{:.2}", value),
        None => ROI_UNDEFINED.to_string(),
    }
}

/// A task annotated with its derived ROI ahead of ranking and display.
///
/// Ranking consumes the cached `roi`; it never recomputes it. Deriving once
/// per task per render keeps the sort key and the displayed string coming
/// from the same number.
#[derive(Debug, Clone)]
pub struct DerivedTask {
    pub task: Task,
    /// Cached ROI. `None` means undefined: ranks as 0.0, renders as a dash.
    pub roi: Option<f64>,
}

impl DerivedTask {
    /// Annotate a task with its computed ROI.
    pub fn derive(task: Task) -> Self {
        let roi = compute_roi(task.revenue, task.time_taken);
        Self { task, roi }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roi_of_simple_ratio() {
        assert_eq!(compute_roi(100.0, 4.0), Some(25.0));
    }

    #[test]
    fn roi_undefined_for_zero_time() {
        assert_eq!(compute_roi(100.0, 0.0), None);
    }

    #[test]
    fn roi_undefined_for_negative_time() {
        assert_eq!(compute_roi(100.0, -5.0), None);
    }

    #[test]
    fn roi_undefined_for_zero_revenue() {
        // Zero revenue is "no signal", not an ROI of zero.
        assert_eq!(compute_roi(0.0, 8.0), None);
    }

    #[test]
    fn roi_undefined_for_non_finite_inputs() {
        assert_eq!(compute_roi(f64::NAN, 4.0), None);
        assert_eq!(compute_roi(100.0, f64::NAN), None);
        assert_eq!(compute_roi(f64::INFINITY, 4.0), None);
        assert_eq!(compute_roi(100.0, f64::INFINITY), None);
    }

    #[test]
    fn format_rounds_to_two_decimals() {
        assert_eq!(format_roi(compute_roi(100.0, 4.0)), "25.00");
        assert_eq!(format_roi(compute_roi(7.0, 3.0)), "2.33");
    }

    #[test]
    fn format_renders_undefined_as_dash() {
        assert_eq!(format_roi(None), "-");
        assert_eq!(format_roi(compute_roi(50.0, 0.0)), "-");
    }
}
