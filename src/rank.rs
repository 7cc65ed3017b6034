//! Ranking of derived tasks by business value.
//!
//! The comparator applies a tie-break chain: ROI descending, then priority
//! descending via the fixed rank table, then title ascending. Title is the
//! final key, so for distinct tasks the result is a total order that does
//! not depend on input order or on the sort algorithm's stability.

use std::cmp::Ordering;

use crate::metrics::DerivedTask;

/// ROI value an undefined ROI compares as.
///
/// A task with no computable ROI ranks on equal footing with an explicit
/// ROI of zero. This mirrors the product's stated behavior: a tiny positive
/// ROI outranks "no revenue yet" even though both may mean the same thing
/// to a user.
const UNRANKED_ROI: f64 = 0.0;

/// Order two derived tasks for display.
///
/// `f64::total_cmp` keeps the ordering total even if a caller hands the
/// ranker a cached non-finite ROI.
pub fn compare(a: &DerivedTask, b: &DerivedTask) -> Ordering {
    let roi_a = a.roi.unwrap_or(UNRANKED_ROI);
    let roi_b = b.roi.unwrap_or(UNRANKED_ROI);
    roi_b
        .total_cmp(&roi_a)
        .then_with(|| b.task.priority.rank().cmp(&a.task.priority.rank()))
        .then_with(|| compare_titles(&a.task.title, &b.task.title))
}

/// Case-folded title comparison with a bytewise tie-break.
///
/// The fold keeps "alpha" before "Zeta" (plain `str` ordering would put
/// every uppercase title first); the raw comparison afterwards keeps the
/// order total when two titles differ only in case.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Rank tasks for display, highest business value first.
///
/// Returns a new vector; the input is never mutated. Tasks whose ROI,
/// priority, and title are all identical keep no specified relative order,
/// since the natural key is exhausted at that point.
pub fn rank(tasks: &[DerivedTask]) -> Vec<DerivedTask> {
    let mut ordered = tasks.to_vec();
    ordered.sort_by(compare);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{NewTask, Priority, Task};

    fn derived(title: &str, roi: Option<f64>, priority: Priority) -> DerivedTask {
        let task = Task::new(NewTask {
            title: title.to_string(),
            revenue: 1.0,
            time_taken: 1.0,
            priority,
            status: "open".to_string(),
            notes: None,
        })
        .unwrap();
        DerivedTask { task, roi }
    }

    fn titles(ranked: &[DerivedTask]) -> Vec<&str> {
        ranked.iter().map(|d| d.task.title.as_str()).collect()
    }

    #[test]
    fn empty_input_ranks_to_empty_output() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn single_task_is_unchanged() {
        let input = vec![derived("Only", Some(3.0), Priority::Low)];
        assert_eq!(titles(&rank(&input)), vec!["Only"]);
    }

    #[test]
    fn higher_roi_ranks_first() {
        let input = vec![
            derived("Small", Some(2.0), Priority::High),
            derived("Big", Some(9.0), Priority::Low),
        ];
        assert_eq!(titles(&rank(&input)), vec!["Big", "Small"]);
    }

    #[test]
    fn priority_breaks_roi_ties() {
        // ROI tied, so priority wins over title.
        let input = vec![
            derived("B", Some(10.0), Priority::Medium),
            derived("A", Some(10.0), Priority::High),
        ];
        assert_eq!(titles(&rank(&input)), vec!["A", "B"]);
    }

    #[test]
    fn title_breaks_full_ties() {
        let input = vec![
            derived("Zeta", Some(5.0), Priority::High),
            derived("alpha", Some(5.0), Priority::High),
        ];
        assert_eq!(titles(&rank(&input)), vec!["alpha", "Zeta"]);
    }

    #[test]
    fn full_tie_break_chain() {
        let input = vec![
            derived("Zeta", Some(5.0), Priority::High),
            derived("Alpha", Some(5.0), Priority::High),
            derived("Mid", Some(8.0), Priority::Low),
        ];
        assert_eq!(titles(&rank(&input)), vec!["Mid", "Alpha", "Zeta"]);
    }

    #[test]
    fn missing_roi_ranks_as_zero() {
        let input = vec![
            derived("NoRoi", None, Priority::High),
            derived("Tiny", Some(0.01), Priority::Low),
            derived("ZeroRoi", Some(0.0), Priority::High),
        ];
        // Tiny positive ROI beats both; the undefined and explicit-zero
        // tasks fall through to the title tie-break.
        assert_eq!(titles(&rank(&input)), vec!["Tiny", "NoRoi", "ZeroRoi"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let input = vec![
            derived("C", Some(1.0), Priority::Low),
            derived("A", None, Priority::High),
            derived("B", Some(4.5), Priority::Medium),
        ];
        let once = rank(&input);
        let twice = rank(&once);
        assert_eq!(titles(&once), titles(&twice));
    }

    #[test]
    fn ranking_is_permutation_independent() {
        let a = derived("A", Some(2.0), Priority::Medium);
        let b = derived("B", Some(2.0), Priority::Medium);
        let c = derived("C", None, Priority::High);
        let forward = rank(&[a.clone(), b.clone(), c.clone()]);
        let backward = rank(&[c, b, a]);
        assert_eq!(titles(&forward), titles(&backward));
    }

    #[test]
    fn input_is_not_mutated() {
        let input = vec![
            derived("Z", Some(1.0), Priority::Low),
            derived("A", Some(9.0), Priority::High),
        ];
        let _ = rank(&input);
        assert_eq!(titles(&input), vec!["Z", "A"]);
    }
}
