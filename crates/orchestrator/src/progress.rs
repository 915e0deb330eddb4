//! Progress tracking

use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Per-scan tally shared by every probe task.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    total: AtomicUsize,
    probed: AtomicUsize,
    open: AtomicUsize,
    skipped: AtomicUsize,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total: AtomicUsize::new(total),
            ..Self::default()
        }
    }

    pub fn increment_probed(&self) {
        self.probed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_open(&self) {
        self.open.fetch_add(1, Ordering::Relaxed);
    }

    /// A port that was never probed because the scan was cancelled.
    pub fn increment_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    pub fn probed(&self) -> usize {
        self.probed.load(Ordering::Relaxed)
    }

    pub fn open(&self) -> usize {
        self.open.load(Ordering::Relaxed)
    }

    pub fn skipped(&self) -> usize {
        self.skipped.load(Ordering::Relaxed)
    }

    /// Fraction of ports that have been accounted for, in [0.0, 100.0].
    pub fn percent_done(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 100.0;
        }
        ((self.probed() + self.skipped()) as f64 / total as f64) * 100.0
    }

    pub fn print_summary(&self) {
        info!("Scan Summary:");
        info!("  Total ports: {}", self.total());
        info!("  Probed: {}", self.probed());
        info!("  Open: {}", self.open());
        if self.skipped() > 0 {
            info!("  Skipped (cancelled): {}", self.skipped());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let p = ProgressTracker::new(4);
        p.increment_probed();
        p.increment_probed();
        p.increment_open();
        p.increment_skipped();
        assert_eq!(p.total(), 4);
        assert_eq!(p.probed(), 2);
        assert_eq!(p.open(), 1);
        assert_eq!(p.skipped(), 1);
        assert!((p.percent_done() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_scan_is_complete() {
        assert!((ProgressTracker::new(0).percent_done() - 100.0).abs() < f64::EPSILON);
    }
}
