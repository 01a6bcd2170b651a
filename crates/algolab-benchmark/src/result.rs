//! Trial and experiment result types.

use std::time::Duration;

/// One measured outcome: a fixed input size timed over a number of
/// repetitions.
///
/// Invariants: `repetitions >= 1` (the constructor clamps zero up to one)
/// and `mean_time() == elapsed_total / repetitions`. Times come from a
/// monotonic clock and are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    /// Input size (or argument value) this trial ran against.
    pub size: u64,
    /// Number of invocations inside the timed window.
    pub repetitions: u32,
    /// Wall-clock time for all repetitions together.
    pub elapsed_total: Duration,
}

impl TrialResult {
    /// Creates a trial result. A repetition count of zero is clamped to
    /// one so the mean is always defined.
    pub fn new(size: u64, repetitions: u32, elapsed_total: Duration) -> Self {
        Self {
            size,
            repetitions: repetitions.max(1),
            elapsed_total,
        }
    }

    /// Mean wall-clock time per call.
    ///
    /// # Example
    ///
    /// ```
    /// use algolab_benchmark::TrialResult;
    /// use std::time::Duration;
    ///
    /// let trial = TrialResult::new(100, 4, Duration::from_millis(20));
    /// assert_eq!(trial.mean_time(), Duration::from_millis(5));
    /// ```
    pub fn mean_time(&self) -> Duration {
        self.elapsed_total / self.repetitions
    }

    /// Mean time per call in nanoseconds.
    pub fn mean_nanos(&self) -> f64 {
        self.elapsed_total.as_nanos() as f64 / self.repetitions as f64
    }

    /// Mean time per call divided by the input size, in nanoseconds.
    ///
    /// Zero-sized inputs report zero rather than dividing by zero.
    pub fn time_per_unit_nanos(&self) -> f64 {
        if self.size == 0 {
            0.0
        } else {
            self.mean_nanos() / self.size as f64
        }
    }
}

/// Ordered sequence of trials, one per requested input size.
///
/// Trial `i` corresponds to requested size `i`; the order is significant
/// for table rows and chart x-axes and is never re-sorted.
#[derive(Debug, Clone)]
pub struct ExperimentReport {
    /// Experiment name.
    pub name: String,
    /// Name identifying the subject under test.
    pub subject_name: String,
    /// Theoretical complexity note, if the config carried one.
    pub complexity_note: Option<String>,
    /// Trials in request order.
    pub trials: Vec<TrialResult>,
}

impl ExperimentReport {
    /// Creates an empty report.
    pub fn new(name: impl Into<String>, subject_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject_name: subject_name.into(),
            complexity_note: None,
            trials: Vec::new(),
        }
    }

    /// Attaches a complexity note.
    pub fn with_complexity_note(mut self, note: impl Into<String>) -> Self {
        self.complexity_note = Some(note.into());
        self
    }

    /// Appends a trial, preserving request order.
    pub fn add_trial(&mut self, trial: TrialResult) {
        self.trials.push(trial);
    }

    /// Number of trials.
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Returns true when no trials were recorded.
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Input sizes in request order.
    pub fn sizes(&self) -> Vec<u64> {
        self.trials.iter().map(|t| t.size).collect()
    }

    /// Fastest mean time across trials.
    pub fn min_mean_time(&self) -> Duration {
        self.trials
            .iter()
            .map(TrialResult::mean_time)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Slowest mean time across trials.
    pub fn max_mean_time(&self) -> Duration {
        self.trials
            .iter()
            .map(TrialResult::mean_time)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Average of the per-trial mean times.
    pub fn avg_mean_time(&self) -> Duration {
        if self.trials.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.trials.iter().map(TrialResult::mean_time).sum();
        total / self.trials.len() as u32
    }
}
