//! Wall-clock timing around sorts.
//!
//! [`measure`] times a single sort call. [`LatencyRecorder`] repeats that
//! and keeps the samples in an HDR histogram so a run can be summarised by
//! quantiles instead of one noisy number.
//!
//! Timing is independent of comparison counting: the wrapper only reads the
//! clock and passes through whatever count the sort returns.

use std::time::{Duration, Instant};

use hdrhistogram::Histogram;

use crate::{InventoryError, InventoryResult};

/// One timed sort: the sort's own comparison count and how long it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed {
    /// Comparisons reported by the sort.
    pub comparisons: u64,
    /// Elapsed wall-clock time.
    pub elapsed: Duration,
}

impl Timed {
    /// Elapsed time in seconds.
    #[inline]
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs `sort` over `data` between two monotonic clock readings.
///
/// `data` is usually a disposable copy. Empty and single-element inputs are
/// fine; whatever `sort` returns for them (0 for the counted sorts) is
/// passed through.
///
/// # Example
///
/// ```
/// use loadout_collections::sort::selection_sort_by;
/// use loadout_inventory::timing::measure;
///
/// let mut data = [3, 1, 2];
/// let timed = measure(&mut data, |d| selection_sort_by(d, |a, b| a.cmp(b)));
/// assert_eq!(timed.comparisons, 3);
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub fn measure<T, F>(data: &mut [T], sort: F) -> Timed
where
    F: FnOnce(&mut [T]) -> u64,
{
    let start = Instant::now();
    let comparisons = sort(data);
    let elapsed = start.elapsed();
    Timed {
        comparisons,
        elapsed,
    }
}

/// Whole nanoseconds in `elapsed`, saturating at `u64::MAX`.
#[inline]
pub fn nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

/// Quantile summary of recorded timings, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatencySummary {
    /// Number of samples.
    pub samples: u64,
    /// Fastest sample.
    pub min: u64,
    /// Median.
    pub p50: u64,
    /// 99th percentile.
    pub p99: u64,
    /// 99.9th percentile.
    pub p999: u64,
    /// Slowest sample.
    pub max: u64,
    /// Arithmetic mean.
    pub mean: f64,
}

impl core::fmt::Display for LatencySummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "  samples: {:>8}", self.samples)?;
        writeln!(f, "  min:  {:>8} ns", self.min)?;
        writeln!(f, "  p50:  {:>8} ns", self.p50)?;
        writeln!(f, "  p99:  {:>8} ns", self.p99)?;
        writeln!(f, "  p999: {:>8} ns", self.p999)?;
        writeln!(f, "  max:  {:>8} ns", self.max)?;
        write!(f, "  avg:  {:>8.0} ns", self.mean)
    }
}

/// Collects repeated sort timings into a histogram.
pub struct LatencyRecorder {
    hist: Histogram<u64>,
}

impl LatencyRecorder {
    /// Creates an empty recorder with 3 significant figures of precision.
    ///
    /// The histogram starts small and widens its range as larger samples
    /// arrive.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Histogram`] if the histogram cannot be
    /// created.
    pub fn new() -> InventoryResult<Self> {
        let hist = Histogram::<u64>::new(3).map_err(|e| InventoryError::Histogram(e.to_string()))?;
        Ok(Self { hist })
    }

    /// Records one elapsed time in nanoseconds.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Histogram`] if the histogram cannot widen
    /// to hold the value.
    pub fn record(&mut self, elapsed: Duration) -> InventoryResult<()> {
        self.hist
            .record(nanos(elapsed))
            .map_err(|e| InventoryError::Histogram(e.to_string()))
    }

    /// Times `sort` over `data` and records the elapsed time.
    ///
    /// # Errors
    ///
    /// Same as [`record`](Self::record). The sort has run either way.
    pub fn measure<T, F>(&mut self, data: &mut [T], sort: F) -> InventoryResult<Timed>
    where
        F: FnOnce(&mut [T]) -> u64,
    {
        let timed = measure(data, sort);
        self.record(timed.elapsed)?;
        Ok(timed)
    }

    /// Number of recorded samples.
    #[inline]
    pub fn samples(&self) -> u64 {
        self.hist.len()
    }

    /// Summarises everything recorded so far.
    pub fn summary(&self) -> LatencySummary {
        LatencySummary {
            samples: self.hist.len(),
            min: self.hist.min(),
            p50: self.hist.value_at_quantile(0.50),
            p99: self.hist.value_at_quantile(0.99),
            p999: self.hist.value_at_quantile(0.999),
            max: self.hist.max(),
            mean: self.hist.mean(),
        }
    }

    /// Forgets every sample.
    pub fn reset(&mut self) {
        self.hist.reset();
    }
}
