//! Ratio reports and the sweep summary table.

use std::fmt;
use std::time::Duration;

use super::timer::Measurement;
use crate::variant::Variant;

/// Dimensionless `numerator / denominator`.
///
/// ```
/// use std::time::Duration;
/// use matbench::harness::report::ratio;
///
/// assert_eq!(ratio(Duration::from_millis(500), Duration::from_millis(250)), 2.0);
/// ```
pub fn ratio(numerator: Duration, denominator: Duration) -> f64 {
    numerator.as_secs_f64() / denominator.as_secs_f64()
}

/// Baseline durations captured during warm-up, one per variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTimings {
    size: usize,
    baselines: Vec<(Variant, Duration)>,
}

impl ReferenceTimings {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            baselines: Vec::new(),
        }
    }

    /// Matrix size the baselines were measured at.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Stores `elapsed` as the baseline for `variant`, replacing any
    /// earlier value so the last warm-up iteration wins.
    pub fn record(&mut self, variant: Variant, elapsed: Duration) {
        match self.baselines.iter_mut().find(|(v, _)| *v == variant) {
            Some(entry) => entry.1 = elapsed,
            None => self.baselines.push((variant, elapsed)),
        }
    }

    pub fn get(&self, variant: Variant) -> Option<Duration> {
        self.baselines
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, d)| *d)
    }

    /// Baseline to divide `variant` by: its own, or for a parallel variant
    /// without one, the first parallel baseline recorded.
    pub fn baseline_for(&self, variant: Variant) -> Option<Duration> {
        self.get(variant).or_else(|| {
            if !variant.is_parallel() {
                return None;
            }
            self.baselines
                .iter()
                .find(|(v, _)| v.is_parallel())
                .map(|(_, d)| *d)
        })
    }
}

/// Ratios for all variants measured at one size.
pub struct SizeReport<'a> {
    size: usize,
    measurements: &'a [Measurement],
    reference: &'a ReferenceTimings,
}

impl<'a> SizeReport<'a> {
    pub fn new(
        size: usize,
        measurements: &'a [Measurement],
        reference: &'a ReferenceTimings,
    ) -> Self {
        Self {
            size,
            measurements,
            reference,
        }
    }

    /// Last measured duration of `variant` at this size.
    pub fn elapsed(&self, variant: Variant) -> Option<Duration> {
        self.measurements
            .iter()
            .rev()
            .find(|m| m.variant == variant)
            .map(|m| m.elapsed)
    }

    /// size / warm-up size
    pub fn size_factor(&self) -> f64 {
        self.size as f64 / self.reference.size() as f64
    }

    /// (size / warm-up size)³: how much more arithmetic this size does.
    pub fn work_factor(&self) -> f64 {
        self.size_factor().powi(3)
    }

    /// Each measured variant's duration over its warm-up baseline, in
    /// measurement order. Variants without a baseline are skipped.
    pub fn baseline_ratios(&self) -> Vec<(Variant, f64)> {
        let mut seen = Vec::new();
        let mut ratios = Vec::new();
        for m in self.measurements {
            if seen.contains(&m.variant) {
                continue;
            }
            seen.push(m.variant);
            let elapsed = self.elapsed(m.variant).unwrap_or(m.elapsed);
            if let Some(baseline) = self.reference.baseline_for(m.variant) {
                ratios.push((m.variant, ratio(elapsed, baseline)));
            }
        }
        ratios
    }

    /// Speedup of each step along naive → flipped → flipped-simd →
    /// flipped-simd-parallel (one entry per parallel setting measured).
    pub fn pairwise_ratios(&self) -> Vec<(Variant, Variant, f64)> {
        let mut pairs = vec![
            (Variant::Naive, Variant::Flipped),
            (Variant::Flipped, Variant::FlippedSimd),
        ];
        let mut parallel: Vec<Variant> = Vec::new();
        for m in self.measurements {
            if m.variant.is_parallel() && !parallel.contains(&m.variant) {
                parallel.push(m.variant);
            }
        }
        pairs.extend(parallel.into_iter().map(|p| (Variant::FlippedSimd, p)));

        pairs
            .into_iter()
            .filter_map(|(slow, fast)| {
                let r = ratio(self.elapsed(slow)?, self.elapsed(fast)?);
                Some((slow, fast, r))
            })
            .collect()
    }
}

impl fmt::Display for SizeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Factors: size {:.4}, calcs {:.4}",
            self.size_factor(),
            self.work_factor()
        )?;
        for (variant, r) in self.baseline_ratios() {
            write!(f, ", {}: {:.4}", variant, r)?;
        }
        writeln!(f)?;
        for (slow, fast, r) in self.pairwise_ratios() {
            writeln!(f, "{}:{}: {:.4}", slow, fast, r)?;
        }
        Ok(())
    }
}

/// GFLOPS per variant per size, filled in as a sweep progresses.
#[derive(Debug, Clone, Default)]
pub struct SweepSummary {
    sizes: Vec<usize>,
    rows: Vec<(Variant, Vec<Option<f64>>)>,
}

impl SweepSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column for `size` from the measurements taken there.
    pub fn push(&mut self, size: usize, measurements: &[Measurement]) {
        let column = self.sizes.len();
        self.sizes.push(size);
        for (_, cells) in &mut self.rows {
            cells.push(None);
        }

        for m in measurements {
            let idx = match self.rows.iter().position(|(v, _)| *v == m.variant) {
                Some(idx) => idx,
                None => {
                    self.rows.push((m.variant, vec![None; column + 1]));
                    self.rows.len() - 1
                }
            };
            self.rows[idx].1[column] = Some(m.gflops());
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// GFLOPS of `variant` at `size`, if it ran there.
    pub fn gflops(&self, variant: Variant, size: usize) -> Option<f64> {
        let column = self.sizes.iter().position(|&s| s == size)?;
        let (_, cells) = self.rows.iter().find(|(v, _)| *v == variant)?;
        cells[column]
    }
}

impl fmt::Display for SweepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 36 + 14 * self.sizes.len();
        writeln!(f, "{}", "=".repeat(width))?;
        writeln!(f, "SUMMARY (GFLOPS)")?;
        writeln!(f, "{}", "=".repeat(width))?;

        write!(f, "{:<36}", "Method")?;
        for size in &self.sizes {
            write!(f, " {:>13}", format!("{}x{}", size, size))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(width))?;

        for (variant, cells) in &self.rows {
            write!(f, "{:<36}", variant.label())?;
            for cell in cells {
                match cell {
                    Some(gflops) => write!(f, " {:>13.2}", gflops)?,
                    None => write!(f, " {:>13}", "-")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", "=".repeat(width))
    }
}
