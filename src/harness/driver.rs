//! Runs an [`ExperimentPlan`] front to back and writes the report.

use std::io::Write;
use std::time::Duration;

use rand::rngs::StdRng;

use super::instance::MulBench;
use super::plan::{Experiment, ExperimentPlan, Phase};
use super::report::{ReferenceTimings, SizeReport, SweepSummary};
use super::timer::Measurement;
use crate::error::Result;
use crate::matrix::random::input_rng;
use crate::matrix::{all_within_tolerance, max_abs_diff};
use crate::threaded::WorkerPools;
use crate::variant::{Variant, logical_cores};

/// Sequential experiment pipeline.
///
/// Owns the input random source and the worker pools, and keeps the
/// warm-up baselines for the lifetime of the run. Report lines go to `out`.
pub struct Driver<W: Write> {
    plan: ExperimentPlan,
    rng: StdRng,
    pools: WorkerPools,
    reference: Option<ReferenceTimings>,
    history: Vec<Measurement>,
    out: W,
}

impl<W: Write> Driver<W> {
    /// Validates `plan` and prepares to run it.
    pub fn new(plan: ExperimentPlan, out: W) -> Result<Self> {
        plan.validate()?;
        let rng = input_rng(plan.seed);
        Ok(Self {
            plan,
            rng,
            pools: WorkerPools::new(),
            reference: None,
            history: Vec::new(),
            out,
        })
    }

    /// Runs every experiment in order. Each one completes before the next
    /// starts.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Logical cores: {}", logical_cores())?;
        if let Some(seed) = self.plan.seed {
            writeln!(self.out, "Seed: {}", seed)?;
        }

        let experiments = self.plan.experiments.clone();
        for experiment in &experiments {
            self.run_experiment(experiment)?;
        }
        Ok(())
    }

    /// Baselines captured by the warm-up, once it has run.
    pub fn reference_timings(&self) -> Option<&ReferenceTimings> {
        self.reference.as_ref()
    }

    /// Every reported measurement so far, in run order.
    pub fn history(&self) -> &[Measurement] {
        &self.history
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn run_experiment(&mut self, experiment: &Experiment) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "== {} ==", experiment.phase)?;

        let mut summary = SweepSummary::new();
        for &size in &experiment.sizes {
            let mut bench = MulBench::new(size, &mut self.rng);

            if experiment.reference_runs > 0 {
                self.prime_reference(&mut bench, experiment.reference_runs)?;
            }

            let mut measured = Vec::new();
            for _ in 0..experiment.iterations {
                measured = self.run_pass(&mut bench, experiment)?;
            }

            match experiment.phase {
                Phase::WarmUp => {
                    let mut timings = ReferenceTimings::new(size);
                    for m in &measured {
                        timings.record(m.variant, m.elapsed);
                    }
                    self.reference = Some(timings);
                }
                _ => {
                    if let Some(reference) = &self.reference {
                        write!(self.out, "{}", SizeReport::new(size, &measured, reference))?;
                    }
                }
            }

            if experiment.phase == Phase::Sweep {
                summary.push(size, &measured);
            }
            self.history.extend(measured);
        }

        match experiment.phase {
            Phase::WarmUp => {
                writeln!(self.out)?;
                writeln!(self.out, "Warmed up.")?;
            }
            Phase::Sweep => {
                writeln!(self.out)?;
                write!(self.out, "{}", summary)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// One pass over the experiment's variants; returns their measurements.
    fn run_pass(
        &mut self,
        bench: &mut MulBench,
        experiment: &Experiment,
    ) -> Result<Vec<Measurement>> {
        let mut measured = Vec::with_capacity(experiment.variants.len());
        let mut expected: Option<Vec<f32>> = None;

        for &variant in &experiment.variants {
            let m = bench.compute(variant, &mut self.pools)?;
            write!(self.out, "{}", m)?;

            if experiment.verify {
                if let Some(expected) = &expected {
                    let diff = max_abs_diff(expected, bench.output());
                    let verdict = if all_within_tolerance(expected, bench.output()) {
                        "ok"
                    } else {
                        "MISMATCH"
                    };
                    write!(self.out, " max |diff| vs reference {:.2e} {}", diff, verdict)?;
                } else if variant == Variant::Reference {
                    expected = Some(bench.output().to_vec());
                }
            }
            writeln!(self.out)?;
            measured.push(m);
        }
        Ok(measured)
    }

    /// Runs the reference kernel `runs` times and reports the best.
    fn prime_reference(&mut self, bench: &mut MulBench, runs: usize) -> Result<()> {
        let mut best = Duration::MAX;
        for _ in 0..runs {
            let m = bench.compute(Variant::Reference, &mut self.pools)?;
            writeln!(self.out, "{}", m)?;
            best = best.min(m.elapsed);
        }
        writeln!(self.out, "best reference of {} runs: {:.3?}", runs, best)?;
        Ok(())
    }
}
