//! Worker pools reused across benchmark runs.

use std::collections::BTreeMap;

use super::flipped_simd_mt::FlippedSimdPool;
use crate::error::Result;
use crate::variant::Parallelism;

/// One [`FlippedSimdPool`] per parallelism setting, built on first use.
#[derive(Default)]
pub struct WorkerPools {
    pools: BTreeMap<Parallelism, FlippedSimdPool>,
}

impl WorkerPools {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pool for `parallelism`, building it if this is the first request.
    pub fn get(&mut self, parallelism: Parallelism) -> Result<&FlippedSimdPool> {
        if !self.pools.contains_key(&parallelism) {
            let pool = FlippedSimdPool::new(parallelism)?;
            self.pools.insert(parallelism, pool);
        }
        Ok(&self.pools[&parallelism])
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
