//! Memoized objective values
use super::Objective;
use crate::error::{Error, Result};
use caches::{Cache, RawLRU};
use ndarray::ArrayView1;
use std::cell::{Cell, RefCell};

/// A struct to cache function values of an objective.
///
/// The nested finite differences evaluate the objective repeatedly at the same points
/// (`f(x)` alone is needed for every partial). Values are keyed by the exact bit pattern
/// of the point, so the results of a run do not change.
pub struct CachedObjective<'a, O>
where
    O: Objective,
{
    cache: RefCell<RawLRU<Vec<u64>, f64>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
    base: &'a O,
}

impl<O> CachedObjective<'_, O>
where
    O: Objective,
{
    /// Generates a cached version of the given objective holding up to `capacity` values.
    pub fn from(base: &O, capacity: usize) -> Result<CachedObjective<'_, O>> {
        let cache = RawLRU::new(capacity).map_err(|_| Error::InvalidParameter {
            name: "capacity",
            value: capacity as f64,
        })?;
        Ok(CachedObjective {
            cache: RefCell::new(cache),
            hits: Cell::new(0),
            misses: Cell::new(0),
            base,
        })
    }

    /// Number of evaluations answered from the cache
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Number of evaluations passed to the underlying objective
    pub fn misses(&self) -> usize {
        self.misses.get()
    }
}

impl<O> Objective for CachedObjective<'_, O>
where
    O: Objective,
{
    fn dim(&self) -> usize {
        self.base.dim()
    }

    fn value(&self, x: ArrayView1<f64>) -> f64 {
        let key: Vec<u64> = x.iter().map(|xi| xi.to_bits()).collect();
        let mut cache = self.cache.borrow_mut();
        if let Some(&v) = cache.get(&key) {
            self.hits.set(self.hits.get() + 1);
            return v;
        }
        self.misses.set(self.misses.get() + 1);
        let v = self.base.value(x);
        cache.put(key, v);
        v
    }
}
