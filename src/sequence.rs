//! Bounded, growable integer sequence.

use thiserror::Error;

use crate::sorter::SortAlgorithm;

/// Default element bound, matching the largest input the analysis accepts.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Raised when a push would take a [`Sequence`] past its element bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("sequence capacity of {capacity} elements exceeded")]
pub struct CapacityExceeded {
    pub capacity: usize,
}

/// An ordered collection of signed integers that refuses to grow past a
/// configured maximum instead of dropping values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i64>,
    capacity: usize,
}

impl Sequence {
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Sequence {
            values: Vec::new(),
            capacity,
        }
    }

    /// Build a sequence from existing values, failing if there are too many.
    pub fn try_from_values(capacity: usize, values: Vec<i64>) -> Result<Self, CapacityExceeded> {
        if values.len() > capacity {
            return Err(CapacityExceeded { capacity });
        }
        Ok(Sequence { values, capacity })
    }

    /// Append a value. On failure the sequence is left unchanged.
    pub fn push(&mut self, value: i64) -> Result<(), CapacityExceeded> {
        if self.is_full() {
            return Err(CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.values.push(value);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Mutable view of the values. The length cannot change through it, so
    /// the capacity bound still holds.
    pub fn as_mut_slice(&mut self) -> &mut [i64] {
        &mut self.values
    }

    /// Reorder the sequence ascending in place.
    pub fn sort(&mut self, algorithm: SortAlgorithm) {
        algorithm.apply(self.as_mut_slice());
    }

    pub fn into_vec(self) -> Vec<i64> {
        self.values
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Sequence::with_capacity_limit(DEFAULT_CAPACITY)
    }
}
