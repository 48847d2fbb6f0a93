//! Bit-mask algebra -- conflict detection, merging, and checked deletion.
//!
//! All operations work on hour chunks (`u64` integers of `slots_per_hour`
//! bits) and are applied per chunk in a fail-fast loop: the first conflicting
//! chunk aborts the operation, and callers discard any partial results.
//!
//! The conflict test rests on one identity: `a ^ b == a | b` exactly when
//! `a & b == 0`. A single comparison both detects overlap and, on success,
//! yields the merged pattern (`a ^ b`, which equals `a | b`).

use crate::codec::format_chunk;
use crate::error::{Result, WeekbitsError};
use crate::interval::TimeInterval;

/// Chunked bitwise operations at a fixed granularity.
///
/// The granularity only matters for the complement mask (an hour chunk is
/// `slots_per_hour` bits wide, not 64) and for error reporting.
#[derive(Debug, Clone, Copy)]
pub struct ChunkAlgebra {
    interval: TimeInterval,
}

impl ChunkAlgebra {
    pub fn new(interval: TimeInterval) -> Self {
        Self { interval }
    }

    /// Bitwise NOT restricted to the chunk width.
    pub fn complement(&self, chunk: u64) -> u64 {
        !chunk & self.interval.chunk_mask()
    }

    /// Merge two disjoint bit patterns, failing when they share a set bit.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::SlotConflict`] when `a & b != 0`.
    pub fn merge_disjoint(&self, a: u64, b: u64) -> Result<u64> {
        let merged = a ^ b;
        if merged == a | b {
            Ok(merged)
        } else {
            let width = self.interval.slots_per_hour();
            Err(WeekbitsError::SlotConflict {
                existing: format_chunk(a, width),
                incoming: format_chunk(b, width),
                interval_minutes: self.interval.minutes(),
            })
        }
    }

    /// Merge an appointment's chunks into a base pattern, chunk by chunk.
    ///
    /// Fails at the first conflicting chunk without touching the remaining
    /// ones; the partial result is dropped with the error.
    pub fn merge_chunks(&self, appointment: &[u64], base: &[u64]) -> Result<Vec<u64>> {
        appointment
            .iter()
            .zip(base)
            .map(|(&a, &b)| self.merge_disjoint(a, b))
            .collect()
    }

    /// Fold an appointment into `target`, requiring it to lie inside
    /// `envelope` first.
    ///
    /// Two independent checks per chunk:
    /// 1. the appointment must not overlap the complement of `envelope`
    ///    ("fits within availability" is "disjoint from the unavailable
    ///    remainder");
    /// 2. the appointment must not overlap `target` (no double booking).
    ///
    /// The second check's merge result is the new target chunk.
    pub fn fit_and_merge(
        &self,
        target: &[u64],
        envelope: &[u64],
        appointment: &[u64],
    ) -> Result<Vec<u64>> {
        appointment
            .iter()
            .zip(target.iter().zip(envelope))
            .map(|(&appt, (&tgt, &env))| {
                self.merge_disjoint(appt, self.complement(env))?;
                self.merge_disjoint(appt, tgt)
            })
            .collect()
    }

    /// Whether every set bit of `bits` is also set in `base`.
    pub fn is_subset(&self, base: u64, bits: u64) -> bool {
        base | bits == base
    }

    /// Clear exactly the bits of `to_delete` from `base`.
    ///
    /// # Errors
    /// Returns [`WeekbitsError::InvalidDeletion`] when `to_delete` has bits
    /// not set in `base` -- only time actually present can be removed.
    pub fn clear(&self, base: u64, to_delete: u64) -> Result<u64> {
        if !self.is_subset(base, to_delete) {
            let width = self.interval.slots_per_hour();
            return Err(WeekbitsError::InvalidDeletion {
                base: format_chunk(base, width),
                to_delete: format_chunk(to_delete, width),
            });
        }
        Ok(base ^ to_delete)
    }
}
