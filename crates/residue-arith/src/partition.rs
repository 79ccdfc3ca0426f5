//! Bit-index work assignment across workers
//!
//! A partition splits the 64 exponent bit positions into one disjoint subset
//! per worker. Because modular multiplication is associative and commutative,
//! any partition that covers every index exactly once yields the same final
//! product regardless of which worker owns which indices. The two strategies
//! here are interchangeable and differ only in their scheduling ancestry:
//! striped assignment is the distributed-rank split, blocked assignment is
//! the static-schedule split.

use std::fmt;
use std::iter::StepBy;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::constants::EXPONENT_BITS;

/// Strategy for assigning exponent bit indices to workers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Partition {
    /// Worker `k` of `W` owns indices `{k, k + W, k + 2W, …}`.
    Striped,
    /// Worker `k` of `W` owns one contiguous chunk of `⌈64 / W⌉` indices.
    /// Trailing workers may own an empty range when `W` does not divide 64.
    #[default]
    Blocked,
}

impl Partition {
    /// Bit indices owned by `worker` out of `workers`, in ascending order.
    ///
    /// Ascending order is a contract, not a convenience: the partial-product
    /// routine replays the squaring chain forward and cannot revisit an
    /// earlier index.
    ///
    /// # Panics
    ///
    /// Panics if `workers == 0` or `worker >= workers`. Launch validation
    /// rejects both before any partition is materialized.
    pub fn indices(self, worker: u32, workers: u32) -> PartitionIndices {
        assert!(workers >= 1, "worker count must be non-zero");
        assert!(worker < workers, "worker {worker} out of range for {workers} workers");
        match self {
            Partition::Striped => PartitionIndices::Striped((worker..EXPONENT_BITS).step_by(workers as usize)),
            Partition::Blocked => {
                let chunk = EXPONENT_BITS.div_ceil(workers);
                let start = (worker * chunk).min(EXPONENT_BITS);
                let end = (start + chunk).min(EXPONENT_BITS);
                PartitionIndices::Blocked(start..end)
            }
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Striped => write!(f, "striped"),
            Partition::Blocked => write!(f, "blocked"),
        }
    }
}

impl std::str::FromStr for Partition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "striped" => Ok(Partition::Striped),
            "blocked" => Ok(Partition::Blocked),
            other => Err(format!("unknown partition strategy: {other}")),
        }
    }
}

/// Concrete iterator over one worker's bit indices.
#[derive(Debug, Clone)]
pub enum PartitionIndices {
    Striped(StepBy<Range<u32>>),
    Blocked(Range<u32>),
}

impl Iterator for PartitionIndices {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match self {
            PartitionIndices::Striped(iter) => iter.next(),
            PartitionIndices::Blocked(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            PartitionIndices::Striped(iter) => iter.size_hint(),
            PartitionIndices::Blocked(iter) => iter.size_hint(),
        }
    }
}
