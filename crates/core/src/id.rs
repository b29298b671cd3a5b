//! Strongly-typed identifiers and the pallet id allocator.

use core::str::FromStr;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::error::{DomainError, DomainResult};

/// Identifier of a pallet.
///
/// Ids are positive; `0` is the allocator's "nothing issued yet" state and is
/// never handed out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PalletId(u64);

impl PalletId {
    /// Wrap an explicit id (e.g. one restored from storage).
    pub fn new(value: u64) -> DomainResult<Self> {
        if value == 0 {
            return Err(DomainError::invalid_id("PalletId: must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for PalletId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<PalletId> for u64 {
    fn from(value: PalletId) -> Self {
        value.0
    }
}

impl FromStr for PalletId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = u64::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("PalletId: {e}")))?;
        Self::new(value)
    }
}

/// Monotonic source of [`PalletId`]s.
///
/// One allocator is shared by every pallet construction site of a run and is
/// passed in explicitly. Explicitly assigned ids are reported back through
/// [`IdAllocator::note_id`] so that later automatic ids never collide with
/// anything already seen.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id (the first one is `1`).
    pub fn next_id(&self) -> PalletId {
        PalletId(self.last.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Raise the counter to at least `id`.
    pub fn note_id(&self, id: PalletId) {
        self.last.fetch_max(id.0, Ordering::SeqCst);
    }

    /// The highest id issued or noted so far (`0` before any).
    pub fn last_issued(&self) -> u64 {
        self.last.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_id_is_one() {
        let ids = IdAllocator::new();
        assert_eq!(ids.last_issued(), 0);
        assert_eq!(ids.next_id().get(), 1);
        assert_eq!(ids.next_id().get(), 2);
    }

    #[test]
    fn noted_id_bumps_counter() {
        let ids = IdAllocator::new();
        ids.note_id(PalletId::new(10).unwrap());
        assert_eq!(ids.next_id().get(), 11);
    }

    #[test]
    fn noting_lower_id_keeps_counter() {
        let ids = IdAllocator::new();
        for _ in 0..5 {
            ids.next_id();
        }
        ids.note_id(PalletId::new(2).unwrap());
        assert_eq!(ids.last_issued(), 5);
        assert_eq!(ids.next_id().get(), 6);
    }

    #[test]
    fn zero_id_is_rejected() {
        assert!(matches!(PalletId::new(0), Err(DomainError::InvalidId(_))));
        assert!(matches!("0".parse::<PalletId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("abc".parse::<PalletId>(), Err(DomainError::InvalidId(_))));
        assert_eq!("42".parse::<PalletId>().unwrap().get(), 42);
    }

    #[test]
    fn concurrent_allocation_yields_distinct_ids() {
        let ids = IdAllocator::new();
        let shared = &ids;
        let mut issued: Vec<u64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || (0..250).map(|_| shared.next_id().get()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });
        issued.sort_unstable();
        issued.dedup();
        assert_eq!(issued.len(), 1000);
        assert_eq!(ids.last_issued(), 1000);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: automatic ids are strictly increasing and always exceed
        /// every id noted before them.
        #[test]
        fn ids_stay_monotonic(noted in prop::collection::vec(1u64..10_000u64, 0..20), auto in 1usize..20) {
            let ids = IdAllocator::new();
            let mut max_seen = 0;
            for v in noted {
                ids.note_id(PalletId::new(v).unwrap());
                max_seen = max_seen.max(v);
            }

            let mut prev = max_seen;
            for _ in 0..auto {
                let id = ids.next_id().get();
                prop_assert!(id > prev);
                prev = id;
            }
        }
    }
}
