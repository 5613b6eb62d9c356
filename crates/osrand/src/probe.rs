// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend discovery and the process-wide memoized selection.
//!
//! Discovery walks a ranked candidate list and commits to the first candidate
//! whose presence test passes. The last candidate is the family's fallback and
//! is committed even if its test fails. Presence tests have no side effects,
//! so racing first callers may all run discovery: they reach the same answer
//! and the first compare-exchange wins.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::backend::BackendKind;
use crate::{config, sys};

/// Kind used when a candidate list is empty.
const EMPTY_FALLBACK: BackendKind = BackendKind::DeviceFile;

/// Selection state: nothing committed yet
const UNCOMMITTED: u8 = 0;

/// Runtime presence test for one backend.
pub trait Capability: Sync {
    /// The backend this capability stands for.
    fn provides(&self) -> BackendKind;

    /// Whether the backend can be used on this host right now.
    ///
    /// Must be free of side effects visible to other callers and must give
    /// the same answer every time within one process.
    fn is_available(&self) -> bool;
}

/// Returns the first available candidate, or the last one as fallback.
pub fn discover(candidates: &[&dyn Capability]) -> BackendKind {
    for candidate in candidates {
        let available = candidate.is_available();
        log::trace!("probe {}: available={available}", candidate.provides());

        if available {
            return candidate.provides();
        }
    }

    candidates
        .last()
        .map_or(EMPTY_FALLBACK, |fallback| fallback.provides())
}

/// A backend choice that is committed once and then never changes.
pub struct Selection {
    committed: AtomicU8,
}

impl Selection {
    /// Creates an uncommitted selection.
    pub const fn new() -> Self {
        Self {
            committed: AtomicU8::new(UNCOMMITTED),
        }
    }

    /// The committed kind, if any.
    #[inline]
    pub fn committed(&self) -> Option<BackendKind> {
        BackendKind::from_code(self.committed.load(Ordering::Acquire))
    }

    /// Returns the committed kind, running discovery over `candidates` first
    /// if nothing is committed yet.
    pub fn get_or_select(&self, candidates: &[&dyn Capability]) -> BackendKind {
        self.get_or_select_with(|| discover(candidates))
    }

    /// Returns the committed kind, committing the result of `select` if
    /// nothing is committed yet.
    ///
    /// Concurrent first callers may each run `select`; only the first commit
    /// sticks and every caller returns it.
    pub fn get_or_select_with(&self, select: impl FnOnce() -> BackendKind) -> BackendKind {
        // Fast path: already committed
        if let Some(kind) = self.committed() {
            return kind;
        }

        self.commit(select())
    }

    #[cold]
    fn commit(&self, kind: BackendKind) -> BackendKind {
        match self.committed.compare_exchange(
            UNCOMMITTED,
            kind.code(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                log::debug!("entropy backend committed: {kind}");
                kind
            }
            Err(existing) => BackendKind::from_code(existing).unwrap_or(kind),
        }
    }

    #[cfg(test)]
    pub(crate) fn reset(&self) {
        self.committed.store(UNCOMMITTED, Ordering::SeqCst);
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) static SELECTION: Selection = Selection::new();

/// The backend used by [`fill`](crate::fill) for the rest of the process.
///
/// **Side effect on first call:** runs discovery for the target's platform
/// family (unless a backend was forced at build time through
/// `OSRAND_BACKEND`) and commits the result. Later calls return the committed
/// value without probing again.
///
/// # Example
///
/// ```
/// let kind = osrand::select_backend();
/// assert_eq!(kind, osrand::select_backend());
/// ```
pub fn select_backend() -> BackendKind {
    SELECTION.get_or_select_with(|| resolve(config::backend_override(), sys::CANDIDATES))
}

/// A forced kind wins without running any presence test; otherwise
/// [`discover`] over `candidates`.
pub(crate) fn resolve(
    forced: Option<BackendKind>,
    candidates: &[&dyn Capability],
) -> BackendKind {
    match forced {
        Some(kind) => {
            log::debug!("entropy backend forced at build time: {kind}");
            kind
        }
        None => discover(candidates),
    }
}
