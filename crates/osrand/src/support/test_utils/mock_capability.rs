// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::BackendKind;
use crate::probe::Capability;

/// Mock presence test with a fixed answer, counting how often it is asked.
pub struct MockCapability {
    kind: BackendKind,
    available: bool,
    probes: AtomicUsize,
}

impl MockCapability {
    /// Creates a capability for `kind` that always answers `available`.
    pub const fn new(kind: BackendKind, available: bool) -> Self {
        Self {
            kind,
            available,
            probes: AtomicUsize::new(0),
        }
    }

    /// Number of presence tests run so far.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }
}

impl Capability for MockCapability {
    fn provides(&self) -> BackendKind {
        self.kind
    }

    fn is_available(&self) -> bool {
        self.probes.fetch_add(1, Ordering::SeqCst);
        self.available
    }
}
