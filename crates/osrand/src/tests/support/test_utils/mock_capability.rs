// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::backend::BackendKind;
use crate::probe::Capability;
use crate::support::test_utils::MockCapability;

#[test]
fn test_mock_capability_counts_probes() {
    let mock = MockCapability::new(BackendKind::KernelDraw, false);

    assert_eq!(mock.provides(), BackendKind::KernelDraw);
    assert_eq!(mock.probe_count(), 0);

    assert!(!mock.is_available());
    assert!(!mock.is_available());
    assert_eq!(mock.probe_count(), 2);
}
