// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking entropy primitives.
//!
//! Provides mock implementations with configurable behaviour that record how
//! they were driven.

mod mock_backend;
mod mock_capability;
mod mock_device;

pub use mock_backend::{MOCK_FILL_BYTE, MockBackend, MockBackendBehaviour};
pub use mock_capability::MockCapability;
pub use mock_device::{MockDeviceBehaviour, MockDeviceHandle, MockDeviceOpener};
