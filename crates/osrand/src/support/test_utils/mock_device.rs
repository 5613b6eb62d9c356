// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::device::{DeviceHandle, DeviceOpener};
use crate::error::NativeError;

use super::MOCK_FILL_BYTE;

/// Configurable behaviour for [`MockDeviceOpener`] and its handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockDeviceBehaviour {
    /// Opens succeed and every read fills the request.
    None,
    /// Opening fails with the given error.
    FailAtOpen(NativeError),
    /// Opening succeeds, every read fails with the given error.
    FailAtRead(NativeError),
    /// Every read produces at most this many bytes.
    ShortReads(usize),
    /// Every read reports end of stream.
    Eof,
}

/// Mock device opener counting opens and handle releases.
#[derive(Clone)]
pub struct MockDeviceOpener {
    behaviour: MockDeviceBehaviour,
    opens: Arc<AtomicUsize>,
    closes: Arc<AtomicUsize>,
}

impl MockDeviceOpener {
    /// Creates a new mock opener with the specified behaviour.
    pub fn new(behaviour: MockDeviceBehaviour) -> Self {
        Self {
            behaviour,
            opens: Arc::new(AtomicUsize::new(0)),
            closes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Successful opens so far.
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    /// Handles released so far.
    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl DeviceOpener for MockDeviceOpener {
    type Handle = MockDeviceHandle;

    fn open(&self, _path: &str) -> Result<MockDeviceHandle, NativeError> {
        if let MockDeviceBehaviour::FailAtOpen(err) = self.behaviour {
            return Err(err);
        }

        self.opens.fetch_add(1, Ordering::SeqCst);

        Ok(MockDeviceHandle {
            behaviour: self.behaviour,
            closes: Arc::clone(&self.closes),
        })
    }
}

/// Handle produced by [`MockDeviceOpener`]. Dropping it counts as a close.
pub struct MockDeviceHandle {
    behaviour: MockDeviceBehaviour,
    closes: Arc<AtomicUsize>,
}

impl DeviceHandle for MockDeviceHandle {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        let len = match self.behaviour {
            MockDeviceBehaviour::FailAtRead(err) | MockDeviceBehaviour::FailAtOpen(err) => {
                return Err(err);
            }
            MockDeviceBehaviour::Eof => 0,
            MockDeviceBehaviour::ShortReads(max) => max.min(dest.len()),
            MockDeviceBehaviour::None => dest.len(),
        };

        dest[..len].fill(MOCK_FILL_BYTE);
        Ok(len)
    }
}

impl Drop for MockDeviceHandle {
    fn drop(&mut self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
