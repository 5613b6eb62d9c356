// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::backend::{Backend, BackendKind};
use crate::error::NativeError;

/// Byte written by [`MockBackend`] into every position it claims to fill.
pub const MOCK_FILL_BYTE: u8 = 0xA5;

/// Configurable behaviour for [`MockBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBackendBehaviour {
    /// Every draw fills the whole request.
    None,
    /// Every draw produces at most this many bytes.
    ShortDraws(usize),
    /// The first `n` draws fail with the given error, later draws succeed.
    FailTransiently(usize, NativeError),
    /// Every draw fails with the given error.
    FailAlways(NativeError),
    /// The `n`-th draw (1-based) fails with the given error, the others
    /// succeed.
    FailAtNthDraw(usize, NativeError),
    /// Every draw succeeds without producing anything.
    StallAlways,
    /// Every draw fills the request but reports one byte more.
    Overreport,
}

/// Mock primitive recording the length of every draw it receives.
pub struct MockBackend {
    kind: BackendKind,
    max_chunk: Option<usize>,
    behaviour: MockBackendBehaviour,
    requested: Vec<usize>,
}

impl MockBackend {
    /// Creates an unbounded mock with the specified behaviour.
    pub fn new(behaviour: MockBackendBehaviour) -> Self {
        Self {
            kind: BackendKind::KernelSyscall,
            max_chunk: None,
            behaviour,
            requested: Vec::new(),
        }
    }

    /// Caps every draw at `cap` bytes.
    pub fn with_max_chunk(mut self, cap: usize) -> Self {
        self.max_chunk = Some(cap);
        self
    }

    /// Reports `kind` from [`Backend::kind`].
    pub fn with_kind(mut self, kind: BackendKind) -> Self {
        self.kind = kind;
        self
    }

    /// Changes the mock behaviour at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockBackendBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of draws issued so far.
    pub fn call_count(&self) -> usize {
        self.requested.len()
    }

    /// Requested length of every draw, in order.
    pub fn requested(&self) -> &[usize] {
        &self.requested
    }

    /// Forgets recorded draws.
    pub fn reset_count(&mut self) {
        self.requested.clear();
    }

    fn produce(dest: &mut [u8], len: usize) -> usize {
        dest[..len].fill(MOCK_FILL_BYTE);
        len
    }
}

impl Backend for MockBackend {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn max_chunk(&self) -> Option<usize> {
        self.max_chunk
    }

    fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        self.requested.push(dest.len());
        let call = self.requested.len();
        let len = dest.len();

        match self.behaviour {
            MockBackendBehaviour::None => Ok(Self::produce(dest, len)),
            MockBackendBehaviour::ShortDraws(max) => Ok(Self::produce(dest, max.min(len))),
            MockBackendBehaviour::FailTransiently(times, err) if call <= times => Err(err),
            MockBackendBehaviour::FailTransiently(..) => Ok(Self::produce(dest, len)),
            MockBackendBehaviour::FailAlways(err) => Err(err),
            MockBackendBehaviour::FailAtNthDraw(nth, err) if call == nth => Err(err),
            MockBackendBehaviour::FailAtNthDraw(..) => Ok(Self::produce(dest, len)),
            MockBackendBehaviour::StallAlways => Ok(0),
            MockBackendBehaviour::Overreport => Ok(Self::produce(dest, len) + 1),
        }
    }
}
