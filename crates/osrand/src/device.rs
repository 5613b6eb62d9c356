// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Device-file backend: reads a kernel random device through a file handle.
//!
//! The handle lives for exactly one fill. It is opened at the start and
//! released when the stream is dropped, which covers every exit path of the
//! fill including failures after a successful open. A failed open has nothing
//! to release.

use std::fs::File;
use std::io::Read;

use crate::backend::{Backend, BackendKind};
use crate::error::{ErrorKind, NativeError};
use crate::fill::fill_with;
use crate::probe::Capability;

/// Opens handles to a random device.
pub trait DeviceOpener {
    /// Open handle. Dropping it releases the OS resource.
    type Handle: DeviceHandle;

    /// Opens `path` for reading.
    ///
    /// # Errors
    ///
    /// The native failure of the open call.
    fn open(&self, path: &str) -> Result<Self::Handle, NativeError>;
}

/// An open random device.
pub trait DeviceHandle {
    /// Reads up to `dest.len()` bytes and returns how many were read.
    /// `Ok(0)` means end of stream.
    ///
    /// # Errors
    ///
    /// The native failure of the read call.
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, NativeError>;
}

/// Opens devices through [`std::fs::File`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl DeviceOpener for FsOpener {
    type Handle = File;

    fn open(&self, path: &str) -> Result<File, NativeError> {
        File::open(path).map_err(NativeError::from)
    }
}

impl DeviceHandle for File {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        Read::read(self, dest).map_err(NativeError::from)
    }
}

/// Device-file backend bound to one path.
///
/// # Example
///
/// ```no_run
/// use osrand::{DevRandom, FsOpener};
///
/// let device = DevRandom::new("/dev/urandom", FsOpener);
/// let mut key = [0u8; 32];
/// device.fill(&mut key).expect("Failed to fill(..)");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DevRandom<O> {
    path: &'static str,
    opener: O,
}

impl<O: DeviceOpener> DevRandom<O> {
    /// Creates a backend reading `path` through `opener`.
    pub const fn new(path: &'static str, opener: O) -> Self {
        Self { path, opener }
    }

    /// Device path.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Fills `dest` from a freshly opened handle, releasing it before
    /// returning.
    ///
    /// # Errors
    ///
    /// The normalized open failure, or any failure of
    /// [`fill_with`](crate::fill_with) over the open handle.
    pub fn fill(&self, dest: &mut [u8]) -> Result<(), ErrorKind> {
        if dest.is_empty() {
            return Ok(());
        }

        let handle = self.opener.open(self.path).map_err(|err| {
            log::debug!("opening {} failed: {err}", self.path);
            ErrorKind::from(err)
        })?;

        let mut stream = DeviceStream { handle };
        fill_with(&mut stream, dest)
    }
}

impl<O: DeviceOpener + Sync> Capability for DevRandom<O> {
    fn provides(&self) -> BackendKind {
        BackendKind::DeviceFile
    }

    // Universal fallback of its platform family: a missing device surfaces
    // as an open failure at fill time.
    fn is_available(&self) -> bool {
        true
    }
}

struct DeviceStream<H> {
    handle: H,
}

impl<H: DeviceHandle> Backend for DeviceStream<H> {
    fn kind(&self) -> BackendKind {
        BackendKind::DeviceFile
    }

    #[inline(always)]
    fn draw(&mut self, dest: &mut [u8]) -> Result<usize, NativeError> {
        self.handle.read(dest)
    }
}
