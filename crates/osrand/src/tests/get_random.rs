// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::thread;

use crate::error::{ErrorKind, NativeError};
use crate::support::test_utils::{MOCK_FILL_BYTE, MockBackend, MockBackendBehaviour};
use crate::{fill, get_random, get_random_with};

#[test]
fn test_get_random_with_size_zero_never_draws() {
    let mut backend = MockBackend::new(MockBackendBehaviour::None);
    let mut buf = [7u8; 16];

    assert!(get_random_with(&mut backend, &mut buf, 0).is_ok());
    assert_eq!(backend.call_count(), 0);
    assert_eq!(buf, [7u8; 16]);
}

#[test]
fn test_get_random_with_fills_only_the_prefix() {
    let mut backend = MockBackend::new(MockBackendBehaviour::None);
    let mut buf = [0u8; 32];

    get_random_with(&mut backend, &mut buf, 20).expect("Failed to get_random_with(..)");

    assert!(buf[..20].iter().all(|b| *b == MOCK_FILL_BYTE));
    assert!(buf[20..].iter().all(|b| *b == 0));
    assert_eq!(backend.requested(), &[20]);
}

#[test]
fn test_get_random_with_size_past_buffer_is_invalid_argument() {
    let mut backend = MockBackend::new(MockBackendBehaviour::None);
    let mut buf = [0u8; 8];

    assert_eq!(
        get_random_with(&mut backend, &mut buf, 9),
        Err(ErrorKind::InvalidArgument)
    );
    assert_eq!(backend.call_count(), 0);
    assert_eq!(buf, [0u8; 8]);
}

#[test]
fn test_get_random_with_surfaces_normalized_error() {
    let mut backend = MockBackend::new(MockBackendBehaviour::FailAlways(NativeError::OsStatus(-108)));
    let mut buf = [0u8; 8];

    assert_eq!(get_random_with(&mut backend, &mut buf, 8), Err(ErrorKind::OutOfMemory));
}

#[test]
fn test_get_random_size_past_buffer_is_invalid_argument() {
    let mut buf = [0u8; 4];

    assert_eq!(get_random(&mut buf, 5), Err(ErrorKind::InvalidArgument));
    assert_eq!(buf, [0u8; 4]);
}

#[test]
fn test_get_random_size_zero_leaves_buffer_alone() {
    let mut buf = [0u8; 4];

    assert!(get_random(&mut buf, 0).is_ok());
    assert_eq!(buf, [0u8; 4]);
}

#[test]
fn test_get_random_real_host() {
    let mut buf = [0u8; 1024];

    get_random(&mut buf, 1000).expect("Failed to get_random(..)");

    assert!(buf[..1000].iter().any(|b| *b != 0));
    assert!(buf[1000..].iter().all(|b| *b == 0));
}

#[test]
fn test_fill_real_host_distinct_outputs() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    fill(&mut a).expect("Failed to fill(..)");
    fill(&mut b).expect("Failed to fill(..)");

    assert_ne!(a, b);
}

#[test]
fn test_fill_empty_slice_ok() {
    let mut buf = [];
    assert!(fill(&mut buf).is_ok());
}

#[test]
fn test_fill_concurrent_callers() {
    let outputs: Vec<[u8; 64]> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let mut buf = [0u8; 64];
                    fill(&mut buf).expect("Failed to fill(..)");
                    buf
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("Failed to join(..)"))
            .collect()
    });

    for (i, a) in outputs.iter().enumerate() {
        for b in &outputs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
