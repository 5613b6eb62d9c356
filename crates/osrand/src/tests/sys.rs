// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::backend::BackendKind;
use crate::error::ErrorKind;
use crate::probe::{Capability, discover};
use crate::sys::{self, CANDIDATES};

#[test]
fn test_candidates_are_not_empty() {
    assert!(!CANDIDATES.is_empty());
}

#[test]
fn test_discovered_kind_fills() {
    let kind = discover(CANDIDATES);
    let mut buf = [0u8; 300];

    sys::fill(kind, &mut buf).expect("Failed to fill(..)");

    assert!(buf.iter().any(|b| *b != 0));
}

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux {
    use super::*;

    #[test]
    fn test_candidate_order() {
        let order: Vec<BackendKind> = CANDIDATES.iter().map(|c| c.provides()).collect();

        assert_eq!(
            order,
            [
                BackendKind::KernelSyscall,
                BackendKind::LibcEntropy,
                BackendKind::DeviceFile
            ]
        );
    }

    #[test]
    fn test_device_fallback_is_always_available() {
        let fallback = CANDIDATES.last().expect("Failed to get last candidate");
        assert!(fallback.is_available());
    }

    #[test]
    fn test_kernel_syscall_fills_across_chunks() {
        let mut buf = vec![0u8; 4096];

        sys::fill(BackendKind::KernelSyscall, &mut buf).expect("Failed to fill(..)");

        assert!(buf.iter().any(|b| *b != 0));
    }

    #[cfg(target_env = "gnu")]
    #[test]
    fn test_libc_entropy_fills_across_chunks() {
        let mut buf = vec![0u8; 1000];

        sys::fill(BackendKind::LibcEntropy, &mut buf).expect("Failed to fill(..)");

        assert!(buf[..256].iter().any(|b| *b != 0));
        assert!(buf[768..].iter().any(|b| *b != 0));
    }

    #[test]
    fn test_device_file_fills() {
        let mut buf = [0u8; 64];

        sys::fill(BackendKind::DeviceFile, &mut buf).expect("Failed to fill(..)");

        assert!(buf.iter().any(|b| *b != 0));
    }

    #[test]
    fn test_foreign_kinds_are_not_supported() {
        let mut buf = [0u8; 8];

        for kind in [
            BackendKind::OsSecureRng,
            BackendKind::LegacyCrypto,
            BackendKind::KernelDraw,
        ] {
            assert_eq!(sys::fill(kind, &mut buf), Err(ErrorKind::NotSupported));
        }
    }

    /// Runs discovery in a child whose `getrandom(2)` is denied by a seccomp
    /// filter, the way sandboxes and old kernels present it.
    #[cfg(target_os = "linux")]
    mod seccomp {
        use core::ffi::c_ulong;

        use serial_test::serial;

        use super::*;

        const BPF_LD: u16 = 0x00;
        const BPF_W: u16 = 0x00;
        const BPF_ABS: u16 = 0x20;
        const BPF_JMP: u16 = 0x05;
        const BPF_JEQ: u16 = 0x10;
        const BPF_K: u16 = 0x00;
        const BPF_RET: u16 = 0x06;

        const SECCOMP_MODE_FILTER: c_ulong = 2;
        const SECCOMP_RET_ALLOW: u32 = 0x7fff_0000;
        const SECCOMP_RET_ERRNO: u32 = 0x0005_0000;

        #[repr(C)]
        struct SockFilter {
            code: u16,
            jt: u8,
            jf: u8,
            k: u32,
        }

        #[repr(C)]
        struct SockFprog {
            len: u16,
            filter: *const SockFilter,
        }

        /// Makes every `getrandom(2)` fail with `errno` for the rest of the
        /// process.
        fn deny_getrandom(errno: i32) {
            let program = [
                // seccomp_data.nr sits at offset 0.
                SockFilter {
                    code: BPF_LD | BPF_W | BPF_ABS,
                    jt: 0,
                    jf: 0,
                    k: 0,
                },
                SockFilter {
                    code: BPF_JMP | BPF_JEQ | BPF_K,
                    jt: 0,
                    jf: 1,
                    k: libc::SYS_getrandom as u32,
                },
                SockFilter {
                    code: BPF_RET | BPF_K,
                    jt: 0,
                    jf: 0,
                    k: SECCOMP_RET_ERRNO | (errno as u32 & 0xffff),
                },
                SockFilter {
                    code: BPF_RET | BPF_K,
                    jt: 0,
                    jf: 0,
                    k: SECCOMP_RET_ALLOW,
                },
            ];
            let fprog = SockFprog {
                len: program.len() as u16,
                filter: program.as_ptr(),
            };

            // SAFETY: plain prctl calls; `fprog` points at `program`, both
            // alive for the duration of the call.
            unsafe {
                let (one, zero): (c_ulong, c_ulong) = (1, 0);
                assert_eq!(libc::prctl(libc::PR_SET_NO_NEW_PRIVS, one, zero, zero, zero), 0);
                assert_eq!(
                    libc::prctl(
                        libc::PR_SET_SECCOMP,
                        SECCOMP_MODE_FILTER,
                        &fprog as *const SockFprog,
                    ),
                    0,
                    "Failed to install seccomp filter"
                );
            }
        }

        fn assert_falls_back_to_device() {
            assert!(!CANDIDATES[0].is_available(), "syscall should be absent");
            assert!(!CANDIDATES[1].is_available(), "getentropy should be absent");

            let kind = discover(CANDIDATES);
            assert_eq!(kind, BackendKind::DeviceFile);

            let mut buf = [0u8; 64];
            sys::fill(kind, &mut buf).expect("Failed to fill(..)");
            assert!(buf.iter().any(|b| *b != 0));

            assert!(sys::fill(BackendKind::KernelSyscall, &mut buf).is_err());
        }

        fn run_test_as_subprocess(test_name: &str) -> Option<i32> {
            let exe = std::env::current_exe().expect("Failed to get current exe");
            let status = std::process::Command::new(exe)
                .args([
                    "--exact",
                    test_name,
                    "--ignored",
                    "--test-threads=1",
                    "--nocapture",
                ])
                .status()
                .expect("Failed to run subprocess");
            status.code()
        }

        // Subprocess test: getrandom(2) answers ENOSYS
        #[test]
        #[ignore]
        fn subprocess_test_getrandom_enosys_falls_back_to_device() {
            deny_getrandom(libc::ENOSYS);
            assert_falls_back_to_device();

            std::process::exit(0);
        }

        #[test]
        #[serial(seccomp)]
        fn test_getrandom_enosys_falls_back_to_device() {
            let exit_code = run_test_as_subprocess(
                "tests::sys::linux::seccomp::subprocess_test_getrandom_enosys_falls_back_to_device",
            );
            assert_eq!(exit_code, Some(0), "Subprocess should exit with 0");
        }

        // Subprocess test: getrandom(2) answers EPERM
        #[test]
        #[ignore]
        fn subprocess_test_getrandom_eperm_falls_back_to_device() {
            deny_getrandom(libc::EPERM);
            assert_falls_back_to_device();

            std::process::exit(0);
        }

        #[test]
        #[serial(seccomp)]
        fn test_getrandom_eperm_falls_back_to_device() {
            let exit_code = run_test_as_subprocess(
                "tests::sys::linux::seccomp::subprocess_test_getrandom_eperm_falls_back_to_device",
            );
            assert_eq!(exit_code, Some(0), "Subprocess should exit with 0");
        }
    }
}

#[cfg(target_os = "macos")]
mod macos {
    use super::*;

    #[test]
    fn test_candidate_order() {
        let order: Vec<BackendKind> = CANDIDATES.iter().map(|c| c.provides()).collect();

        assert_eq!(
            order,
            [
                BackendKind::LibcEntropy,
                BackendKind::OsSecureRng,
                BackendKind::DeviceFile
            ]
        );
    }

    #[test]
    fn test_secure_rng_fills() {
        let mut buf = [0u8; 64];

        sys::fill(BackendKind::OsSecureRng, &mut buf).expect("Failed to fill(..)");

        assert!(buf.iter().any(|b| *b != 0));
    }
}

#[cfg(windows)]
mod windows {
    use super::*;

    #[test]
    fn test_candidate_order() {
        let order: Vec<BackendKind> = CANDIDATES.iter().map(|c| c.provides()).collect();

        assert_eq!(order, [BackendKind::OsSecureRng, BackendKind::LegacyCrypto]);
    }

    #[test]
    fn test_both_apis_fill() {
        for kind in [BackendKind::OsSecureRng, BackendKind::LegacyCrypto] {
            let mut buf = [0u8; 64];

            sys::fill(kind, &mut buf).expect("Failed to fill(..)");

            assert!(buf.iter().any(|b| *b != 0));
        }
    }

    #[test]
    fn test_device_file_is_not_supported() {
        let mut buf = [0u8; 8];
        assert_eq!(sys::fill(BackendKind::DeviceFile, &mut buf), Err(ErrorKind::NotSupported));
    }
}
