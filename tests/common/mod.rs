/*!
 * Shared test helpers
 */

#![allow(dead_code)]

use std::cell::UnsafeCell;
use std::mem::MaybeUninit;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, Output};

/// Environment variable naming the test a child process should run
pub const CHILD_ENV: &str = "PTHREAD_STRICT_CHILD";

/// pthread object storage that can be handed to several threads
///
/// pthread objects are designed for concurrent access through raw pointers;
/// this only gets the pointer across `thread::spawn`.
pub struct Shared<T>(UnsafeCell<MaybeUninit<T>>);

unsafe impl<T> Send for Shared<T> {}
unsafe impl<T> Sync for Shared<T> {}

impl<T> Shared<T> {
    pub fn uninit() -> Self {
        Self(UnsafeCell::new(MaybeUninit::uninit()))
    }

    pub fn get(&self) -> *mut T {
        self.0.get().cast()
    }
}

/// True inside the child spawned by [`run_child`] for `test`
pub fn is_child(test: &str) -> bool {
    std::env::var(CHILD_ENV).as_deref() == Ok(test)
}

/// Re-run this test binary restricted to `test`, marked as the child
pub fn run_child(test: &str) -> Output {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, test)
        .env_remove("RUST_LOG")
        .env_remove(pthread_strict::logging::JSON_ENV)
        .output()
        .expect("spawn child test process")
}

/// Run `test` in a child and assert it died of `SIGABRT`, reporting `op`
pub fn assert_aborts(test: &str, op: &str) {
    let output = run_child(test);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        output.status.signal(),
        Some(libc::SIGABRT),
        "child {} exited with {:?}\nstdout:\n{}\nstderr:\n{}",
        test,
        output.status,
        stdout,
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        stdout.contains(&format!("{} returned", op)),
        "abort report for {} missing:\n{}",
        op,
        stdout
    );
}
