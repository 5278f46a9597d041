/*!
 * Guard integration tests
 *
 * Release on every exit path, at-most-once release and cross-thread
 * visibility of guarded locks.
 */

mod common;

use common::Shared;
use libc::{pthread_mutex_t, pthread_rwlock_t, EBUSY};
use pretty_assertions::assert_eq;
use pthread_strict::guard::{Guard, GuardError, GuardState, Resource, ScopeGuard};
use pthread_strict::{
    pthread_mutex_destroy, pthread_mutex_init, pthread_mutex_trylock, pthread_mutex_unlock,
    pthread_rwlock_init, pthread_rwlock_tryrdlock, pthread_rwlock_unlock, MutexGuard,
    RwLockGuard,
};
use serial_test::serial;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

static RELEASED: AtomicUsize = AtomicUsize::new(0);

/// Resource whose release only counts
struct Counted;

impl Resource for Counted {
    type Raw = u8;
    const KIND: &'static str = "counted";

    unsafe fn release(raw: *mut u8) {
        if !raw.is_null() {
            RELEASED.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn released() -> usize {
    RELEASED.load(Ordering::SeqCst)
}

fn new_mutex(mutex: &Shared<pthread_mutex_t>) -> *mut pthread_mutex_t {
    unsafe { pthread_mutex_init(mutex.get(), ptr::null()) };
    mutex.get()
}

/// True when the mutex could be taken (and was given back)
fn is_free(mutex: *mut pthread_mutex_t) -> bool {
    unsafe {
        if pthread_mutex_trylock(mutex) == 0 {
            pthread_mutex_unlock(mutex);
            true
        } else {
            false
        }
    }
}

#[test]
#[serial]
fn test_release_on_normal_exit() {
    let mut slot = 0u8;
    let before = released();
    {
        let _guard = unsafe { ScopeGuard::<Counted>::bind(&mut slot) };
    }
    assert_eq!(released(), before + 1);
}

#[test]
#[serial]
fn test_release_on_early_return() {
    fn early(slot: *mut u8) -> Result<(), &'static str> {
        let _guard = unsafe { ScopeGuard::<Counted>::bind(slot) };
        Err::<(), _>("early")?;
        unreachable!()
    }

    let mut slot = 0u8;
    let before = released();
    assert_eq!(early(&mut slot), Err("early"));
    assert_eq!(released(), before + 1);
}

#[test]
#[serial]
fn test_release_on_panic() {
    let mut slot = 0u8;
    let before = released();
    let slot_ptr: *mut u8 = &mut slot;
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _guard = unsafe { ScopeGuard::<Counted>::bind(slot_ptr) };
        panic!("boom");
    }));
    assert!(result.is_err());
    assert_eq!(released(), before + 1);
}

#[test]
#[serial]
fn test_manual_release_is_not_repeated_by_drop() {
    let mut slot = 0u8;
    let before = released();
    {
        let mut guard = unsafe { ScopeGuard::<Counted>::bind(&mut slot) };
        assert_eq!(guard.release(), Ok(()));
        assert!(!guard.is_active());
        assert_eq!(guard.release(), Err(GuardError::AlreadyReleased));
    }
    assert_eq!(released(), before + 1);
}

#[test]
#[serial]
fn test_null_and_unbound_guards_release_nothing() {
    let before = released();
    {
        let null = unsafe { ScopeGuard::<Counted>::bind(ptr::null_mut()) };
        assert_eq!(null.state(), GuardState::Bound);
        let unbound = ScopeGuard::<Counted>::unbound();
        assert_eq!(unbound.state(), GuardState::Unbound);
    }
    assert_eq!(released(), before);
}

#[test]
fn test_mutex_guard_every_exit_path() {
    let storage = Shared::<pthread_mutex_t>::uninit();
    let mutex = new_mutex(&storage);

    {
        let _held = unsafe { MutexGuard::lock(mutex) };
        assert!(!is_free(mutex));
    }
    assert!(is_free(mutex));

    let early = || -> Result<(), String> {
        let _held = unsafe { MutexGuard::lock(mutex) };
        Err::<(), _>("bail".to_string())?;
        Ok(())
    };
    assert!(early().is_err());
    assert!(is_free(mutex));

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let _held = unsafe { MutexGuard::lock(mutex) };
        panic!("inside critical section");
    }));
    assert!(result.is_err());
    assert!(is_free(mutex));

    unsafe { pthread_mutex_destroy(mutex) };
}

#[test]
fn test_trylock_sees_guard_from_other_thread() {
    let storage = Arc::new(Shared::<pthread_mutex_t>::uninit());
    new_mutex(&storage);

    let (locked_tx, locked_rx) = mpsc::channel();
    let (done_tx, done_rx) = mpsc::channel::<()>();

    let holder = {
        let storage = Arc::clone(&storage);
        thread::spawn(move || {
            let _held = unsafe { MutexGuard::lock(storage.get()) };
            locked_tx.send(()).unwrap();
            done_rx.recv().unwrap();
        })
    };

    locked_rx.recv().unwrap();
    assert_eq!(unsafe { pthread_mutex_trylock(storage.get()) }, EBUSY);
    assert!(unsafe { MutexGuard::try_lock(storage.get()) }.is_none());

    done_tx.send(()).unwrap();
    holder.join().unwrap();

    let again = unsafe { MutexGuard::try_lock(storage.get()) };
    assert!(again.is_some());
    drop(again);
    unsafe { pthread_mutex_destroy(storage.get()) };
}

#[test]
fn test_rwlock_write_guard_blocks_readers() {
    let storage = Arc::new(Shared::<pthread_rwlock_t>::uninit());
    unsafe { pthread_rwlock_init(storage.get(), ptr::null()) };

    let writer = unsafe { RwLockGuard::write(storage.get()) };
    let reader = {
        let storage = Arc::clone(&storage);
        thread::spawn(move || unsafe { pthread_rwlock_tryrdlock(storage.get()) })
    };
    assert_eq!(reader.join().unwrap(), EBUSY);
    drop(writer);

    let reader = {
        let storage = Arc::clone(&storage);
        thread::spawn(move || unsafe {
            let rc = pthread_rwlock_tryrdlock(storage.get());
            if rc == 0 {
                pthread_rwlock_unlock(storage.get());
            }
            rc
        })
    };
    assert_eq!(reader.join().unwrap(), 0);
}
