use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use strand_memo::Memo;

#[test]
fn test_chained_cells_force_once_across_threads() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let base = Arc::new(Memo::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        21u64
    }));
    let doubled = {
        let base = base.clone();
        Memo::new(move || base.force() * 2)
    };
    let barrier = Barrier::new(6);
    thread::scope(|scope| {
        for _ in 0..6 {
            scope.spawn(|| {
                barrier.wait();
                assert_eq!(doubled.force(), 42);
            });
        }
    });
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(base.is_forced());
}

#[derive(Debug, PartialEq)]
struct Unavailable;

#[test]
fn test_fallible_cell_retries_until_success() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let memo: Memo<&str, Unavailable> = Memo::fallible(move || {
        if counter.fetch_add(1, Ordering::SeqCst) < 2 {
            Err(Unavailable)
        } else {
            Ok("ready")
        }
    });
    assert_eq!(memo.try_force(), Err(Unavailable));
    assert_eq!(memo.try_force(), Err(Unavailable));
    assert!(!memo.is_forced());
    assert_eq!(memo.try_force(), Ok("ready"));
    assert_eq!(memo.try_force(), Ok("ready"));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}
