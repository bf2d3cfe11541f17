use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, OnceLock};
use std::thread;

use proptest::prelude::*;
use strand::{Pair, RenderOptions, Stream, StreamBuilder};

/// Define a stream whose tail refers back to the stream itself.
fn recursive<T: strand::Element>(
    head: T,
    tail: impl Fn(Stream<T>) -> Stream<T> + Send + Sync + 'static,
) -> Stream<T> {
    let slot: Arc<OnceLock<Stream<T>>> = Arc::new(OnceLock::new());
    let handle = slot.clone();
    let stream = Stream::lazy_cons(head, move || {
        tail(handle.get().cloned().unwrap_or_default())
    });
    let _ = slot.set(stream.clone());
    stream
}

#[test]
fn test_factorial() {
    let factorial = recursive(1i64, |factorial| {
        factorial
            .zip(&Stream::starting_at(2))
            .map(|pair: &Pair<i64, i64>| pair.first() * pair.second())
    });
    assert_eq!(
        factorial.take(9),
        vec![1, 2, 6, 24, 120, 720, 5040, 40320, 362880]
    );
}

#[test]
fn test_fibonacci() {
    // the stream from the second element on, defined in terms of itself
    let rest = recursive(1u64, |rest| {
        Stream::cons(1, rest.clone())
            .zip(&rest)
            .map(|pair: &Pair<u64, u64>| pair.first() + pair.second())
    });
    let fibonacci = Stream::cons(1, rest);
    assert_eq!(fibonacci.take(9), vec![1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn test_fibonacci_is_linear() {
    let additions = Arc::new(AtomicUsize::new(0));
    let counter = additions.clone();
    let rest = recursive(1u64, move |rest| {
        let counter = counter.clone();
        Stream::cons(1, rest.clone())
            .zip(&rest)
            .map(move |pair: &Pair<u64, u64>| {
                counter.fetch_add(1, Ordering::SeqCst);
                pair.first() + pair.second()
            })
    });
    let fibonacci = Stream::cons(1, rest);
    assert_eq!(fibonacci.drop(49).head(), Some(12_586_269_025));
    assert_eq!(additions.load(Ordering::SeqCst), 48);
}

#[test]
fn test_render_forced() {
    let stream = Stream::from(vec![0, 1, 2]);
    insta::assert_snapshot!(stream.render(), @"{0, 1, 2}");
}

#[test]
fn test_render_pending_append() {
    let stream = Stream::from(vec![0, 1]).append(2);
    insta::assert_snapshot!(stream.render(), @"{0, ...}");
    stream.take(2);
    insta::assert_snapshot!(stream.render(), @"{0, 1, ...}");
    stream.len();
    insta::assert_snapshot!(stream.render(), @"{0, 1, 2}");
}

#[test]
fn test_render_prepended() {
    let stream = Stream::from(vec![1, 2]).prepend(0);
    insta::assert_snapshot!(stream.to_string(), @"{0, 1, 2}");
}

#[test]
fn test_render_infinite() {
    let naturals = Stream::starting_at(0);
    naturals.take(5);
    insta::assert_snapshot!(naturals.render(), @"{0, 1, 2, 3, 4, ...}");
    let options = RenderOptions::new().delimiters("<", ">").limit(3);
    insta::assert_snapshot!(naturals.render_with(&options), @"<0, 1, 2, ...>");
}

#[test]
fn test_infinite_exists_and_for_all_terminate() {
    assert!(Stream::starting_at(1).exists(|x| *x == 1000));
    assert!(!Stream::starting_at(1).for_all(|x| *x < 1000));
    assert!(Stream::starting_at(1).exists_not(|x| *x < 1000));
}

#[test]
fn test_primes_by_sieve() {
    fn sieve(numbers: Stream<i64>) -> Stream<i64> {
        match numbers.head() {
            Some(prime) => {
                let rest = numbers.tail().filter(move |n| n % prime != 0);
                Stream::lazy_cons(prime, move || sieve(rest.clone()))
            }
            None => Stream::empty(),
        }
    }
    let primes = sieve(Stream::starting_at(2));
    assert_eq!(primes.take(10), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
}

#[test]
fn test_shared_across_threads_computes_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let squares = Stream::from((0..1000).collect::<Vec<u64>>()).map(move |x| {
        counter.fetch_add(1, Ordering::SeqCst);
        x * x
    });
    let barrier = Barrier::new(8);
    let results: Vec<Vec<u64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    squares.take(1000)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });
    let expected: Vec<u64> = (0..1000).map(|x| x * x).collect();
    for result in results {
        assert_eq!(result, expected);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1000);
}

#[test]
fn test_streams_share_structure() {
    let base = Stream::starting_at(0).map(|x| x + 1);
    let evens = base.filter(|x| x % 2 == 0);
    let odds = base.filter_not(|x| x % 2 == 0);
    assert_eq!(evens.take(3), vec![2, 4, 6]);
    assert!(base.tail().tail().head_is_forced());
    assert_eq!(odds.take(3), vec![1, 3, 5]);
}

#[test]
fn test_builder_into_flat_map() {
    let stream = Stream::from(vec![1, 2, 3]).flat_map(|x| {
        (0..*x).fold(StreamBuilder::new(), |builder, _| builder.append(*x))
    });
    assert_eq!(stream.take(10), vec![1, 2, 2, 3, 3, 3]);
}

#[test]
fn test_attempts() {
    #[derive(Debug, thiserror::Error)]
    #[error("not a digit: {0}")]
    struct NotADigit(char);

    let digits = Stream::from(vec!['4', 'x', '2']).map_attempt(|c| {
        c.to_digit(10).ok_or(NotADigit(*c))
    });
    assert_eq!(digits.successes().take(5), vec![4, 2]);
    assert_eq!(digits.failures().len(), 1);
}

proptest! {
    #[test]
    fn test_map_agrees_with_vec(items in proptest::collection::vec(any::<i32>(), 0..50)) {
        let stream = Stream::from(items.clone()).map(|x| x.wrapping_mul(3));
        let expected: Vec<i32> = items.iter().map(|x| x.wrapping_mul(3)).collect();
        prop_assert_eq!(stream.take(items.len() + 1), expected);
    }

    #[test]
    fn test_filter_agrees_with_vec(items in proptest::collection::vec(any::<u8>(), 0..50)) {
        let stream = Stream::from(items.clone()).filter(|x| x % 3 == 0);
        let expected: Vec<u8> = items.iter().copied().filter(|x| x % 3 == 0).collect();
        prop_assert_eq!(stream.len(), expected.len());
        prop_assert_eq!(stream.take(expected.len()), expected);
    }

    #[test]
    fn test_filter_and_filter_not_partition(items in proptest::collection::vec(any::<i16>(), 0..50)) {
        let stream = Stream::from(items.clone());
        let kept = stream.filter(|x| *x > 0);
        let rest = stream.filter_not(|x| *x > 0);
        prop_assert_eq!(kept.len() + rest.len(), items.len());
        prop_assert!(kept.filter_not(|x| *x > 0).is_empty());
    }

    #[test]
    fn test_corresponds_is_reflexive(items in proptest::collection::vec(any::<i64>(), 0..50)) {
        let stream = Stream::from(items);
        prop_assert!(stream.corresponds(&stream.clone()));
    }

    #[test]
    fn test_corresponds_rejects_longer(items in proptest::collection::vec(any::<i64>(), 0..50), extra in any::<i64>()) {
        let stream = Stream::from(items);
        prop_assert!(!stream.corresponds(&stream.append(extra)));
        prop_assert!(!stream.append(extra).corresponds(&stream));
    }

    #[test]
    fn test_append_then_take(items in proptest::collection::vec(any::<u32>(), 0..30), more in proptest::collection::vec(any::<u32>(), 0..30)) {
        let stream = Stream::from(items.clone()).append_stream(Stream::from(more.clone()));
        let mut expected = items;
        expected.extend(more);
        prop_assert_eq!(stream.take(expected.len()), expected);
    }
}
