use std::thread;

use calc_eval::calc;
use tests::{ERROR_CASES, VALID_CASES};

#[test]
fn repeated_evaluation_is_stable() {
    for (input, expected) in VALID_CASES {
        for _ in 0..3 {
            assert_eq!(calc(input), Ok(*expected), "input: {input}");
        }
    }
    for (input, expected) in ERROR_CASES {
        for _ in 0..3 {
            assert_eq!(calc(input), Err(*expected), "input: {input:?}");
        }
    }
}

#[test]
fn parallel_callers_need_no_coordination() {
    let handles: Vec<_> = (0..8)
        .map(|worker| {
            thread::spawn(move || {
                for round in 0..200 {
                    let (input, expected) = VALID_CASES[(worker + round) % VALID_CASES.len()];
                    assert_eq!(calc(input), Ok(expected));
                    let (input, expected) = ERROR_CASES[(worker * round) % ERROR_CASES.len()];
                    assert_eq!(calc(input), Err(expected));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker panicked");
    }
}
