use algos::{
    Algorithm, bm_find, bm_find_in_alphabet, bm_find_symbols, build_lps, kmp_find, naive_find,
};
use proptest::prelude::*;

fn small_alphabet_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..max_len)
}

fn periodic_pattern() -> impl Strategy<Value = Vec<u8>> {
    (small_alphabet_bytes(4), 1usize..8).prop_map(|(unit, reps)| {
        let unit = if unit.is_empty() { vec![b'a'] } else { unit };
        unit.repeat(reps)
    })
}

proptest! {
    #[test]
    fn all_algorithms_agree(text in small_alphabet_bytes(64), pattern in small_alphabet_bytes(6)) {
        let expected = naive_find(&text, &pattern);
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.search(&text, &pattern), expected, "{}", algo);
        }
        prop_assert_eq!(bm_find_in_alphabet(&text, &pattern, 256), Ok(expected));
        prop_assert_eq!(bm_find_symbols(&text, &pattern), expected);
    }

    #[test]
    fn result_is_the_leftmost_occurrence(text in small_alphabet_bytes(64), pattern in small_alphabet_bytes(5)) {
        prop_assume!(!pattern.is_empty());
        let first = text.windows(pattern.len()).position(|w| w == pattern.as_slice());
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.search(&text, &pattern), first);
        }
    }

    #[test]
    fn embedded_pattern_is_found(prefix in small_alphabet_bytes(32), pattern in small_alphabet_bytes(8), suffix in small_alphabet_bytes(32)) {
        let text = [prefix.as_slice(), pattern.as_slice(), suffix.as_slice()].concat();
        for algo in Algorithm::ALL {
            let found = algo.search(&text, &pattern);
            prop_assert!(found.is_some());
            prop_assert!(found.unwrap() <= prefix.len());
        }
    }

    #[test]
    fn foreign_symbol_never_matches(text in small_alphabet_bytes(64), mut pattern in small_alphabet_bytes(6), at in 0usize..6) {
        let at = at.min(pattern.len());
        pattern.insert(at, b'z');
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.search(&text, &pattern), None);
        }
    }

    #[test]
    fn self_match_is_zero(pattern in small_alphabet_bytes(32)) {
        prop_assume!(!pattern.is_empty());
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.search(&pattern, &pattern), Some(0));
        }
    }

    #[test]
    fn empty_pattern_matches_at_zero(text in small_alphabet_bytes(32)) {
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.search(&text, &[]), Some(0));
        }
    }

    #[test]
    fn longer_pattern_is_absent(text in small_alphabet_bytes(16), extra in 1usize..4) {
        let pattern = vec![b'a'; text.len() + extra];
        for algo in Algorithm::ALL {
            prop_assert_eq!(algo.search(&text, &pattern), None);
        }
    }

    #[test]
    fn lps_invariants_hold(pattern in prop_oneof![small_alphabet_bytes(24), periodic_pattern()]) {
        let lps = build_lps(&pattern);
        prop_assert_eq!(lps.len(), pattern.len());
        if let Some(&first) = lps.first() {
            prop_assert_eq!(first, 0);
        }
        for (i, &len) in lps.iter().enumerate() {
            prop_assert!(len <= i);
            // the recorded border really is a border of pattern[..=i]
            prop_assert_eq!(&pattern[..len], &pattern[i + 1 - len..=i]);
            // and no longer proper border exists
            for longer in len + 1..=i {
                prop_assert_ne!(&pattern[..longer], &pattern[i + 1 - longer..=i]);
            }
        }
    }

    #[test]
    fn kmp_and_bm_agree_on_periodic_text(unit in periodic_pattern(), reps in 1usize..10) {
        let text = unit.repeat(reps);
        prop_assert_eq!(kmp_find(&text, &unit), Some(0));
        prop_assert_eq!(bm_find(&text, &unit), Some(0));
    }
}

#[test]
fn identical_symbol_pattern_stress() {
    for k in 1..=16 {
        let pattern = vec![b'a'; k];
        let lps = build_lps(&pattern);
        assert!(lps.iter().enumerate().all(|(i, &v)| v == i));

        let text = vec![b'a'; 4 * k + 1];
        for algo in Algorithm::ALL {
            assert_eq!(algo.search(&text, &pattern), Some(0), "{algo} k={k}");
        }
    }
}

#[test]
fn nested_periodicity_lps() {
    let pattern = b"abababab";
    assert_eq!(build_lps(pattern), vec![0, 0, 1, 2, 3, 4, 5, 6]);

    let pattern = b"aabaabaab";
    assert_eq!(build_lps(pattern), vec![0, 1, 0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn worst_case_inputs_terminate() {
    let text = vec![b'a'; 2048];
    let mut pattern = vec![b'a'; 63];
    pattern.insert(0, b'b');
    for algo in Algorithm::ALL {
        assert_eq!(algo.search(&text, &pattern), None);
    }
    pattern.reverse();
    for algo in Algorithm::ALL {
        assert_eq!(algo.search(&text, &pattern), None);
    }
}

#[test]
fn search_is_safe_across_threads() {
    let text: Vec<u8> = b"the quick brown fox jumps over the lazy dog ".repeat(200);
    std::thread::scope(|s| {
        let handles: Vec<_> = Algorithm::ALL
            .iter()
            .map(|&algo| {
                let text = &text;
                s.spawn(move || algo.search(text, b"lazy dog the"))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Some(35));
        }
    });
}
