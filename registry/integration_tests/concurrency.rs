use status_registry::{get, names_for};

use std::thread;

/// **VALUE**: Verifies concurrent first access to the lazily built indexes.
///
/// **BUG THIS CATCHES**: Would catch an index that is built per thread or mutated after
/// first use, which would show up as mismatched answers between threads.
#[test]
fn given_many_threads_when_reading_registry_then_all_see_same_values() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                (
                    get("TEAPOT").ok(),
                    get("CLIENT_CLOSED").ok(),
                    names_for(451),
                )
            })
        })
        .collect();

    for handle in handles {
        let (teapot, closed, legal) = handle.join().unwrap();
        assert_eq!(teapot, Some(418));
        assert_eq!(closed, Some(499));
        assert_eq!(legal, vec!["UNAVAILABLE_FOR_LEGAL_REASONS", "REDIRECT"]);
    }
}
