//! Upstream rotation under concurrent callers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

mod common;

#[test]
fn test_concurrent_rotation_is_exact() {
    const CALLERS: usize = 16;
    const URLS: [&str; 3] = ["https://a.test", "https://b.test", "https://c.test"];

    let manager = Arc::new(common::manager_with_upstreams(&URLS.join(",")));
    let tallies: Arc<HashMap<&str, AtomicUsize>> =
        Arc::new(URLS.iter().map(|u| (*u, AtomicUsize::new(0))).collect());

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let manager = manager.clone();
            let tallies = tallies.clone();
            std::thread::spawn(move || {
                for _ in 0..URLS.len() {
                    let url = manager.upstream_config().base_url;
                    tallies[url.as_str()].fetch_add(1, Ordering::SeqCst);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for url in URLS {
        assert_eq!(tallies[url].load(Ordering::SeqCst), CALLERS, "{}", url);
    }
}

#[test]
fn test_single_upstream_under_contention() {
    let manager = Arc::new(common::manager_with_upstreams("https://solo.test"));

    std::thread::scope(|s| {
        for _ in 0..8 {
            let manager = &manager;
            s.spawn(move || {
                for _ in 0..100 {
                    assert_eq!(manager.upstream_config().base_url, "https://solo.test");
                }
            });
        }
    });
}
