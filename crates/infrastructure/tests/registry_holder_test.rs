use chrono::Utc;
use rkn_guard_application::ports::RegistryHolderPort;
use rkn_guard_domain::{hash_domain, Registry};
use rkn_guard_infrastructure::registry::RegistryHolder;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

fn registry_of_size(n: u64) -> Registry {
    let hashes = (0..n).map(|i| hash_domain(&format!("d{}.example.com", i))).collect();
    Registry::new(hashes, vec![], HashSet::new(), Utc::now())
}

#[test]
fn test_holder_starts_with_placeholder() {
    let holder = RegistryHolder::new();

    let initial = holder.get();
    assert_eq!(initial.domain_count(), 0);
    assert!(initial.ips().is_empty());
    assert!(initial.created_at().is_none());
}

#[test]
fn test_holder_get_set() {
    let holder = RegistryHolder::new();
    let hash = hash_domain("example.com");

    holder.set(Registry::new(vec![hash], vec![], HashSet::new(), Utc::now()));

    let got = holder.get();
    assert_eq!(got.domain_hashes(), &[hash]);
}

#[test]
fn test_holder_reader_keeps_old_snapshot_alive() {
    let holder = RegistryHolder::with_registry(registry_of_size(3));
    let old = holder.get();

    holder.set(registry_of_size(10));

    assert_eq!(old.domain_count(), 3);
    assert_eq!(holder.get().domain_count(), 10);
}

#[test]
fn test_holder_concurrent_readers_see_whole_snapshots() {
    const PUBLICATIONS: u64 = 200;
    const READERS: usize = 8;

    let holder = Arc::new(RegistryHolder::new());
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..READERS)
        .map(|_| {
            let holder = Arc::clone(&holder);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut last_seen = 0usize;
                while !done.load(Ordering::Acquire) {
                    let snapshot = holder.get();
                    let hashes = snapshot.domain_hashes();
                    assert!(
                        hashes.windows(2).all(|w| w[0] < w[1]),
                        "snapshot hashes must be strictly increasing"
                    );
                    // Each publication has one more distinct domain than the last.
                    assert!(hashes.len() >= last_seen, "reader went back in time");
                    if !hashes.is_empty() {
                        assert!(snapshot.created_at().is_some());
                    }
                    last_seen = hashes.len();
                }
            })
        })
        .collect();

    for n in 1..=PUBLICATIONS {
        holder.set(registry_of_size(n));
    }
    done.store(true, Ordering::Release);

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(holder.get().domain_count() as u64, PUBLICATIONS);
}
