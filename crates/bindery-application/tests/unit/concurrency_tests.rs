//! Tests for concurrent sessions sharing one cache

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bindery_application::cache::ValueCache;
use bindery_application::injector::Injector;

use crate::fixtures::{CountingProvider, Source, calls};

bindery_domain::record! {
    #[derive(Debug, Default)]
    struct Expensive {
        #[tag(bind = "kind=slow,in=token,cacheable")]
        token: String,
        #[tag(bind = "kind=slow,in=region,cacheable")]
        region: String,
    }
}

const WORKERS: usize = 16;

#[test]
fn test_shared_cache_resolves_each_path_once() {
    let provider = CountingProvider::new("slow", 0)
        .with_value("token", "secret")
        .with_value("region", "eu")
        .with_delay(Duration::from_millis(20));
    let counter = provider.calls();
    let injector = Injector::builder()
        .with_provider(Arc::new(provider))
        .build()
        .unwrap();
    let cache = Arc::new(ValueCache::new());

    let results: Vec<Expensive> = thread::scope(|scope| {
        let handles: Vec<_> = (0..WORKERS)
            .map(|_| {
                let injector = &injector;
                let cache = Arc::clone(&cache);
                scope.spawn(move || {
                    let source = Source::default();
                    let mut target = Expensive::default();
                    injector
                        .with_state::<Expensive>(&source)
                        .with_cache(cache)
                        .inject(&mut target)
                        .unwrap();
                    target
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results.len(), WORKERS);
    assert!(results.iter().all(|t| t.token == "secret" && t.region == "eu"));
    assert_eq!(calls(&counter), 2);
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_private_caches_do_not_share_values() {
    let provider = CountingProvider::new("slow", 0)
        .with_value("token", "secret")
        .with_value("region", "eu");
    let counter = provider.calls();
    let injector = Injector::builder()
        .with_provider(Arc::new(provider))
        .build()
        .unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let source = Source::default();
                let mut target = Expensive::default();
                injector
                    .with_state::<Expensive>(&source)
                    .inject(&mut target)
                    .unwrap();
                assert_eq!(target.token, "secret");
            });
        }
    });

    assert_eq!(calls(&counter), 8);
}

#[test]
fn test_binding_set_built_once_under_contention() {
    let injector = Injector::builder()
        .with_provider(Arc::new(CountingProvider::new("slow", 0)))
        .build()
        .unwrap();

    let sets: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| injector.binding_set::<Expensive>().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(sets.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}
