#[cfg(test)]
mod runtime_tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use bloodtest_core::runtime::{InitGuard, InitState};

    #[test]
    fn first_call_initializes_then_noop() {
        let guard: InitGuard<&'static str> = InitGuard::new();
        assert!(!guard.is_initialized());

        let (value, state) = guard.get_or_try_init(|| Ok::<_, ()>("v1")).unwrap();
        assert_eq!((*value, state), ("v1", InitState::Initialized));

        let (value, state) = guard.get_or_try_init(|| Ok::<_, ()>("v2")).unwrap();
        assert_eq!((*value, state), ("v1", InitState::AlreadyInitialized));
        assert_eq!(guard.get(), Some(&"v1"));
    }

    #[test]
    fn failed_init_can_be_retried() {
        let guard: InitGuard<u32> = InitGuard::new();

        let err = guard.get_or_try_init(|| Err::<u32, _>("library missing")).unwrap_err();
        assert_eq!(err, "library missing");
        assert!(guard.get().is_none());

        let (value, state) = guard.get_or_try_init(|| Ok::<_, &str>(7)).unwrap();
        assert_eq!((*value, state), (7, InitState::Initialized));
    }

    #[test]
    fn concurrent_callers_run_init_once() {
        static GUARD: InitGuard<usize> = InitGuard::new();
        static RUNS: AtomicUsize = AtomicUsize::new(0);

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let (value, _) = GUARD
                        .get_or_try_init(|| Ok::<_, ()>(RUNS.fetch_add(1, Ordering::SeqCst) + 100))
                        .unwrap();
                    assert_eq!(*value, 100);
                });
            }
        });

        assert_eq!(RUNS.load(Ordering::SeqCst), 1);
    }
}
