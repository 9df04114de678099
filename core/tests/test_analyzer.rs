#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    use bloodtest_core::prelude::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, PartialEq)]
    enum MockError {
        InvalidBuffer(i64),
    }

    /// Returns the same result for every handle and records what it saw.
    struct FixedRoutine {
        result: TestResult,
        seen: RefCell<Vec<ImageHandle>>,
    }

    impl FixedRoutine {
        fn new(result: TestResult) -> Self {
            Self { result, seen: RefCell::new(Vec::new()) }
        }
    }

    impl AnalysisRoutine for FixedRoutine {
        type Error = MockError;

        fn analyze_image(&self, handle: ImageHandle) -> Result<TestResult, MockError> {
            self.seen.borrow_mut().push(handle);
            Ok(self.result)
        }
    }

    /// Image that counts how often its handle was requested.
    struct RecordingImage {
        handle: ImageHandle,
        requests: Cell<usize>,
    }

    impl RecordingImage {
        fn new(raw: i64) -> Self {
            Self { handle: ImageHandle::from_raw(raw), requests: Cell::new(0) }
        }
    }

    impl NativeImage for RecordingImage {
        fn native_handle(&self) -> ImageHandle {
            self.requests.set(self.requests.get() + 1);
            self.handle
        }
    }

    fn fixed_result() -> TestResult {
        TestResult::from_parts([0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9], 2.5, -1.5)
    }

    #[test]
    fn returns_routine_result_unmodified() {
        let analyzer = BloodTestImageAnalyzer::new(FixedRoutine::new(fixed_result()));
        for raw in [0, 1, i64::MAX, i64::MIN, 0x7f3a_9c00_1000] {
            let result = analyzer.analyze(&ImageHandle::from_raw(raw)).unwrap();
            assert_eq!(result, fixed_result(), "handle {raw:#x}");
        }
    }

    #[test]
    fn propagates_routine_failure_unmodified() {
        let analyzer = BloodTestImageAnalyzer::new(FnRoutine(|handle: ImageHandle| {
            Err::<TestResult, _>(MockError::InvalidBuffer(handle.as_raw()))
        }));
        let err = analyzer.analyze(&ImageHandle::from_raw(42)).unwrap_err();
        assert_eq!(err, MockError::InvalidBuffer(42));
    }

    #[test]
    fn handle_reaches_routine_exactly_once_and_unchanged() {
        let routine = FixedRoutine::new(fixed_result());
        let analyzer = BloodTestImageAnalyzer::new(&routine);
        let image = RecordingImage::new(0x5555_0000_abcd);

        analyzer.analyze(&image).unwrap();

        assert_eq!(image.requests.get(), 1);
        assert_eq!(*routine.seen.borrow(), vec![image.handle]);
    }

    #[test]
    fn calls_are_independent() {
        let routine = FixedRoutine::new(fixed_result());
        let analyzer = BloodTestImageAnalyzer::new(&routine);
        let a = analyzer.analyze(&RecordingImage::new(1)).unwrap();
        let b = analyzer.analyze(&RecordingImage::new(2)).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            *routine.seen.borrow(),
            vec![ImageHandle::from_raw(1), ImageHandle::from_raw(2)]
        );
    }

    #[test]
    fn shared_and_boxed_routines_delegate() {
        let shared = Arc::new(FixedRoutine::new(fixed_result()));
        let analyzer = BloodTestImageAnalyzer::new(Arc::clone(&shared));
        analyzer.analyze(&ImageHandle::from_raw(7)).unwrap();
        assert_eq!(shared.seen.borrow().len(), 1);

        let boxed: Box<FixedRoutine> = Box::new(FixedRoutine::new(TestResult::new()));
        let analyzer = BloodTestImageAnalyzer::new(boxed);
        assert_eq!(analyzer.analyze(&ImageHandle::from_raw(7)).unwrap(), TestResult::new());
        let routine = analyzer.into_inner();
        assert_eq!(routine.seen.borrow().len(), 1);
    }

    #[test]
    fn handle_display_is_hex() {
        assert_eq!(ImageHandle::from_raw(0x1f).to_string(), "0x000000000000001f");
        assert!(ImageHandle::from_raw(0).is_null());
    }

    proptest! {
        #[test]
        fn any_handle_is_passed_through(raw in any::<i64>()) {
            let analyzer = BloodTestImageAnalyzer::new(FnRoutine(|handle: ImageHandle| {
                let mut result = TestResult::new();
                result.qc1_variation = handle.as_raw() as f64;
                Ok::<_, MockError>(result)
            }));
            let image = RecordingImage::new(raw);
            let result = analyzer.analyze(&image).unwrap();
            prop_assert_eq!(result.qc1_variation, raw as f64);
            prop_assert_eq!(image.requests.get(), 1);
        }
    }
}
