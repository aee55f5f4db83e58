mod common;

use common::synthetic::{noisy_sine, pseudo_noise, square_steps};
use extrema_detector::{DetectionRequest, ExtremaDetector, Method, Strategy};

#[test]
fn simple_strategy_on_zigzag() {
    let _ = env_logger::builder().is_test(true).try_init();
    let seq = [0.0, 5.0, 1.0, 6.0, 2.0, 7.0, 0.0];
    let detector = ExtremaDetector::new(DetectionRequest::default().with_method(Strategy::Simple));
    let result = detector.detect(&seq);

    assert_eq!(result.method, Strategy::Simple);
    assert_eq!(result.extrema.minima_pairs(), vec![(2, 1.0), (4, 2.0)]);
    assert_eq!(
        result.extrema.maxima_pairs(),
        vec![(1, 5.0), (3, 6.0), (5, 7.0)]
    );
}

#[test]
fn flat_sequence_has_no_extrema() {
    let seq = [1.0; 5];
    let detector = ExtremaDetector::new(DetectionRequest::default().with_method(Strategy::Simple));
    let result = detector.detect(&seq);
    assert!(result.extrema.is_empty());
}

#[test]
fn max_count_limit_keeps_largest_maximum() {
    let seq = [0.0, 5.0, 1.0, 6.0, 2.0, 7.0, 0.0];
    let request = DetectionRequest::default()
        .with_method(Strategy::Simple)
        .with_count_limits(1, 0);
    let result = ExtremaDetector::new(request).detect(&seq);
    assert_eq!(result.extrema.maxima_pairs(), vec![(5, 7.0)]);
    assert_eq!(result.extrema.minima.len(), 2);
}

#[test]
fn auto_method_applies_count_limits_even_to_alternating_picks() {
    let _ = env_logger::builder().is_test(true).try_init();
    let inputs: [Vec<f64>; 2] = [(0..150).map(pseudo_noise).collect(), noisy_sine(500, 0.05, 0.4)];
    for seq in inputs {
        let request = DetectionRequest::default().with_count_limits(1, 1);
        let report = ExtremaDetector::new(request).detect_with_diagnostics(&seq);
        let result = &report.result;
        assert_eq!(result.requested, Method::Auto);
        assert_eq!(result.method, Strategy::Alternating);
        assert!(result.extrema.maxima.len() <= 1);
        assert!(result.extrema.minima.len() <= 1);
        let exempt = report.trace.constraints.as_ref().map(|c| c.counts.count_limits_exempt);
        assert_eq!(exempt, Some(false));

        // The same strategy requested explicitly keeps every extremum.
        let fixed = DetectionRequest::default()
            .with_method(Strategy::Alternating)
            .with_count_limits(1, 1);
        let fixed = ExtremaDetector::new(fixed).detect(&seq);
        assert!(fixed.extrema.maxima.len() > 1);
    }
}

#[test]
fn too_short_input_is_empty_for_every_method() {
    let methods = std::iter::once(Method::Auto).chain(Strategy::ALL.into_iter().map(Method::from));
    for method in methods {
        let detector = ExtremaDetector::new(DetectionRequest::default().with_method(method));
        for seq in [&[][..], &[3.0][..], &[3.0, -1.0][..]] {
            let result = detector.detect(seq);
            assert!(
                result.extrema.is_empty(),
                "method {method} produced extrema on {} samples",
                seq.len()
            );
            assert_eq!(result.characteristics.length, 0);
        }
    }
}

#[test]
fn auto_selection_reacts_to_plateaus() {
    let _ = env_logger::builder().is_test(true).try_init();
    let seq = square_steps(60, 10);
    let report = ExtremaDetector::default().detect_with_diagnostics(&seq);
    assert!(report.result.characteristics.has_plateaus);
    assert_eq!(report.result.requested, Method::Auto);
    let selection = report.trace.selection.as_ref().map(|s| s.auto_selected);
    assert_eq!(selection, Some(true));
}

#[test]
fn report_serializes_with_camel_case_keys() {
    let seq = noisy_sine(120, 0.3, 0.05);
    let report = ExtremaDetector::default().detect_with_diagnostics(&seq);
    let json = serde_json::to_value(&report).expect("report serializes");

    assert!(json["result"]["characteristics"]["noiseLevel"].is_number());
    assert!(json["result"]["extrema"]["maxima"].is_array());
    assert_eq!(json["result"]["requested"], "auto");
    assert!(json["trace"]["timings"]["stages"].is_array());
    assert!(json["trace"]["refinement"]["minDistance"].is_number());
    assert!(json["trace"]["strategy"].get("candidates").is_none());
}
