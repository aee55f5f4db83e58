use extrema_detector::{DetectionRequest, ExtremaDetector};

fn main() {
    // Demo stub: a damped sine with a slow drift, run with automatic selection
    let seq: Vec<f64> = (0..200)
        .map(|i| {
            let t = i as f64 * 0.1;
            (-t * 0.05).exp() * t.sin() + 0.01 * t
        })
        .collect();

    let det = ExtremaDetector::new(DetectionRequest::default());
    let res = det.detect(&seq);
    println!(
        "method={} maxima={} minima={}",
        res.method,
        res.extrema.maxima.len(),
        res.extrema.minima.len()
    );
}
