/// Deterministic pseudo-noise in `[-1, 1)`, reproducible across runs.
pub fn pseudo_noise(i: usize) -> f64 {
    ((i as f64 * 12.9898).sin() * 43758.5453).fract()
}

/// `amplitude * sin(step * i)` for `n` samples.
pub fn sine(n: usize, step: f64, amplitude: f64) -> Vec<f64> {
    (0..n).map(|i| amplitude * (step * i as f64).sin()).collect()
}

/// Sine wave with additive pseudo-noise of the given amplitude.
pub fn noisy_sine(n: usize, step: f64, noise: f64) -> Vec<f64> {
    sine(n, step, 1.0)
        .into_iter()
        .enumerate()
        .map(|(i, v)| v + noise * pseudo_noise(i))
        .collect()
}

/// Staircase of flat runs of `run` samples, alternating between 0 and 1.
pub fn square_steps(n: usize, run: usize) -> Vec<f64> {
    assert!(run > 0, "run length must be positive");
    (0..n).map(|i| ((i / run) % 2) as f64).collect()
}
