/// `count` evenly spaced samples over `[start, stop]`, both ends included.
///
/// Sample `i` is `i * step + start` with `step = (stop - start) / (count - 1)`,
/// and the final sample is pinned to `stop` exactly. A single sample is
/// `start`; zero samples yield an empty vector.
#[must_use]
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut samples: Vec<f64> = (0..count).map(|i| i as f64 * step + start).collect();
            samples[count - 1] = stop;
            samples
        }
    }
}
