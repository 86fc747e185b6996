#[inline(always)]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
#[inline]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
/// Samples `f` at the `n + 1` equidistant knots of `[a, b]`.
pub fn sample_equidistant<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, n: usize) -> Vec<f64> {
    linspace(a, b, n + 1).into_iter().map(f).collect()
}
/// Index `i` of the interval `[a + i h, a + (i + 1) h]` holding `z`, found by
/// linear scan. Callers clamp `z` into `(a, b)` first.
pub fn locate_interval(a: f64, h: f64, n: usize, z: f64) -> usize {
    let mut i = 0;
    while i < n - 1 && a + (i + 1) as f64 * h < z {
        i += 1;
    }
    i
}
