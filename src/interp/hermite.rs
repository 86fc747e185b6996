//! Cubic Hermite basis on `[0, 1]`.
//!
//! `p(t) = p0 h0(t) + p1 h1(t) + m0 h2(t) + m1 h3(t)` matches values `p0, p1`
//! and slopes `m0, m1` at `t = 0` and `t = 1`.

#[inline(always)]
pub fn h0(t: f64) -> f64 {
    1.0 - t * t * (3.0 - 2.0 * t)
}
#[inline(always)]
pub fn h1(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
#[inline(always)]
pub fn h2(t: f64) -> f64 {
    t * (1.0 - t) * (1.0 - t)
}
#[inline(always)]
pub fn h3(t: f64) -> f64 {
    t * t * (t - 1.0)
}
#[inline(always)]
pub fn dh0(t: f64) -> f64 {
    6.0 * t * (t - 1.0)
}
#[inline(always)]
pub fn dh1(t: f64) -> f64 {
    6.0 * t * (1.0 - t)
}
#[inline(always)]
pub fn dh2(t: f64) -> f64 {
    1.0 - 4.0 * t + 3.0 * t * t
}
#[inline(always)]
pub fn dh3(t: f64) -> f64 {
    t * (3.0 * t - 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;
    #[test]
    fn test_endpoint_values() {
        assert_eq!(h0(0.0), 1.0);
        assert_eq!(h0(1.0), 0.0);
        assert_eq!(h1(0.0), 0.0);
        assert_eq!(h1(1.0), 1.0);
        assert_eq!(h2(0.0), 0.0);
        assert_eq!(h2(1.0), 0.0);
        assert_eq!(h3(0.0), 0.0);
        assert_eq!(h3(1.0), 0.0);
    }
    #[test]
    fn test_endpoint_slopes() {
        assert_eq!(dh0(0.0), 0.0);
        assert_eq!(dh0(1.0), 0.0);
        assert_eq!(dh1(0.0), 0.0);
        assert_eq!(dh1(1.0), 0.0);
        assert_eq!(dh2(0.0), 1.0);
        assert_eq!(dh2(1.0), 0.0);
        assert_eq!(dh3(0.0), 0.0);
        assert_eq!(dh3(1.0), 1.0);
    }
    #[test]
    fn test_closed_forms() {
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert!((h0(t) - (1.0 - 3.0 * t.powi(2) + 2.0 * t.powi(3))).abs() < EPS, "h0({})", t);
            assert!((h1(t) - (3.0 * t.powi(2) - 2.0 * t.powi(3))).abs() < EPS, "h1({})", t);
            assert!((h2(t) - (t - 2.0 * t.powi(2) + t.powi(3))).abs() < EPS, "h2({})", t);
            assert!((h3(t) - (-t.powi(2) + t.powi(3))).abs() < EPS, "h3({})", t);
            assert!((h0(t) + h1(t) - 1.0).abs() < EPS, "partition of unity at {}", t);
        }
    }
    #[test]
    fn test_derivatives_match_finite_differences() {
        let d = 1e-6;
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let fd = |f: fn(f64) -> f64| (f(t + d) - f(t - d)) / (2.0 * d);
            assert!((fd(h0) - dh0(t)).abs() < 1e-6, "dh0({})", t);
            assert!((fd(h1) - dh1(t)).abs() < 1e-6, "dh1({})", t);
            assert!((fd(h2) - dh2(t)).abs() < 1e-6, "dh2({})", t);
            assert!((fd(h3) - dh3(t)).abs() < 1e-6, "dh3({})", t);
        }
    }
}
