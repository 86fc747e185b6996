use anyhow::{Context, Result, anyhow};
use numkit::{
    consts::{CONFIG_FILE, TOOLKIT_CONFIG},
    dft::{Complex64, fft, ifft, normalize},
    interp::{CubicSpline, InterpolationMethod},
    utils::{linspace, sample_equidistant},
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*};
use mimalloc::MiMalloc;
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;
fn init_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(TOOLKIT_CONFIG.log_level)
        .with(fmt::layer()
            .without_time()
            .with_target(false)
            .with_thread_names(false))
        .init();
    Ok(())
}
fn runge(x: f64) -> f64 {
    1.0 / (1.0 + 25.0 * x * x)
}
fn runge_prime(x: f64) -> f64 {
    -50.0 * x / (1.0 + 25.0 * x * x).powi(2)
}
fn spline_demo() -> Result<()> {
    let cfg = &*TOOLKIT_CONFIG;
    let (a, b, n) = (cfg.lower_bound, cfg.upper_bound, cfg.intervals);
    let mut spline = CubicSpline::new(a, b, n, &sample_equidistant(runge, a, b, n))
        .with_context(|| format!("Spline init over [{}, {}] with {} intervals", a, b, n))?;
    spline.set_boundary_conditions(runge_prime(a), runge_prime(b))?;
    info!("Spline slopes: {:?}", spline.get_derivatives());
    let mut max_err: f64 = 0.0;
    for z in linspace(a, b, cfg.eval_points) {
        let value = spline.evaluate(z);
        max_err = max_err.max((value - runge(z)).abs());
        info!("s({:+.4}) = {:.6}  f = {:.6}", z, value, runge(z));
    }
    info!("Spline max error over {} points: {:.3e}", cfg.eval_points, max_err);
    Ok(())
}
fn transform_demo() -> Result<()> {
    let len = TOOLKIT_CONFIG.fft_len;
    let mut impulse = vec![Complex64::new(0.0, 0.0); len];
    *impulse.first_mut().ok_or_else(|| anyhow!("fft_len must be positive"))? = Complex64::new(1.0, 0.0);
    let spectrum = ifft(&impulse).context("Inverse transform of impulse")?;
    info!("ifft(impulse) = {:?}", spectrum);
    let ramp: Vec<Complex64> = (0..len).map(|i| Complex64::new(i as f64, 0.0)).collect();
    let mut back = ifft(&fft(&ramp)?)?;
    normalize(&mut back);
    let err = back.iter()
        .zip(&ramp)
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max);
    info!("Round trip error on length {}: {:.3e}", len, err);
    Ok(())
}
fn main() -> Result<()> {
    init_logging()?;
    info!("Config ({}): {:?}", CONFIG_FILE, *TOOLKIT_CONFIG);
    spline_demo()?;
    transform_demo()?;
    Ok(())
}
