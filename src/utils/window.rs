//! Kaiser window.

#[allow(unused_imports)]
use num_traits::float::Float;

/// Zeroth order modified Bessel function of the first kind.
pub fn bessel_i0(x: f64) -> f64 {
    let half_x = x * 0.5;
    let mut sum = 1.0;
    let mut term = 1.0;
    let mut k = 1.0;

    loop {
        let ratio = half_x / k;
        term *= ratio * ratio;
        sum += term;
        if term < sum * 1e-17 {
            break;
        }
        k += 1.0;
    }

    sum
}

/// Value of sample `n` of a symmetric Kaiser window of `length` points.
pub fn kaiser(n: usize, length: usize, beta: f64) -> f64 {
    if length < 2 {
        return 1.0;
    }
    let ratio = 2.0 * n as f64 / (length - 1) as f64 - 1.0;
    let arg = (1.0 - ratio * ratio).max(0.0).sqrt();

    bessel_i0(beta * arg) / bessel_i0(beta)
}
